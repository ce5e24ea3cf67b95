mod question;
mod quiz;

pub use question::{label_index, option_label, Question, OPTION_LABELS};
pub use quiz::{AnswerKey, QuizDefinition, QuizLibrary, QuizSettings};

/// Which screen the terminal app is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Home,
    Quiz,
    Result,
}
