use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::Question;

/// Correct labels, aligned by position with the authored questions.
pub type AnswerKey = Vec<String>;

/// Every stored quiz, keyed by title.
pub type QuizLibrary = BTreeMap<String, QuizDefinition>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuizSettings {
    /// Defer all feedback to a final summary instead of revealing after each answer.
    pub show_answers_at_end: bool,
    /// Number of questions per attempt; 0 means all of them.
    pub question_count: usize,
    /// Shuffle question order for each attempt.
    pub random_order: bool,
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            show_answers_at_end: true,
            question_count: 0,
            random_order: false,
        }
    }
}

/// Authored quiz content. Sessions copy what they need and never write back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizDefinition {
    pub questions: Vec<Question>,
    #[serde(rename = "answers", default)]
    pub answer_key: AnswerKey,
    #[serde(default)]
    pub settings: QuizSettings,
}

impl QuizDefinition {
    pub fn answer_for(&self, question_index: usize) -> Option<&str> {
        self.answer_key.get(question_index).map(String::as_str)
    }
}
