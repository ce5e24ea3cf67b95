//! # quiz-master
//!
//! Author multiple-choice quizzes from plain text and take them in the terminal.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use quiz_master::{parse_quiz_definition, JsonFileStore, Player, QuizError, QuizSettings, QuizStore};
//!
//! fn main() -> Result<(), QuizError> {
//!     let questions = "1. Capital of France?\nA. Berlin\nB. Paris\n";
//!     let answers = "1. B\n";
//!     let quiz = parse_quiz_definition(questions, answers, QuizSettings::default());
//!
//!     // Save it under a title
//!     let mut store = JsonFileStore::new("quizzes.json");
//!     quiz_master::save_quiz(&mut store, "Geography", quiz)?;
//!
//!     // Take it in the terminal
//!     let player = Player::open(store.load_all()?, "Geography");
//!     player.run()?;
//!
//!     Ok(())
//! }
//! ```

mod app;
mod data;
mod models;
pub mod parser;
pub mod session;
pub mod terminal;
mod ui;

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};

pub use app::App;
pub use data::{save_quiz, JsonFileStore, MemoryStore, QuizStore, StoreError, DEFAULT_STORE_PATH};
pub use models::{
    label_index, option_label, AnswerKey, AppState, Question, QuizDefinition, QuizLibrary,
    QuizSettings, OPTION_LABELS,
};
pub use parser::{parse_answers, parse_questions, parse_quiz_definition, quality_report, QualityIssue};
pub use session::{CorrectOption, Direction, QuestionOutcome, QuizSession, SessionError, SessionEvent};

/// Error type for quiz operations.
#[derive(Debug, thiserror::Error)]
pub enum QuizError {
    /// No quiz is stored under this title.
    #[error("quiz '{0}' not found")]
    QuizNotFound(String),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Store(#[from] StoreError),
    /// IO error reading quiz text or driving the terminal.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Look up a quiz by title.
pub fn find_quiz<'a>(library: &'a QuizLibrary, title: &str) -> Result<&'a QuizDefinition, QuizError> {
    library
        .get(title)
        .ok_or_else(|| QuizError::QuizNotFound(title.to_string()))
}

/// Runs the quiz app in the terminal.
pub struct Player {
    app: App,
}

impl Player {
    /// Start on the home screen listing every quiz in `library`.
    pub fn new(library: QuizLibrary) -> Self {
        Self {
            app: App::new(library),
        }
    }

    /// Start directly in the quiz called `title`. An unknown title lands on the
    /// home screen with a notice instead.
    pub fn open(library: QuizLibrary, title: &str) -> Self {
        let mut app = App::new(library);
        app.open_quiz(title);
        Self { app }
    }

    /// Wrap a prepared app, e.g. one built with a fixed shuffle seed.
    pub fn from_app(app: App) -> Self {
        Self { app }
    }

    /// Take over the terminal until the user quits.
    pub fn run(mut self) -> Result<(), QuizError> {
        let mut term = terminal::TerminalSession::enter()?;
        run_event_loop(&mut term, &mut self.app)
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

fn run_event_loop(term: &mut terminal::TerminalSession, app: &mut App) -> Result<(), QuizError> {
    loop {
        term.draw(|frame| ui::render(frame, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if handle_input(app, key.code) {
                break;
            }
        }
    }

    Ok(())
}

/// Returns true if the app should exit.
fn handle_input(app: &mut App, key: KeyCode) -> bool {
    match app.state {
        AppState::Home => handle_home_input(app, key),
        AppState::Quiz => handle_quiz_input(app, key),
        AppState::Result => handle_result_input(app, key),
    }
}

fn handle_home_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.select_previous_quiz(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next_quiz(),
        KeyCode::Enter => app.start_selected_quiz(),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return true,
        _ => {}
    }
    false
}

fn handle_quiz_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.select_previous_option(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next_option(),
        KeyCode::Left | KeyCode::Char('h') => app.previous_question(),
        KeyCode::Right | KeyCode::Char('l') => app.next_question(),
        KeyCode::Enter | KeyCode::Char(' ') => app.submit_answer(),
        KeyCode::Char('f') | KeyCode::Char('F') => app.finish(),
        KeyCode::Esc => app.go_home(),
        KeyCode::Char('q') | KeyCode::Char('Q') => return true,
        _ => {}
    }
    false
}

fn handle_result_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Down | KeyCode::Char('j') => app.scroll_results_down(),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_results_up(),
        KeyCode::Char('r') | KeyCode::Char('R') => app.restart(),
        KeyCode::Esc | KeyCode::Char('b') => app.go_home(),
        KeyCode::Char('q') | KeyCode::Char('Q') => return true,
        _ => {}
    }
    false
}
