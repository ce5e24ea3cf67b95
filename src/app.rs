use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::find_quiz;
use crate::models::{label_index, option_label, AppState, QuizDefinition, QuizLibrary};
use crate::session::{Direction, QuizSession, SessionEvent};

struct ActiveQuiz {
    title: String,
    session: QuizSession,
}

pub struct App {
    pub state: AppState,
    library: QuizLibrary,
    home_selected: usize,
    notice: Option<String>,
    active: Option<ActiveQuiz>,
    selected_option: usize,
    result_scroll: usize,
    rng: StdRng,
}

impl App {
    pub fn new(library: QuizLibrary) -> Self {
        Self::with_rng(library, StdRng::from_entropy())
    }

    /// Same as [`App::new`], but question shuffles are reproducible.
    pub fn with_seed(library: QuizLibrary, seed: u64) -> Self {
        Self::with_rng(library, StdRng::seed_from_u64(seed))
    }

    fn with_rng(library: QuizLibrary, rng: StdRng) -> Self {
        Self {
            state: AppState::Home,
            library,
            home_selected: 0,
            notice: None,
            active: None,
            selected_option: 0,
            result_scroll: 0,
            rng,
        }
    }

    /// Add an unsaved quiz to this app's library and open it.
    pub fn open_unsaved(&mut self, title: &str, definition: QuizDefinition) {
        self.library.insert(title.to_string(), definition);
        self.open_quiz(title);
    }

    pub fn titles(&self) -> impl Iterator<Item = &str> + '_ {
        self.library.keys().map(String::as_str)
    }

    pub fn library(&self) -> &QuizLibrary {
        &self.library
    }

    pub fn home_selected(&self) -> usize {
        self.home_selected
    }

    /// Message for the home screen, e.g. why a quiz could not be opened.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn title(&self) -> Option<&str> {
        self.active.as_ref().map(|active| active.title.as_str())
    }

    pub fn session(&self) -> Option<&QuizSession> {
        self.active.as_ref().map(|active| &active.session)
    }

    pub fn selected_option(&self) -> usize {
        self.selected_option
    }

    pub fn result_scroll(&self) -> usize {
        self.result_scroll
    }

    pub fn select_next_quiz(&mut self) {
        let count = self.library.len();
        if count > 0 {
            self.home_selected = (self.home_selected + 1) % count;
        }
    }

    pub fn select_previous_quiz(&mut self) {
        let count = self.library.len();
        if count > 0 {
            self.home_selected = (self.home_selected + count - 1) % count;
        }
    }

    pub fn start_selected_quiz(&mut self) {
        let title = self.library.keys().nth(self.home_selected).cloned();
        if let Some(title) = title {
            self.open_quiz(&title);
        }
    }

    /// Start a fresh attempt. Failures land on the home screen with a notice.
    pub fn open_quiz(&mut self, title: &str) {
        let opened = find_quiz(&self.library, title).and_then(|definition| {
            QuizSession::start_with_rng(definition, &mut self.rng).map_err(Into::into)
        });

        match opened {
            Ok(session) => {
                self.home_selected = self
                    .library
                    .keys()
                    .position(|key| key == title)
                    .unwrap_or(self.home_selected);
                self.active = Some(ActiveQuiz {
                    title: title.to_string(),
                    session,
                });
                self.notice = None;
                self.selected_option = 0;
                self.result_scroll = 0;
                self.state = AppState::Quiz;
            }
            Err(err) => {
                tracing::warn!(title, error = %err, "could not open quiz");
                self.active = None;
                self.notice = Some(err.to_string());
                self.state = AppState::Home;
            }
        }
    }

    fn option_count(&self) -> usize {
        self.session()
            .map_or(0, |session| session.current_question().options.len())
    }

    pub fn select_next_option(&mut self) {
        let count = self.option_count();
        if count > 0 {
            self.selected_option = (self.selected_option + 1) % count;
        }
    }

    pub fn select_previous_option(&mut self) {
        let count = self.option_count();
        if count > 0 {
            self.selected_option = (self.selected_option + count - 1) % count;
        }
    }

    /// Submit the highlighted option. Questions without options accept nothing.
    pub fn submit_answer(&mut self) {
        let Some(label) = option_label(self.selected_option) else {
            return;
        };
        if self.selected_option >= self.option_count() {
            return;
        }
        let Some(active) = self.active.as_mut() else {
            return;
        };

        match active.session.submit_answer(label) {
            SessionEvent::AdvancedToNext => self.sync_selection(),
            SessionEvent::AwaitingManualAdvance => {}
            SessionEvent::QuizComplete => self.show_results(),
        }
    }

    pub fn previous_question(&mut self) {
        self.navigate(Direction::Previous);
    }

    pub fn next_question(&mut self) {
        self.navigate(Direction::Next);
    }

    fn navigate(&mut self, direction: Direction) {
        if let Some(active) = self.active.as_mut() {
            active.session.advance(direction);
            self.sync_selection();
        }
    }

    /// Put the cursor on the recorded answer of the current question, if any.
    fn sync_selection(&mut self) {
        self.selected_option = self
            .session()
            .and_then(|session| session.answer(session.current_index()))
            .and_then(label_index)
            .unwrap_or(0);
    }

    /// Jump to the summary. Deferred-mode quizzes only get there by finishing.
    pub fn finish(&mut self) {
        let immediate = self
            .session()
            .is_some_and(|session| !session.settings().show_answers_at_end);
        if immediate {
            self.show_results();
        }
    }

    fn show_results(&mut self) {
        self.result_scroll = 0;
        self.state = AppState::Result;
    }

    pub fn scroll_results_down(&mut self) {
        let total = self.session().map_or(0, QuizSession::total_questions);
        if self.result_scroll + 1 < total {
            self.result_scroll += 1;
        }
    }

    pub fn scroll_results_up(&mut self) {
        self.result_scroll = self.result_scroll.saturating_sub(1);
    }

    pub fn restart(&mut self) {
        if let Some(title) = self.title().map(str::to_string) {
            self.open_quiz(&title);
        }
    }

    pub fn go_home(&mut self) {
        self.active = None;
        self.state = AppState::Home;
    }
}
