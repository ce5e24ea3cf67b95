//! One attempt at a quiz.
//!
//! A session picks its active questions once at start (shuffle, then
//! truncate), then tracks position, captured answers and whether results are
//! currently revealed.

use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::{Question, QuizDefinition, QuizSettings};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// No questions remain after the quiz settings were applied.
    #[error("this quiz has no questions to answer")]
    EmptyQuiz,
}

/// What happened after an answer was submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// Deferred mode moved on to the next question.
    AdvancedToNext,
    /// Immediate mode revealed the result; the caller advances explicitly.
    AwaitingManualAdvance,
    /// Deferred mode answered the last question; the summary is ready.
    QuizComplete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

/// Display text of a question's correct option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorrectOption<'a> {
    Text(&'a str),
    /// The answer key has no usable entry for this question.
    NotAvailable,
}

impl CorrectOption<'_> {
    pub fn is_available(&self) -> bool {
        matches!(self, CorrectOption::Text(_))
    }
}

impl fmt::Display for CorrectOption<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CorrectOption::Text(text) => f.write_str(text),
            CorrectOption::NotAvailable => f.write_str("Answer not available"),
        }
    }
}

/// Per-question line of the final summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionOutcome<'a> {
    pub prompt: &'a str,
    pub answer: Option<&'a str>,
    /// Option text of the submitted label, if it names an option.
    pub answer_text: Option<&'a str>,
    pub correct: CorrectOption<'a>,
    pub is_correct: bool,
}

#[derive(Debug, Clone)]
pub struct QuizSession {
    definition: QuizDefinition,
    /// Authored question index for each active position.
    order: Vec<usize>,
    current_index: usize,
    answers: Vec<Option<String>>,
    results_revealed: bool,
}

impl QuizSession {
    /// Start a session, shuffling with the thread-local RNG when requested.
    pub fn start(definition: &QuizDefinition) -> Result<Self, SessionError> {
        Self::start_with_rng(definition, &mut rand::thread_rng())
    }

    /// Start a session with an explicit RNG, so shuffles can be reproduced.
    pub fn start_with_rng<R: Rng + ?Sized>(
        definition: &QuizDefinition,
        rng: &mut R,
    ) -> Result<Self, SessionError> {
        let settings = definition.settings;
        let mut order: Vec<usize> = (0..definition.questions.len()).collect();

        if settings.random_order {
            order.shuffle(rng);
        }

        if settings.question_count > 0 && settings.question_count < order.len() {
            order.truncate(settings.question_count);
        }

        if order.is_empty() {
            return Err(SessionError::EmptyQuiz);
        }

        tracing::debug!(
            active = order.len(),
            authored = definition.questions.len(),
            shuffled = settings.random_order,
            "quiz session started"
        );

        Ok(Self {
            definition: definition.clone(),
            answers: vec![None; order.len()],
            order,
            current_index: 0,
            results_revealed: false,
        })
    }

    pub fn settings(&self) -> QuizSettings {
        self.definition.settings
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_question_number(&self) -> usize {
        self.current_index + 1
    }

    pub fn total_questions(&self) -> usize {
        self.order.len()
    }

    pub fn results_revealed(&self) -> bool {
        self.results_revealed
    }

    /// Deferred mode has finished and the summary should be shown.
    pub fn is_final_summary(&self) -> bool {
        self.definition.settings.show_answers_at_end && self.results_revealed
    }

    pub fn is_last_question(&self) -> bool {
        self.current_index + 1 == self.order.len()
    }

    /// Every active question has an answer.
    pub fn is_complete(&self) -> bool {
        self.answers.iter().all(Option::is_some)
    }

    pub fn question(&self, index: usize) -> Option<&Question> {
        self.order
            .get(index)
            .map(|&authored| &self.definition.questions[authored])
    }

    pub fn current_question(&self) -> &Question {
        &self.definition.questions[self.order[self.current_index]]
    }

    /// Active questions in session order.
    pub fn questions(&self) -> impl Iterator<Item = &Question> + '_ {
        self.order
            .iter()
            .map(|&authored| &self.definition.questions[authored])
    }

    pub fn answer(&self, index: usize) -> Option<&str> {
        self.answers.get(index).and_then(|answer| answer.as_deref())
    }

    /// Record `label` for the current question, replacing any earlier answer.
    pub fn submit_answer(&mut self, label: impl Into<String>) -> SessionEvent {
        self.answers[self.current_index] = Some(label.into());

        if !self.definition.settings.show_answers_at_end {
            self.results_revealed = true;
            return SessionEvent::AwaitingManualAdvance;
        }

        if self.is_last_question() {
            self.results_revealed = true;
            tracing::info!(
                score = self.score(),
                total = self.total_questions(),
                "quiz complete"
            );
            SessionEvent::QuizComplete
        } else {
            self.current_index += 1;
            self.results_revealed = false;
            SessionEvent::AdvancedToNext
        }
    }

    /// Move one question back or forward, staying in bounds. Always hides results.
    pub fn advance(&mut self, direction: Direction) {
        match direction {
            Direction::Previous if self.current_index > 0 => self.current_index -= 1,
            Direction::Next if !self.is_last_question() => self.current_index += 1,
            _ => {}
        }
        self.results_revealed = false;
    }

    /// Answer-key entry for the active question at `index`.
    fn key_entry(&self, index: usize) -> Option<&str> {
        self.order
            .get(index)
            .and_then(|&authored| self.definition.answer_for(authored))
    }

    pub fn is_correct(&self, index: usize) -> bool {
        match (self.answer(index), self.key_entry(index)) {
            (Some(answer), Some(expected)) => answer == expected,
            _ => false,
        }
    }

    pub fn score(&self) -> usize {
        (0..self.order.len())
            .filter(|&index| self.is_correct(index))
            .count()
    }

    /// Text of the correct option, or `NotAvailable` when the key entry is missing
    /// or names no option of this question.
    pub fn correct_option(&self, index: usize) -> CorrectOption<'_> {
        let text = self
            .key_entry(index)
            .zip(self.question(index))
            .and_then(|(label, question)| question.option_text(label));

        match text {
            Some(text) => CorrectOption::Text(text),
            None => CorrectOption::NotAvailable,
        }
    }

    pub fn breakdown(&self) -> Vec<QuestionOutcome<'_>> {
        self.questions()
            .enumerate()
            .map(|(index, question)| {
                let answer = self.answer(index);
                QuestionOutcome {
                    prompt: &question.prompt,
                    answer,
                    answer_text: answer.and_then(|label| question.option_text(label)),
                    correct: self.correct_option(index),
                    is_correct: self.is_correct(index),
                }
            })
            .collect()
    }
}
