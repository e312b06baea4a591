//! State of a quiz in progress

use crate::quiz::QuizDirection;

/// How the user answered the current question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerOutcome {
    /// Option list position the user picked
    pub chosen: usize,
    /// Whether that pick was graded correct
    pub correct: bool,
}

/// A quiz in progress (or just finished, on the results view)
#[derive(Debug, Clone)]
pub struct QuizState {
    /// Which side the questions show
    pub direction: QuizDirection,
    /// Question order: positions into the category's item list
    pub order: Vec<usize>,
    /// Current question index within `order`
    pub cursor: usize,
    /// Correct answers so far
    pub score: usize,
    /// Option positions into the category's item list, for the current
    /// question
    pub options: Vec<usize>,
    /// Highlighted option list position
    pub selected: usize,
    /// Set once the current question has been answered; cleared when the
    /// next question comes up
    pub outcome: Option<AnswerOutcome>,
}

impl QuizState {
    /// Start at the first question of a prepared order
    pub fn new(direction: QuizDirection, order: Vec<usize>) -> Self {
        Self {
            direction,
            order,
            cursor: 0,
            score: 0,
            options: Vec::new(),
            selected: 0,
            outcome: None,
        }
    }

    /// Item position of the current question, if any remain
    pub fn current_item(&self) -> Option<usize> {
        self.order.get(self.cursor).copied()
    }

    /// Total number of questions
    pub fn total(&self) -> usize {
        self.order.len()
    }

    /// 1-based question number for display, capped at the total
    pub fn question_number(&self) -> usize {
        (self.cursor + 1).min(self.total())
    }

    /// Move the highlight down, wrapping. Locked once answered.
    pub fn select_next(&mut self) {
        if self.outcome.is_none() && !self.options.is_empty() {
            self.selected = (self.selected + 1) % self.options.len();
        }
    }

    /// Move the highlight up, wrapping. Locked once answered.
    pub fn select_prev(&mut self) {
        if self.outcome.is_none() && !self.options.is_empty() {
            self.selected = (self.selected + self.options.len() - 1) % self.options.len();
        }
    }
}
