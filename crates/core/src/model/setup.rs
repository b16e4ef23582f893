use std::sync::Arc;

use thiserror::Error;

use crate::model::{Question, QuizSettings};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SetupError {
    #[error("question bank is empty")]
    EmptyBank,

    #[error("settings ask for {requested} questions but the bank only has {available}")]
    NotEnoughQuestions { requested: usize, available: usize },
}

/// The questions and settings a session runs with.
///
/// Holds exactly `settings.total_questions()` questions, taken from the front of the
/// bank in order. Cloning is cheap; the question list is shared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSetup {
    questions: Arc<[Question]>,
    settings: QuizSettings,
}

impl QuizSetup {
    /// Pair a bank with settings.
    ///
    /// # Errors
    ///
    /// Returns `SetupError::EmptyBank` for an empty bank and
    /// `SetupError::NotEnoughQuestions` if the settings ask for more questions than exist.
    pub fn new(mut questions: Vec<Question>, settings: QuizSettings) -> Result<Self, SetupError> {
        if questions.is_empty() {
            return Err(SetupError::EmptyBank);
        }

        let requested = settings.total_questions();
        if requested > questions.len() {
            return Err(SetupError::NotEnoughQuestions {
                requested,
                available: questions.len(),
            });
        }
        questions.truncate(requested);

        Ok(Self {
            questions: questions.into(),
            settings,
        })
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    #[must_use]
    pub fn settings(&self) -> QuizSettings {
        self.settings
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }
}
