use thiserror::Error;

/// Number of answer options every question carries.
pub const OPTION_COUNT: usize = 4;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question text cannot be empty")]
    EmptyText,

    #[error("question must have exactly {expected} options, got {actual}")]
    WrongOptionCount { expected: usize, actual: usize },

    #[error("option {index} cannot be empty")]
    EmptyOption { index: usize },

    #[error("correct option {index} is out of range for {len} options")]
    CorrectIndexOutOfRange { index: usize, len: usize },
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A single multiple-choice question from the bank.
///
/// Immutable once built; `category` is informational and never affects scoring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    text: String,
    options: Vec<String>,
    correct_index: usize,
    category: String,
}

impl Question {
    /// Build a validated question.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if the text or an option is blank, the option count is not
    /// [`OPTION_COUNT`], or `correct_index` does not point at an option.
    pub fn new(
        text: impl Into<String>,
        options: Vec<String>,
        correct_index: usize,
        category: impl Into<String>,
    ) -> Result<Self, QuestionError> {
        let text = text.into().trim().to_string();
        if text.is_empty() {
            return Err(QuestionError::EmptyText);
        }

        if options.len() != OPTION_COUNT {
            return Err(QuestionError::WrongOptionCount {
                expected: OPTION_COUNT,
                actual: options.len(),
            });
        }

        if let Some(index) = options.iter().position(|option| option.trim().is_empty()) {
            return Err(QuestionError::EmptyOption { index });
        }

        if correct_index >= options.len() {
            return Err(QuestionError::CorrectIndexOutOfRange {
                index: correct_index,
                len: options.len(),
            });
        }

        Ok(Self {
            text,
            options,
            correct_index,
            category: category.into(),
        })
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn option_count(&self) -> usize {
        self.options.len()
    }

    #[must_use]
    pub fn correct_index(&self) -> usize {
        self.correct_index
    }

    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Returns true if `option` is the correct answer.
    #[must_use]
    pub fn is_correct(&self, option: usize) -> bool {
        option == self.correct_index
    }
}
