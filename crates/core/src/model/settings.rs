use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SettingsError {
    #[error("time per question must be > 0 seconds")]
    InvalidTimePerQuestion,

    #[error("total questions must be > 0")]
    InvalidTotalQuestions,

    #[error("passing score must be between 0 and 100, got {0}")]
    InvalidPassingScore(u32),
}

/// Session-wide quiz configuration.
///
/// Fixed for the duration of a session. Whether `total_questions` fits the bank is
/// checked later by `QuizSetup`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizSettings {
    time_per_question_secs: u32,
    total_questions: usize,
    passing_score_percent: u32,
}

impl QuizSettings {
    pub const DEFAULT_TIME_PER_QUESTION_SECS: u32 = 30;
    pub const DEFAULT_TOTAL_QUESTIONS: usize = 10;
    pub const DEFAULT_PASSING_SCORE_PERCENT: u32 = 70;

    /// Build validated settings.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError` for a zero timer, zero questions, or a passing score above 100.
    pub fn new(
        time_per_question_secs: u32,
        total_questions: usize,
        passing_score_percent: u32,
    ) -> Result<Self, SettingsError> {
        if time_per_question_secs == 0 {
            return Err(SettingsError::InvalidTimePerQuestion);
        }
        if total_questions == 0 {
            return Err(SettingsError::InvalidTotalQuestions);
        }
        if passing_score_percent > 100 {
            return Err(SettingsError::InvalidPassingScore(passing_score_percent));
        }

        Ok(Self {
            time_per_question_secs,
            total_questions,
            passing_score_percent,
        })
    }

    #[must_use]
    pub fn time_per_question_secs(&self) -> u32 {
        self.time_per_question_secs
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.total_questions
    }

    #[must_use]
    pub fn passing_score_percent(&self) -> u32 {
        self.passing_score_percent
    }

    /// Returns a copy with overrides applied, re-validating the result.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError` if the overridden values are invalid.
    pub fn with_overrides(
        self,
        time_per_question_secs: Option<u32>,
        total_questions: Option<usize>,
        passing_score_percent: Option<u32>,
    ) -> Result<Self, SettingsError> {
        Self::new(
            time_per_question_secs.unwrap_or(self.time_per_question_secs),
            total_questions.unwrap_or(self.total_questions),
            passing_score_percent.unwrap_or(self.passing_score_percent),
        )
    }
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            time_per_question_secs: Self::DEFAULT_TIME_PER_QUESTION_SECS,
            total_questions: Self::DEFAULT_TOTAL_QUESTIONS,
            passing_score_percent: Self::DEFAULT_PASSING_SCORE_PERCENT,
        }
    }
}
