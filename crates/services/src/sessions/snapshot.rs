use quiz_core::model::{Question, QuizResults};

use super::phase::SessionPhase;
use super::progress::SessionProgress;

/// Presentation-agnostic copy of the question being shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionView {
    pub text: String,
    pub options: Vec<String>,
    pub category: String,
}

impl From<&Question> for QuestionView {
    fn from(question: &Question) -> Self {
        Self {
            text: question.text().to_string(),
            options: question.options().to_vec(),
            category: question.category().to_string(),
        }
    }
}

/// How an option should be shown once its question is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionFeedback {
    /// The right answer, whether or not it was picked.
    Correct,
    /// Picked, but wrong.
    Incorrect,
    Neutral,
}

impl OptionFeedback {
    #[must_use]
    pub fn for_options(
        option_count: usize,
        correct: usize,
        selected: Option<usize>,
    ) -> Vec<OptionFeedback> {
        (0..option_count)
            .map(|index| {
                if index == correct {
                    OptionFeedback::Correct
                } else if selected == Some(index) {
                    OptionFeedback::Incorrect
                } else {
                    OptionFeedback::Neutral
                }
            })
            .collect()
    }
}

/// State emitted to observers after every transition.
///
/// This is the whole contract between the session and whatever renders it:
/// - no pre-formatted strings
/// - no styling decisions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSnapshot {
    pub phase: SessionPhase,
    /// 1-based number of the current question; 0 before the session starts.
    pub question_number: usize,
    pub total_questions: usize,
    pub question: Option<QuestionView>,
    pub time_remaining: u32,
    pub time_limit: u32,
    pub answered: bool,
    pub selected_option: Option<usize>,
    /// Present only once the current question is resolved.
    pub option_feedback: Option<Vec<OptionFeedback>>,
    pub score: usize,
    pub progress: SessionProgress,
    pub results: Option<QuizResults>,
}

impl QuizSnapshot {
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.phase == SessionPhase::Completed
    }

    /// True when the last resolution on screen was the timer running out.
    #[must_use]
    pub fn timed_out(&self) -> bool {
        self.answered && self.selected_option.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feedback_marks_correct_and_wrong_pick() {
        let feedback = OptionFeedback::for_options(4, 2, Some(0));
        assert_eq!(
            feedback,
            vec![
                OptionFeedback::Incorrect,
                OptionFeedback::Neutral,
                OptionFeedback::Correct,
                OptionFeedback::Neutral,
            ]
        );
    }

    #[test]
    fn feedback_on_timeout_only_reveals_correct() {
        let feedback = OptionFeedback::for_options(4, 1, None);
        assert_eq!(
            feedback
                .iter()
                .filter(|f| **f == OptionFeedback::Correct)
                .count(),
            1
        );
        assert!(!feedback.contains(&OptionFeedback::Incorrect));
    }
}
