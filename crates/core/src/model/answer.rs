use crate::model::Question;

/// Resolution of a single question: either an explicit answer or a timeout.
///
/// Exactly one record exists per resolved question. `selected_option` is `None`
/// when the timer ran out, and a timeout is never correct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerRecord {
    pub question_index: usize,
    pub selected_option: Option<usize>,
    pub correct_option: usize,
    pub is_correct: bool,
    pub time_remaining_secs: u32,
}

impl AnswerRecord {
    #[must_use]
    pub fn answered(
        question_index: usize,
        question: &Question,
        selected_option: usize,
        time_remaining_secs: u32,
    ) -> Self {
        Self {
            question_index,
            selected_option: Some(selected_option),
            correct_option: question.correct_index(),
            is_correct: question.is_correct(selected_option),
            time_remaining_secs,
        }
    }

    #[must_use]
    pub fn timed_out(question_index: usize, question: &Question) -> Self {
        Self {
            question_index,
            selected_option: None,
            correct_option: question.correct_index(),
            is_correct: false,
            time_remaining_secs: 0,
        }
    }

    #[must_use]
    pub fn is_timeout(&self) -> bool {
        self.selected_option.is_none()
    }
}
