use quiz_core::model::{PerformanceTable, QuizResults};
use services::{OptionFeedback, QuizSnapshot};

use crate::vm::time_fmt::format_elapsed;

/// Countdown styling buckets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerUrgency {
    Normal,
    Warning,
    Danger,
}

impl TimerUrgency {
    pub const WARNING_SECS: u32 = 10;
    pub const DANGER_SECS: u32 = 5;

    #[must_use]
    pub fn for_remaining(seconds: u32) -> Self {
        if seconds <= Self::DANGER_SECS {
            Self::Danger
        } else if seconds <= Self::WARNING_SECS {
            Self::Warning
        } else {
            Self::Normal
        }
    }

    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            TimerUrgency::Normal => "timer",
            TimerUrgency::Warning => "timer warning",
            TimerUrgency::Danger => "timer danger",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub index: usize,
    pub letter: char,
    pub text: String,
    pub class: String,
    pub disabled: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub number: usize,
    pub total: usize,
    pub category: String,
    pub text: String,
    pub options: Vec<OptionVm>,
    pub time_remaining: u32,
    pub timer_class: &'static str,
    pub progress_percent: u32,
    pub score_label: String,
    pub feedback: Option<&'static str>,
    pub answered: bool,
}

fn option_letter(index: usize) -> char {
    u8::try_from(index)
        .ok()
        .and_then(|offset| b'A'.checked_add(offset))
        .map_or('?', char::from)
}

/// Map an in-progress snapshot to display data. `None` outside a question.
#[must_use]
pub fn map_question(snapshot: &QuizSnapshot) -> Option<QuestionVm> {
    let question = snapshot.question.as_ref()?;
    let feedback = snapshot.option_feedback.as_deref();

    let options = question
        .options
        .iter()
        .enumerate()
        .map(|(index, text)| {
            let mut class = String::from("option-btn");
            if snapshot.selected_option == Some(index) {
                class.push_str(" selected");
            }
            match feedback.and_then(|items| items.get(index)) {
                Some(OptionFeedback::Correct) => class.push_str(" correct"),
                Some(OptionFeedback::Incorrect) => class.push_str(" incorrect"),
                Some(OptionFeedback::Neutral) | None => {}
            }
            OptionVm {
                index,
                letter: option_letter(index),
                text: text.clone(),
                class,
                disabled: snapshot.answered,
            }
        })
        .collect();

    let feedback_label = if !snapshot.answered {
        None
    } else if snapshot.timed_out() {
        Some("Time's up!")
    } else if feedback
        .zip(snapshot.selected_option)
        .and_then(|(items, selected)| items.get(selected))
        == Some(&OptionFeedback::Correct)
    {
        Some("Correct!")
    } else {
        Some("Incorrect")
    };

    Some(QuestionVm {
        number: snapshot.question_number,
        total: snapshot.total_questions,
        category: question.category.clone(),
        text: question.text.clone(),
        options,
        time_remaining: snapshot.time_remaining,
        timer_class: TimerUrgency::for_remaining(snapshot.time_remaining).class(),
        progress_percent: quiz_core::model::score_percentage(
            snapshot.question_number,
            snapshot.total_questions,
        ),
        score_label: format!("Score: {}", snapshot.score),
        feedback: feedback_label,
        answered: snapshot.answered,
    })
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultsVm {
    pub score: usize,
    pub total: usize,
    pub percentage: u32,
    pub correct: usize,
    pub incorrect: usize,
    pub timed_out: usize,
    pub passed: bool,
    pub message: String,
    pub message_class: String,
    pub elapsed_label: String,
}

#[must_use]
pub fn map_results(results: &QuizResults, table: &PerformanceTable) -> ResultsVm {
    let band = results.band(table);
    ResultsVm {
        score: results.score(),
        total: results.total(),
        percentage: results.percentage(),
        correct: results.correct_count(),
        incorrect: results.incorrect_count(),
        timed_out: results.timed_out_count(),
        passed: results.passed(),
        message: band.message.clone(),
        message_class: format!("performance-message {}", band.tier.as_str()),
        elapsed_label: format_elapsed(results.elapsed()),
    }
}
