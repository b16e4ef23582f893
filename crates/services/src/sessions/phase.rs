use std::fmt;

use quiz_core::model::AnswerRecord;

/// Where a session is in its lifecycle.
///
/// `Unanswered` and `Answered` are the two halves of an in-progress question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionPhase {
    Idle,
    Unanswered,
    Answered,
    Completed,
}

impl SessionPhase {
    #[must_use]
    pub fn is_in_progress(self) -> bool {
        matches!(self, SessionPhase::Unanswered | SessionPhase::Answered)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SessionPhase::Idle => "idle",
            SessionPhase::Unanswered => "awaiting an answer",
            SessionPhase::Answered => "answered",
            SessionPhase::Completed => "completed",
        }
    }
}

impl fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operations the presentation layer can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Start,
    Answer,
    Timeout,
    Advance,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Start => "start",
            Operation::Answer => "answer",
            Operation::Timeout => "time out",
            Operation::Advance => "advance",
        };
        f.write_str(name)
    }
}

/// Outcome of `answer()` or `timeout()` on an in-progress question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// This call resolved the question.
    Recorded(AnswerRecord),
    /// The question was already resolved; nothing changed.
    AlreadyResolved,
}

impl Resolution {
    #[must_use]
    pub fn record(&self) -> Option<&AnswerRecord> {
        match self {
            Resolution::Recorded(record) => Some(record),
            Resolution::AlreadyResolved => None,
        }
    }
}

/// Outcome of a single timer tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Stale, cancelled, or out-of-phase tick. Absorbed without effect.
    Ignored,
    /// One second elapsed; the question is still open.
    Counted { remaining: u32 },
    /// The countdown hit zero and the question was resolved as a timeout.
    TimedOut(AnswerRecord),
}
