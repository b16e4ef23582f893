use log::{debug, info};

use super::phase::SessionPhase;
use super::snapshot::QuizSnapshot;

/// Receives a snapshot after every session transition.
pub trait SessionObserver {
    fn on_transition(&mut self, snapshot: &QuizSnapshot);
}

impl<F> SessionObserver for F
where
    F: FnMut(&QuizSnapshot),
{
    fn on_transition(&mut self, snapshot: &QuizSnapshot) {
        self(snapshot);
    }
}

/// Writes transitions to the `log` facade.
///
/// Countdown ticks are skipped unless the phase or question changed, so a 30 second
/// question does not produce 30 debug lines.
#[derive(Debug, Default)]
pub struct LoggingObserver {
    last: Option<(SessionPhase, usize)>,
}

impl LoggingObserver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionObserver for LoggingObserver {
    fn on_transition(&mut self, snapshot: &QuizSnapshot) {
        let key = (snapshot.phase, snapshot.question_number);
        if self.last == Some(key) {
            return;
        }
        self.last = Some(key);

        match (&snapshot.phase, &snapshot.results) {
            (SessionPhase::Completed, Some(results)) => info!(
                "quiz completed: {}/{} ({}%), passed={}",
                results.score(),
                results.total(),
                results.percentage(),
                results.passed()
            ),
            (SessionPhase::Answered, _) => debug!(
                "question {}/{} resolved (selected={:?}, score={})",
                snapshot.question_number,
                snapshot.total_questions,
                snapshot.selected_option,
                snapshot.score
            ),
            (phase, _) => debug!(
                "session {phase}: question {}/{}",
                snapshot.question_number, snapshot.total_questions
            ),
        }
    }
}
