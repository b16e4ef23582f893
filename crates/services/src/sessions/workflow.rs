use quiz_core::bank::{QuestionBank, load_setup};
use quiz_core::model::QuizSetup;
use quiz_core::Clock;

use crate::error::QuizServiceError;
use super::observer::LoggingObserver;
use super::service::QuizSession;
use super::timer::TickScheduler;

/// Builds sessions from a validated setup.
///
/// The bank is read and validated once, up front; every session created afterwards
/// shares the same questions and settings.
#[derive(Debug, Clone)]
pub struct QuizService {
    clock: Clock,
    setup: QuizSetup,
    log_transitions: bool,
}

impl QuizService {
    #[must_use]
    pub fn new(clock: Clock, setup: QuizSetup) -> Self {
        Self {
            clock,
            setup,
            log_transitions: true,
        }
    }

    /// Load and validate a question bank.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::Setup` if the bank is invalid or too small for its settings.
    pub fn from_bank(clock: Clock, bank: &dyn QuestionBank) -> Result<Self, QuizServiceError> {
        let setup = load_setup(bank)?;
        Ok(Self::new(clock, setup))
    }

    /// Disable the `LoggingObserver` attached to new sessions.
    #[must_use]
    pub fn without_transition_logging(mut self) -> Self {
        self.log_transitions = false;
        self
    }

    #[must_use]
    pub fn setup(&self) -> &QuizSetup {
        &self.setup
    }

    /// Create an idle session driven by `scheduler`.
    #[must_use]
    pub fn new_session(&self, scheduler: Box<dyn TickScheduler>) -> QuizSession {
        let session = QuizSession::new(self.setup.clone(), scheduler).with_clock(self.clock);
        if self.log_transitions {
            session.with_observer(LoggingObserver::new())
        } else {
            session
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sessions::{ManualTickScheduler, SessionPhase};
    use quiz_core::BuiltinQuestionBank;
    use quiz_core::time::fixed_clock;

    #[test]
    fn builds_idle_sessions_from_builtin_bank() {
        let service = QuizService::from_bank(fixed_clock(), &BuiltinQuestionBank::new()).unwrap();
        let session = service.new_session(Box::new(ManualTickScheduler::new()));
        assert_eq!(session.phase(), SessionPhase::Idle);
        assert_eq!(session.total_questions(), 10);
    }
}
