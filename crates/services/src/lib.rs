#![forbid(unsafe_code)]

pub mod error;
pub mod sessions;

pub use quiz_core::Clock;
pub use sessions as session;

pub use error::{QuizError, QuizServiceError};

pub use sessions::{
    LoggingObserver, ManualTickScheduler, OptionFeedback, QuestionView, QuizService, QuizSession,
    QuizSnapshot, Resolution, SessionObserver, SessionPhase, SessionProgress, TickOutcome,
    TickReceiver, TickScheduler, TimerToken, TokioTickScheduler,
};
