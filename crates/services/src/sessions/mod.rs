mod observer;
mod phase;
mod progress;
mod service;
mod snapshot;
mod timer;
mod workflow;

// Public API of the session subsystem.
pub use crate::error::QuizError;
pub use observer::{LoggingObserver, SessionObserver};
pub use phase::{Operation, Resolution, SessionPhase, TickOutcome};
pub use progress::SessionProgress;
pub use service::QuizSession;
pub use snapshot::{OptionFeedback, QuestionView, QuizSnapshot};
pub use timer::{ManualTickScheduler, TickReceiver, TickScheduler, TimerToken, TokioTickScheduler};
pub use workflow::QuizService;
