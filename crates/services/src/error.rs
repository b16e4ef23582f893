//! Shared error types for the services crate.

use thiserror::Error;

use crate::sessions::{Operation, SessionPhase};

/// Errors emitted by quiz sessions.
///
/// Every variant leaves the session in the state it had before the call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("cannot {operation} while the session is {phase}")]
    InvalidOperation {
        operation: Operation,
        phase: SessionPhase,
    },
    #[error("option {index} is out of range for a question with {len} options")]
    OutOfRange { index: usize, len: usize },
}

/// Errors emitted while preparing a quiz from a question bank.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizServiceError {
    #[error(transparent)]
    Setup(#[from] quiz_core::Error),
}
