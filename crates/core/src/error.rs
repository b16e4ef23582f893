use thiserror::Error;

use crate::bank::BankError;
use crate::model::{QuestionError, SettingsError, SetupError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    Setup(#[from] SetupError),
    #[error(transparent)]
    Bank(#[from] BankError),
}
