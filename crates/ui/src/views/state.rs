use services::QuizError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    InvalidAction,
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ViewError::InvalidAction => "That action isn't available right now.",
            ViewError::Unknown => "Something went wrong. Please try again.",
        }
    }
}

impl From<QuizError> for ViewError {
    fn from(err: QuizError) -> Self {
        match err {
            QuizError::InvalidOperation { .. } | QuizError::OutOfRange { .. } => {
                ViewError::InvalidAction
            }
            _ => ViewError::Unknown,
        }
    }
}
