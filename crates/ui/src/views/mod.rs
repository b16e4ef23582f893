mod question;
mod quiz;
mod results;
mod start;
mod state;
mod window_guard;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use question::QuestionScreen;
pub use quiz::{QuizScreens, QuizView};
pub use results::ResultsScreen;
pub use start::StartScreen;
pub use state::ViewError;
pub use window_guard::{CloseAction, LeaveDialog, QuizActivity, WindowGuard, close_action};

#[cfg(test)]
pub(crate) use quiz::QuizTestHandles;
