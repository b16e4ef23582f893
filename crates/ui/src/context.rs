use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use services::QuizService;

pub trait UiApp: Send + Sync {
    fn quiz_title(&self) -> String;
    fn start_on_launch(&self) -> bool;

    fn quiz_service(&self) -> Arc<QuizService>;
}

#[derive(Clone)]
pub struct AppContext {
    quiz_title: String,
    start_on_launch_once: Arc<AtomicBool>,

    quiz_service: Arc<QuizService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            quiz_title: app.quiz_title(),
            start_on_launch_once: Arc::new(AtomicBool::new(app.start_on_launch())),
            quiz_service: app.quiz_service(),
        }
    }

    #[must_use]
    pub fn quiz_title(&self) -> &str {
        &self.quiz_title
    }

    /// Returns the auto-start flag once; later calls return false.
    #[must_use]
    pub fn take_start_on_launch(&self) -> bool {
        self.start_on_launch_once.swap(false, Ordering::AcqRel)
    }

    #[must_use]
    pub fn quiz_service(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz_service)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
