use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use quiz_core::BuiltinQuestionBank;
use quiz_core::time::fixed_clock;
use services::{ManualTickScheduler, QuizService, QuizSession};

use crate::context::{UiApp, build_app_context};
use crate::vm::QuizIntent;
use crate::views::{QuizActivity, QuizTestHandles, QuizView};

pub const TEST_TITLE: &str = "Web Development Quiz";

#[derive(Clone)]
struct TestApp {
    start_on_launch: bool,
    quiz_service: Arc<QuizService>,
}

impl UiApp for TestApp {
    fn quiz_title(&self) -> String {
        TEST_TITLE.to_string()
    }

    fn start_on_launch(&self) -> bool {
        self.start_on_launch
    }

    fn quiz_service(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz_service)
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    handles: QuizTestHandles,
    activity: Rc<RefCell<Option<QuizActivity>>>,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn QuizViewHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
    let activity = use_context_provider(QuizActivity::new);
    props.activity.borrow_mut().get_or_insert(activity);
    rsx! { QuizView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub handles: QuizTestHandles,
    activity: Rc<RefCell<Option<QuizActivity>>>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        self.drive_for(Duration::from_millis(50)).await;
    }

    /// Wait at most `limit` for pending work, then flush renders.
    pub async fn drive_for(&mut self, limit: Duration) {
        let _ = tokio::time::timeout(limit, self.dom.wait_for_work()).await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Send an intent through the view's own dispatcher.
    pub fn dispatch(&mut self, intent: QuizIntent) {
        let dispatch = self.handles.dispatch();
        self.dom.in_runtime(|| dispatch.call(intent));
    }

    pub fn in_progress(&self) -> bool {
        let activity = (*self.activity.borrow()).expect("activity provided");
        self.dom.in_runtime(|| *activity.in_progress.peek())
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// Service over the built-in bank with a fixed clock and no transition logging.
pub fn test_service() -> QuizService {
    QuizService::from_bank(fixed_clock(), &BuiltinQuestionBank::new())
        .expect("builtin bank is valid")
        .without_transition_logging()
}

/// A session whose ticks are only delivered by hand.
pub fn manual_session() -> (QuizSession, ManualTickScheduler) {
    let scheduler = ManualTickScheduler::new();
    let session = test_service().new_session(Box::new(scheduler.clone()));
    (session, scheduler)
}

pub fn setup_view_harness(start_on_launch: bool) -> ViewHarness {
    let app = Arc::new(TestApp {
        start_on_launch,
        quiz_service: Arc::new(test_service()),
    });
    let handles = QuizTestHandles::default();
    let activity = Rc::new(RefCell::new(None));
    let dom = VirtualDom::new_with_props(
        QuizViewHarness,
        ViewHarnessProps {
            app,
            handles: handles.clone(),
            activity: Rc::clone(&activity),
        },
    );
    ViewHarness {
        dom,
        handles,
        activity,
    }
}
