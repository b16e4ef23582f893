#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;
use std::time::Duration;

use dioxus::document::eval;
use dioxus::dioxus_core::Task;
use dioxus::prelude::*;

use quiz_core::model::PerformanceTable;
use services::{QuizSnapshot, SessionPhase, TokioTickScheduler};

use crate::context::AppContext;
use crate::views::{QuestionScreen, QuizActivity, ResultsScreen, StartScreen, ViewError};
use crate::vm::{QuizIntent, intent_for_key, map_question, map_results};

/// Pause between showing answer feedback and offering the next question.
const NEXT_REVEAL_DELAY: Duration = Duration::from_millis(1000);

/// Owns the session for the lifetime of the window and routes ticks and input into it.
#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let service = ctx.quiz_service();
    let settings = service.setup().settings();
    let title = ctx.quiz_title().to_string();

    let (scheduler, ticks) = use_hook(TokioTickScheduler::channel);
    let mut session = use_signal(move || service.new_session(Box::new(scheduler)));
    let mut error = use_signal(|| None::<ViewError>);
    // Question number whose "next" control is showing.
    let mut revealed = use_signal(|| None::<usize>);
    // Reveal countdown for the answered question, cancelled when the run is reset.
    let mut pending_reveal = use_signal(|| None::<(usize, Task)>);

    // Ticks arrive on the same loop as input, so answer and timeout never interleave.
    let _ticker = use_future(move || {
        let ticks = ticks.clone();
        async move {
            while let Some(token) = ticks.recv().await {
                session.write().handle_tick(token);
            }
        }
    });

    use_effect(move || {
        let (answered, number) = {
            let guard = session.read();
            (guard.is_answered(), guard.current_index() + 1)
        };
        if !answered
            || *revealed.peek() == Some(number)
            || pending_reveal.peek().as_ref().is_some_and(|(pending, _)| *pending == number)
        {
            return;
        }
        let task = spawn(async move {
            tokio::time::sleep(NEXT_REVEAL_DELAY).await;
            let still_open = {
                let guard = session.peek();
                guard.is_answered() && guard.current_index() + 1 == number
            };
            if still_open {
                revealed.set(Some(number));
            }
            pending_reveal.set(None);
        });
        pending_reveal.set(Some((number, task)));
    });

    let activity = try_use_context::<QuizActivity>();
    use_effect(move || {
        let in_progress = session.read().phase().is_in_progress();
        if let Some(mut activity) = activity {
            if *activity.in_progress.peek() != in_progress {
                activity.in_progress.set(in_progress);
            }
        }
    });

    let dispatch = use_callback(move |intent: QuizIntent| {
        if matches!(intent, QuizIntent::Start | QuizIntent::Restart) {
            if let Some((_, task)) = pending_reveal.write().take() {
                task.cancel();
            }
            revealed.set(None);
        }
        let result = match intent {
            QuizIntent::Start => session.write().start(),
            QuizIntent::Answer(option) => session.write().answer(option).map(|_| ()),
            QuizIntent::Advance => session.write().advance(),
            QuizIntent::Restart => {
                session.write().restart();
                Ok(())
            }
        };
        error.set(result.err().map(ViewError::from));
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<QuizTestHandles>() {
                handles.register(dispatch);
            }
        }
    }

    let ctx_for_launch = ctx.clone();
    use_effect(move || {
        if ctx_for_launch.take_start_on_launch() {
            dispatch.call(QuizIntent::Start);
        }
        let _ = eval("document.getElementById(\"quiz-root\")?.focus();");
    });

    let on_key = use_callback(move |evt: KeyboardEvent| {
        let (phase, number) = {
            let guard = session.read();
            (guard.phase(), guard.current_index() + 1)
        };
        let next_visible = revealed() == Some(number);
        if let Some(intent) = intent_for_key(&evt.data.key(), phase, next_visible) {
            evt.prevent_default();
            dispatch.call(intent);
        }
    });

    let snapshot = session.read().snapshot();
    let show_next = snapshot.answered && revealed() == Some(snapshot.question_number);

    rsx! {
        div { class: "quiz", id: "quiz-root", tabindex: "0", onkeydown: on_key,
            QuizScreens {
                snapshot,
                title,
                time_per_question: settings.time_per_question_secs(),
                passing_score: settings.passing_score_percent(),
                show_next,
                error: error(),
                on_intent: dispatch,
            }
        }
    }
}

/// Picks the screen for a snapshot. Holds no state of its own.
#[component]
pub fn QuizScreens(
    snapshot: QuizSnapshot,
    title: String,
    time_per_question: u32,
    passing_score: u32,
    show_next: bool,
    error: Option<ViewError>,
    on_intent: EventHandler<QuizIntent>,
) -> Element {
    let question = map_question(&snapshot);
    let results = snapshot
        .results
        .as_ref()
        .map(|results| map_results(results, &PerformanceTable::default()));

    rsx! {
        if let Some(err) = error {
            p { class: "quiz-error", role: "alert", "{err.message()}" }
        }
        match (snapshot.phase, question, results) {
            (SessionPhase::Idle, _, _) => rsx! {
                StartScreen {
                    title,
                    total_questions: snapshot.total_questions,
                    time_per_question,
                    passing_score,
                    on_intent,
                }
            },
            (SessionPhase::Completed, _, Some(vm)) => rsx! {
                ResultsScreen { vm, on_intent }
            },
            (_, Some(vm), _) => rsx! {
                QuestionScreen { vm, show_next, on_intent }
            },
            _ => rsx! {
                p { "Nothing to show." }
            },
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuizTestHandles {
    dispatch: Rc<RefCell<Option<Callback<QuizIntent>>>>,
}

#[cfg(test)]
impl QuizTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<QuizIntent>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
    }

    pub(crate) fn dispatch(&self) -> Callback<QuizIntent> {
        (*self.dispatch.borrow()).expect("quiz dispatch registered")
    }
}
