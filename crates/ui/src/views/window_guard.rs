use dioxus::desktop::tao::event::{Event, WindowEvent};
use dioxus::desktop::{DesktopContext, WindowCloseBehaviour, use_wry_event_handler, window};
use dioxus::prelude::*;
use log::debug;

/// Quiz state the window chrome needs to know about.
///
/// Provided once at the root; `QuizView` keeps `in_progress` in sync with its session.
#[derive(Clone, Copy)]
pub struct QuizActivity {
    pub in_progress: Signal<bool>,
    pub leave_prompt: Signal<bool>,
}

impl QuizActivity {
    /// Must be called inside a component (the signals are owned by its scope).
    #[must_use]
    pub fn new() -> Self {
        Self {
            in_progress: Signal::new(false),
            leave_prompt: Signal::new(false),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CloseAction {
    Close,
    Confirm,
}

/// Closing mid-question loses the run, so it needs confirmation.
#[must_use]
pub fn close_action(in_progress: bool) -> CloseAction {
    if in_progress {
        CloseAction::Confirm
    } else {
        CloseAction::Close
    }
}

/// Intercepts window close requests and logs focus changes.
///
/// The window is configured to hide on close; this guard either closes it for real
/// or brings it back and asks first.
#[component]
pub fn WindowGuard() -> Element {
    let activity = use_context::<QuizActivity>();
    let in_progress = activity.in_progress;
    let mut leave_prompt = activity.leave_prompt;

    let desktop = window();
    let window_id = desktop.window.id();
    let handler_desktop = desktop.clone();

    use_wry_event_handler(move |event, _| {
        let Event::WindowEvent {
            event, window_id: id, ..
        } = event
        else {
            return;
        };
        if *id != window_id {
            return;
        }

        match event {
            WindowEvent::CloseRequested => match close_action(*in_progress.peek()) {
                CloseAction::Confirm => {
                    debug!("close requested mid-quiz, asking for confirmation");
                    handler_desktop.window.set_visible(true);
                    handler_desktop.window.set_focus();
                    leave_prompt.set(true);
                }
                CloseAction::Close => close_window(&handler_desktop),
            },
            WindowEvent::Focused(true) => debug!("quiz window shown"),
            WindowEvent::Focused(false) => debug!("quiz window hidden"),
            _ => {}
        }
    });

    rsx! {
        if leave_prompt() {
            LeaveDialog {
                on_stay: move |()| leave_prompt.set(false),
                on_leave: move |()| close_window(&desktop),
            }
        }
    }
}

fn close_window(desktop: &DesktopContext) {
    desktop.set_close_behavior(WindowCloseBehaviour::WindowCloses);
    desktop.close();
}

#[component]
pub fn LeaveDialog(on_stay: EventHandler<()>, on_leave: EventHandler<()>) -> Element {
    rsx! {
        div { class: "leave-dialog", role: "alertdialog", id: "leave-dialog",
            p { "Your quiz progress will be lost. Leave anyway?" }
            div { class: "leave-dialog__actions",
                button {
                    class: "btn",
                    id: "stay-btn",
                    r#type: "button",
                    onclick: move |_| on_stay.call(()),
                    "Stay"
                }
                button {
                    class: "btn btn-primary",
                    id: "leave-btn",
                    r#type: "button",
                    onclick: move |_| on_leave.call(()),
                    "Leave"
                }
            }
        }
    }
}
