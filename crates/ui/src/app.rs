use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::{QuizActivity, QuizView, WindowGuard};

#[component]
pub fn App() -> Element {
    let ctx = use_context::<AppContext>();
    use_context_provider(QuizActivity::new);

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }

        document::Title { "{ctx.quiz_title()}" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                QuizView {}
            }
            WindowGuard {}
        }
    }
}
