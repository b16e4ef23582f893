use dioxus::prelude::*;

use crate::vm::{QuizIntent, ResultsVm};

#[component]
pub fn ResultsScreen(vm: ResultsVm, on_intent: EventHandler<QuizIntent>) -> Element {
    let verdict = if vm.passed { "Passed" } else { "Not passed" };

    rsx! {
        section { class: "screen results-screen", id: "results-screen",
            h2 { "Quiz Complete" }
            p { class: "final-score",
                span { id: "final-score", "{vm.score}" }
                " / "
                span { id: "total-score", "{vm.total}" }
            }
            p { class: "percentage", span { id: "percentage-score", "{vm.percentage}" } "%" }
            p { class: "verdict", "{verdict}" }
            div { class: "{vm.message_class}", id: "performance-message",
                p { "{vm.message}" }
            }
            // Definition list reads well for label/value pairs.
            dl { class: "results-breakdown",
                dt { "Correct" }
                dd { id: "correct-count", "{vm.correct}" }

                dt { "Incorrect" }
                dd { id: "incorrect-count", "{vm.incorrect}" }

                dt { "Timed out" }
                dd { "{vm.timed_out}" }

                dt { "Time taken" }
                dd { "{vm.elapsed_label}" }
            }
            button {
                class: "btn btn-primary",
                id: "restart-btn",
                r#type: "button",
                onclick: move |_| on_intent.call(QuizIntent::Restart),
                "Restart Quiz"
            }
        }
    }
}
