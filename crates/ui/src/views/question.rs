use dioxus::prelude::*;

use crate::vm::{OptionVm, QuestionVm, QuizIntent};

#[component]
pub fn QuestionScreen(
    vm: QuestionVm,
    show_next: bool,
    on_intent: EventHandler<QuizIntent>,
) -> Element {
    let next_label = if vm.number >= vm.total {
        "See Results"
    } else {
        "Next Question"
    };

    rsx! {
        section { class: "screen quiz-screen", id: "quiz-screen",
            header { class: "quiz-header",
                span { class: "question-counter",
                    "Question "
                    span { id: "question-number", "{vm.number}" }
                    " of "
                    span { id: "total-questions", "{vm.total}" }
                }
                span { class: "quiz-score", "{vm.score_label}" }
                span { class: "{vm.timer_class}", id: "timer-countdown", "{vm.time_remaining}" }
            }
            div { class: "progress-bar",
                div { class: "progress-fill", style: "width: {vm.progress_percent}%" }
            }
            p { class: "question-category", "{vm.category}" }
            h2 { class: "question-text", id: "question-text", "{vm.text}" }
            div { class: "options", id: "options-container",
                for option in vm.options.iter().cloned() {
                    OptionButton { key: "{option.index}", option, on_intent }
                }
            }
            if let Some(feedback) = vm.feedback {
                p { class: "answer-feedback", "{feedback}" }
            }
            if show_next {
                button {
                    class: "btn btn-primary",
                    id: "next-btn",
                    r#type: "button",
                    onclick: move |_| on_intent.call(QuizIntent::Advance),
                    "{next_label}"
                }
            }
        }
    }
}

#[component]
fn OptionButton(option: OptionVm, on_intent: EventHandler<QuizIntent>) -> Element {
    let index = option.index;
    rsx! {
        button {
            class: "{option.class}",
            r#type: "button",
            disabled: option.disabled,
            "data-option": "{index}",
            onclick: move |_| on_intent.call(QuizIntent::Answer(index)),
            span { class: "option-letter", "{option.letter}" }
            span { class: "option-text", "{option.text}" }
        }
    }
}
