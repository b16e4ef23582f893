use dioxus::prelude::*;

use crate::vm::QuizIntent;

#[component]
pub fn StartScreen(
    title: String,
    total_questions: usize,
    time_per_question: u32,
    passing_score: u32,
    on_intent: EventHandler<QuizIntent>,
) -> Element {
    rsx! {
        section { class: "screen start-screen", id: "start-screen",
            h1 { class: "start-screen__title", "{title}" }
            ul { class: "start-screen__rules",
                li { "{total_questions} questions" }
                li { "{time_per_question} seconds per question" }
                li { "{passing_score}% to pass" }
                li { "Answer with 1-4 or A-D, press Enter for the next question" }
            }
            button {
                class: "btn btn-primary",
                id: "start-btn",
                r#type: "button",
                onclick: move |_| on_intent.call(QuizIntent::Start),
                "Start Quiz"
            }
        }
    }
}
