mod intent;
mod quiz_vm;
mod time_fmt;

pub use intent::{QuizIntent, intent_for_key};
pub use quiz_vm::{
    OptionVm, QuestionVm, ResultsVm, TimerUrgency, map_question, map_results,
};
pub use time_fmt::format_elapsed;
