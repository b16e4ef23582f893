mod answer;
mod question;
mod results;
mod settings;
mod setup;

pub use answer::AnswerRecord;
pub use question::{OPTION_COUNT, Question, QuestionError};
pub use results::{
    PerformanceBand, PerformanceTable, PerformanceTier, QuizResults, score_percentage,
};
pub use settings::{QuizSettings, SettingsError};
pub use setup::{QuizSetup, SetupError};
