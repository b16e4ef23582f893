//! Static question sources.

use thiserror::Error;

use crate::model::{Question, QuestionError, QuizSettings, QuizSetup, SettingsError};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BankError {
    #[error("question {index} is invalid: {source}")]
    Question {
        index: usize,
        #[source]
        source: QuestionError,
    },
    #[error(transparent)]
    Settings(#[from] SettingsError),
}

/// Provider of the questions and settings for a session.
///
/// Read once when a setup is built; the session never goes back to the bank.
pub trait QuestionBank: Send + Sync {
    /// # Errors
    ///
    /// Returns `BankError` if the bank holds an invalid question or invalid settings.
    fn load(&self) -> Result<(Vec<Question>, QuizSettings), BankError>;
}

/// Load a bank and validate it into a `QuizSetup`.
///
/// # Errors
///
/// Returns `crate::Error` if the bank fails to load or does not fit its settings.
pub fn load_setup(bank: &dyn QuestionBank) -> Result<QuizSetup, crate::Error> {
    let (questions, settings) = bank.load()?;
    Ok(QuizSetup::new(questions, settings)?)
}

type RawQuestion = (&'static str, [&'static str; 4], usize, &'static str);

const WEB_DEVELOPMENT: [RawQuestion; 10] = [
    (
        "What does JSON stand for?",
        [
            "JavaScript Object Notation",
            "JavaScript Online Network",
            "Java Standard Object Notation",
            "JavaScript Operational Notation",
        ],
        0,
        "Web Development",
    ),
    (
        "Which HTML element is used for the largest heading?",
        ["<h6>", "<h1>", "<head>", "<heading>"],
        1,
        "HTML",
    ),
    (
        "What does CSS stand for?",
        [
            "Computer Style Sheets",
            "Creative Style Sheets",
            "Cascading Style Sheets",
            "Colorful Style Sheets",
        ],
        2,
        "CSS",
    ),
    (
        "Which JavaScript method is used to add an element to the end of an array?",
        ["push()", "pop()", "shift()", "unshift()"],
        0,
        "JavaScript",
    ),
    (
        "What is the correct way to create a function in JavaScript?",
        [
            "function = myFunction() {}",
            "function myFunction() {}",
            "create myFunction() {}",
            "function:myFunction() {}",
        ],
        1,
        "JavaScript",
    ),
    (
        "Which HTML attribute specifies an alternate text for an image?",
        ["title", "src", "alt", "href"],
        2,
        "HTML",
    ),
    (
        "What does DOM stand for in web development?",
        [
            "Document Object Model",
            "Data Object Management",
            "Dynamic Object Method",
            "Document Operational Mode",
        ],
        0,
        "Web Development",
    ),
    (
        "Which CSS property is used to change the text color?",
        ["font-color", "text-color", "color", "text-style"],
        2,
        "CSS",
    ),
    (
        "What is the correct syntax for creating an array in JavaScript?",
        [
            r#"var colors = "red", "green", "blue""#,
            r#"var colors = (1:"red", 2:"green", 3:"blue")"#,
            r#"var colors = ["red", "green", "blue"]"#,
            r#"var colors = 1 = ("red"), 2 = ("green"), 3 = ("blue")"#,
        ],
        2,
        "JavaScript",
    ),
    (
        "Which method is used to remove the last element from an array in JavaScript?",
        ["pop()", "push()", "shift()", "splice()"],
        0,
        "JavaScript",
    ),
];

/// The compiled-in web development quiz.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinQuestionBank {
    settings: Option<QuizSettings>,
}

impl BuiltinQuestionBank {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the bank's default settings.
    #[must_use]
    pub fn with_settings(mut self, settings: QuizSettings) -> Self {
        self.settings = Some(settings);
        self
    }
}

impl QuestionBank for BuiltinQuestionBank {
    fn load(&self) -> Result<(Vec<Question>, QuizSettings), BankError> {
        let questions = WEB_DEVELOPMENT
            .iter()
            .enumerate()
            .map(|(index, (text, options, correct, category))| {
                let options = options.iter().map(|option| (*option).to_string()).collect();
                Question::new(*text, options, *correct, *category)
                    .map_err(|source| BankError::Question { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok((questions, self.settings.unwrap_or_default()))
    }
}
