use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder, WindowCloseBehaviour};
use log::info;
use quiz_core::BuiltinQuestionBank;
use quiz_core::model::QuizSettings;
use services::{Clock, QuizService};
use ui::{App, UiApp, build_app_context};

const QUIZ_TITLE: &str = "Web Development Quiz";

#[derive(Debug, PartialEq, Eq)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidNumber { flag: &'static str, raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidNumber { flag, raw } => write!(f, "invalid {flag} value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn parse_number<T: std::str::FromStr>(raw: String, flag: &'static str) -> Result<T, ArgsError> {
    raw.trim()
        .parse()
        .map_err(|_| ArgsError::InvalidNumber { flag, raw })
}

struct DesktopApp {
    start_on_launch: bool,
    quiz_service: Arc<QuizService>,
}

impl UiApp for DesktopApp {
    fn quiz_title(&self) -> String {
        QUIZ_TITLE.to_string()
    }

    fn start_on_launch(&self) -> bool {
        self.start_on_launch
    }

    fn quiz_service(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz_service)
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
struct Args {
    time_per_question: Option<u32>,
    total_questions: Option<usize>,
    passing_score: Option<u32>,
    autostart: bool,
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Run(Args),
    Help,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!(
        "  cargo run -p app -- [--time-per-question <secs>] [--questions <n>] [--passing-score <percent>] [--autostart]"
    );
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --time-per-question 30");
    eprintln!("  --questions 10");
    eprintln!("  --passing-score 70");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_TIME_PER_QUESTION, QUIZ_TOTAL_QUESTIONS, QUIZ_PASSING_SCORE, QUIZ_AUTOSTART");
    eprintln!("  RUST_LOG (e.g. RUST_LOG=services=debug)");
}

impl Args {
    /// Environment values are read first; flags override them.
    fn parse(
        args: &mut impl Iterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Command, ArgsError> {
        let mut parsed = Self {
            time_per_question: env("QUIZ_TIME_PER_QUESTION")
                .map(|raw| parse_number(raw, "QUIZ_TIME_PER_QUESTION"))
                .transpose()?,
            total_questions: env("QUIZ_TOTAL_QUESTIONS")
                .map(|raw| parse_number(raw, "QUIZ_TOTAL_QUESTIONS"))
                .transpose()?,
            passing_score: env("QUIZ_PASSING_SCORE")
                .map(|raw| parse_number(raw, "QUIZ_PASSING_SCORE"))
                .transpose()?,
            autostart: env("QUIZ_AUTOSTART").is_some_and(|raw| is_truthy(&raw)),
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--time-per-question" => {
                    let value = require_value(args, "--time-per-question")?;
                    parsed.time_per_question = Some(parse_number(value, "--time-per-question")?);
                }
                "--questions" => {
                    let value = require_value(args, "--questions")?;
                    parsed.total_questions = Some(parse_number(value, "--questions")?);
                }
                "--passing-score" => {
                    let value = require_value(args, "--passing-score")?;
                    parsed.passing_score = Some(parse_number(value, "--passing-score")?);
                }
                "--autostart" => parsed.autostart = true,
                "--help" | "-h" => return Ok(Command::Help),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Command::Run(parsed))
    }

    fn settings(&self) -> Result<QuizSettings, quiz_core::model::SettingsError> {
        QuizSettings::default().with_overrides(
            self.time_per_question,
            self.total_questions,
            self.passing_score,
        )
    }
}

fn is_truthy(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let command = Args::parse(&mut argv, |key| std::env::var(key).ok()).map_err(|e| {
        print_usage();
        e
    })?;
    let args = match command {
        Command::Help => {
            print_usage();
            return Ok(());
        }
        Command::Run(args) => args,
    };

    let settings = args.settings()?;
    let bank = BuiltinQuestionBank::new().with_settings(settings);
    let quiz_service = QuizService::from_bank(Clock::system(), &bank)?;
    info!(
        "launching quiz: {} questions, {}s each, pass at {}%",
        settings.total_questions(),
        settings.time_per_question_secs(),
        settings.passing_score_percent()
    );

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        start_on_launch: args.autostart,
        quiz_service: Arc::new(quiz_service),
    });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    // Closing only hides the window; `WindowGuard` decides whether it really closes.
    let desktop_cfg = DesktopConfig::new()
        .with_window(
            WindowBuilder::new()
                .with_title(QUIZ_TITLE)
                .with_always_on_top(false),
        )
        .with_disable_context_menu(true)
        .with_close_behaviour(WindowCloseBehaviour::WindowHides);

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str], env: &[(&str, &str)]) -> Result<Command, ArgsError> {
        let mut iter = args.iter().map(ToString::to_string);
        Args::parse(&mut iter, |key| {
            env.iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| (*value).to_string())
        })
    }

    #[test]
    fn no_args_uses_defaults() {
        let Command::Run(args) = parse(&[], &[]).unwrap() else {
            panic!("expected run");
        };
        assert_eq!(args, Args::default());
        assert_eq!(args.settings().unwrap(), QuizSettings::default());
    }

    #[test]
    fn flags_override_environment() {
        let Command::Run(args) = parse(
            &["--time-per-question", "15", "--passing-score", "80"],
            &[("QUIZ_TIME_PER_QUESTION", "45"), ("QUIZ_TOTAL_QUESTIONS", "5")],
        )
        .unwrap() else {
            panic!("expected run");
        };
        assert_eq!(args.time_per_question, Some(15));
        assert_eq!(args.total_questions, Some(5));
        assert_eq!(args.passing_score, Some(80));
        assert!(!args.autostart);
    }

    #[test]
    fn autostart_from_flag_or_env() {
        let Command::Run(flag) = parse(&["--autostart"], &[]).unwrap() else {
            panic!("expected run");
        };
        assert!(flag.autostart);

        let Command::Run(env) = parse(&[], &[("QUIZ_AUTOSTART", "yes")]).unwrap() else {
            panic!("expected run");
        };
        assert!(env.autostart);

        let Command::Run(off) = parse(&[], &[("QUIZ_AUTOSTART", "0")]).unwrap() else {
            panic!("expected run");
        };
        assert!(!off.autostart);
    }

    #[test]
    fn help_short_circuits() {
        assert_eq!(parse(&["--help", "--bogus"], &[]).unwrap(), Command::Help);
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(
            parse(&["--questions"], &[]).unwrap_err(),
            ArgsError::MissingValue { flag: "--questions" }
        );
        assert_eq!(
            parse(&["--questions", "ten"], &[]).unwrap_err(),
            ArgsError::InvalidNumber {
                flag: "--questions",
                raw: "ten".into()
            }
        );
        assert_eq!(
            parse(&["--verbose"], &[]).unwrap_err(),
            ArgsError::UnknownArg("--verbose".into())
        );
        assert!(matches!(
            parse(&[], &[("QUIZ_PASSING_SCORE", "high")]),
            Err(ArgsError::InvalidNumber { .. })
        ));
    }

    #[test]
    fn out_of_range_settings_are_rejected_after_parsing() {
        let Command::Run(args) = parse(&["--passing-score", "150"], &[]).unwrap() else {
            panic!("expected run");
        };
        assert!(args.settings().is_err());
    }
}
