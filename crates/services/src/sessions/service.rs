use std::fmt;

use chrono::{DateTime, Utc};
use log::{info, trace, warn};
use quiz_core::Clock;
use quiz_core::model::{AnswerRecord, Question, QuizResults, QuizSetup};

use super::observer::SessionObserver;
use super::phase::{Operation, Resolution, SessionPhase, TickOutcome};
use super::progress::SessionProgress;
use super::snapshot::{OptionFeedback, QuestionView, QuizSnapshot};
use super::timer::{TickScheduler, TimerToken};
use crate::error::QuizError;

//
// ─── TIMER STATE ───────────────────────────────────────────────────────────────
//

/// Generation counter plus the token that is currently allowed to tick.
#[derive(Debug, Default)]
struct Countdown {
    generation: u64,
    live: Option<TimerToken>,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// Timed multiple-choice quiz session.
///
/// Steps through the setup's questions in order. Each question is resolved exactly once,
/// either by `answer` or by the countdown reaching zero, and only then can the session
/// `advance`. All mutation goes through these methods; every successful transition is
/// pushed to the registered observers as a `QuizSnapshot`.
///
/// `start` is only valid from `Idle` or `Completed`. Use `restart` to abandon a
/// session that is in progress.
pub struct QuizSession {
    setup: QuizSetup,
    clock: Clock,
    scheduler: Box<dyn TickScheduler>,
    observers: Vec<Box<dyn SessionObserver>>,

    phase: SessionPhase,
    current: usize,
    score: usize,
    time_remaining: u32,
    selected: Option<usize>,
    log: Vec<AnswerRecord>,
    countdown: Countdown,

    started_at: Option<DateTime<Utc>>,
    results: Option<QuizResults>,
}

impl QuizSession {
    #[must_use]
    pub fn new(setup: QuizSetup, scheduler: Box<dyn TickScheduler>) -> Self {
        let time_remaining = setup.settings().time_per_question_secs();
        Self {
            setup,
            clock: Clock::default(),
            scheduler,
            observers: Vec::new(),
            phase: SessionPhase::Idle,
            current: 0,
            score: 0,
            time_remaining,
            selected: None,
            log: Vec::new(),
            countdown: Countdown::default(),
            started_at: None,
            results: None,
        }
    }

    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    #[must_use]
    pub fn with_observer(mut self, observer: impl SessionObserver + 'static) -> Self {
        self.subscribe(observer);
        self
    }

    pub fn subscribe(&mut self, observer: impl SessionObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    //
    // ─── ACCESSORS ─────────────────────────────────────────────────────────────
    //

    #[must_use]
    pub fn setup(&self) -> &QuizSetup {
        &self.setup
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.setup.total_questions()
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    #[must_use]
    pub fn is_answered(&self) -> bool {
        self.phase == SessionPhase::Answered
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.phase == SessionPhase::Completed
    }

    #[must_use]
    pub fn selected_answer(&self) -> Option<usize> {
        self.selected
    }

    #[must_use]
    pub fn answer_log(&self) -> &[AnswerRecord] {
        &self.log
    }

    /// The live countdown token, if a countdown is running.
    #[must_use]
    pub fn timer_token(&self) -> Option<TimerToken> {
        self.countdown.live
    }

    /// The question on screen. `None` before start and after completion.
    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        if self.phase.is_in_progress() {
            self.setup.question(self.current)
        } else {
            None
        }
    }

    /// Final results; only available once the session is completed.
    #[must_use]
    pub fn results(&self) -> Option<&QuizResults> {
        self.results.as_ref()
    }

    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        let total = self.total_questions();
        SessionProgress {
            total,
            resolved: self.log.len(),
            remaining: total.saturating_sub(self.log.len()),
            is_complete: self.is_complete(),
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> QuizSnapshot {
        let question = self.current_question();
        let answered = self.is_answered();
        let option_feedback = match (question, answered) {
            (Some(question), true) => Some(OptionFeedback::for_options(
                question.option_count(),
                question.correct_index(),
                self.selected,
            )),
            _ => None,
        };
        let question_number = match self.phase {
            SessionPhase::Idle => 0,
            SessionPhase::Unanswered | SessionPhase::Answered => self.current + 1,
            SessionPhase::Completed => self.total_questions(),
        };

        QuizSnapshot {
            phase: self.phase,
            question_number,
            total_questions: self.total_questions(),
            question: question.map(QuestionView::from),
            time_remaining: self.time_remaining,
            time_limit: self.setup.settings().time_per_question_secs(),
            answered,
            selected_option: self.selected,
            option_feedback,
            score: self.score,
            progress: self.progress(),
            results: self.results.clone(),
        }
    }

    //
    // ─── TRANSITIONS ───────────────────────────────────────────────────────────
    //

    /// Begin a fresh run at the first question and arm the countdown.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InvalidOperation` if a question is already in progress.
    pub fn start(&mut self) -> Result<(), QuizError> {
        if self.phase.is_in_progress() {
            return Err(self.reject(Operation::Start));
        }

        self.reset();
        self.started_at = Some(self.clock.now());
        self.phase = SessionPhase::Unanswered;
        self.arm_timer();
        info!(
            "quiz started: {} questions, {}s each",
            self.total_questions(),
            self.setup.settings().time_per_question_secs()
        );
        self.notify();
        Ok(())
    }

    /// Answer the current question. The first resolution wins.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InvalidOperation` if no question is in progress.
    /// Returns `QuizError::OutOfRange` if `option` does not exist on the current question.
    pub fn answer(&mut self, option: usize) -> Result<Resolution, QuizError> {
        let question = self.in_progress_question(Operation::Answer)?;
        let len = question.option_count();
        if option >= len {
            warn!("rejected answer {option}: question has {len} options");
            return Err(QuizError::OutOfRange { index: option, len });
        }
        if self.phase == SessionPhase::Answered {
            trace!("answer {option} ignored: question {} already resolved", self.current);
            return Ok(Resolution::AlreadyResolved);
        }

        let record = AnswerRecord::answered(self.current, question, option, self.time_remaining);
        self.resolve(record);
        Ok(Resolution::Recorded(record))
    }

    /// Resolve the current question as unanswered. The first resolution wins.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InvalidOperation` if no question is in progress.
    pub fn timeout(&mut self) -> Result<Resolution, QuizError> {
        let question = self.in_progress_question(Operation::Timeout)?;
        if self.phase == SessionPhase::Answered {
            trace!("timeout ignored: question {} already resolved", self.current);
            return Ok(Resolution::AlreadyResolved);
        }

        let record = AnswerRecord::timed_out(self.current, question);
        self.time_remaining = 0;
        info!("question {} timed out", self.current + 1);
        self.resolve(record);
        Ok(Resolution::Recorded(record))
    }

    /// Move past a resolved question, completing the session after the last one.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InvalidOperation` unless the current question is resolved.
    pub fn advance(&mut self) -> Result<(), QuizError> {
        if self.phase != SessionPhase::Answered {
            return Err(self.reject(Operation::Advance));
        }

        self.current += 1;
        self.selected = None;

        if self.current >= self.total_questions() {
            self.complete();
        } else {
            self.phase = SessionPhase::Unanswered;
            self.time_remaining = self.setup.settings().time_per_question_secs();
            self.arm_timer();
        }

        self.notify();
        Ok(())
    }

    /// Abandon whatever is going on and return to a never-started session.
    pub fn restart(&mut self) {
        self.cancel_timer();
        self.reset();
        self.phase = SessionPhase::Idle;
        info!("quiz reset");
        self.notify();
    }

    /// One second elapsed on the live countdown.
    pub fn tick(&mut self) -> TickOutcome {
        match self.countdown.live {
            Some(token) => self.handle_tick(token),
            None => TickOutcome::Ignored,
        }
    }

    /// One second elapsed on the countdown identified by `token`.
    ///
    /// Ticks from cancelled countdowns, or delivered outside an unanswered question,
    /// are ignored.
    pub fn handle_tick(&mut self, token: TimerToken) -> TickOutcome {
        if self.phase != SessionPhase::Unanswered || self.countdown.live != Some(token) {
            trace!(
                "stale tick {} ignored (live={:?}, phase={})",
                token.generation(),
                self.countdown.live.map(|live| live.generation()),
                self.phase
            );
            return TickOutcome::Ignored;
        }

        self.time_remaining = self.time_remaining.saturating_sub(1);
        if self.time_remaining > 0 {
            let remaining = self.time_remaining;
            self.notify();
            return TickOutcome::Counted { remaining };
        }

        match self.timeout() {
            Ok(Resolution::Recorded(record)) => TickOutcome::TimedOut(record),
            Ok(Resolution::AlreadyResolved) | Err(_) => TickOutcome::Ignored,
        }
    }

    //
    // ─── INTERNALS ─────────────────────────────────────────────────────────────
    //

    fn in_progress_question(&self, operation: Operation) -> Result<&Question, QuizError> {
        if !self.phase.is_in_progress() {
            return Err(self.reject(operation));
        }
        self.setup
            .question(self.current)
            .ok_or(QuizError::InvalidOperation {
                operation,
                phase: self.phase,
            })
    }

    fn reject(&self, operation: Operation) -> QuizError {
        warn!("cannot {operation} while the session is {}", self.phase);
        QuizError::InvalidOperation {
            operation,
            phase: self.phase,
        }
    }

    fn resolve(&mut self, record: AnswerRecord) {
        self.cancel_timer();
        if record.is_correct {
            self.score += 1;
        }
        self.selected = record.selected_option;
        self.log.push(record);
        self.phase = SessionPhase::Answered;
        self.notify();
    }

    fn complete(&mut self) {
        let completed_at = self.clock.now();
        let started_at = self.started_at.unwrap_or(completed_at);
        let settings = self.setup.settings();
        self.results = Some(QuizResults::from_log(
            &self.log,
            self.total_questions(),
            settings.passing_score_percent(),
            started_at,
            completed_at,
        ));
        self.phase = SessionPhase::Completed;
    }

    fn reset(&mut self) {
        self.current = 0;
        self.score = 0;
        self.selected = None;
        self.log.clear();
        self.time_remaining = self.setup.settings().time_per_question_secs();
        self.started_at = None;
        self.results = None;
    }

    fn arm_timer(&mut self) {
        self.cancel_timer();
        self.countdown.generation += 1;
        let token = TimerToken::new(self.countdown.generation);
        self.countdown.live = Some(token);
        self.scheduler.arm(token);
    }

    fn cancel_timer(&mut self) {
        if let Some(token) = self.countdown.live.take() {
            self.scheduler.cancel(token);
        }
    }

    fn notify(&mut self) {
        if self.observers.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        for observer in &mut self.observers {
            observer.on_transition(&snapshot);
        }
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("phase", &self.phase)
            .field("current", &self.current)
            .field("total", &self.setup.total_questions())
            .field("score", &self.score)
            .field("time_remaining", &self.time_remaining)
            .field("log_len", &self.log.len())
            .field("timer", &self.countdown.live)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
