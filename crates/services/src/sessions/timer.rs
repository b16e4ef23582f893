use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Instant, interval_at};

/// Identity of one armed countdown.
///
/// A session mints a fresh token every time it arms its timer. Ticks carry the token
/// they were scheduled with, so a tick from a cancelled countdown never matches the
/// live one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerToken(u64);

impl TimerToken {
    #[must_use]
    pub fn new(generation: u64) -> Self {
        Self(generation)
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.0
    }
}

/// Scheduling capability a session uses to drive its countdown.
///
/// Implementations deliver `token` back to the session (via `QuizSession::handle_tick`)
/// once per elapsed second until cancelled. Delivery must happen on the same event
/// loop that forwards user input.
pub trait TickScheduler {
    fn arm(&mut self, token: TimerToken);
    fn cancel(&mut self, token: TimerToken);
}

//
// ─── MANUAL SCHEDULER ──────────────────────────────────────────────────────────
//

#[derive(Debug, Default)]
struct ManualTicks {
    armed: Vec<TimerToken>,
    cancelled: Vec<TimerToken>,
    live: Option<TimerToken>,
}

/// Scheduler that never fires on its own; callers drive ticks by hand.
///
/// Clones share state, so a test can keep one handle while the session owns another.
#[derive(Debug, Clone, Default)]
pub struct ManualTickScheduler {
    state: Arc<Mutex<ManualTicks>>,
}

impl ManualTickScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The token currently armed and not cancelled, if any.
    #[must_use]
    pub fn live_token(&self) -> Option<TimerToken> {
        self.with_state(|state| state.live)
    }

    #[must_use]
    pub fn armed(&self) -> Vec<TimerToken> {
        self.with_state(|state| state.armed.clone())
    }

    #[must_use]
    pub fn cancelled(&self) -> Vec<TimerToken> {
        self.with_state(|state| state.cancelled.clone())
    }

    fn with_state<T>(&self, f: impl FnOnce(&mut ManualTicks) -> T) -> T {
        let mut guard = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }
}

impl TickScheduler for ManualTickScheduler {
    fn arm(&mut self, token: TimerToken) {
        self.with_state(|state| {
            state.armed.push(token);
            state.live = Some(token);
        });
    }

    fn cancel(&mut self, token: TimerToken) {
        self.with_state(|state| {
            state.cancelled.push(token);
            if state.live == Some(token) {
                state.live = None;
            }
        });
    }
}

//
// ─── TOKIO SCHEDULER ───────────────────────────────────────────────────────────
//

/// Receiving half of a `TokioTickScheduler`.
///
/// Cloneable so UI hooks can hold it; only one task should drain it at a time.
#[derive(Debug, Clone)]
pub struct TickReceiver {
    inner: Arc<tokio::sync::Mutex<mpsc::UnboundedReceiver<TimerToken>>>,
}

impl TickReceiver {
    /// Wait for the next tick. Returns `None` once every scheduler handle is gone.
    pub async fn recv(&self) -> Option<TimerToken> {
        self.inner.lock().await.recv().await
    }
}

/// Scheduler backed by a tokio interval task per armed token.
///
/// Arming aborts the previous task. Must be used from inside a tokio runtime.
#[derive(Debug, Clone)]
pub struct TokioTickScheduler {
    period: Duration,
    sender: mpsc::UnboundedSender<TimerToken>,
    running: Arc<Mutex<Option<(TimerToken, JoinHandle<()>)>>>,
}

impl TokioTickScheduler {
    /// One-second scheduler plus the receiver its ticks arrive on.
    #[must_use]
    pub fn channel() -> (Self, TickReceiver) {
        Self::with_period(Duration::from_secs(1))
    }

    #[must_use]
    pub fn with_period(period: Duration) -> (Self, TickReceiver) {
        let (sender, receiver) = mpsc::unbounded_channel();
        let scheduler = Self {
            period,
            sender,
            running: Arc::new(Mutex::new(None)),
        };
        let receiver = TickReceiver {
            inner: Arc::new(tokio::sync::Mutex::new(receiver)),
        };
        (scheduler, receiver)
    }
}

impl TickScheduler for TokioTickScheduler {
    fn arm(&mut self, token: TimerToken) {
        let sender = self.sender.clone();
        let period = self.period;
        let handle = tokio::spawn(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            loop {
                interval.tick().await;
                if sender.send(token).is_err() {
                    break;
                }
            }
        });

        let previous = self
            .running
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .replace((token, handle));
        if let Some((_, task)) = previous {
            task.abort();
        }
    }

    fn cancel(&mut self, token: TimerToken) {
        let mut running = self.running.lock().unwrap_or_else(PoisonError::into_inner);
        if running.as_ref().is_some_and(|(live, _)| *live == token) {
            if let Some((_, task)) = running.take() {
                task.abort();
            }
        }
    }
}
