//! Clock module - the engine's scheduling port
//!
//! The engine decides *how often* it wants to be ticked; the host decides
//! *how* that happens. The engine arms the clock with its current speed and
//! cancels it on game over. Whoever owns the clock calls
//! [`Engine::tick`](crate::engine::Engine::tick) each time the armed period
//! elapses.
//!
//! Only one timer is ever outstanding: arming replaces whatever was armed
//! before. The engine always cancels before it re-arms.

use std::time::{Duration, Instant};

/// Repeating timer contract used by the engine
pub trait Clock {
    /// Arm a repeating timer with the given period, replacing any armed timer
    fn arm(&mut self, period_ms: u32);

    /// Disarm the timer (no-op when nothing is armed)
    fn cancel(&mut self);
}

/// Test double that records what the engine asked for
///
/// Nothing fires on its own: tests step the engine by calling `tick()`
/// directly and inspect the clock to check the requested period.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManualClock {
    armed: Option<u32>,
    arms: u32,
    cancels: u32,
    history: Vec<u32>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently armed period, if any
    pub fn armed(&self) -> Option<u32> {
        self.armed
    }

    pub fn is_armed(&self) -> bool {
        self.armed.is_some()
    }

    /// Number of `arm` calls so far
    pub fn arm_count(&self) -> u32 {
        self.arms
    }

    /// Number of `cancel` calls so far
    pub fn cancel_count(&self) -> u32 {
        self.cancels
    }

    /// Every period ever armed, oldest first
    pub fn history(&self) -> &[u32] {
        &self.history
    }
}

impl Clock for ManualClock {
    fn arm(&mut self, period_ms: u32) {
        self.armed = Some(period_ms);
        self.arms += 1;
        self.history.push(period_ms);
    }

    fn cancel(&mut self) {
        self.armed = None;
        self.cancels += 1;
    }
}

/// Wall-clock timer for a single-threaded poll loop
///
/// The host polls input with [`IntervalClock::time_until_due`] as timeout and
/// then asks [`IntervalClock::take_due`] whether a tick should run.
#[derive(Debug, Clone, Default)]
pub struct IntervalClock {
    period: Option<Duration>,
    deadline: Option<Instant>,
}

impl IntervalClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm relative to an explicit instant (first tick at `now + period`)
    pub fn arm_at(&mut self, period_ms: u32, now: Instant) {
        let period = Duration::from_millis(period_ms as u64);
        self.period = Some(period);
        self.deadline = Some(now + period);
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Armed period in milliseconds
    pub fn period_ms(&self) -> Option<u32> {
        self.period.map(|p| p.as_millis() as u32)
    }

    /// Time left until the next tick, `None` when disarmed
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    /// Consume one due tick.
    ///
    /// Returns true at most once per call. The next deadline is one period
    /// later; if the host fell more than a period behind, the schedule is
    /// re-anchored at `now` instead of firing a burst of catch-up ticks.
    pub fn take_due(&mut self, now: Instant) -> bool {
        let (Some(period), Some(deadline)) = (self.period, self.deadline) else {
            return false;
        };
        if now < deadline {
            return false;
        }

        let mut next = deadline + period;
        if next <= now {
            next = now + period;
        }
        self.deadline = Some(next);
        true
    }
}

impl Clock for IntervalClock {
    fn arm(&mut self, period_ms: u32) {
        self.arm_at(period_ms, Instant::now());
    }

    fn cancel(&mut self) {
        self.period = None;
        self.deadline = None;
    }
}
