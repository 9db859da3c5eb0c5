//! Blinking "GAME OVER" overlay timing.
//!
//! Pure timing, driven by a caller-supplied monotonic millisecond clock. The
//! overlay shows immediately, first disappears after two periods, then toggles
//! every period until the blink window closes and it stays on.

use crate::types::{GAME_OVER_BLINK_MS, GAME_OVER_BLINK_PERIOD_MS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOverBlink {
    duration_ms: u64,
    period_ms: u64,
    started_ms: Option<u64>,
}

impl Default for GameOverBlink {
    fn default() -> Self {
        Self::new(GAME_OVER_BLINK_MS, GAME_OVER_BLINK_PERIOD_MS)
    }
}

impl GameOverBlink {
    pub fn new(duration_ms: u64, period_ms: u64) -> Self {
        Self {
            duration_ms,
            period_ms: period_ms.max(1),
            started_ms: None,
        }
    }

    /// Begin blinking (game over)
    pub fn trigger(&mut self, now_ms: u64) {
        self.started_ms = Some(now_ms);
    }

    /// Stop blinking (new game)
    pub fn clear(&mut self) {
        self.started_ms = None;
    }

    /// Whether the blink window is still open (frames must keep coming)
    pub fn is_active(&self, now_ms: u64) -> bool {
        self.started_ms
            .is_some_and(|start| now_ms.saturating_sub(start) < self.duration_ms)
    }

    /// Whether the overlay should be drawn at `now_ms`
    pub fn visible(&self, now_ms: u64) -> bool {
        let Some(start) = self.started_ms else {
            return true;
        };
        let elapsed = now_ms.saturating_sub(start);
        if elapsed >= self.duration_ms {
            return true;
        }
        let toggles = elapsed / self.period_ms;
        toggles == 0 || toggles % 2 == 1
    }

    /// Milliseconds until the visibility can next change
    pub fn next_change_in(&self, now_ms: u64) -> Option<u64> {
        if !self.is_active(now_ms) {
            return None;
        }
        let start = self.started_ms?;
        let elapsed = now_ms.saturating_sub(start);
        Some(self.period_ms - elapsed % self.period_ms)
    }
}
