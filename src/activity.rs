//! Motion activity latch
//!
//! Level-triggered: every sample that reads "motion present" refreshes the
//! activity timestamp, so a sensor held high keeps the light on for as long
//! as it stays high plus one keep-alive window. There is no debounce and no
//! edge detection.

use embassy_time::{Duration, Instant};

/// Last confirmed activity (motion, boot or wake)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivityLatch {
    last_activity: Instant,
}

impl ActivityLatch {
    /// Create a latch whose last activity is `now`
    pub const fn new(now: Instant) -> Self {
        Self { last_activity: now }
    }

    /// Feed one motion reading taken at `now`
    ///
    /// Returns `true` if the reading refreshed the timestamp.
    pub fn sample(&mut self, now: Instant, motion: bool) -> bool {
        if motion {
            self.touch(now);
        }
        motion
    }

    /// Record activity at `now`
    ///
    /// The timestamp never moves backward; an older `now` is ignored.
    pub fn touch(&mut self, now: Instant) {
        self.last_activity = self.last_activity.max(now);
    }

    pub const fn last_activity(&self) -> Instant {
        self.last_activity
    }

    /// Time elapsed since the last activity
    pub fn idle_for(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.last_activity)
    }

    /// Whether the keep-alive window has run out at `now`
    ///
    /// The boundary is inclusive: idle time equal to the window counts as
    /// expired.
    pub fn is_expired(&self, now: Instant, window: Duration) -> bool {
        self.idle_for(now) >= window
    }
}
