use std::time::{Duration, Instant};

/// Fixed-rate frame limiter.
///
/// A frame is due `budget` after the previous frame *started*. The schedule is
/// re-based on the actual start time of every frame, so an overrun is never paid
/// back: the next frame simply starts immediately and no frames are skipped.
#[derive(Debug, Clone)]
pub struct FrameLimiter {
    budget: Duration,
    last_start: Option<Instant>,
}

impl FrameLimiter {
    /// Creates a limiter targeting `fps` frames per second.
    ///
    /// `fps == 0` disables limiting (every frame is immediately due).
    pub fn new(fps: u32) -> Self {
        let budget = if fps == 0 {
            Duration::ZERO
        } else {
            Duration::from_secs(1) / fps
        };
        Self::with_budget(budget)
    }

    /// Creates a limiter with an explicit per-frame budget.
    pub fn with_budget(budget: Duration) -> Self {
        Self {
            budget,
            last_start: None,
        }
    }

    /// Per-frame time budget.
    pub fn budget(&self) -> Duration {
        self.budget
    }

    /// Instant at which the next frame becomes due, `None` before the first frame.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.last_start.map(|t| t + self.budget)
    }

    /// Time left until the next frame is due (zero when already due).
    pub fn remaining(&self, now: Instant) -> Duration {
        self.next_deadline()
            .map_or(Duration::ZERO, |d| d.saturating_duration_since(now))
    }

    /// Whether a frame should start at `now`.
    pub fn is_due(&self, now: Instant) -> bool {
        self.remaining(now).is_zero()
    }

    /// Records that a frame started at `now`.
    pub fn begin_frame(&mut self, now: Instant) {
        self.last_start = Some(now);
    }
}
