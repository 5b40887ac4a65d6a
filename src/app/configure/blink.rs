use std::time::{Duration, Instant};

/// One-shot cursor blink deadline. Firing disarms it; whoever handles the
/// tick decides whether to arm it again.
#[derive(Debug, Clone)]
pub(crate) struct BlinkTimer {
    interval: Duration,
    deadline: Option<Instant>,
}

impl BlinkTimer {
    pub(crate) fn new(interval: Duration) -> Self {
        Self {
            interval,
            deadline: None,
        }
    }

    pub(crate) fn arm(&mut self, now: Instant) {
        self.deadline = Some(now + self.interval);
    }

    pub(crate) fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Disarms and returns `true` once the deadline has passed.
    pub(crate) fn take_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if deadline <= now => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
