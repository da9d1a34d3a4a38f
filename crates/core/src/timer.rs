//! Countdown helpers shared by the well's timing state machines.

use std::time::Duration;

/// Advance a repeat countdown by `elapsed`.
///
/// Returns true once the countdown has reached zero. The countdown stays at zero
/// until the caller reloads it, so a held key fires on the very next frame.
pub fn tick_down(timer: &mut Duration, elapsed: Duration) -> bool {
    *timer = timer.saturating_sub(elapsed);
    timer.is_zero()
}

/// Pausable one-shot countdown, used for lock delay.
///
/// `stop` rewinds to the full duration and pauses, `unpause` lets it run, and
/// `update` reports expiry exactly once per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    duration: Duration,
    remaining: Duration,
    paused: bool,
}

impl Countdown {
    /// A stopped countdown of the given length
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            remaining: duration,
            paused: true,
        }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn remaining(&self) -> Duration {
        self.remaining
    }

    pub fn running(&self) -> bool {
        !self.paused
    }

    pub fn stop(&mut self) {
        self.paused = true;
        self.remaining = self.duration;
    }

    pub fn unpause(&mut self) {
        self.paused = false;
    }

    /// Returns true on the update where the countdown runs out.
    pub fn update(&mut self, elapsed: Duration) -> bool {
        if self.paused {
            return false;
        }
        self.remaining = self.remaining.saturating_sub(elapsed);
        if self.remaining.is_zero() {
            self.stop();
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::frames;

    #[test]
    fn test_tick_down_saturates_and_fires_at_zero() {
        let mut t = frames(3);
        assert!(!tick_down(&mut t, frames(1)));
        assert!(!tick_down(&mut t, frames(1)));
        assert!(tick_down(&mut t, frames(1)));
        assert!(tick_down(&mut t, frames(5)));
        assert_eq!(t, Duration::ZERO);
    }

    #[test]
    fn test_countdown_starts_stopped() {
        let mut c = Countdown::new(frames(2));
        assert!(!c.running());
        assert!(!c.update(frames(10)));
    }

    #[test]
    fn test_countdown_expires_once() {
        let mut c = Countdown::new(frames(2));
        c.unpause();
        assert!(!c.update(frames(1)));
        assert!(c.update(frames(1)));
        assert!(!c.running());
        assert_eq!(c.remaining(), frames(2));
        assert!(!c.update(frames(1)));
    }

    #[test]
    fn test_stop_rewinds() {
        let mut c = Countdown::new(frames(30));
        c.unpause();
        c.update(frames(29));
        c.stop();
        c.unpause();
        assert!(!c.update(frames(29)));
        assert!(c.update(frames(1)));
    }
}
