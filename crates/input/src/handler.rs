//! Held-key tracking for terminal environments.
//!
//! The well wants press and release edges. Terminals with the keyboard
//! enhancement protocol report both; plain terminals only send presses (repeated
//! while the key is held). For those, a key counts as released once no press has
//! been seen for the release timeout.

use std::time::{Duration, Instant};

use arrayvec::ArrayVec;
use crossterm::event::{KeyEvent, KeyEventKind};

use crate::map::map_key;
use crate::types::{InputEvent, InputType};

// Long enough to bridge the gap between OS auto-repeat presses.
const DEFAULT_KEY_RELEASE_TIMEOUT: Duration = Duration::from_millis(150);

/// Turns terminal key events into well press/release events.
#[derive(Debug, Clone)]
pub struct KeyTracker {
    /// Last time each input was seen pressed, `None` while released
    last_seen: [Option<Instant>; InputType::COUNT],
    release_timeout: Duration,
    /// Set once the terminal has sent a real release; timeouts are off from then on
    reports_releases: bool,
}

impl KeyTracker {
    pub fn new() -> Self {
        Self {
            last_seen: [None; InputType::COUNT],
            release_timeout: DEFAULT_KEY_RELEASE_TIMEOUT,
            reports_releases: false,
        }
    }

    pub fn with_release_timeout(mut self, timeout: Duration) -> Self {
        self.release_timeout = timeout;
        self
    }

    pub fn release_timeout(&self) -> Duration {
        self.release_timeout
    }

    pub fn reports_releases(&self) -> bool {
        self.reports_releases
    }

    pub fn is_held(&self, input: InputType) -> bool {
        self.last_seen[input.index()].is_some()
    }

    /// Feed one terminal key event. Returns the edge it produced, if any.
    pub fn handle_key_event(&mut self, key: KeyEvent, now: Instant) -> Option<InputEvent> {
        let input = map_key(key.code)?;
        let slot = &mut self.last_seen[input.index()];

        match key.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => {
                let was_held = slot.replace(now).is_some();
                (!was_held).then(|| InputEvent::press(input))
            }
            KeyEventKind::Release => {
                self.reports_releases = true;
                slot.take().map(|_| InputEvent::release(input))
            }
        }
    }

    /// Release keys whose presses stopped arriving.
    pub fn expire(&mut self, now: Instant) -> ArrayVec<InputEvent, { InputType::COUNT }> {
        let mut released = ArrayVec::new();
        if self.reports_releases {
            return released;
        }

        for input in InputType::ALL {
            let slot = &mut self.last_seen[input.index()];
            let stale = slot.is_some_and(|seen| now.saturating_duration_since(seen) > self.release_timeout);
            if stale {
                *slot = None;
                released.push(InputEvent::release(input));
            }
        }
        released
    }

    /// Release everything that is held
    pub fn reset(&mut self) -> ArrayVec<InputEvent, { InputType::COUNT }> {
        let mut released = ArrayVec::new();
        for input in InputType::ALL {
            if self.last_seen[input.index()].take().is_some() {
                released.push(InputEvent::release(input));
            }
        }
        released
    }
}

impl Default for KeyTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn key(code: KeyCode, kind: KeyEventKind) -> KeyEvent {
        KeyEvent::new_with_kind(code, KeyModifiers::NONE, kind)
    }

    #[test]
    fn test_press_emits_once_while_held() {
        let mut kt = KeyTracker::new();
        let t0 = Instant::now();

        assert_eq!(
            kt.handle_key_event(key(KeyCode::Left, KeyEventKind::Press), t0),
            Some(InputEvent::press(InputType::Left))
        );
        // OS auto-repeat shows up as more presses
        assert_eq!(
            kt.handle_key_event(key(KeyCode::Left, KeyEventKind::Press), t0),
            None
        );
        assert_eq!(
            kt.handle_key_event(key(KeyCode::Left, KeyEventKind::Repeat), t0),
            None
        );
        assert!(kt.is_held(InputType::Left));
    }

    #[test]
    fn test_auto_release_after_timeout_without_release_events() {
        let mut kt = KeyTracker::new().with_release_timeout(Duration::from_millis(50));
        let t0 = Instant::now();

        kt.handle_key_event(key(KeyCode::Down, KeyEventKind::Press), t0);
        assert!(kt.expire(t0 + Duration::from_millis(50)).is_empty());

        let released = kt.expire(t0 + Duration::from_millis(51));
        assert_eq!(released.as_slice(), &[InputEvent::release(InputType::Down)]);
        assert!(!kt.is_held(InputType::Down));
    }

    #[test]
    fn test_repeats_keep_key_alive() {
        let mut kt = KeyTracker::new().with_release_timeout(Duration::from_millis(50));
        let t0 = Instant::now();

        kt.handle_key_event(key(KeyCode::Right, KeyEventKind::Press), t0);
        let t1 = t0 + Duration::from_millis(40);
        kt.handle_key_event(key(KeyCode::Right, KeyEventKind::Press), t1);
        assert!(kt.expire(t0 + Duration::from_millis(80)).is_empty());
    }

    #[test]
    fn test_real_release_disables_timeout() {
        let mut kt = KeyTracker::new().with_release_timeout(Duration::from_millis(50));
        let t0 = Instant::now();

        kt.handle_key_event(key(KeyCode::Left, KeyEventKind::Press), t0);
        assert_eq!(
            kt.handle_key_event(key(KeyCode::Left, KeyEventKind::Release), t0),
            Some(InputEvent::release(InputType::Left))
        );
        assert!(kt.reports_releases());

        kt.handle_key_event(key(KeyCode::Left, KeyEventKind::Press), t0);
        assert!(kt.expire(t0 + Duration::from_secs(5)).is_empty());
        assert!(kt.is_held(InputType::Left));
    }

    #[test]
    fn test_unmapped_keys_are_ignored() {
        let mut kt = KeyTracker::new();
        let now = Instant::now();
        assert_eq!(
            kt.handle_key_event(key(KeyCode::Char('p'), KeyEventKind::Press), now),
            None
        );
        assert!(kt.reset().is_empty());
    }

    #[test]
    fn test_reset_releases_held_keys() {
        let mut kt = KeyTracker::new();
        let now = Instant::now();
        kt.handle_key_event(key(KeyCode::Left, KeyEventKind::Press), now);
        kt.handle_key_event(key(KeyCode::Char(' '), KeyEventKind::Press), now);

        let released = kt.reset();
        assert_eq!(
            released.as_slice(),
            &[
                InputEvent::release(InputType::Left),
                InputEvent::release(InputType::HardDrop)
            ]
        );
    }
}
