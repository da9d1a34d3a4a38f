//! Tunables of the well's timing and locking policies.
//!
//! Defaults follow the 60 Hz frame table in [`crate::types`]. Durations are
//! (de)serialized as milliseconds, and missing fields fall back to the defaults,
//! so a config file only needs the values it changes:
//!
//! ```
//! use tetris_well_core::WellConfig;
//!
//! let config = WellConfig::from_json(r#"{ "lock_infinity": false }"#).unwrap();
//! assert!(!config.lock_infinity);
//! assert_eq!(config.das_turbo, WellConfig::default().das_turbo);
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::types::{
    frames, DAS_NORMAL_FRAMES, DAS_TURBO_FRAMES, GRAVITY_FRAMES, LOCK_DELAY_FRAMES,
    ROTATION_REPEAT_FRAMES,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WellConfig {
    /// Time per gravity step
    #[serde(with = "crate::serde_duration")]
    pub gravity: Duration,
    /// Horizontal repeat interval until DAS is charged
    #[serde(with = "crate::serde_duration")]
    pub das_normal: Duration,
    /// Horizontal repeat interval after DAS is charged
    #[serde(with = "crate::serde_duration")]
    pub das_turbo: Duration,
    #[serde(with = "crate::serde_duration")]
    pub rotation_repeat: Duration,
    #[serde(with = "crate::serde_duration")]
    pub lock_delay: Duration,
    /// Hard drop (and sonic drop onto the stack) lock without waiting
    pub harddrop_locks_instantly: bool,
    /// Successful shifts and rotations restart the lock delay
    pub lock_infinity: bool,
}

impl Default for WellConfig {
    fn default() -> Self {
        Self {
            gravity: frames(GRAVITY_FRAMES),
            das_normal: frames(DAS_NORMAL_FRAMES),
            das_turbo: frames(DAS_TURBO_FRAMES),
            rotation_repeat: frames(ROTATION_REPEAT_FRAMES),
            lock_delay: frames(LOCK_DELAY_FRAMES),
            harddrop_locks_instantly: true,
            lock_infinity: true,
        }
    }
}

impl WellConfig {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn to_json(&self) -> String {
        // Only plain integers and bools; serializing cannot fail.
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_gives_defaults() {
        assert_eq!(WellConfig::from_json("{}").unwrap(), WellConfig::default());
    }

    #[test]
    fn test_durations_are_milliseconds() {
        let config = WellConfig::from_json(r#"{ "gravity": 500, "lock_delay": 250 }"#).unwrap();
        assert_eq!(config.gravity, Duration::from_millis(500));
        assert_eq!(config.lock_delay, Duration::from_millis(250));
        assert!(config.to_json().contains("\"gravity\": 500"));
    }

    #[test]
    fn test_rejects_wrong_types() {
        assert!(WellConfig::from_json(r#"{ "gravity": "fast" }"#).is_err());
    }
}
