//! Terminal input for the well.
//!
//! Maps `crossterm` key events to [`crate::types::InputType`] and tracks which
//! inputs are held, synthesizing release events for terminals that never send
//! them. Repeat timing (DAS, soft drop) is left to the well itself.

pub mod handler;
pub mod map;

pub use tetris_well_types as types;

pub use handler::KeyTracker;
pub use map::{map_key, should_quit};
