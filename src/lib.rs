//! Tetris well (workspace facade crate).
//!
//! Re-exports the workspace crates as `tetris_well::{core,input,term,types}` so
//! the binary, integration tests and benches share one import path.

pub use tetris_well_core as core;
pub use tetris_well_input as input;
pub use tetris_well_term as term;
pub use tetris_well_types as types;
