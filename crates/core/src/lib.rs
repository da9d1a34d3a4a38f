//! Core well simulation - deterministic and free of I/O
//!
//! Everything that decides how a falling piece behaves lives here: the matrix,
//! piece shapes and rotation, the frame timers, collision and wall kicks, locking,
//! line clears and compaction. Nothing in this crate touches the terminal or reads
//! the clock; time only advances through the `elapsed` argument of
//! [`Well::update`].
//!
//! # Module Structure
//!
//! - [`matrix`]: the 10x22 cell grid (top two rows hidden)
//! - [`piece`]: minos, the 4x4 piece grid, rotation and kick rules
//! - [`timer`]: frame timers and the lock delay countdown
//! - [`well`]: the playfield state machine
//! - [`events`]: observer registry for well events
//! - [`anim`]: lock flashes and line clear effects
//! - [`ascii`]: debug text dumps of the well
//! - [`config`]: timing and locking policies, loadable from JSON
//! - [`queue`]: 7-bag piece queue
//! - [`session`]: answers the well's piece requests and tracks hold
//!
//! # Example
//!
//! ```
//! use tetris_well_core::{ascii, Well};
//! use tetris_well_core::types::{frames, InputEvent, InputType, PieceKind};
//!
//! let mut well = Well::new();
//! well.add_piece(PieceKind::O);
//! well.update(&[InputEvent::press(InputType::HardDrop)], frames(1));
//!
//! let dump = ascii::matrix_to_ascii(well.matrix());
//! assert_eq!(dump.lines().last(), Some("....OO...."));
//! assert!(well.active_piece().is_none());
//! ```

pub mod anim;
pub mod ascii;
pub mod config;
pub mod events;
pub mod matrix;
pub mod piece;
pub mod queue;
pub mod render;
mod serde_duration;
pub mod session;
pub mod timer;
pub mod well;

pub use tetris_well_types as types;

pub use anim::{CellLockAnim, LineClearAnim, WellAnimation};
pub use config::WellConfig;
pub use events::{EventLog, Observers};
pub use matrix::Matrix;
pub use piece::{kick_rule, KickRule, Mino, Piece, PieceGrid, PieceShape};
pub use queue::{PieceQueue, SimpleRng};
pub use render::{DrawSurface, RecordingSurface, Rect, Texture};
pub use session::Session;
pub use timer::{tick_down, Countdown};
pub use well::Well;
