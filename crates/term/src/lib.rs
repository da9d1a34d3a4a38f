//! Terminal front-end for the well.
//!
//! Renders a [`core::Session`] into a framebuffer of styled character cells and
//! presents it with `crossterm`. The core draws through the
//! [`core::DrawSurface`] seam; [`surface::TermSurface`] maps those pixel calls
//! onto 2x1 blocks of terminal cells.

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod surface;

pub use tetris_well_core as core;
pub use tetris_well_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalPresenter};
pub use surface::{piece_color, TermSurface};
