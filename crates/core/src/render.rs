//! Drawing seam between the simulation and whatever puts pixels on screen.
//!
//! The core never rasterizes anything itself. Minos, effects and the well issue
//! textured-rectangle calls against a [`DrawSurface`] in pixel coordinates, one
//! cell being [`CELL_SIZE_PX`] square.

use crate::types::{PieceKind, CELL_SIZE_PX};

/// Axis-aligned rectangle in surface pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// One mino-sized square with its top-left corner at (x, y).
    pub const fn cell(x: i32, y: i32) -> Self {
        Self::new(x, y, CELL_SIZE_PX, CELL_SIZE_PX)
    }
}

/// Textures the well knows how to ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Texture {
    /// Empty matrix cell background
    MatrixBg,
    /// A locked or falling mino
    Mino(PieceKind),
    /// Projected landing cell of the active piece
    Ghost,
    /// White overlay used by the lock and line clear effects
    Flash,
}

pub trait DrawSurface {
    fn draw_texture(&mut self, texture: Texture, rect: Rect);

    /// Draw with partial opacity (0 = invisible, 255 = opaque).
    ///
    /// Surfaces without blending may ignore the alpha; fully transparent draws are
    /// dropped here.
    fn draw_texture_faded(&mut self, texture: Texture, rect: Rect, alpha: u8) {
        if alpha > 0 {
            self.draw_texture(texture, rect);
        }
    }
}

/// Records every draw call, for tests and headless runs.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RecordingSurface {
    pub calls: Vec<(Texture, Rect, u8)>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DrawSurface for RecordingSurface {
    fn draw_texture(&mut self, texture: Texture, rect: Rect) {
        self.calls.push((texture, rect, u8::MAX));
    }

    fn draw_texture_faded(&mut self, texture: Texture, rect: Rect, alpha: u8) {
        self.calls.push((texture, rect, alpha));
    }
}
