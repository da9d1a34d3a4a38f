//! Visual effects owned by the well.
//!
//! Effects only draw; they never touch the matrix. The well keeps two lists: plain
//! effects (cell lock flash) and blocking ones (line clear), whose presence holds
//! back row removal.

use std::time::Duration;

use crate::render::{DrawSurface, Rect, Texture};
use crate::types::{CELL_SIZE_PX, LANDING_FLASH_MS, LINE_CLEAR_PAUSE_MS, WELL_WIDTH};

pub trait WellAnimation {
    fn update(&mut self, elapsed: Duration);

    fn is_active(&self) -> bool;

    /// Draw relative to the top-left pixel of the visible playfield
    fn draw(&self, surface: &mut dyn DrawSurface, x: i32, y: i32);
}

/// Linear fade from opaque to transparent over `duration`.
fn fade_alpha(elapsed: Duration, duration: Duration) -> u8 {
    if elapsed >= duration || duration.is_zero() {
        return 0;
    }
    let left = 1.0 - elapsed.as_secs_f32() / duration.as_secs_f32();
    (left * u8::MAX as f32) as u8
}

/// Short flash over a single cell that just locked
#[derive(Debug, Clone)]
pub struct CellLockAnim {
    row: usize,
    col: usize,
    elapsed: Duration,
    duration: Duration,
}

impl CellLockAnim {
    /// `row` counts from the top of the visible area
    pub fn new(row: usize, col: usize) -> Self {
        Self {
            row,
            col,
            elapsed: Duration::ZERO,
            duration: Duration::from_millis(LANDING_FLASH_MS),
        }
    }
}

impl WellAnimation for CellLockAnim {
    fn update(&mut self, elapsed: Duration) {
        self.elapsed = self.elapsed.saturating_add(elapsed);
    }

    fn is_active(&self) -> bool {
        self.elapsed < self.duration
    }

    fn draw(&self, surface: &mut dyn DrawSurface, x: i32, y: i32) {
        surface.draw_texture_faded(
            Texture::Flash,
            Rect::cell(
                x + self.col as i32 * CELL_SIZE_PX,
                y + self.row as i32 * CELL_SIZE_PX,
            ),
            fade_alpha(self.elapsed, self.duration) / 2,
        );
    }
}

/// Full-width flash over a row being cleared
#[derive(Debug, Clone)]
pub struct LineClearAnim {
    row: usize,
    elapsed: Duration,
    duration: Duration,
}

impl LineClearAnim {
    /// `row` counts from the top of the visible area
    pub fn new(row: usize) -> Self {
        Self {
            row,
            elapsed: Duration::ZERO,
            duration: Duration::from_millis(LINE_CLEAR_PAUSE_MS),
        }
    }

    pub fn row(&self) -> usize {
        self.row
    }
}

impl WellAnimation for LineClearAnim {
    fn update(&mut self, elapsed: Duration) {
        self.elapsed = self.elapsed.saturating_add(elapsed);
    }

    fn is_active(&self) -> bool {
        self.elapsed < self.duration
    }

    fn draw(&self, surface: &mut dyn DrawSurface, x: i32, y: i32) {
        surface.draw_texture_faded(
            Texture::Flash,
            Rect::new(
                x,
                y + self.row as i32 * CELL_SIZE_PX,
                WELL_WIDTH as i32 * CELL_SIZE_PX,
                CELL_SIZE_PX,
            ),
            fade_alpha(self.elapsed, self.duration),
        );
    }
}
