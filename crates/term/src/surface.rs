//! `DrawSurface` over a framebuffer.
//!
//! The well draws in pixels, [`CELL_SIZE_PX`] per mino. Here every mino becomes a
//! `cell_w` x `cell_h` block of terminal cells (2x1 by default, which keeps the
//! playfield roughly square in most fonts).

use crate::core::{DrawSurface, Rect, Texture};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{PieceKind, CELL_SIZE_PX};

pub const WELL_BG: Rgb = Rgb::new(30, 30, 40);

pub fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(80, 220, 220),
        PieceKind::O => Rgb::new(240, 220, 80),
        PieceKind::T => Rgb::new(200, 120, 220),
        PieceKind::S => Rgb::new(100, 220, 120),
        PieceKind::Z => Rgb::new(220, 80, 80),
        PieceKind::J => Rgb::new(80, 120, 220),
        PieceKind::L => Rgb::new(255, 165, 0),
    }
}

fn texture_cell(texture: Texture) -> (char, CellStyle) {
    match texture {
        Texture::MatrixBg => (
            '·',
            CellStyle {
                dim: true,
                ..CellStyle::plain(Rgb::new(90, 90, 100), WELL_BG)
            },
        ),
        Texture::Mino(kind) => (
            '█',
            CellStyle {
                bold: true,
                ..CellStyle::plain(piece_color(kind), WELL_BG)
            },
        ),
        Texture::Ghost => (
            '░',
            CellStyle {
                dim: true,
                ..CellStyle::plain(Rgb::new(140, 140, 140), WELL_BG)
            },
        ),
        Texture::Flash => ('█', CellStyle::plain(Rgb::WHITE, WELL_BG)),
    }
}

pub struct TermSurface<'a> {
    fb: &'a mut FrameBuffer,
    /// Terminal cell that pixel (0, 0) lands on
    origin: (u16, u16),
    cell_w: u16,
    cell_h: u16,
}

impl<'a> TermSurface<'a> {
    pub fn new(fb: &'a mut FrameBuffer, origin_x: u16, origin_y: u16) -> Self {
        Self::with_cell_size(fb, origin_x, origin_y, 2, 1)
    }

    pub fn with_cell_size(
        fb: &'a mut FrameBuffer,
        origin_x: u16,
        origin_y: u16,
        cell_w: u16,
        cell_h: u16,
    ) -> Self {
        Self {
            fb,
            origin: (origin_x, origin_y),
            cell_w,
            cell_h,
        }
    }

    /// Terminal rectangle covered by a pixel rectangle, clipped at the origin
    fn to_cells(&self, rect: Rect) -> Option<(u16, u16, u16, u16)> {
        let first_col = rect.x.div_euclid(CELL_SIZE_PX);
        let first_row = rect.y.div_euclid(CELL_SIZE_PX);
        let last_col = (rect.x + rect.w - 1).div_euclid(CELL_SIZE_PX);
        let last_row = (rect.y + rect.h - 1).div_euclid(CELL_SIZE_PX);
        if rect.w <= 0 || rect.h <= 0 || last_col < 0 || last_row < 0 {
            return None;
        }

        let (first_col, first_row) = (first_col.max(0) as u16, first_row.max(0) as u16);
        let cols = last_col as u16 - first_col + 1;
        let rows = last_row as u16 - first_row + 1;
        Some((
            self.origin.0.saturating_add(first_col * self.cell_w),
            self.origin.1.saturating_add(first_row * self.cell_h),
            cols * self.cell_w,
            rows * self.cell_h,
        ))
    }
}

impl DrawSurface for TermSurface<'_> {
    fn draw_texture(&mut self, texture: Texture, rect: Rect) {
        let Some((x, y, w, h)) = self.to_cells(rect) else {
            return;
        };
        let (ch, style) = texture_cell(texture);
        self.fb.fill_rect(x, y, w, h, ch, style);
    }

    fn draw_texture_faded(&mut self, texture: Texture, rect: Rect, alpha: u8) {
        if alpha == 0 {
            return;
        }
        let Some((x, y, w, h)) = self.to_cells(rect) else {
            return;
        };
        let (_, style) = texture_cell(texture);

        // Tint what is already there instead of covering it.
        for dy in 0..h {
            for dx in 0..w {
                if let Some(cell) = self.fb.get_mut(x + dx, y + dy) {
                    cell.style.bg = cell.style.bg.blend(style.fg, alpha);
                    cell.style.fg = cell.style.fg.blend(style.fg, alpha);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mino_covers_two_columns() {
        let mut fb = FrameBuffer::new(10, 3);
        let mut surface = TermSurface::new(&mut fb, 1, 1);
        surface.draw_texture(
            Texture::Mino(PieceKind::T),
            Rect::cell(CELL_SIZE_PX, 0),
        );
        assert_eq!(fb.row_text(1), "   ██     ");
        assert_eq!(fb.get(3, 1).map(|c| c.style.fg), Some(piece_color(PieceKind::T)));
    }

    #[test]
    fn test_wide_rect_spans_cells() {
        let mut fb = FrameBuffer::new(8, 1);
        let mut surface = TermSurface::new(&mut fb, 0, 0);
        surface.draw_texture(Texture::Ghost, Rect::new(0, 0, 3 * CELL_SIZE_PX, CELL_SIZE_PX));
        assert_eq!(fb.row_text(0), "░░░░░░  ");
    }

    #[test]
    fn test_rect_above_origin_is_skipped() {
        let mut fb = FrameBuffer::new(4, 2);
        let mut surface = TermSurface::new(&mut fb, 0, 0);
        surface.draw_texture(Texture::Flash, Rect::cell(0, -CELL_SIZE_PX));
        assert_eq!(fb, FrameBuffer::new(4, 2));
    }

    #[test]
    fn test_faded_flash_tints_without_replacing_glyph() {
        let mut fb = FrameBuffer::new(2, 1);
        fb.put_str(0, 0, "ab", CellStyle::plain(Rgb::new(0, 0, 0), Rgb::new(0, 0, 0)));
        let mut surface = TermSurface::new(&mut fb, 0, 0);
        surface.draw_texture_faded(Texture::Flash, Rect::cell(0, 0), 255);

        let cell = fb.get(0, 0).unwrap();
        assert_eq!(cell.ch, 'a');
        assert_eq!(cell.style.bg, Rgb::WHITE);
    }
}
