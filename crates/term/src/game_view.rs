//! GameView: maps a [`Session`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). The playfield itself is drawn by the well through
//! a [`TermSurface`]; the view adds the frame, the side panel and overlays.

use crate::core::{Piece, Session};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::surface::TermSurface;
use crate::types::{VISIBLE_ROWS, WELL_WIDTH};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Rows reserved for one piece in the side panel
const PREVIEW_ROWS: u16 = 3;

#[derive(Debug, Clone)]
pub struct GameView {
    /// Mino width in terminal columns.
    cell_w: u16,
    /// Mino height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        Self::new(2, 1)
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w,
            cell_h,
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Top-left corner of the well frame within `viewport`
    pub fn frame_origin(&self, viewport: Viewport) -> (u16, u16) {
        let (frame_w, frame_h) = self.frame_size();
        let x = viewport.width.saturating_sub(frame_w) / 2;
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };
        (x, y)
    }

    fn frame_size(&self) -> (u16, u16) {
        (
            WELL_WIDTH as u16 * self.cell_w + 2,
            VISIBLE_ROWS as u16 * self.cell_h + 2,
        )
    }

    /// Render the session into an existing framebuffer, resizing it to `viewport`.
    pub fn render_into(&self, session: &Session, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let (start_x, start_y) = self.frame_origin(viewport);
        let (frame_w, frame_h) = self.frame_size();

        let border = CellStyle::plain(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        {
            let mut surface = self.surface(fb, start_x + 1, start_y + 1);
            session.well().draw(&mut surface, 0, 0);
        }

        self.draw_side_panel(fb, session, viewport, start_x + frame_w + 2, start_y);

        if session.game_over() {
            draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "GAME OVER");
        } else if !session.started() {
            draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "READY");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, session: &Session, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(session, viewport, &mut fb);
        fb
    }

    fn surface<'a>(&self, fb: &'a mut FrameBuffer, x: u16, y: u16) -> TermSurface<'a> {
        TermSurface::with_cell_size(fb, x, y, self.cell_w, self.cell_h)
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        session: &Session,
        viewport: Viewport,
        panel_x: u16,
        start_y: u16,
    ) {
        // Four minos wide plus a margin
        if panel_x.saturating_add(4 * self.cell_w) > viewport.width {
            return;
        }

        let label = CellStyle {
            bold: true,
            ..CellStyle::default()
        };
        let value = CellStyle::plain(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        let mut y = start_y;
        fb.put_str(panel_x, y, "LINES", label);
        fb.put_u32(panel_x, y + 1, session.lines(), value);
        y += 3;

        fb.put_str(panel_x, y, "HOLD", label);
        y += 1;
        match session.hold_piece() {
            Some(kind) => {
                let mut surface = self.surface(fb, panel_x, y);
                Piece::new(kind).draw(&mut surface, 0, 0);
                if !session.can_hold() {
                    fb.put_str(panel_x + 4 * self.cell_w, y, "x", CellStyle { dim: true, ..value });
                }
            }
            None => fb.put_str(panel_x, y, "-", value),
        }
        y += PREVIEW_ROWS * self.cell_h + 1;

        fb.put_str(panel_x, y, "NEXT", label);
        y += 1;
        for kind in session.queue().preview() {
            if y + PREVIEW_ROWS * self.cell_h > viewport.height {
                break;
            }
            let mut surface = self.surface(fb, panel_x, y);
            Piece::new(kind).draw(&mut surface, 0, 0);
            y += PREVIEW_ROWS * self.cell_h;
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }
    let (right, bottom) = (x + w - 1, y + h - 1);
    fb.set(x, y, style.cell('┌'));
    fb.set(right, y, style.cell('┐'));
    fb.set(x, bottom, style.cell('└'));
    fb.set(right, bottom, style.cell('┘'));

    for dx in 1..w - 1 {
        fb.set(x + dx, y, style.cell('─'));
        fb.set(x + dx, bottom, style.cell('─'));
    }
    for dy in 1..h - 1 {
        fb.set(x, y + dy, style.cell('│'));
        fb.set(right, y + dy, style.cell('│'));
    }
}

fn draw_overlay_text(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, text: &str) {
    let text_w = text.chars().count() as u16;
    let style = CellStyle {
        bold: true,
        ..CellStyle::plain(Rgb::WHITE, Rgb::new(0, 0, 0))
    };
    fb.put_str(
        x.saturating_add(w.saturating_sub(text_w) / 2),
        y.saturating_add(h / 2),
        text,
        style,
    );
}
