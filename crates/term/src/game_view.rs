//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::Color;

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

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

/// A lightweight terminal renderer for the game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// Callers can reuse one framebuffer across frames; it is resized to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(crate::fb::Cell::default());

        let rows = snap.board.height() as u16;
        let cols = snap.board.width() as u16;
        let frame_w = cols.saturating_mul(self.cell_w).saturating_add(2);
        let frame_h = rows.saturating_mul(self.cell_h).saturating_add(2);

        let origin = Origin {
            x: viewport.width.saturating_sub(frame_w) / 2,
            y: viewport.height.saturating_sub(frame_h) / 2,
        };

        self.draw_border(fb, origin, frame_w, frame_h);

        // Locked cells, with a faint dot on empty ones.
        let empty = CellStyle::new(Rgb::new(90, 90, 100), BOARD_BG).dim();
        for (r, row) in snap.board.rows().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                match cell {
                    Some(kind) => {
                        self.draw_block(fb, origin, r as i32, c as i32, kind.color(), rows, cols)
                    }
                    None => self.fill_cell(fb, origin, r as u16, c as u16, '·', empty),
                }
            }
        }

        // Landing preview under the active piece.
        let ghost = CellStyle::new(Rgb::new(140, 140, 140), BOARD_BG).dim();
        for &(r, c) in snap.landing.iter() {
            if in_board(r, c, rows, cols) {
                self.fill_cell(fb, origin, r as u16, c as u16, '░', ghost);
            }
        }

        if let Some(active) = &snap.active {
            for &(r, c) in active.cells.iter() {
                self.draw_block(fb, origin, r, c, active.color, rows, cols);
            }
        }

        self.draw_side_panel(fb, snap, viewport, origin, frame_w);

        if snap.game_over {
            self.draw_overlay_text(fb, origin, frame_w, frame_h, "GAME OVER");
            self.draw_overlay_text_at(fb, origin, frame_w, frame_h / 2 + 1, "r: restart");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, at: Origin, w: u16, h: u16) {
        if w < 2 || h < 2 {
            return;
        }
        let style = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);

        fb.put_char(at.x, at.y, '┌', style);
        fb.put_char(at.x + w - 1, at.y, '┐', style);
        fb.put_char(at.x, at.y + h - 1, '└', style);
        fb.put_char(at.x + w - 1, at.y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(at.x + dx, at.y, '─', style);
            fb.put_char(at.x + dx, at.y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(at.x, at.y + dy, '│', style);
            fb.put_char(at.x + w - 1, at.y + dy, '│', style);
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_block(
        &self,
        fb: &mut FrameBuffer,
        at: Origin,
        r: i32,
        c: i32,
        color: Color,
        rows: u16,
        cols: u16,
    ) {
        if !in_board(r, c, rows, cols) {
            return;
        }
        let style = CellStyle::new(color_rgb(color), BOARD_BG).bold();
        self.fill_cell(fb, at, r as u16, c as u16, '█', style);
    }

    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        at: Origin,
        r: u16,
        c: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = at.x + 1 + c * self.cell_w;
        let py = at.y + 1 + r * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        at: Origin,
        frame_w: u16,
    ) {
        let panel_x = at.x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 8 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);

        let mut y = at.y;
        let stats = [
            ("SCORE", snap.score),
            ("ROWS", snap.rows),
            ("PIECES", snap.pieces),
        ];
        for (name, number) in stats {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y.saturating_add(1), number, value);
            y = y.saturating_add(3);
        }
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        at: Origin,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        self.draw_overlay_text_at(fb, at, frame_w, frame_h / 2, text);
    }

    fn draw_overlay_text_at(
        &self,
        fb: &mut FrameBuffer,
        at: Origin,
        frame_w: u16,
        dy: u16,
        text: &str,
    ) {
        let text_w = text.chars().count() as u16;
        let x = at.x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold();
        fb.put_str(x, at.y.saturating_add(dy), text, style);
    }
}

/// Top-left corner of the board frame in terminal cells.
#[derive(Debug, Clone, Copy)]
struct Origin {
    x: u16,
    y: u16,
}

fn in_board(r: i32, c: i32, rows: u16, cols: u16) -> bool {
    r >= 0 && c >= 0 && r < rows as i32 && c < cols as i32
}

fn color_rgb(color: Color) -> Rgb {
    match color {
        Color::Yellow => Rgb::new(240, 220, 80),
        Color::Purple => Rgb::new(200, 120, 220),
        Color::Red => Rgb::new(220, 80, 80),
        Color::Green => Rgb::new(100, 220, 120),
        Color::Cyan => Rgb::new(80, 220, 220),
    }
}
