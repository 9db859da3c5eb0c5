//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Cell, Phase, GRID_SIZE};

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

const PLAY_BG: Rgb = Rgb::new(24, 28, 24);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

pub const HEAD_FG: Rgb = Rgb::new(170, 255, 120);
pub const BODY_FG: Rgb = Rgb::new(60, 190, 80);
pub const FOOD_FG: Rgb = Rgb::new(230, 60, 60);

pub const GAME_OVER_TEXT: &str = "GAME OVER!!";
pub const IDLE_TEXT: &str = "PRESS SPACE";

/// Full-repaint renderer for the snake board.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self::new(2, 1)
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Outer size of the bordered board.
    pub fn frame_size(&self) -> (u16, u16) {
        let side = GRID_SIZE as u16;
        (side * self.cell_w + 2, side * self.cell_h + 2)
    }

    /// Top-left corner of the board frame inside `viewport`.
    pub fn frame_origin(&self, viewport: Viewport) -> (u16, u16) {
        let (frame_w, frame_h) = self.frame_size();
        let x = viewport.width.saturating_sub(frame_w) / 2;
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };
        (x, y)
    }

    /// Terminal position of the top-left character of a board cell.
    pub fn cell_origin(&self, viewport: Viewport, cell: Cell) -> (u16, u16) {
        let (ox, oy) = self.frame_origin(viewport);
        let cx = (cell.x.max(1) - 1) as u16;
        let cy = (cell.y.max(1) - 1) as u16;
        (ox + 1 + cx * self.cell_w, oy + 1 + cy * self.cell_h)
    }

    /// Paint the snapshot into an existing framebuffer.
    ///
    /// `overlay_visible` gates the game over text so callers can blink it.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        overlay_visible: bool,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).cell(' '));

        let (frame_w, frame_h) = self.frame_size();
        let (start_x, start_y) = self.frame_origin(viewport);

        let grid = CellStyle::new(Rgb::new(60, 70, 60), PLAY_BG).dim();
        for y in 1..=GRID_SIZE {
            for x in 1..=GRID_SIZE {
                self.fill_cell(fb, viewport, Cell::new(x, y), '·', grid);
            }
        }

        let border = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        let body = CellStyle::new(BODY_FG, PLAY_BG);
        let head = CellStyle::new(HEAD_FG, PLAY_BG).bold();
        for (i, &segment) in snap.snake.iter().enumerate().rev() {
            if !segment.in_bounds() {
                continue;
            }
            let style = if i == 0 { head } else { body };
            self.fill_cell(fb, viewport, segment, '█', style);
        }

        // Food is painted last, so it stays visible when it lands on the body.
        if let Some(food) = snap.food.filter(|f| f.in_bounds()) {
            let style = CellStyle::new(FOOD_FG, PLAY_BG).bold();
            self.fill_cell(fb, viewport, food, '█', style);
        }

        self.draw_side_panel(fb, snap, viewport, start_x, start_y, frame_w);

        match snap.phase {
            Phase::Ended if overlay_visible => {
                self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, GAME_OVER_TEXT);
            }
            Phase::Idle => {
                self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, IDLE_TEXT);
            }
            _ => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, overlay_visible: bool, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, overlay_visible, viewport, &mut fb);
        fb
    }

    fn fill_cell(&self, fb: &mut FrameBuffer, viewport: Viewport, cell: Cell, ch: char, style: CellStyle) {
        let (px, py) = self.cell_origin(viewport, cell);
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
        let hint = value.dim();

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        y += 1;
        fb.put_u32(panel_x, y, snap.score, value);
        y += 2;

        fb.put_str(panel_x, y, "SPEED", label);
        y += 1;
        let w = fb.put_u32(panel_x, y, snap.speed_ms, value);
        fb.put_str(panel_x + w, y, "ms", hint);
        y += 2;

        fb.put_str(panel_x, y, "LENGTH", label);
        y += 1;
        fb.put_u32(panel_x, y, snap.len() as u32, value);
        y += 2;

        if snap.is_running() {
            fb.put_str(panel_x, y, "ARROWS/WASD", hint);
            y += 1;
            fb.put_str(panel_x, y, "ENTER stop", hint);
        } else {
            fb.put_str(panel_x, y, "SPACE start", hint);
        }
        y += 1;
        fb.put_str(panel_x, y, "Q quit", hint);
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold();
        fb.put_str(x, mid_y, text, style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_is_board_plus_border() {
        let view = GameView::default();
        assert_eq!(view.frame_size(), (42, 22));
        assert_eq!(GameView::new(1, 1).frame_size(), (22, 22));
    }

    #[test]
    fn cells_map_to_one_indexed_positions() {
        let view = GameView::default().with_anchor_y(AnchorY::Top);
        let vp = Viewport::new(42, 22);
        assert_eq!(view.cell_origin(vp, Cell::new(1, 1)), (1, 1));
        assert_eq!(view.cell_origin(vp, Cell::new(20, 20)), (39, 20));
    }
}
