//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! Pure (no I/O), so the whole layout is unit-testable.

use crate::core::{catalog, GameSnapshot};
use crate::fb::{FrameBuffer, GlyphStyle, Rgb};
use crate::types::{Phase, PieceKind, COLS, ROWS};

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

/// A lightweight terminal view of the game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

const PLAY_BG: Rgb = Rgb::new(24, 24, 32);

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render one frame into an existing framebuffer.
    ///
    /// Allocation-free hot path: callers keep one framebuffer across frames
    /// and it only resizes when the terminal does.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Default::default());

        let board_px_w = u16::from(COLS) * self.cell_w;
        let board_px_h = u16::from(ROWS) * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w + SIDEBAR_W) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let bg = GlyphStyle {
            fg: Rgb::new(70, 70, 85),
            bg: PLAY_BG,
            bold: false,
            dim: true,
        };
        let border = GlyphStyle {
            fg: Rgb::new(200, 200, 200),
            ..Default::default()
        };

        fb.fill_rect(start_x + 1, start_y + 1, board_px_w, board_px_h, '·', bg);
        draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        // Locked cells.
        for y in 0..ROWS {
            for x in 0..COLS {
                if let Some(kind) = snap.board[y as usize][x as usize] {
                    self.draw_block(fb, start_x, start_y, u16::from(x), u16::from(y), kind);
                }
            }
        }

        // Active piece; rows above the board stay invisible.
        if let Some(piece) = snap.current {
            for (x, y) in piece.cells() {
                if y >= 0 {
                    self.draw_block(fb, start_x, start_y, x as u16, y as u16, piece.kind);
                }
            }
        }

        self.draw_sidebar(fb, snap, start_x + frame_w + 2, start_y);

        if snap.phase == Phase::GameOver {
            draw_game_over(fb, start_x, start_y, frame_w, frame_h);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_block(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell_x: u16,
        cell_y: u16,
        kind: PieceKind,
    ) {
        let style = GlyphStyle {
            fg: Rgb::from_tuple(catalog::spec(kind).color),
            bg: PLAY_BG,
            bold: true,
            dim: false,
        };
        let px = start_x + 1 + cell_x * self.cell_w;
        let py = start_y + 1 + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, '█', style);
    }

    fn draw_sidebar(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, x: u16, start_y: u16) {
        if x + SIDEBAR_W > fb.width() {
            return;
        }

        let label = GlyphStyle {
            bold: true,
            ..Default::default()
        };
        let value = GlyphStyle {
            fg: Rgb::new(200, 200, 200),
            ..Default::default()
        };
        let hint = GlyphStyle {
            fg: Rgb::new(140, 140, 140),
            dim: true,
            ..Default::default()
        };

        let mut y = start_y + 1;
        fb.put_str(x, y, "SCORE", label);
        fb.put_u32(x + 7, y, snap.score, value);
        y += 2;

        fb.put_str(x, y, "BEST", label);
        fb.put_u32(x + 7, y, snap.highscore, value);
        y += 2;

        fb.put_str(x, y, "SPEED", label);
        fb.put_u32(x + 7, y, snap.fall_interval_ms, value);
        fb.put_str(x + 11, y, "ms", hint);
        y += 2;

        fb.put_str(x, y, "NEXT", label);
        y += 1;
        let style = GlyphStyle {
            fg: Rgb::from_tuple(catalog::spec(snap.next).color),
            bold: true,
            ..Default::default()
        };
        for &(dx, dy) in &catalog::spec(snap.next).rotations[0] {
            let px = x + (dx as u16) * self.cell_w;
            let py = y + dy as u16;
            fb.fill_rect(px, py, self.cell_w, 1, '█', style);
        }
        y += 4;

        for line in CONTROLS {
            fb.put_str(x, y, line, hint);
            y += 1;
        }
    }
}

const SIDEBAR_W: u16 = 20;

const CONTROLS: &[&str] = &[
    "←/→  move",
    "↑    rotate",
    "z    rotate ccw",
    "↓    soft drop",
    "spc  hard drop",
    "r    restart",
    "q    quit",
];

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: GlyphStyle) {
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

fn draw_game_over(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
    let style = GlyphStyle {
        fg: Rgb::new(231, 76, 60),
        bold: true,
        ..Default::default()
    };
    let hint = GlyphStyle {
        fg: Rgb::new(200, 200, 200),
        ..Default::default()
    };
    let cy = y + h / 2;
    put_centered(fb, x, cy.saturating_sub(1), w, "GAME OVER", style);
    put_centered(fb, x, cy + 1, w, "r: restart  q: quit", hint);
}

fn put_centered(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, text: &str, style: GlyphStyle) {
    let len = text.chars().count() as u16;
    let cx = x + w.saturating_sub(len) / 2;
    fb.put_str(cx, y, text, style);
}
