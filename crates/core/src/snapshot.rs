//! Read-only view of the game state for renderers.
//!
//! Renderers never touch the [`Engine`] directly; the loop fills a snapshot
//! once per frame with [`Engine::snapshot_into`] and hands that out. The
//! buffer is caller-owned and reused, so a frame allocates nothing.

use blockdrop_types::{Cell, Phase, PieceKind, COLS, ROWS};

use crate::engine::Engine;
use crate::piece::Piece;

/// Everything a display needs for one frame.
///
/// `highscore` is owned by the embedding loop (it arrives asynchronously
/// from the highscore collaborator), so `snapshot_into` leaves it alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSnapshot {
    pub board: [[Cell; COLS as usize]; ROWS as usize],
    pub current: Option<Piece>,
    pub next: PieceKind,
    pub score: u32,
    pub highscore: u32,
    pub fall_interval_ms: u32,
    pub phase: Phase,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.board = [[None; COLS as usize]; ROWS as usize];
        self.current = None;
        self.next = PieceKind::I;
        self.score = 0;
        self.fall_interval_ms = 0;
        self.phase = Phase::Playing;
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[None; COLS as usize]; ROWS as usize],
            current: None,
            next: PieceKind::I,
            score: 0,
            highscore: 0,
            fall_interval_ms: 0,
            phase: Phase::Playing,
        }
    }
}

impl Engine {
    /// Fill `snap` from the current state. `snap.highscore` is not touched.
    pub fn snapshot_into(&self, snap: &mut GameSnapshot) {
        for y in 0..ROWS as usize {
            snap.board[y].copy_from_slice(self.board().row(y));
        }
        snap.current = match self.phase() {
            Phase::Playing => Some(self.current()),
            Phase::GameOver => None,
        };
        snap.next = self.next_kind();
        snap.score = self.score();
        snap.fall_interval_ms = self.fall_interval_ms();
        snap.phase = self.phase();
    }
}
