//! Piece value type.
//!
//! A `Piece` is an immutable value: movement and rotation return new values
//! and perform no validity checks themselves. Validity is decided in one
//! place, by [`crate::board::Board::is_valid`], before a candidate is
//! committed. This keeps movement legality trivial to unit test: build a
//! value, ask the board, assert.

use blockdrop_types::{PieceKind, RotationDir};

use crate::catalog;

/// A tetromino instance: kind, rotation index, and board position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub rotation: u8,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// Create a piece at its catalog spawn offset, rotation 0.
    pub fn spawn(kind: PieceKind) -> Self {
        let spec = catalog::spec(kind);
        Self {
            kind,
            rotation: 0,
            x: spec.spawn_x,
            y: spec.spawn_y,
        }
    }

    /// Absolute board cells occupied by this piece.
    pub fn cells(&self) -> [(i8, i8); 4] {
        let states = catalog::spec(self.kind).rotations;
        debug_assert!(
            (self.rotation as usize) < states.len(),
            "rotation index {} out of range for {:?}",
            self.rotation,
            self.kind
        );
        let mut cells = states[self.rotation as usize];
        for cell in &mut cells {
            cell.0 += self.x;
            cell.1 += self.y;
        }
        cells
    }

    /// A copy translated by (dx, dy).
    pub fn moved(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// A copy rotated one step; the index wraps modulo the kind's state count.
    pub fn rotated(&self, dir: RotationDir) -> Self {
        let count = catalog::spec(self.kind).rotations.len() as u8;
        let rotation = match dir {
            RotationDir::Cw => (self.rotation + 1) % count,
            RotationDir::Ccw => (self.rotation + count - 1) % count,
        };
        Self { rotation, ..*self }
    }
}
