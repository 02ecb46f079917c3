//! Board: the 10x20 grid of locked cells.
//!
//! Uses a flat array for cache locality. Coordinates are (x, y) with x in
//! 0..COLS left to right and y in 0..ROWS top to bottom. Pieces spawn above
//! the visible area, so y is signed and cells with y < 0 are in flight but
//! never stored.

use arrayvec::ArrayVec;
use blockdrop_types::{Cell, COLS, ROWS};

use crate::piece::Piece;

/// Total number of cells on the board.
const BOARD_SIZE: usize = (COLS as usize) * (ROWS as usize);

/// Row indices removed by a single `clear_full_rows` call, top to bottom.
/// A single 4-cell piece can never complete more than 4 rows.
pub type ClearedRows = ArrayVec<usize, 4>;

/// The game board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= COLS as i8 || y < 0 || y >= ROWS as i8 {
            return None;
        }
        Some((y as usize) * (COLS as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        COLS
    }

    pub fn height(&self) -> u8 {
        ROWS
    }

    /// Get cell at (x, y); None if out of bounds.
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at (x, y); false if out of bounds.
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// The single commit gate for every movement, rotation, and spawn.
    ///
    /// A piece position is valid iff every occupied cell is inside the
    /// horizontal bounds, above the floor, and — once inside the visible
    /// area (y >= 0) — lands on an empty cell. Cells still above the board
    /// (y < 0) only have to satisfy the horizontal bound.
    pub fn is_valid(&self, piece: &Piece) -> bool {
        piece.cells().iter().all(|&(x, y)| {
            if x < 0 || x >= COLS as i8 || y >= ROWS as i8 {
                return false;
            }
            if y < 0 {
                return true;
            }
            self.cells[(y as usize) * (COLS as usize) + (x as usize)].is_none()
        })
    }

    /// Write the piece's fill tag into every occupied cell with y >= 0.
    ///
    /// Cells above the visible board are clipped. The caller has already
    /// decided the placement is final.
    pub fn lock(&mut self, piece: &Piece) {
        for (x, y) in piece.cells() {
            if y >= 0 {
                self.set(x, y, Some(piece.kind));
            }
        }
    }

    /// Check if a row is completely filled.
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= ROWS as usize {
            return false;
        }
        let start = y * COLS as usize;
        self.cells[start..start + COLS as usize]
            .iter()
            .all(|cell| cell.is_some())
    }

    /// Remove every full row in one pass, shift the survivors down preserving
    /// their order, and refill the top with empty rows.
    ///
    /// Returns the indices of the removed rows, top to bottom. All full rows
    /// are processed together so a 4-row clear is one event, not four.
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let mut cleared = ClearedRows::new();
        let width = COLS as usize;
        let mut write_y = ROWS as usize;

        // Walk bottom-up, compacting surviving rows toward the floor.
        for read_y in (0..ROWS as usize).rev() {
            if self.is_row_full(read_y) {
                cleared.push(read_y);
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src = read_y * width;
                    let dst = write_y * width;
                    self.cells.copy_within(src..src + width, dst);
                }
            }
        }

        // Whatever remains at the top becomes empty rows.
        self.cells[..write_y * width].fill(None);

        // Collected bottom-up; report top to bottom.
        cleared.reverse();
        cleared
    }

    /// Clear the entire board.
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Row-major view of all cells.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// One row as a slice.
    pub fn row(&self, y: usize) -> &[Cell] {
        let start = y * COLS as usize;
        &self.cells[start..start + COLS as usize]
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
