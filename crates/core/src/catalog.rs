//! Piece catalog: static shape, color, and spawn data for the 7 tetrominoes.
//!
//! Each kind maps to an ordered list of rotation states (1 for O, 4 for the
//! rest) where a state is 4 cell offsets from the piece anchor. Rotation is
//! not wall-kicked anywhere in this game: a rotation that does not fit is
//! rejected outright, so no kick data lives here.

use blockdrop_types::PieceKind;

/// Offset of a single cell relative to the piece anchor.
pub type CellOffset = (i8, i8);

/// One rotation state: 4 cell offsets.
pub type RotationState = [CellOffset; 4];

/// Static catalog entry for one piece kind.
#[derive(Debug)]
pub struct PieceSpec {
    /// Fill color (RGB) used by display collaborators.
    pub color: (u8, u8, u8),
    pub rotations: &'static [RotationState],
    pub spawn_x: i8,
    pub spawn_y: i8,
}

/// All pieces spawn two rows above the visible board.
const SPAWN_Y: i8 = -2;

const CYAN: (u8, u8, u8) = (48, 207, 208);
const YELLOW: (u8, u8, u8) = (255, 214, 10);
const PURPLE: (u8, u8, u8) = (155, 89, 182);
const GREEN: (u8, u8, u8) = (46, 204, 113);
const RED: (u8, u8, u8) = (231, 76, 60);
const BLUE: (u8, u8, u8) = (52, 152, 219);
const ORANGE: (u8, u8, u8) = (243, 156, 18);

const I_SPEC: PieceSpec = PieceSpec {
    color: CYAN,
    rotations: &[
        [(0, 1), (1, 1), (2, 1), (3, 1)],
        [(2, 0), (2, 1), (2, 2), (2, 3)],
        [(0, 2), (1, 2), (2, 2), (3, 2)],
        [(1, 0), (1, 1), (1, 2), (1, 3)],
    ],
    spawn_x: 3,
    spawn_y: SPAWN_Y,
};

const O_SPEC: PieceSpec = PieceSpec {
    color: YELLOW,
    rotations: &[[(1, 1), (2, 1), (1, 2), (2, 2)]],
    spawn_x: 4,
    spawn_y: SPAWN_Y,
};

const T_SPEC: PieceSpec = PieceSpec {
    color: PURPLE,
    rotations: &[
        [(1, 1), (0, 1), (2, 1), (1, 2)],
        [(1, 1), (1, 0), (1, 2), (2, 1)],
        [(1, 1), (0, 1), (2, 1), (1, 0)],
        [(1, 1), (1, 0), (1, 2), (0, 1)],
    ],
    spawn_x: 3,
    spawn_y: SPAWN_Y,
};

// S and Z only have two distinct silhouettes; the tables repeat them so every
// non-O kind has 4 states and the rotation index wraps uniformly.
const S_SPEC: PieceSpec = PieceSpec {
    color: GREEN,
    rotations: &[
        [(1, 1), (2, 1), (0, 2), (1, 2)],
        [(1, 0), (1, 1), (2, 1), (2, 2)],
        [(1, 1), (2, 1), (0, 2), (1, 2)],
        [(1, 0), (1, 1), (2, 1), (2, 2)],
    ],
    spawn_x: 3,
    spawn_y: SPAWN_Y,
};

const Z_SPEC: PieceSpec = PieceSpec {
    color: RED,
    rotations: &[
        [(0, 1), (1, 1), (1, 2), (2, 2)],
        [(2, 0), (1, 1), (2, 1), (1, 2)],
        [(0, 1), (1, 1), (1, 2), (2, 2)],
        [(2, 0), (1, 1), (2, 1), (1, 2)],
    ],
    spawn_x: 3,
    spawn_y: SPAWN_Y,
};

const J_SPEC: PieceSpec = PieceSpec {
    color: BLUE,
    rotations: &[
        [(0, 1), (1, 1), (2, 1), (2, 2)],
        [(1, 0), (1, 1), (1, 2), (2, 0)],
        [(0, 0), (0, 1), (1, 1), (2, 1)],
        [(0, 2), (1, 0), (1, 1), (1, 2)],
    ],
    spawn_x: 3,
    spawn_y: SPAWN_Y,
};

const L_SPEC: PieceSpec = PieceSpec {
    color: ORANGE,
    rotations: &[
        [(0, 1), (1, 1), (2, 1), (0, 2)],
        [(1, 0), (1, 1), (1, 2), (2, 2)],
        [(0, 1), (1, 1), (2, 1), (2, 0)],
        [(0, 0), (1, 0), (1, 1), (1, 2)],
    ],
    spawn_x: 3,
    spawn_y: SPAWN_Y,
};

/// Look up the static catalog entry for a kind.
pub const fn spec(kind: PieceKind) -> &'static PieceSpec {
    match kind {
        PieceKind::I => &I_SPEC,
        PieceKind::O => &O_SPEC,
        PieceKind::T => &T_SPEC,
        PieceKind::S => &S_SPEC,
        PieceKind::Z => &Z_SPEC,
        PieceKind::J => &J_SPEC,
        PieceKind::L => &L_SPEC,
    }
}
