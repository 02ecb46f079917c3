//! Core types shared across the workspace.
//! This crate contains pure data types with no external dependencies.

/// Board dimensions (columns x rows). Row 0 is the topmost visible row.
pub const COLS: u8 = 10;
pub const ROWS: u8 = 20;

/// Fixed game-loop tick (milliseconds).
pub const TICK_MS: u32 = 16;

/// Fall timing (milliseconds).
pub const BASE_INTERVAL_MS: u32 = 650;
pub const MIN_INTERVAL_MS: u32 = 90;
pub const SOFT_DROP_INTERVAL_MS: u32 = 50;

/// How long a soft drop stays active after the last key press, for terminals
/// that never deliver key-release events.
pub const SOFT_DROP_GRACE_MS: u32 = 150;

/// Points awarded for clearing 0..=4 rows in a single lock.
pub const SCORE_TABLE: [u32; 5] = [0, 100, 300, 500, 800];

/// Tetromino piece kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

/// All kinds in catalog order; one shuffled copy of this is a bag.
pub const ALL_KINDS: [PieceKind; 7] = [
    PieceKind::I,
    PieceKind::O,
    PieceKind::T,
    PieceKind::S,
    PieceKind::Z,
    PieceKind::J,
    PieceKind::L,
];

impl PieceKind {
    /// Parse piece kind from string (case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Convert to lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::J => "j",
            PieceKind::L => "l",
        }
    }
}

/// Rotation direction for a single rotation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotationDir {
    Cw,
    Ccw,
}

/// Commands accepted by the engine while playing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveLeft,
    MoveRight,
    RotateCw,
    RotateCcw,
    SoftDropOn,
    SoftDropOff,
    HardDrop,
}

impl Command {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(Command::MoveLeft),
            "moveright" => Some(Command::MoveRight),
            "rotatecw" => Some(Command::RotateCw),
            "rotateccw" => Some(Command::RotateCcw),
            "softdropon" => Some(Command::SoftDropOn),
            "softdropoff" => Some(Command::SoftDropOff),
            "harddrop" => Some(Command::HardDrop),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Command::MoveLeft => "moveLeft",
            Command::MoveRight => "moveRight",
            Command::RotateCw => "rotateCw",
            Command::RotateCcw => "rotateCcw",
            Command::SoftDropOn => "softDropOn",
            Command::SoftDropOff => "softDropOff",
            Command::HardDrop => "hardDrop",
        }
    }
}

/// Engine lifecycle phase. `GameOver` is terminal until an explicit reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Playing,
    GameOver,
}

/// Cell on the board (None = empty, Some = filled with piece kind).
pub type Cell = Option<PieceKind>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn piece_kind_string_roundtrip() {
        for kind in ALL_KINDS {
            assert_eq!(PieceKind::from_str(kind.as_str()), Some(kind));
        }
        assert_eq!(PieceKind::from_str("x"), None);
    }

    #[test]
    fn command_string_roundtrip() {
        let all = [
            Command::MoveLeft,
            Command::MoveRight,
            Command::RotateCw,
            Command::RotateCcw,
            Command::SoftDropOn,
            Command::SoftDropOff,
            Command::HardDrop,
        ];
        for cmd in all {
            assert_eq!(Command::from_str(cmd.as_str()), Some(cmd));
        }
        assert_eq!(Command::from_str("hold"), None);
    }

    #[test]
    fn score_table_values() {
        assert_eq!(SCORE_TABLE, [0, 100, 300, 500, 800]);
    }
}
