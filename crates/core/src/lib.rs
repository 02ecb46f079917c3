//! Core game logic - pure, deterministic, and testable
//!
//! All the game rules live here, with **zero dependencies** on UI,
//! networking, or I/O:
//!
//! - **Deterministic**: Same seed produces the same piece sequence
//! - **Testable**: Every rule is reachable from a unit test
//! - **Portable**: Runs in any environment (terminal, headless, server)
//! - **Fast**: Zero-allocation hot paths for the per-frame tick
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 board with the validity check and line clearing
//! - [`catalog`]: Tetromino rotation tables, colors, and spawn offsets
//! - [`piece`]: The active piece as an immutable value type
//! - [`bag`]: 7-bag random piece generation for fair distribution
//! - [`engine`]: The state machine driven by commands and elapsed time
//! - [`speed`]: Score-driven fall interval
//! - [`snapshot`]: Per-frame read-only view for renderers
//!
//! # Game Rules
//!
//! This implementation keeps the rules deliberately classic:
//!
//! - **7-Bag Randomizer**: Pieces are drawn from a shuffled bag of 7
//! - **Plain Rotation**: A rotation that does not fit is rejected, no kicks
//! - **Instant Lock**: A blocked fall-step locks immediately, no lock delay
//! - **Scoring**: 100/300/500/800 for 1-4 simultaneous rows
//! - **Speed**: The fall interval shrinks 0.5% per 10 points, floor 90ms
//!
//! # Example
//!
//! ```
//! use blockdrop_core::{Engine, GameEvent};
//! use blockdrop_core::types::{Command, Phase};
//!
//! let mut engine = Engine::new(12345);
//!
//! engine.apply_command(Command::MoveRight);
//! engine.apply_command(Command::HardDrop);
//! engine.advance(16);
//!
//! assert_eq!(engine.phase(), Phase::Playing);
//! let events: Vec<GameEvent> = engine.drain_events().collect();
//! assert!(events.contains(&GameEvent::FetchHighscore));
//! ```
//!
//! Call [`Engine::advance`] every frame with the elapsed milliseconds and
//! drain the event queue afterwards.

pub mod bag;
pub mod board;
pub mod catalog;
pub mod engine;
pub mod piece;
pub mod snapshot;
pub mod speed;

pub use blockdrop_types as types;

// Re-export commonly used types for convenience
pub use bag::{BagQueue, SimpleRng};
pub use board::{Board, ClearedRows};
pub use catalog::{spec, PieceSpec};
pub use engine::{score_for_rows, Engine, GameEvent};
pub use piece::Piece;
pub use snapshot::GameSnapshot;
pub use speed::interval_ms;
