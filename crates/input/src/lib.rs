//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::Command`] values. The
//! mapping is pure so it stays testable without a terminal; reading events
//! and pacing the loop is the binary's job.

pub mod map;

pub use blockdrop_types as types;

pub use map::{handle_key_press, handle_key_release, is_reset, should_quit};
