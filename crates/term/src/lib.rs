//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: the view draws into a plain
//! framebuffer and a separate renderer flushes it to the terminal, so the
//! layout stays pure and testable while the I/O stays in one place.

pub mod fb;
pub mod renderer;
pub mod view;

pub use blockdrop_core as core;
pub use blockdrop_types as types;

pub use fb::{FrameBuffer, Glyph, GlyphStyle, Rgb};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use view::{GameView, Viewport};
