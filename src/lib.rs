//! Blockdrop (workspace facade crate).
//!
//! This package exposes the `blockdrop::{core,highscore,input,term,types}`
//! public API while the implementation lives in dedicated crates under
//! `crates/`.

pub use blockdrop_core as core;
pub use blockdrop_highscore as highscore;
pub use blockdrop_input as input;
pub use blockdrop_term as term;
pub use blockdrop_types as types;
