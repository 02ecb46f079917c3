//! Highscore collaborator: a tiny TCP service plus a fire-and-forget client.
//!
//! The game never blocks on this service. The engine emits fetch/submit
//! requests as events, the client runs them on a background runtime, and the
//! loop polls for replies. When the service is down, the game plays on with
//! a stale displayed value.

pub mod client;
pub mod protocol;
pub mod server;

pub use client::{exchange, HighscoreClient, REQUEST_TIMEOUT};
pub use protocol::{Request, Response};
pub use server::{run_server, HighscoreStore, ServerConfig};
