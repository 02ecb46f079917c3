//! Wire protocol for the highscore service.
//!
//! Line-delimited JSON over TCP: each request is one line, each response is
//! one line. Both request kinds get the same response shape, so a client can
//! treat every reply as "the best score the server knows right now".

use serde::{Deserialize, Serialize};

/// Client-to-server message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Request {
    /// Read the stored highscore.
    Get,
    /// Offer a final score; the server keeps the maximum.
    Submit { score: u32 },
}

/// Server-to-client message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    pub highscore: u32,
}
