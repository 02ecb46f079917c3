//! Highscore client: bridges the sync game loop with async networking.
//!
//! The client owns a small tokio runtime. `fetch` and `submit` spawn a task
//! and return immediately; whenever a reply arrives, the best-known score
//! shows up in `try_recv` on a later frame. Network failures are silent by
//! design: the loop keeps showing the last value it saw.

use std::time::Duration;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;
use tokio::runtime::Runtime;
use tokio::sync::mpsc;

use crate::protocol::{Request, Response};
use crate::server::ServerConfig;

/// How long one request may take before it is abandoned.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(2);

pub struct HighscoreClient {
    rt: Runtime,
    addr: String,
    tx: mpsc::UnboundedSender<u32>,
    rx: mpsc::UnboundedReceiver<u32>,
}

impl HighscoreClient {
    /// Client for the address the server config resolves from the environment.
    pub fn from_env() -> Result<Self> {
        let config = ServerConfig::from_env();
        Self::new(format!("{}:{}", config.host, config.port))
    }

    pub fn new(addr: String) -> Result<Self> {
        let rt = Runtime::new().context("failed to create highscore runtime")?;
        let (tx, rx) = mpsc::unbounded_channel();
        Ok(Self { rt, addr, tx, rx })
    }

    /// Ask for the stored highscore. Fire-and-forget.
    pub fn fetch(&self) {
        self.spawn(Request::Get);
    }

    /// Offer a final score. Fire-and-forget.
    pub fn submit(&self, score: u32) {
        self.spawn(Request::Submit { score });
    }

    /// Latest reply, if one arrived since the last poll.
    pub fn try_recv(&mut self) -> Option<u32> {
        let mut latest = None;
        while let Ok(value) = self.rx.try_recv() {
            latest = Some(value);
        }
        latest
    }

    fn spawn(&self, request: Request) {
        let addr = self.addr.clone();
        let tx = self.tx.clone();
        self.rt.spawn(async move {
            match tokio::time::timeout(REQUEST_TIMEOUT, exchange(&addr, &request)).await {
                Ok(Ok(best)) => {
                    let _ = tx.send(best);
                }
                // Timeouts and refused connections leave the display stale.
                Ok(Err(_)) | Err(_) => {}
            }
        });
    }
}

/// One request/response exchange on a fresh connection.
pub async fn exchange(addr: &str, request: &Request) -> Result<u32> {
    let stream = TcpStream::connect(addr).await?;
    let (reader, mut writer) = tokio::io::split(stream);

    let mut body = serde_json::to_vec(request)?;
    body.push(b'\n');
    writer.write_all(&body).await?;
    writer.flush().await?;

    let mut line = String::new();
    let mut reader = BufReader::new(reader);
    reader.read_line(&mut line).await?;
    let response: Response =
        serde_json::from_str(line.trim()).context("malformed highscore response")?;
    Ok(response.highscore)
}
