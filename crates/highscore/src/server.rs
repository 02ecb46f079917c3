//! TCP server for the highscore service.
//!
//! Handles incoming connections and serves get/submit requests over
//! line-delimited JSON. Uses tokio for async networking.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::{oneshot, Mutex};

use crate::protocol::{Request, Response};

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// JSON file the score survives restarts in; in-memory only when unset.
    pub store_path: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 7878,
            store_path: None,
        }
    }
}

impl ServerConfig {
    /// Create from environment variables.
    pub fn from_env() -> Self {
        use std::env;

        let host = env::var("BLOCKDROP_HS_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("BLOCKDROP_HS_PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(7878);
        let store_path = env::var("BLOCKDROP_HS_STORE")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        Self {
            host,
            port,
            store_path,
        }
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("invalid socket address {}:{}", self.host, self.port))
    }
}

/// On-disk shape of the store file.
#[derive(Debug, Serialize, Deserialize)]
struct StoreFile {
    highscore: u32,
}

/// The stored highscore, optionally persisted to a JSON file.
#[derive(Debug)]
pub struct HighscoreStore {
    value: u32,
    path: Option<PathBuf>,
}

impl HighscoreStore {
    pub fn in_memory() -> Self {
        Self {
            value: 0,
            path: None,
        }
    }

    /// Load from `path`; a missing or unreadable file starts at 0.
    pub async fn load(path: PathBuf) -> Self {
        let value = match tokio::fs::read_to_string(&path).await {
            Ok(text) => serde_json::from_str::<StoreFile>(&text)
                .map(|f| f.highscore)
                .unwrap_or(0),
            Err(_) => 0,
        };
        Self {
            value,
            path: Some(path),
        }
    }

    pub fn get(&self) -> u32 {
        self.value
    }

    /// Merge a submitted score and return the resulting best.
    ///
    /// Only an improvement touches the file; persistence failures keep the
    /// in-memory value and are logged, not propagated to the client.
    pub async fn submit(&mut self, score: u32) -> u32 {
        if score > self.value {
            self.value = score;
            if let Some(path) = self.path.clone() {
                let body = serde_json::json!({ "highscore": self.value }).to_string();
                if let Err(e) = tokio::fs::write(&path, body).await {
                    eprintln!("[Highscore] Failed to persist {}: {}", path.display(), e);
                }
            }
        }
        self.value
    }
}

/// Start the TCP server.
///
/// `ready_tx` fires with the bound address once the listener is up, so
/// tests and supervisors can wait for it instead of sleeping.
pub async fn run_server(
    config: ServerConfig,
    ready_tx: Option<oneshot::Sender<SocketAddr>>,
) -> Result<()> {
    let addr = config.socket_addr()?;
    let listener = TcpListener::bind(&addr).await?;
    let bound = listener.local_addr()?;
    println!("[Highscore] TCP server listening on {}", bound);
    if let Some(tx) = ready_tx {
        let _ = tx.send(bound);
    }

    let store = match config.store_path {
        Some(path) => HighscoreStore::load(path).await,
        None => HighscoreStore::in_memory(),
    };
    let store = Arc::new(Mutex::new(store));

    loop {
        let (socket, peer) = listener.accept().await?;
        let store = Arc::clone(&store);
        tokio::spawn(async move {
            if let Err(e) = handle_client(socket, store).await {
                eprintln!("[Highscore] Client {} error: {}", peer, e);
            }
        });
    }
}

/// Serve one connection until the peer hangs up.
async fn handle_client(socket: TcpStream, store: Arc<Mutex<HighscoreStore>>) -> Result<()> {
    let (reader, mut writer) = tokio::io::split(socket);
    let mut reader = BufReader::new(reader);
    let mut line = String::new();

    loop {
        line.clear();
        if reader.read_line(&mut line).await? == 0 {
            break;
        }
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        // A malformed line drops the connection; the client retries next game.
        let request: Request = serde_json::from_str(trimmed)
            .with_context(|| format!("bad request line: {}", trimmed))?;

        let highscore = {
            let mut store = store.lock().await;
            match request {
                Request::Get => store.get(),
                Request::Submit { score } => store.submit(score).await,
            }
        };

        let mut body = serde_json::to_vec(&Response { highscore })?;
        body.push(b'\n');
        writer.write_all(&body).await?;
        writer.flush().await?;
    }

    Ok(())
}
