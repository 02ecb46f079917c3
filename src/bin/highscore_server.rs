//! Standalone highscore server.
//!
//! Reads its address and optional store file from the environment
//! (`BLOCKDROP_HS_HOST`, `BLOCKDROP_HS_PORT`, `BLOCKDROP_HS_STORE`) and
//! serves line-delimited JSON until killed.

use anyhow::Result;

use blockdrop::highscore::{run_server, ServerConfig};

#[tokio::main]
async fn main() -> Result<()> {
    run_server(ServerConfig::from_env(), None).await
}
