use std::net::SocketAddr;
use std::path::Path;

use anyhow::{Context, Result};

pub(super) async fn bind_listener(addr: SocketAddr) -> Result<tokio::net::TcpListener> {
    tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("bind {}", addr))
}

/// Written atomically so a poller never reads a partial address.
pub(super) fn maybe_write_addr_file(addr_file: Option<&Path>, local_addr: SocketAddr) -> Result<()> {
    let Some(addr_file) = addr_file else {
        return Ok(());
    };
    tinytodo::config::write_atomic_overwrite(addr_file, local_addr.to_string().as_bytes())
        .with_context(|| format!("write addr file {}", addr_file.display()))
}
