use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use tinytodo::logging::{LogTarget, init_tracing};

mod app;
mod listener;
mod shutdown;

use self::app::{build_app_router, build_state};
use self::listener::{bind_listener, maybe_write_addr_file};
use self::shutdown::shutdown_signal;

#[derive(Parser)]
#[command(name = "tinytodo-server")]
#[command(about = "Todo list backend (development)", long_about = None)]
pub(super) struct Args {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:8080")]
    pub(super) addr: SocketAddr,

    /// Write bound address to this file (dev/test convenience)
    #[arg(long)]
    pub(super) addr_file: Option<PathBuf>,

    /// Directory holding todos.json
    #[arg(long, default_value = "./tinytodo-data")]
    pub(super) data_dir: PathBuf,

    /// Development bearer token
    #[arg(long, default_value = "dev")]
    pub(super) dev_token: String,
}

pub(super) async fn run() -> Result<()> {
    let args = Args::parse();
    init_tracing(LogTarget::Stderr)?;
    std::fs::create_dir_all(&args.data_dir)
        .with_context(|| format!("create data dir {}", args.data_dir.display()))?;

    let state = build_state(&args)?;
    let app = build_app_router(state);
    let listener = bind_listener(args.addr).await?;
    let local_addr = listener.local_addr().context("read listener local addr")?;
    tracing::info!(addr = %local_addr, data_dir = %args.data_dir.display(), "tinytodo-server listening");
    maybe_write_addr_file(args.addr_file.as_deref(), local_addr)?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("tinytodo-server stopped");
    Ok(())
}
