use std::env;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Where diagnostics go. The TUI must never log to the terminal it draws on.
#[derive(Clone, Debug)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
    Discard,
}

pub fn init_tracing(target: LogTarget) -> Result<()> {
    let filter = EnvFilter::try_from_env("TINYTODO_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if env::var("DEBUG").is_ok() {
            "tinytodo=debug,info"
        } else {
            "tinytodo=info,warn"
        })
    });
    let json = env::var("TINYTODO_LOG_FORMAT").is_ok_and(|f| f == "json");
    let registry = tracing_subscriber::registry().with(filter);

    let res = match target {
        LogTarget::Stderr if json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init(),
        LogTarget::Stderr => registry
            .with(fmt::layer().compact().with_writer(std::io::stderr))
            .try_init(),
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("open log file {}", path.display()))?;
            let writer = Mutex::new(file);
            if json {
                registry
                    .with(fmt::layer().json().with_ansi(false).with_writer(writer))
                    .try_init()
            } else {
                registry
                    .with(fmt::layer().with_ansi(false).with_writer(writer))
                    .try_init()
            }
        }
        LogTarget::Discard => registry
            .with(fmt::layer().with_writer(std::io::sink))
            .try_init(),
    };
    res.map_err(|e| anyhow::anyhow!("init tracing: {}", e))
}
