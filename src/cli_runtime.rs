use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use tinytodo::config::{ClientConfig, ConfigStore};
use tinytodo::logging::{LogTarget, init_tracing};

use crate::Commands;

#[derive(Parser)]
#[command(name = "tinytodo")]
#[command(about = "Todo list client", long_about = None)]
pub(crate) struct Cli {
    /// Config file (defaults to .tinytodo/config.json)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Server base URL (overrides the config file)
    #[arg(long)]
    url: Option<String>,

    /// Bearer token (overrides the config file)
    #[arg(long)]
    token: Option<String>,

    /// Write logs here when running the TUI
    #[arg(long = "log-file", value_name = "PATH")]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl Cli {
    fn config_store(&self) -> Result<ConfigStore> {
        match &self.config {
            Some(path) => Ok(ConfigStore::new(path.clone())),
            None => Ok(ConfigStore::in_dir(
                &std::env::current_dir().context("get current dir")?,
            )),
        }
    }
}

pub(crate) fn run() -> Result<()> {
    let cli = Cli::parse();
    let store = cli.config_store()?;

    match cli.command {
        None => {
            let target = match cli.log_file {
                Some(path) => LogTarget::File(path),
                None => LogTarget::Discard,
            };
            init_tracing(target)?;
            tinytodo::tui::run_with_options(tinytodo::tui::TuiRunOptions {
                config_path: store.path().to_path_buf(),
                url: cli.url,
                token: cli.token,
            })?;
        }
        Some(command) => {
            if cli.log_file.is_some() {
                anyhow::bail!("`--log-file` is only supported when running the TUI (no subcommand)");
            }
            init_tracing(LogTarget::Stderr)?;
            crate::cli_exec::handle_command(&store, cli.url, cli.token, command)?
        }
    }

    Ok(())
}

/// Reads the config file and applies command-line overrides.
pub(crate) fn resolve_config(
    store: &ConfigStore,
    url: Option<String>,
    token: Option<String>,
) -> Result<ClientConfig> {
    let mut cfg = store.read_config()?;
    if let Some(url) = url {
        cfg.base_url = url;
    }
    if let Some(token) = token {
        cfg.token = Some(token);
    }
    Ok(cfg)
}
