use std::path::PathBuf;

use anyhow::Result;

#[derive(Clone, Debug, Default)]
pub struct TuiRunOptions {
    pub config_path: PathBuf,
    /// Overrides the configured base URL for this session.
    pub url: Option<String>,
    pub token: Option<String>,
}

pub fn run_with_options(opts: TuiRunOptions) -> Result<()> {
    crate::tui_shell::run_with_options(opts)
}
