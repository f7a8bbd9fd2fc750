use anyhow::Result;

mod app;
mod input;
mod worker;

pub fn run_with_options(opts: crate::tui::TuiRunOptions) -> Result<()> {
    app::run(opts)
}
