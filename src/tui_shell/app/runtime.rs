use std::io::{self, IsTerminal, Stdout};

use anyhow::{Context, Result};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use super::{App, event_loop};

/// Raw mode plus the alternate screen, undone on drop so an early return or a
/// panic in the loop still hands the shell back in a usable state.
struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode().context("enable raw mode")?;
        let mut stdout = io::stdout();
        if let Err(err) = execute!(stdout, EnterAlternateScreen) {
            disable_raw_mode().ok();
            return Err(err).context("enter alternate screen");
        }
        let terminal = match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => terminal,
            Err(err) => {
                restore(&mut io::stdout());
                return Err(err).context("create terminal");
            }
        };
        Ok(Self { terminal })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore(self.terminal.backend_mut());
        self.terminal.show_cursor().ok();
    }
}

fn restore(out: &mut impl io::Write) {
    disable_raw_mode().ok();
    execute!(out, LeaveAlternateScreen).ok();
}

pub(in crate::tui_shell) fn run(opts: crate::tui::TuiRunOptions) -> Result<()> {
    // Config problems are reported even when stdout is not a terminal.
    let mut app = App::load(opts)?;

    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        anyhow::bail!("TUI requires an interactive terminal (TTY)");
    }

    let mut guard = TerminalGuard::enter()?;
    guard.terminal.clear().ok();
    event_loop::run_loop(&mut guard.terminal, &mut app)
}

#[cfg(test)]
#[path = "../../tests/tui_shell/runtime_tests.rs"]
mod tests;
