//! Terminal setup and teardown

use std::io::{self, stdout, Stdout};

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

/// Terminal type alias
pub type Terminal = ratatui::Terminal<CrosstermBackend<Stdout>>;

/// Raw-mode alternate screen, restored on [`leave`](Self::leave) or drop
pub struct TerminalSession {
    terminal: Terminal,
    active: bool,
}

impl TerminalSession {
    /// Switches the terminal into TUI mode
    pub fn enter() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(e.into());
        }
        let terminal = ratatui::Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self {
            terminal,
            active: true,
        })
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal {
        &mut self.terminal
    }

    /// Restores the terminal, reporting any failure
    pub fn leave(mut self) -> Result<()> {
        self.active = false;
        restore()
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if self.active {
            let _ = restore();
        }
    }
}

fn restore() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}
