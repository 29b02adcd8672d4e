//! Interactive TUI board
//!
//! A terminal kanban board using ratatui. Keyboard "pick up / move / drop"
//! produces the same drag start / over / end intents a pointer would.

mod app;
mod event;
mod ui;
mod utils;
mod views;

use std::panic::{self, AssertUnwindSafe};

use anyhow::{anyhow, Result};

use super::Output;
use crate::domain::{Board, Session};
use crate::storage::TuiConfig;
use app::App;
use event::EventHandler;
use ui::TerminalSession;

/// Launch the TUI
pub fn run(output: &Output, board: Board, config: &TuiConfig) -> Result<()> {
    output.verbose_ctx("tui", "Initializing TUI application");

    let mut app = App::new(Session::new(board), config.title_width);
    let mut screen = TerminalSession::enter()?;
    let events = EventHandler::new(config.tick_rate_ms);

    // Catch panics so the terminal is restored before reporting them
    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        app.run(screen.terminal_mut(), events)
    }));

    let restore_result = screen.leave();

    match result {
        Ok(inner_result) => {
            restore_result?;
            let snapshot = app.session().snapshot();
            output.verbose_ctx(
                "tui",
                &format!(
                    "Closed with {} lists and {} tasks",
                    snapshot.lists.len(),
                    snapshot.tasks.len()
                ),
            );
            inner_result
        }
        Err(panic_payload) => {
            let _ = restore_result;
            if let Some(s) = panic_payload.downcast_ref::<&str>() {
                Err(anyhow!("TUI panicked: {}", s))
            } else if let Some(s) = panic_payload.downcast_ref::<String>() {
                Err(anyhow!("TUI panicked: {}", s))
            } else {
                Err(anyhow!("TUI panicked with unknown error"))
            }
        }
    }
}
