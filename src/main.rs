//! Kanban - in-memory board with drag-and-drop reordering

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = kanban_board::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
