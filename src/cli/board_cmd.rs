//! Board CLI commands: printing and replaying intent scripts

use std::path::Path;

use anyhow::{bail, Result};
use serde::Serialize;

use super::output::Output;
use crate::domain::{Applied, Board, BoardSnapshot, DragOverlay, Session};
use crate::storage::IntentScript;

/// An intent the board refused
#[derive(Debug, Serialize)]
struct Rejected {
    line: usize,
    op: &'static str,
    error: String,
}

#[derive(Serialize)]
struct ApplyReport<'a> {
    board: &'a BoardSnapshot,
    overlay: &'a DragOverlay,
    rejected: &'a [Rejected],
}

/// Prints the board
pub fn show(output: &Output, board: &Board) -> Result<()> {
    let snapshot = board.snapshot();

    if output.is_json() {
        output.data(&snapshot)?;
    } else {
        print_board(&snapshot);
    }
    Ok(())
}

/// Replays a script, then prints the resulting board
pub fn apply(output: &Output, board: Board, script: &Path, strict: bool) -> Result<()> {
    let script = IntentScript::new(script);
    let lines = script.read_all()?;
    output.verbose_ctx(
        "apply",
        &format!("Read {} intents from {}", lines.len(), script.path().display()),
    );

    let mut session = Session::new(board);
    let mut rejected = Vec::new();
    let mut changes = 0;

    for line in lines {
        let op = line.intent.name();
        match session.apply(line.intent) {
            Ok(applied) => {
                if applied.changed_board() {
                    changes += 1;
                }
                output.verbose_ctx(
                    "apply",
                    &format!("line {}: {} -> {}", line.line, op, describe(&applied)),
                );
            }
            Err(e) => {
                output.verbose_ctx("apply", &format!("line {}: {} rejected", line.line, op));
                rejected.push(Rejected {
                    line: line.line,
                    op,
                    error: e.to_string(),
                });
            }
        }
    }

    output.verbose_ctx("apply", &format!("{} intent(s) changed the board", changes));

    let snapshot = session.snapshot();
    let overlay = session.overlay();

    if output.is_json() {
        output.data(&ApplyReport {
            board: &snapshot,
            overlay: &overlay,
            rejected: &rejected,
        })?;
    } else {
        for r in &rejected {
            output.error(&format!("line {}: {}: {}", r.line, r.op, r.error));
        }
        print_board(&snapshot);
        if let Some(task) = &overlay.active_task {
            println!("Still dragging task {} ({})", task.id, task.title);
        }
        if let Some(list) = &overlay.active_list {
            println!("Still dragging list {} ({})", list.id, list.title);
        }
        output.success(&format!("Rejected {} intent(s)", rejected.len()));
    }

    if strict && !rejected.is_empty() {
        bail!("{} intent(s) rejected", rejected.len());
    }

    Ok(())
}

fn describe(applied: &Applied) -> String {
    match applied {
        Applied::ListCreated(list) => format!("created list {} ({})", list.id, list.title),
        Applied::TaskCreated(task) => format!("created task {} in list {}", task.id, task.list_id),
        Applied::Changed => "board changed".to_string(),
        Applied::Unchanged => "no change".to_string(),
        Applied::DragStarted(item) => format!("dragging {:?}", item),
        Applied::DragEnded => "drag ended".to_string(),
    }
}

/// Prints the board as text, one block per column
fn print_board(snapshot: &BoardSnapshot) {
    let columns = snapshot.columns();

    if columns.is_empty() {
        println!("Board is empty");
        return;
    }

    for (i, column) in columns.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{} [{}] ({})", column.list.title, column.list.id, column.tasks.len());
        println!("{}", "-".repeat(50));

        if column.tasks.is_empty() {
            println!("  (no tasks)");
        }
        for task in &column.tasks {
            if task.description.is_empty() {
                println!("  {:<6} {}", task.id, task.title);
            } else {
                println!("  {:<6} {} - {}", task.id, task.title, task.description);
            }
        }
    }
}
