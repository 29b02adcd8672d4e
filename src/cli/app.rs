//! Main CLI application structure

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use super::output::{Output, OutputFormat};
use super::{board_cmd, tui};
use crate::domain::{seed, Board};
use crate::storage::{Config, SeedFile};

#[derive(Parser)]
#[command(name = "kanban")]
#[command(author, version, about = "In-memory kanban board with drag-and-drop reordering")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (defaults to the global config, then text)
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// JSON file with the initial lists and tasks
    #[arg(long, global = true, env = "KANBAN_SEED")]
    pub seed: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the board
    Show,

    /// Replay a JSONL intent script against the board and print the result
    ///
    /// Examples:
    ///   kanban apply moves.jsonl
    ///   cat moves.jsonl | kanban apply -
    Apply {
        /// Script path, or `-` for standard input
        script: PathBuf,

        /// Fail if any intent is rejected
        #[arg(long)]
        strict: bool,
    },

    /// Open the interactive board
    Tui,
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;
    let format = cli
        .format
        .unwrap_or_else(|| config.global.default_format.into());
    let output = Output::new(format, cli.verbose);

    output.verbose("Kanban starting");
    if let Some(root) = &config.project_root {
        output.verbose_ctx("config", &format!("Project root: {}", root.display()));
    }

    let board = load_board(&output, &config, cli.seed)?;

    match cli.command {
        Commands::Show => board_cmd::show(&output, &board)?,
        Commands::Apply { script, strict } => {
            output.verbose_ctx("apply", &format!("Replaying script: {}", script.display()));
            board_cmd::apply(&output, board, &script, strict)?
        }
        Commands::Tui => tui::run(&output, board, &config.project.tui)?,
    }

    output.verbose("Command completed successfully");
    Ok(())
}

/// Picks the board's data source: `--seed`, then config, then the defaults
fn load_board(output: &Output, config: &Config, seed_arg: Option<PathBuf>) -> Result<Board> {
    match seed_arg.or_else(|| config.seed_path()) {
        Some(path) => {
            output.verbose_ctx("seed", &format!("Loading seed file: {}", path.display()));
            SeedFile::new(path).load()
        }
        None => {
            output.verbose_ctx("seed", "Using default board");
            Ok(seed::default_board())
        }
    }
}
