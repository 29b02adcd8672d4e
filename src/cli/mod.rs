//! # Command-Line Interface
//!
//! User-facing commands and output formatting. Both front ends drive the
//! board only through [`Intent`](crate::domain::Intent)s.
//!
//! ## Commands
//!
//! | Command | Purpose |
//! |---------|---------|
//! | `show` | Print the board |
//! | `apply SCRIPT` | Replay a JSONL intent script, print the result |
//! | `tui` | Interactive board with keyboard drag and drop |
//!
//! `--format json` switches every command to one JSON document per line;
//! `--verbose` adds `[verbose:<area>]` debug lines on stderr. Call [`run()`]
//! to parse arguments and dispatch.

mod app;
mod output;
mod board_cmd;
mod tui;

pub use app::{Cli, Commands, run};
pub use output::{Output, OutputFormat};
