//! # Storage Layer
//!
//! Read-only data sources for the board. Nothing is ever written back:
//! the board lives in memory for the length of one process.
//!
//! ## Formats
//!
//! | Data | Format | Location |
//! |------|--------|----------|
//! | Seed board | JSON `{lists, tasks}` | `--seed FILE` or `[board] seed` |
//! | Intent script | JSONL (one intent per line) | `kanban apply FILE` |
//! | Config | TOML | `.kanban/config.toml`, global config dir |
//!
//! ## Key Types
//!
//! - [`SeedFile`] - Load a board from JSON
//! - [`IntentScript`] - Read intents to replay
//! - [`Config`] - Project and global configuration

mod config;
mod script;
mod seed_file;

pub use config::{Config, ConfigError, OutputFormat, ProjectConfig, TuiConfig, PROJECT_DIR};
pub use script::{parse_script, IntentScript, ScriptLine};
pub use seed_file::{parse_board, SeedFile};
