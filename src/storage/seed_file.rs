//! JSON seed files
//!
//! A seed file holds the board's initial contents:
//!
//! ```json
//! {
//!   "lists": [{ "id": 1020, "title": "To do" }],
//!   "tasks": [{ "id": 1, "listId": 1020, "title": "Fix", "description": "" }]
//! }
//! ```
//!
//! Files are only read; the board is never written back.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::domain::{Board, List, Task};

#[derive(Debug, Deserialize)]
struct BoardFile {
    lists: Vec<List>,
    #[serde(default)]
    tasks: Vec<Task>,
}

/// Reader for a JSON seed file
pub struct SeedFile {
    path: PathBuf,
}

impl SeedFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path to the seed file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads and validates the seed, producing a ready board
    pub fn load(&self) -> Result<Board> {
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read seed file: {}", self.path.display()))?;

        parse_board(&content)
            .with_context(|| format!("Invalid seed file: {}", self.path.display()))
    }
}

/// Builds a board from seed JSON
pub fn parse_board(content: &str) -> Result<Board> {
    let file: BoardFile = serde_json::from_str(content).context("Failed to parse board JSON")?;
    Ok(Board::from_parts(file.lists, file.tasks)?)
}
