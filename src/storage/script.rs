//! JSONL intent scripts
//!
//! One [`Intent`] per line, for replaying a session without a terminal:
//!
//! ```text
//! # move "Fix" into Done
//! {"op":"drag_start","item":{"task":2}}
//! {"op":"drag_over","active":{"task":2},"over":{"list":6344}}
//! {"op":"drag_end","active":{"task":2},"over":{"list":6344}}
//! ```
//!
//! Blank lines and lines starting with `#` are skipped.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::domain::Intent;

/// An intent together with the script line it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptLine {
    pub line: usize,
    pub intent: Intent,
}

/// Reader for an intent script; `-` reads standard input
pub struct IntentScript {
    path: PathBuf,
}

impl IntentScript {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path to the script
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn is_stdin(&self) -> bool {
        self.path.as_os_str() == "-"
    }

    /// Reads every intent in the script
    pub fn read_all(&self) -> Result<Vec<ScriptLine>> {
        if self.is_stdin() {
            return parse_script(io::stdin().lock());
        }

        let file = File::open(&self.path)
            .with_context(|| format!("Failed to open script: {}", self.path.display()))?;

        parse_script(file)
            .with_context(|| format!("Invalid script: {}", self.path.display()))
    }
}

/// Parses intents from any line-oriented reader
pub fn parse_script<R: Read>(reader: R) -> Result<Vec<ScriptLine>> {
    let reader = BufReader::new(reader);
    let mut intents = Vec::new();

    for (line_num, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("Failed to read line {}", line_num + 1))?;
        let trimmed = line.trim();

        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let intent: Intent = serde_json::from_str(trimmed)
            .with_context(|| format!("Failed to parse intent at line {}", line_num + 1))?;

        intents.push(ScriptLine {
            line: line_num + 1,
            intent,
        });
    }

    Ok(intents)
}
