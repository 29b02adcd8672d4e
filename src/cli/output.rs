//! Output formatting for CLI commands
//!
//! Results go to stdout, diagnostics to stderr. In JSON mode every line
//! written is a complete JSON document.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::json;

use crate::storage;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl From<storage::OutputFormat> for OutputFormat {
    fn from(format: storage::OutputFormat) -> Self {
        match format {
            storage::OutputFormat::Text => OutputFormat::Text,
            storage::OutputFormat::Json => OutputFormat::Json,
        }
    }
}

/// Writes command results in the selected format
pub struct Output {
    format: OutputFormat,
    verbose: bool,
}

impl Output {
    pub fn new(format: OutputFormat, verbose: bool) -> Self {
        Self { format, verbose }
    }

    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }

    /// Prints a summary line to stdout
    pub fn success(&self, message: &str) {
        match self.format {
            OutputFormat::Text => println!("{message}"),
            OutputFormat::Json => println!("{}", status_json(true, message)),
        }
    }

    /// Prints an error line to stderr
    pub fn error(&self, message: &str) {
        match self.format {
            OutputFormat::Text => eprintln!("Error: {message}"),
            OutputFormat::Json => eprintln!("{}", status_json(false, message)),
        }
    }

    /// Prints `data` as a single line of JSON
    pub fn data<T: Serialize>(&self, data: &T) -> Result<()> {
        let line = serde_json::to_string(data).context("Failed to serialize output")?;
        println!("{line}");
        Ok(())
    }

    /// Debug line on stderr, shown with `--verbose`
    pub fn verbose(&self, message: &str) {
        if self.verbose {
            eprintln!("[verbose] {message}");
        }
    }

    /// Like [`verbose`](Self::verbose), tagged with the subsystem it came from
    pub fn verbose_ctx(&self, context: &str, message: &str) {
        if self.verbose {
            eprintln!("[verbose:{context}] {message}");
        }
    }
}

fn status_json(success: bool, message: &str) -> serde_json::Value {
    if success {
        json!({ "success": true, "message": message })
    } else {
        json!({ "success": false, "error": message })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_json_shapes() {
        assert_eq!(
            status_json(true, "Rejected 0 intent(s)"),
            json!({ "success": true, "message": "Rejected 0 intent(s)" })
        );
        assert_eq!(
            status_json(false, "line 3: create_list: bad"),
            json!({ "success": false, "error": "line 3: create_list: bad" })
        );
    }

    #[test]
    fn format_follows_config_default() {
        let format: OutputFormat = storage::OutputFormat::Json.into();
        assert!(Output::new(format, false).is_json());
        assert!(!Output::new(OutputFormat::default(), true).is_json());
    }
}
