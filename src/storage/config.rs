//! Configuration handling for the kanban board
//!
//! Configuration is stored in `.kanban/config.toml` (project) and
//! `~/.config/kanban-board/config.toml` (global).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Name of the per-project configuration directory
pub const PROJECT_DIR: &str = ".kanban";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// Where the board's initial contents come from
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct BoardConfig {
    /// JSON seed file, relative to the project root; the built-in default
    /// board is used when unset
    pub seed: Option<PathBuf>,
}

/// Terminal UI settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// Event poll interval in milliseconds
    pub tick_rate_ms: u64,

    /// Characters of a task title shown before truncation
    pub title_width: usize,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 250,
            title_width: 25,
        }
    }
}

/// Project-level configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ProjectConfig {
    pub board: BoardConfig,
    pub tui: TuiConfig,
}

/// Global user configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GlobalConfig {
    /// Default output format (text or json)
    pub default_format: OutputFormat,
}

/// Output format for commands
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Combined configuration (global + project)
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub project: ProjectConfig,
    pub global: GlobalConfig,
    pub project_root: Option<PathBuf>,
}

impl Config {
    /// Loads configuration from default locations
    pub fn load() -> Result<Self> {
        let global = Self::load_global()?;
        let project_root = std::env::current_dir()
            .ok()
            .and_then(|dir| Self::find_project_root(&dir));

        let project = match &project_root {
            Some(root) => Self::load_project_config(root)?,
            None => ProjectConfig::default(),
        };

        Ok(Self {
            project,
            global,
            project_root,
        })
    }

    /// Returns the global config directory
    pub fn global_config_dir() -> Option<PathBuf> {
        ProjectDirs::from("dev", "kanban", "kanban-board").map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Loads global configuration
    fn load_global() -> Result<GlobalConfig> {
        let config_dir = match Self::global_config_dir() {
            Some(dir) => dir,
            None => return Ok(GlobalConfig::default()),
        };

        let config_path = config_dir.join("config.toml");
        if !config_path.exists() {
            return Ok(GlobalConfig::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read global config: {}", config_path.display()))?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::Parse(e.to_string()))
            .context("Failed to parse global config")
    }

    /// Loads project configuration from a specific root
    pub fn load_project_config(project_root: &Path) -> Result<ProjectConfig> {
        let config_path = project_root.join(PROJECT_DIR).join("config.toml");

        if !config_path.exists() {
            return Ok(ProjectConfig::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read project config: {}", config_path.display()))?;

        let config: ProjectConfig = toml::from_str(&content)
            .map_err(|e| ConfigError::Parse(e.to_string()))
            .context("Failed to parse project config")?;

        if config.tui.tick_rate_ms == 0 {
            return Err(ConfigError::Invalid("tui.tick_rate_ms must be greater than 0".to_string()))
                .context("Invalid project config");
        }

        Ok(config)
    }

    /// Finds the project root by looking for a `.kanban/` directory at or
    /// above `start`
    pub fn find_project_root(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();

        loop {
            if current.join(PROJECT_DIR).is_dir() {
                return Some(current);
            }

            if !current.pop() {
                return None;
            }
        }
    }

    /// The configured seed file, resolved against the project root
    pub fn seed_path(&self) -> Option<PathBuf> {
        let seed = self.project.board.seed.as_ref()?;
        match &self.project_root {
            Some(root) if seed.is_relative() => Some(root.join(seed)),
            _ => Some(seed.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config() {
        let config = Config::default();

        assert_eq!(config.project.tui.tick_rate_ms, 250);
        assert_eq!(config.project.tui.title_width, 25);
        assert_eq!(config.global.default_format, OutputFormat::Text);
        assert!(config.seed_path().is_none());
    }

    #[test]
    fn parse_project_config() {
        let toml = r#"
[board]
seed = "boards/sprint.json"

[tui]
title_width = 40
"#;

        let config: ProjectConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.board.seed, Some(PathBuf::from("boards/sprint.json")));
        assert_eq!(config.tui.title_width, 40);
        assert_eq!(config.tui.tick_rate_ms, 250);
    }

    #[test]
    fn parse_global_config() {
        let toml = r#"
default_format = "json"
"#;

        let config: GlobalConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.default_format, OutputFormat::Json);
    }

    #[test]
    fn find_project_root_walks_up() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join(PROJECT_DIR)).unwrap();

        let sub_dir = dir.path().join("sub").join("dir");
        fs::create_dir_all(&sub_dir).unwrap();

        let root = Config::find_project_root(&sub_dir);
        assert_eq!(root.as_deref(), Some(dir.path()));
    }

    #[test]
    fn relative_seed_resolves_against_project_root() {
        let config = Config {
            project: ProjectConfig {
                board: BoardConfig {
                    seed: Some(PathBuf::from("seed.json")),
                },
                tui: TuiConfig::default(),
            },
            global: GlobalConfig::default(),
            project_root: Some(PathBuf::from("/work/board")),
        };

        assert_eq!(config.seed_path(), Some(PathBuf::from("/work/board/seed.json")));
    }

    #[test]
    fn load_project_config_from_file() {
        let dir = TempDir::new().unwrap();
        let kanban_dir = dir.path().join(PROJECT_DIR);
        fs::create_dir_all(&kanban_dir).unwrap();
        fs::write(kanban_dir.join("config.toml"), "[tui]\ntick_rate_ms = 100\n").unwrap();

        let config = Config::load_project_config(dir.path()).unwrap();
        assert_eq!(config.tui.tick_rate_ms, 100);
    }

    #[test]
    fn zero_tick_rate_is_rejected() {
        let dir = TempDir::new().unwrap();
        let kanban_dir = dir.path().join(PROJECT_DIR);
        fs::create_dir_all(&kanban_dir).unwrap();
        fs::write(kanban_dir.join("config.toml"), "[tui]\ntick_rate_ms = 0\n").unwrap();

        assert!(Config::load_project_config(dir.path()).is_err());
    }

    #[test]
    fn malformed_config_is_a_parse_error() {
        let dir = TempDir::new().unwrap();
        let kanban_dir = dir.path().join(PROJECT_DIR);
        fs::create_dir_all(&kanban_dir).unwrap();
        fs::write(kanban_dir.join("config.toml"), "[tui\n").unwrap();

        let err = Config::load_project_config(dir.path()).unwrap_err();
        assert!(err.downcast_ref::<ConfigError>().is_some());
    }
}
