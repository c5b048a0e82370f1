//! Configuration file handling.
//!
//! This module loads the optional `.sqlpeek.json` file. The working directory
//! is checked first, then the user's home directory. Every field is optional
//! and command-line flags take precedence over anything set here.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const CONFIG_FILE_NAME: &str = ".sqlpeek.json";

/// Accepted values for `display.head`, matching the `--head` flag.
pub const HEAD_RANGE: std::ops::RangeInclusive<u32> = 1..=1000;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid value in {path}: {message}")]
    Invalid { path: String, message: String },
}

/// Top-level configuration file structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub database: DatabaseSection,
    pub display: DisplaySection,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DatabaseSection {
    /// Database file; accepts a plain path or a `sqlite:///` URL
    pub path: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplaySection {
    /// Table loaded by `inspect`
    pub table: Option<String>,
    /// Rows shown by `inspect` and `query`
    pub head: Option<u32>,
    pub max_col_width: Option<usize>,
}

impl ConfigFile {
    /// Load the first config file found, or `None` when there is none.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        for path in search_paths() {
            if path.exists() {
                tracing::debug!(path = %path.display(), "loading config file");
                return Self::load_from(&path).map(Some);
            }
        }
        Ok(None)
    }

    /// Load and parse a specific config file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;

        let config: Self = serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })?;

        config.validate().map_err(|message| ConfigError::Invalid {
            path: path.display().to_string(),
            message,
        })?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), String> {
        match self.display.head {
            Some(head) if !HEAD_RANGE.contains(&head) => Err(format!(
                "display.head must be between {} and {}, got {}",
                HEAD_RANGE.start(),
                HEAD_RANGE.end(),
                head
            )),
            _ => Ok(()),
        }
    }
}

fn search_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(CONFIG_FILE_NAME)];
    if let Some(home_dir) = home::home_dir() {
        paths.push(home_dir.join(CONFIG_FILE_NAME));
    }
    paths
}
