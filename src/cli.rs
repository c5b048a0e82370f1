//! CLI argument definitions.
//!
//! This module contains the top-level CLI structure and the settings shared
//! by every command. Individual command definitions are in the `commands`
//! module.

use clap::{ArgAction, Parser};
use std::path::PathBuf;

use crate::commands::Command;
use crate::config::ConfigFile;
use crate::db::DEFAULT_TABLE;
use crate::frame::{RenderOptions, DEFAULT_HEAD};
use crate::output::OutputFormat;

/// Database file used when neither `--db` nor the config file names one.
pub const DEFAULT_DB_PATH: &str = "Chinook.sqlite";

const SQLITE_URL_PREFIX: &str = "sqlite:///";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the SQLite database file (a `sqlite:///` URL is also accepted)
    ///
    /// If not specified, uses `database.path` from .sqlpeek.json, then
    /// ./Chinook.sqlite
    #[arg(long, global = true)]
    pub db: Option<String>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Defaults to `inspect` when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Values resolved from flags, the config file, and built-in defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub db_path: PathBuf,
    pub table: String,
    pub head: usize,
    pub render: RenderOptions,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            table: DEFAULT_TABLE.to_string(),
            head: DEFAULT_HEAD,
            render: RenderOptions::default(),
        }
    }
}

impl Settings {
    pub fn resolve(explicit_db: Option<&str>, config: Option<&ConfigFile>) -> Self {
        let defaults = Settings::default();
        let Some(config) = config else {
            return Settings {
                db_path: resolve_db_path(explicit_db, None),
                ..defaults
            };
        };

        Settings {
            db_path: resolve_db_path(explicit_db, config.database.path.as_deref()),
            table: config.display.table.clone().unwrap_or(defaults.table),
            head: config.display.head.map_or(defaults.head, |h| h as usize),
            render: RenderOptions {
                max_col_width: config
                    .display
                    .max_col_width
                    .unwrap_or(defaults.render.max_col_width),
            },
        }
    }
}

/// Pick the database location: explicit flag, then config, then the default.
pub fn resolve_db_path(explicit: Option<&str>, configured: Option<&str>) -> PathBuf {
    explicit
        .or(configured)
        .map(parse_db_location)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_PATH))
}

/// Accept either a file path or a `sqlite:///<path>` URL.
pub fn parse_db_location(location: &str) -> PathBuf {
    PathBuf::from(location.strip_prefix(SQLITE_URL_PREFIX).unwrap_or(location))
}
