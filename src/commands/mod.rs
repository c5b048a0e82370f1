//! Command definitions and implementations.
//!
//! Each command is defined in its own module with:
//! - The command struct with clap attributes for CLI parsing (`mod.rs`)
//! - The `Execute` impl and its result type (`execute.rs`)
//! - The `Outputable` impl for table rendering (`output.rs`)

pub mod inspect;
pub mod query;
pub mod schema;
pub mod tables;

pub use inspect::InspectCmd;
pub use query::QueryCmd;
pub use schema::SchemaCmd;
pub use tables::TablesCmd;

use std::error::Error;

use clap::Subcommand;
use enum_dispatch::enum_dispatch;
use thiserror::Error;

use crate::cli::Settings;
use crate::db::{with_connection, Database, DbError};
use crate::output::{OutputFormat, Outputable};

/// Trait for executing commands with command-specific result types.
pub trait Execute {
    type Output: Outputable;

    fn execute(self, db: &Database, settings: &Settings) -> Result<Self::Output, Box<dyn Error>>;
}

/// Runs a parsed command end to end and returns its formatted output.
#[enum_dispatch]
pub trait CommandRunner {
    fn run(self, settings: &Settings, format: OutputFormat) -> Result<String, Box<dyn Error>>;
}

#[enum_dispatch(CommandRunner)]
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List tables, then show the first rows of one table (the default)
    Inspect(InspectCmd),

    /// List table names, optionally filtered
    Tables(TablesCmd),

    /// Show each table's columns and declared types
    Schema(SchemaCmd),

    /// Run a read-only SQL statement and show the first rows
    Query(QueryCmd),
}

impl Default for Command {
    fn default() -> Self {
        Command::Inspect(InspectCmd::default())
    }
}

/// A failed command that still produced output to print before the error.
#[derive(Error, Debug)]
#[error("{source}")]
pub struct PartialOutput {
    pub output: String,
    pub source: DbError,
}

/// Execute `cmd` inside a scoped connection, then format the result.
///
/// The connection is released before formatting starts.
pub fn run_scoped<C: Execute>(
    cmd: C,
    settings: &Settings,
    format: OutputFormat,
) -> Result<String, Box<dyn Error>> {
    let result = with_connection(&settings.db_path, |db| cmd.execute(db, settings))?;
    Ok(result.format(format))
}
