mod execute;
mod execute_tests;
mod output;

pub use execute::QueryOutput;

use std::error::Error;

use clap::Args;

use crate::cli::Settings;
use crate::commands::{run_scoped, CommandRunner};
use crate::output::OutputFormat;

/// Run a read-only SQL statement and show the first rows
///
/// Statements that would modify the database are rejected.
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  sqlpeek query 'SELECT * FROM Employee'                  # First 5 rows
  sqlpeek query 'SELECT Title FROM Album' -n 20           # First 20 rows
  sqlpeek query 'SELECT COUNT(*) AS n FROM Track' --all   # Every row")]
pub struct QueryCmd {
    /// SQL statement to run
    pub sql: String,

    /// Number of rows to show (1-1000, default 5)
    #[arg(short = 'n', long, value_parser = clap::value_parser!(u32).range(1..=1000))]
    pub head: Option<u32>,

    /// Show every row instead of the first few
    #[arg(long, default_value_t = false, conflicts_with = "head")]
    pub all: bool,
}

impl CommandRunner for QueryCmd {
    fn run(self, settings: &Settings, format: OutputFormat) -> Result<String, Box<dyn Error>> {
        run_scoped(self, settings, format)
    }
}
