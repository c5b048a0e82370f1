mod cli_tests;
mod execute;
mod execute_tests;
mod output;

pub use execute::TablesResult;

use std::error::Error;

use clap::Args;

use crate::cli::Settings;
use crate::commands::{run_scoped, CommandRunner};
use crate::output::OutputFormat;

/// List table names in the database
#[derive(Args, Debug, Default)]
#[command(after_help = "\
Examples:
  sqlpeek tables                   # All tables
  sqlpeek tables Invoice           # Tables containing 'Invoice'
  sqlpeek tables '^(Album|Artist)$' -r  # Regex match")]
pub struct TablesCmd {
    /// Name filter (substring match by default, regex with --regex)
    pub pattern: Option<String>,

    /// Treat pattern as a regular expression
    #[arg(short, long, default_value_t = false)]
    pub regex: bool,
}

impl CommandRunner for TablesCmd {
    fn run(self, settings: &Settings, format: OutputFormat) -> Result<String, Box<dyn Error>> {
        run_scoped(self, settings, format)
    }
}
