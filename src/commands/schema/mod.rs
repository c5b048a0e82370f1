mod execute;
mod output;

pub use execute::SchemaResult;

use std::error::Error;

use clap::Args;

use crate::cli::Settings;
use crate::commands::{run_scoped, CommandRunner};
use crate::output::OutputFormat;

/// Show each table's columns with their declared types
#[derive(Args, Debug, Default)]
#[command(after_help = "\
Examples:
  sqlpeek schema                 # Every table
  sqlpeek schema -t Employee     # One table")]
pub struct SchemaCmd {
    /// Only describe this table
    #[arg(short, long)]
    pub table: Option<String>,
}

impl CommandRunner for SchemaCmd {
    fn run(self, settings: &Settings, format: OutputFormat) -> Result<String, Box<dyn Error>> {
        run_scoped(self, settings, format)
    }
}
