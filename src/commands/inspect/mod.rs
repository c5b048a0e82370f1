mod execute;
mod output;

pub use execute::{InspectResult, TableLoadError};

use std::error::Error;

use clap::Args;

use crate::cli::Settings;
use crate::commands::tables::TablesResult;
use crate::commands::{run_scoped, CommandRunner, PartialOutput};
use crate::output::{OutputFormat, Outputable};

/// List tables, then show the first rows of one table
///
/// Reflects the schema, runs `SELECT * FROM <table>` and prints the table
/// set followed by the first rows of the result.
#[derive(Args, Debug, Default)]
#[command(after_help = "\
Examples:
  sqlpeek                                # Tables + first 5 Employee rows
  sqlpeek inspect -t Customer            # First 5 Customer rows
  sqlpeek --db music.db inspect -n 10    # First 10 rows from another file")]
pub struct InspectCmd {
    /// Table to load (default: Employee, or display.table from the config)
    #[arg(short, long)]
    pub table: Option<String>,

    /// Number of rows to show (1-1000, default 5)
    #[arg(short = 'n', long, value_parser = clap::value_parser!(u32).range(1..=1000))]
    pub head: Option<u32>,
}

impl CommandRunner for InspectCmd {
    fn run(self, settings: &Settings, format: OutputFormat) -> Result<String, Box<dyn Error>> {
        run_scoped(self, settings, format).map_err(|err| match err.downcast::<TableLoadError>() {
            Ok(failed) => {
                let TableLoadError { tables, source } = *failed;
                let listing = TablesResult {
                    pattern: None,
                    tables,
                };
                Box::new(PartialOutput {
                    output: listing.format(format),
                    source,
                }) as Box<dyn Error>
            }
            Err(err) => err,
        })
    }
}
