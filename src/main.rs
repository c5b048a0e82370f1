use clap::Parser;

use sqlpeek::cli::{Args, Settings};
use sqlpeek::commands::{CommandRunner, PartialOutput};
use sqlpeek::config::ConfigFile;
use sqlpeek::logging;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    logging::init(args.verbose);

    let config = ConfigFile::load()?;
    let settings = Settings::resolve(args.db.as_deref(), config.as_ref());
    tracing::debug!(db = %settings.db_path.display(), "resolved settings");

    match args.command.unwrap_or_default().run(&settings, args.format) {
        Ok(output) => {
            println!("{}", output);
            Ok(())
        }
        Err(err) => {
            if let Some(partial) = err.downcast_ref::<PartialOutput>() {
                println!("{}", partial.output);
            }
            Err(err)
        }
    }
}
