use std::path::PathBuf;

use clap::Parser;
use eol_sync::app::{RunOutcome, run};
use eol_sync::config::{LOG_FILE_ENV, LogConfig, NO_UPDATES_TOKEN, RunConfig, UPDATES_FOUND_TOKEN};

#[derive(Parser)]
#[command(name = "eol-sync")]
#[command(
    version,
    about = "Update an endoflife.date release document from a vendor version feed"
)]
struct Cli {
    /// Vendor version feed (JSON, UTF-8 or UTF-16)
    #[arg(long = "json", value_name = "PATH")]
    feed: PathBuf,

    /// Registry document to check
    #[arg(long = "md", value_name = "PATH")]
    document: PathBuf,

    /// Where to write the updated document
    #[arg(long, value_name = "PATH")]
    output: PathBuf,

    /// Also write logs to this file
    #[arg(long, value_name = "PATH", env = LOG_FILE_ENV)]
    log_file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let _guard = eol_sync::logging::init(&LogConfig {
        verbosity: cli.verbose,
        file: cli.log_file,
    })?;

    let outcome = run(&RunConfig {
        feed_path: cli.feed,
        document_path: cli.document,
        output_path: cli.output,
    })?;

    match outcome {
        RunOutcome::NoUpdates => println!("{NO_UPDATES_TOKEN}"),
        RunOutcome::Updated(changes) => {
            println!("{UPDATES_FOUND_TOKEN}");
            for change in changes {
                println!("{change}");
            }
        }
    }

    Ok(())
}
