//! Fixture runner - pairs input/expected fixture files and runs them
//!
//! Scans a directory for `<name>-input.<ext>` / `<name>-expected.<ext>`
//! pairs, warns about anything it cannot pair, and runs the matched tests.

use clap::Parser;
use fixture_runner::commands::Commands;
use fixture_runner::{cli, common::logging};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "fixture-runner", about = "Input/expected fixture test runner")]
#[command(version, long_about = None)]
struct Cli {
    /// Configuration file (default: platform config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    logging::init_cli();

    let cli = Cli::parse();

    match cli::dispatch(cli.command, cli.config.as_deref()) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
