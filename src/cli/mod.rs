//! CLI command handling
//!
//! Builds a harness from the command line and configuration, then formats
//! the results.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::commands::{Commands, FixtureArgs};
use crate::common::config::Config;
use crate::common::paths::DEFAULT_FIXTURE_DIR;
use crate::common::Result;
use crate::report::{ConsoleReporter, JsonReporter};
use crate::testing::{Harness, UnimplementedRunner};

/// Dispatch a CLI command
///
/// Problems with the test run itself are printed through the console
/// reporter and turn into a failing exit code. Returned errors are setup
/// failures (config, unreadable directory) that `main` prints.
pub fn dispatch(command: Commands, config_path: Option<&Path>) -> Result<ExitCode> {
    let config = Config::load(config_path)?;

    match command {
        Commands::Discover { fixtures, json } => {
            let mut harness = build_harness(&fixtures, &config)?;

            if json {
                let mut reporter = JsonReporter::stdout();
                harness.load_tests(&mut reporter)?;
            } else {
                let mut reporter = console_reporter(&fixtures, &config);
                let count = harness.load_tests(&mut reporter)?;
                reporter.println(&format!(
                    "Loaded {} test(s) from {}",
                    count,
                    harness.directory().display()
                ));
            }

            Ok(ExitCode::SUCCESS)
        }

        Commands::Run { fixtures } => {
            let mut harness = build_harness(&fixtures, &config)?;
            let mut reporter = console_reporter(&fixtures, &config);
            harness.load_tests(&mut reporter)?;

            let summary = match harness.run_tests(&UnimplementedRunner) {
                Ok(summary) => summary,
                Err(e) => {
                    reporter.println_error(&e.to_string());
                    return Ok(ExitCode::FAILURE);
                }
            };
            for failure in &summary.failed {
                reporter.println_error(&format!("{}: {}", failure.name, failure.reason));
            }
            reporter.println(&format!(
                "{} passed / {} failed",
                summary.passed.len(),
                summary.failed.len()
            ));

            if summary.all_passed() {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::FAILURE)
            }
        }
    }
}

fn build_harness(args: &FixtureArgs, config: &Config) -> Result<Harness> {
    let directory = args
        .dir
        .clone()
        .or_else(|| config.fixtures.directory.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_FIXTURE_DIR));

    let mut convention = config.fixtures.naming.clone();
    if let Some(extension) = &args.extension {
        convention.extension = extension.clone();
        convention.validate()?;
    }

    Ok(Harness::new(directory, convention))
}

fn console_reporter(args: &FixtureArgs, config: &Config) -> ConsoleReporter<std::io::Stdout> {
    let use_color = args.color || config.output.color;
    if use_color {
        // Asking for color means color, even through a pipe
        colored::control::set_override(true);
    }
    ConsoleReporter::stdout(use_color)
}
