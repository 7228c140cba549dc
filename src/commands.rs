//! CLI command definitions
//!
//! Defines the clap commands for the fixture runner.

use clap::{Args, Subcommand};
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    /// Find paired fixtures and report what was loaded
    Discover {
        #[command(flatten)]
        fixtures: FixtureArgs,

        /// Emit one JSON object per event instead of text
        #[arg(long)]
        json: bool,
    },

    /// Find paired fixtures and run them against the program under test
    Run {
        #[command(flatten)]
        fixtures: FixtureArgs,
    },
}

/// Options shared by every command that scans a fixture directory
#[derive(Args)]
pub struct FixtureArgs {
    /// Directory holding the fixture files (default: tests/data)
    pub dir: Option<PathBuf>,

    /// Style output with ANSI colors even when not writing to a terminal
    #[arg(long)]
    pub color: bool,

    /// Fixture file extension, without the dot (default: txt)
    #[arg(long)]
    pub extension: Option<String>,
}
