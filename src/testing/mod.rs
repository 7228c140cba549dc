//! Fixture Test Harness
//!
//! Loads the test cases of a fixture directory and hands them to a
//! pluggable runner.

mod harness;
mod runner;

pub use harness::Harness;
pub use runner::{RunSummary, TestFailure, TestOutcome, TestRunner, UnimplementedRunner};
