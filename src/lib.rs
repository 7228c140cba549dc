//! Fixture Runner - input/expected fixture discovery for CLI testing
//!
//! This library finds `<name>-input.txt` / `<name>-expected.txt` pairs in a
//! directory, reports files it cannot pair, and exposes the matched tests to
//! a pluggable runner.

pub mod cli;
pub mod commands;
pub mod common;
pub mod fixture;
pub mod report;
pub mod testing;

// Re-export the types library callers need to plug in their own reporter
pub use common::{Error, Result};
pub use fixture::{NamingConvention, Role, TestCase};
pub use report::Reporter;
