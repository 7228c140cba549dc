//! Test execution seam
//!
//! Discovery decides *which* tests exist; a [`TestRunner`] decides what
//! running one means. The default runner has no execution behavior and says
//! so through [`Error::NotImplemented`].

use std::path::Path;

use crate::common::{Error, Result};
use crate::fixture::{NamingConvention, TestCase};

/// Outcome of running a single test case
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestOutcome {
    Passed,
    Failed { reason: String },
}

/// Executes matched test cases against the program under test
pub trait TestRunner {
    /// Run `case`, whose fixtures live in `directory` and are named by
    /// `convention`
    ///
    /// A returned error aborts the whole run; a failing test is
    /// `Ok(TestOutcome::Failed { .. })`.
    fn run(
        &self,
        case: &TestCase,
        directory: &Path,
        convention: &NamingConvention,
    ) -> Result<TestOutcome>;
}

/// Runner used until test execution exists
#[derive(Debug, Default, Clone, Copy)]
pub struct UnimplementedRunner;

impl TestRunner for UnimplementedRunner {
    fn run(&self, _: &TestCase, _: &Path, _: &NamingConvention) -> Result<TestOutcome> {
        Err(Error::not_implemented("Running fixture tests"))
    }
}

/// A test that ran and failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestFailure {
    pub name: String,
    pub reason: String,
}

/// Tally of a completed run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub passed: Vec<String>,
    pub failed: Vec<TestFailure>,
}

impl RunSummary {
    pub fn total(&self) -> usize {
        self.passed.len() + self.failed.len()
    }

    pub fn all_passed(&self) -> bool {
        self.failed.is_empty()
    }

    pub(crate) fn record(&mut self, name: &str, outcome: TestOutcome) {
        match outcome {
            TestOutcome::Passed => self.passed.push(name.to_string()),
            TestOutcome::Failed { reason } => self.failed.push(TestFailure {
                name: name.to_string(),
                reason,
            }),
        }
    }
}
