//! Fixture directory harness
//!
//! Owns the list of test cases discovered in one directory for the duration
//! of a run.

use std::path::{Path, PathBuf};

use tracing::debug;

use super::runner::{RunSummary, TestRunner};
use crate::common::{Error, Result};
use crate::fixture::{reconcile, NamingConvention, TestCase};
use crate::report::Reporter;

/// Discovers and runs the fixture tests of a single directory
#[derive(Debug)]
pub struct Harness {
    directory: PathBuf,
    convention: NamingConvention,
    tests: Vec<TestCase>,
}

impl Harness {
    pub fn new(directory: impl Into<PathBuf>, convention: NamingConvention) -> Self {
        Self {
            directory: directory.into(),
            convention,
            tests: Vec::new(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Tests loaded so far, sorted by name
    pub fn tests(&self) -> &[TestCase] {
        &self.tests
    }

    /// List the directory and load every matched test
    ///
    /// Anomalies and loaded tests go to `reporter` as they are found. Names
    /// that are not valid UTF-8 cannot follow the naming convention and are
    /// reported as anomalies before pairing starts. Returns the number of
    /// tests added. Only an unreadable directory is an error; nothing about
    /// the entries themselves is.
    pub fn load_tests<R: Reporter + ?Sized>(&mut self, reporter: &mut R) -> Result<usize> {
        let read_dir = std::fs::read_dir(&self.directory)
            .map_err(|e| Error::directory_read(&self.directory, e))?;

        let mut file_names = Vec::new();
        for entry in read_dir {
            let entry = entry.map_err(|e| Error::directory_read(&self.directory, e))?;
            match entry.file_name().into_string() {
                Ok(name) => file_names.push(name),
                Err(os_name) => {
                    debug!(file = ?os_name, "Fixture name is not valid UTF-8");
                    reporter.report_anomaly(&os_name.to_string_lossy(), &self.directory);
                }
            }
        }
        debug!(dir = %self.directory.display(), entries = file_names.len(), "Listed fixture directory");

        let loaded = reconcile(&self.convention, &file_names, &self.directory, reporter);
        let count = loaded.len();
        self.tests.extend(loaded);

        debug!(dir = %self.directory.display(), count, "Loaded fixture tests");
        Ok(count)
    }

    /// Run every loaded test, in order, through `runner`
    ///
    /// The runner is never invoked when no tests are loaded. The first
    /// runner error stops the run and is returned.
    pub fn run_tests(&self, runner: &dyn TestRunner) -> Result<RunSummary> {
        let mut summary = RunSummary::default();
        for case in &self.tests {
            debug!(name = %case.name, "Running test");
            let outcome = runner.run(case, &self.directory, &self.convention)?;
            summary.record(&case.name, outcome);
        }
        Ok(summary)
    }
}
