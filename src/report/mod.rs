//! Reporting of discovery events
//!
//! Discovery only ever talks to a [`Reporter`]. How events are rendered
//! (colored console lines, JSON, an in-memory log) is up to the
//! implementation.

mod console;
mod json;
mod style;

use serde::Serialize;
use std::path::{Path, PathBuf};

pub use console::ConsoleReporter;
pub use json::JsonReporter;
pub use style::{colorize, Style};

/// Receiver of discovery events, called as each event happens
pub trait Reporter {
    /// A file in `directory` could not be paired or was not understood
    fn report_anomaly(&mut self, file_name: &str, directory: &Path);

    /// A test case was matched in `directory`
    fn report_loaded(&mut self, test_name: &str, directory: &Path);
}

/// One discovery event, as recorded or serialized
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ReportEvent {
    Anomaly { file_name: String, directory: PathBuf },
    Loaded { test_name: String, directory: PathBuf },
}

impl ReportEvent {
    fn anomaly(file_name: &str, directory: &Path) -> Self {
        Self::Anomaly {
            file_name: file_name.to_string(),
            directory: directory.to_path_buf(),
        }
    }

    fn loaded(test_name: &str, directory: &Path) -> Self {
        Self::Loaded {
            test_name: test_name.to_string(),
            directory: directory.to_path_buf(),
        }
    }
}

/// Reporter that keeps every event in memory
#[derive(Debug, Default)]
pub struct RecordingReporter {
    pub events: Vec<ReportEvent>,
}

impl RecordingReporter {
    /// File names of all anomalies, in report order
    pub fn anomalies(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|event| match event {
                ReportEvent::Anomaly { file_name, .. } => Some(file_name.as_str()),
                ReportEvent::Loaded { .. } => None,
            })
            .collect()
    }

    /// Names of all loaded tests, in report order
    pub fn loaded(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|event| match event {
                ReportEvent::Loaded { test_name, .. } => Some(test_name.as_str()),
                ReportEvent::Anomaly { .. } => None,
            })
            .collect()
    }
}

impl Reporter for RecordingReporter {
    fn report_anomaly(&mut self, file_name: &str, directory: &Path) {
        self.events.push(ReportEvent::anomaly(file_name, directory));
    }

    fn report_loaded(&mut self, test_name: &str, directory: &Path) {
        self.events.push(ReportEvent::loaded(test_name, directory));
    }
}
