//! JSON lines reporter

use std::io::{self, Write};
use std::path::Path;

use tracing::warn;

use super::{ReportEvent, Reporter};
use crate::common::Result;

/// Writes one JSON object per event, one event per line
pub struct JsonReporter<W: Write> {
    out: W,
}

impl JsonReporter<io::Stdout> {
    /// Reporter writing to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> JsonReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, event: &ReportEvent) {
        if let Err(e) = self.write_event(event) {
            warn!("Failed to write report event: {}", e);
        }
    }

    fn write_event(&mut self, event: &ReportEvent) -> Result<()> {
        serde_json::to_writer(&mut self.out, event)?;
        writeln!(self.out)?;
        Ok(())
    }
}

impl<W: Write> Reporter for JsonReporter<W> {
    fn report_anomaly(&mut self, file_name: &str, directory: &Path) {
        self.emit(&ReportEvent::anomaly(file_name, directory));
    }

    fn report_loaded(&mut self, test_name: &str, directory: &Path) {
        self.emit(&ReportEvent::loaded(test_name, directory));
    }
}
