//! Human-readable console reporter

use std::io::{self, Write};
use std::path::Path;

use tracing::warn;

use super::style::{colorize, Style};
use super::Reporter;

/// Prints prefixed, optionally colored, lines to a writer
pub struct ConsoleReporter<W: Write> {
    out: W,
    use_color: bool,
}

impl ConsoleReporter<io::Stdout> {
    /// Reporter writing to stdout
    pub fn stdout(use_color: bool) -> Self {
        Self::new(io::stdout(), use_color)
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W, use_color: bool) -> Self {
        Self { out, use_color }
    }

    /// Consume the reporter and return its writer
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Print `Warning: <message>`
    pub fn println_warning(&mut self, message: &str) {
        let prefix = self.style("Warning", Style::BoldYellow);
        self.println(&format!("{prefix}: {message}"));
    }

    /// Print `Error: <message>`
    pub fn println_error(&mut self, message: &str) {
        let prefix = self.style("Error", Style::BoldRed);
        self.println(&format!("{prefix}: {message}"));
    }

    /// Print a plain line
    pub fn println(&mut self, line: &str) {
        if let Err(e) = writeln!(self.out, "{line}") {
            warn!("Failed to write report line: {}", e);
        }
    }

    fn style(&self, text: &str, style: Style) -> String {
        if self.use_color {
            colorize(text, style)
        } else {
            text.to_string()
        }
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn report_anomaly(&mut self, file_name: &str, directory: &Path) {
        let file_name = self.style(file_name, Style::Magenta);
        self.println_warning(&format!(
            "Not sure what to do with file '{}' in {}",
            file_name,
            directory.display()
        ));
    }

    fn report_loaded(&mut self, test_name: &str, directory: &Path) {
        let prefix = self.style("Loading test", Style::BoldCyan);
        let test_name = self.style(test_name, Style::Magenta);
        self.println(&format!(
            "{}: '{}' in {}",
            prefix,
            test_name,
            directory.display()
        ));
    }
}
