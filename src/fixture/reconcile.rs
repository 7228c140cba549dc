//! Pairing of input and expected fixtures
//!
//! Inputs and expected outputs are collected into two name lists, sorted
//! independently and swept with two cursors. Equal fronts become a
//! [`TestCase`]; a smaller front has no partner on the other side and is
//! reported as an anomaly. Every listed file ends up in exactly one report.

use std::cmp::Ordering;
use std::path::Path;

use tracing::debug;

use super::naming::{NamingConvention, Role};
use super::TestCase;
use crate::report::Reporter;

/// Reconcile a directory listing into test cases
///
/// Unknown entries are reported first, in listing order. Orphaned inputs and
/// expected outputs are then reported interleaved with the loaded tests in
/// ascending name order. Duplicate names within one role are not collapsed:
/// each copy is consumed against at most one partner and the surplus is
/// reported as an orphan.
pub fn reconcile<I, S, R>(
    convention: &NamingConvention,
    file_names: I,
    directory: &Path,
    reporter: &mut R,
) -> Vec<TestCase>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    R: Reporter + ?Sized,
{
    let mut inputs = Vec::new();
    let mut expecteds = Vec::new();

    for file_name in file_names {
        let entry = convention.classify(file_name.as_ref());
        debug!(
            file = %entry.raw_filename,
            role = ?entry.role,
            name = %entry.test_name,
            "Classified fixture entry"
        );
        match entry.role {
            Role::Input => inputs.push(entry.test_name),
            Role::Expected => expecteds.push(entry.test_name),
            Role::Unknown => reporter.report_anomaly(&entry.raw_filename, directory),
        }
    }

    inputs.sort();
    expecteds.sort();

    let mut tests = Vec::new();
    let (mut i, mut e) = (0, 0);

    while i < inputs.len() && e < expecteds.len() {
        match inputs[i].cmp(&expecteds[e]) {
            Ordering::Less => {
                report_orphan(convention, &inputs[i], Role::Input, directory, reporter);
                i += 1;
            }
            Ordering::Greater => {
                report_orphan(convention, &expecteds[e], Role::Expected, directory, reporter);
                e += 1;
            }
            Ordering::Equal => {
                debug!(name = %inputs[i], "Matched fixture pair");
                reporter.report_loaded(&inputs[i], directory);
                tests.push(TestCase::new(inputs[i].clone()));
                i += 1;
                e += 1;
            }
        }
    }

    for name in &inputs[i..] {
        report_orphan(convention, name, Role::Input, directory, reporter);
    }
    for name in &expecteds[e..] {
        report_orphan(convention, name, Role::Expected, directory, reporter);
    }

    tests
}

fn report_orphan<R: Reporter + ?Sized>(
    convention: &NamingConvention,
    test_name: &str,
    role: Role,
    directory: &Path,
    reporter: &mut R,
) {
    if let Some(file_name) = convention.file_name(test_name, role) {
        debug!(file = %file_name, "Fixture has no counterpart");
        reporter.report_anomaly(&file_name, directory);
    }
}
