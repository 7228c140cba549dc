//! Fixture discovery
//!
//! Turns a flat directory listing into test cases: [`naming`] classifies
//! each filename and [`reconcile`] pairs inputs with expected outputs.

pub mod naming;
pub mod reconcile;

use std::path::{Path, PathBuf};

pub use naming::{FixtureEntry, NamingConvention, Role};
pub use reconcile::reconcile;

/// An input fixture matched with its expected output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    pub name: String,
}

impl TestCase {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Path of the input fixture inside `directory`
    pub fn input_path(&self, directory: &Path, convention: &NamingConvention) -> PathBuf {
        self.fixture_path(directory, convention, Role::Input)
    }

    /// Path of the expected-output fixture inside `directory`
    pub fn expected_path(&self, directory: &Path, convention: &NamingConvention) -> PathBuf {
        self.fixture_path(directory, convention, Role::Expected)
    }

    fn fixture_path(&self, directory: &Path, convention: &NamingConvention, role: Role) -> PathBuf {
        // Input and Expected always have a canonical file name
        let file_name = convention.file_name(&self.name, role).unwrap_or_default();
        directory.join(file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_paths() {
        let case = TestCase::new("weird-extra");
        let convention = NamingConvention::default();
        let dir = Path::new("tests/data");
        assert_eq!(
            case.input_path(dir, &convention),
            PathBuf::from("tests/data/weird-extra-input.txt")
        );
        assert_eq!(
            case.expected_path(dir, &convention),
            PathBuf::from("tests/data/weird-extra-expected.txt")
        );
    }
}
