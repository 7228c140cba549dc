//! Fixture filename parsing
//!
//! A fixture file is named `<test-name><delimiter><role>.<extension>`, for
//! example `two-words-input.txt`. The test name may itself contain the
//! delimiter; only the last token is the role.

use serde::Deserialize;

use crate::common::{Error, Result};

/// What part a fixture file plays in a test case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Fed to the program under test
    Input,
    /// Output the program is expected to produce
    Expected,
    /// Anything the parser could not place
    Unknown,
}

/// A single directory entry interpreted as (part of) a test case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureEntry {
    /// Filename exactly as it was listed
    pub raw_filename: String,
    /// Shared name that pairs an input with its expected output
    pub test_name: String,
    pub role: Role,
}

/// Rules for turning filenames into fixture entries
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NamingConvention {
    /// Fixture extension without the leading dot
    pub extension: String,
    /// Separator between the test name and the role token
    pub delimiter: String,
    /// Role token marking input files
    pub input_role: String,
    /// Role token marking expected-output files
    pub expected_role: String,
}

impl Default for NamingConvention {
    fn default() -> Self {
        Self {
            extension: "txt".to_string(),
            delimiter: "-".to_string(),
            input_role: "input".to_string(),
            expected_role: "expected".to_string(),
        }
    }
}

impl NamingConvention {
    /// Check that filenames can be parsed unambiguously with this convention
    pub fn validate(&self) -> Result<()> {
        if self.extension.is_empty() || self.extension.starts_with('.') {
            return Err(Error::Config(format!(
                "fixture extension must be non-empty and given without a leading dot, got '{}'",
                self.extension
            )));
        }
        if self.delimiter.is_empty() {
            return Err(Error::Config("fixture delimiter must not be empty".to_string()));
        }
        for role in [&self.input_role, &self.expected_role] {
            if role.is_empty() || role.contains(self.delimiter.as_str()) {
                return Err(Error::Config(format!(
                    "role token '{}' must be non-empty and must not contain the delimiter '{}'",
                    role, self.delimiter
                )));
            }
        }
        if self.input_role == self.expected_role {
            return Err(Error::Config(format!(
                "input and expected role tokens are both '{}'",
                self.input_role
            )));
        }
        Ok(())
    }

    /// Classify a raw filename
    ///
    /// Never fails: anything that does not follow the convention comes back
    /// as [`Role::Unknown`]. A stem without a delimiter is consumed whole as
    /// the role token, so `input.txt` is an input with an empty test name.
    pub fn classify(&self, raw_filename: &str) -> FixtureEntry {
        let unknown = |test_name: &str| FixtureEntry {
            raw_filename: raw_filename.to_string(),
            test_name: test_name.to_string(),
            role: Role::Unknown,
        };

        let stem = match split_extension(raw_filename) {
            (stem, Some(ext)) if ext == self.extension => stem,
            _ => return unknown(raw_filename),
        };

        let (test_name, role_token) = match stem.rsplit_once(self.delimiter.as_str()) {
            Some((name, token)) => (name, token),
            None => ("", stem),
        };

        let role = if role_token == self.input_role {
            Role::Input
        } else if role_token == self.expected_role {
            Role::Expected
        } else {
            return unknown(stem);
        };

        FixtureEntry {
            raw_filename: raw_filename.to_string(),
            test_name: test_name.to_string(),
            role,
        }
    }

    /// Filename a fixture of `role` for `test_name` is expected to have
    ///
    /// Returns `None` for [`Role::Unknown`], which has no canonical name.
    pub fn file_name(&self, test_name: &str, role: Role) -> Option<String> {
        let token = match role {
            Role::Input => &self.input_role,
            Role::Expected => &self.expected_role,
            Role::Unknown => return None,
        };
        Some(format!(
            "{}{}{}.{}",
            test_name, self.delimiter, token, self.extension
        ))
    }
}

/// Split `name` into stem and extension at the last dot
///
/// Leading dots belong to the stem, so `.txt` has no extension.
fn split_extension(name: &str) -> (&str, Option<&str>) {
    let leading = name.len() - name.trim_start_matches('.').len();
    match name[leading..].rfind('.') {
        Some(idx) => {
            let idx = leading + idx;
            (&name[..idx], Some(&name[idx + 1..]))
        }
        None => (name, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(name: &str) -> FixtureEntry {
        NamingConvention::default().classify(name)
    }

    #[test]
    fn test_classify_input_and_expected() {
        let input = classify("t1-input.txt");
        assert_eq!(input.test_name, "t1");
        assert_eq!(input.role, Role::Input);

        let expected = classify("t1-expected.txt");
        assert_eq!(expected.test_name, "t1");
        assert_eq!(expected.role, Role::Expected);
        assert_eq!(expected.raw_filename, "t1-expected.txt");
    }

    #[test]
    fn test_test_name_may_contain_delimiter() {
        let entry = classify("weird-extra-input.txt");
        assert_eq!(entry.test_name, "weird-extra");
        assert_eq!(entry.role, Role::Input);
    }

    #[test]
    fn test_wrong_extension_keeps_full_filename() {
        let entry = classify("readme.md");
        assert_eq!(entry.role, Role::Unknown);
        assert_eq!(entry.test_name, "readme.md");

        let entry = classify("t1-input.TXT");
        assert_eq!(entry.role, Role::Unknown);
        assert_eq!(entry.test_name, "t1-input.TXT");
    }

    #[test]
    fn test_unknown_role_keeps_full_stem() {
        let entry = classify("t1-output.txt");
        assert_eq!(entry.role, Role::Unknown);
        assert_eq!(entry.test_name, "t1-output");
        assert_eq!(entry.raw_filename, "t1-output.txt");
    }

    #[test]
    fn test_role_token_is_case_sensitive() {
        assert_eq!(classify("t1-Input.txt").role, Role::Unknown);
    }

    #[test]
    fn test_bare_role_stem_has_empty_name() {
        let entry = classify("input.txt");
        assert_eq!(entry.role, Role::Input);
        assert_eq!(entry.test_name, "");

        let entry = classify("-expected.txt");
        assert_eq!(entry.role, Role::Expected);
        assert_eq!(entry.test_name, "");
    }

    #[test]
    fn test_no_extension_or_dotfile() {
        assert_eq!(classify("Makefile").role, Role::Unknown);
        assert_eq!(classify(".txt").role, Role::Unknown);
        assert_eq!(classify("").role, Role::Unknown);
    }

    #[test]
    fn test_only_last_extension_counts() {
        let entry = classify("archive.tar-input.txt");
        assert_eq!(entry.role, Role::Input);
        assert_eq!(entry.test_name, "archive.tar");

        assert_eq!(classify("t1-input.txt.bak").role, Role::Unknown);
    }

    #[test]
    fn test_custom_convention() {
        let convention = NamingConvention {
            extension: "out".to_string(),
            delimiter: "__".to_string(),
            input_role: "in".to_string(),
            expected_role: "want".to_string(),
        };
        let entry = convention.classify("a_b__want.out");
        assert_eq!(entry.test_name, "a_b");
        assert_eq!(entry.role, Role::Expected);
        assert_eq!(convention.classify("a_b-input.txt").role, Role::Unknown);
        assert_eq!(
            convention.file_name("a_b", Role::Input).as_deref(),
            Some("a_b__in.out")
        );
    }

    #[test]
    fn test_file_name_for_roles() {
        let convention = NamingConvention::default();
        let name = convention.file_name("weird-extra", Role::Expected).unwrap();
        assert_eq!(name, "weird-extra-expected.txt");
        assert_eq!(convention.file_name("x", Role::Unknown), None);
    }

    #[test]
    fn test_validate() {
        assert!(NamingConvention::default().validate().is_ok());

        let mut convention = NamingConvention::default();
        convention.extension = ".txt".to_string();
        assert!(convention.validate().is_err());

        let mut convention = NamingConvention::default();
        convention.delimiter = String::new();
        assert!(convention.validate().is_err());

        let mut convention = NamingConvention::default();
        convention.expected_role = "input".to_string();
        assert!(convention.validate().is_err());

        let mut convention = NamingConvention::default();
        convention.input_role = "in-put".to_string();
        assert!(convention.validate().is_err());
    }
}
