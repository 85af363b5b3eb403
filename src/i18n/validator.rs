//! Phrase table validation.
//!
//! Lookups never fail at runtime, so authoring gaps in the table would only
//! show up as odd text on screen. The validator surfaces them up front: the
//! server logs the report at startup and `preview --check` prints it.

use crate::i18n::{Translation, TranslationTable};
use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

/// Validation report containing errors and warnings about the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Defects that break the table invariant (empty strings, duplicate keys)
    pub errors: Vec<String>,

    /// Suspicious entries that still render
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for the phrase table.
pub struct TranslationValidator;

static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();
static ETHIOPIC_REGEX: OnceLock<Regex> = OnceLock::new();

impl TranslationValidator {
    /// Validate every entry of `table`.
    ///
    /// Errors:
    /// - a key appears more than once (only the first entry is reachable)
    /// - a key, English string or Amharic string is empty
    ///
    /// Warnings:
    /// - `{name}` placeholders, which are never interpolated
    /// - leading or trailing whitespace
    /// - an Amharic string without any Ethiopic characters
    pub fn validate(table: &TranslationTable) -> ValidationReport {
        let mut report = ValidationReport::new();
        let mut seen = HashSet::new();

        for entry in table.entries() {
            if !seen.insert(entry.key) {
                report
                    .errors
                    .push(format!("Duplicate key {:?}", entry.key));
            }
            Self::validate_entry(entry, &mut report);
        }

        report
    }

    fn validate_entry(entry: &Translation, report: &mut ValidationReport) {
        if entry.key.is_empty() {
            report.errors.push("Empty key".to_string());
        }

        for (locale, text) in [("en", entry.en), ("am", entry.am)] {
            if text.is_empty() {
                report
                    .errors
                    .push(format!("Key {:?} has an empty {} string", entry.key, locale));
                continue;
            }

            if text.trim() != text {
                report.warnings.push(format!(
                    "Key {:?} has surrounding whitespace in {}",
                    entry.key, locale
                ));
            }

            if Self::has_placeholder(text) {
                report.warnings.push(format!(
                    "Key {:?} contains a placeholder in {} but strings are not interpolated",
                    entry.key, locale
                ));
            }
        }

        if !entry.am.is_empty() && !Self::has_ethiopic(entry.am) {
            report.warnings.push(format!(
                "Key {:?} has no Ethiopic text in am (untranslated?)",
                entry.key
            ));
        }
    }

    fn has_placeholder(text: &str) -> bool {
        let regex = PLACEHOLDER_REGEX
            .get_or_init(|| Regex::new(r"\{[A-Za-z_][A-Za-z0-9_]*\}").expect("valid regex"));
        regex.is_match(text)
    }

    fn has_ethiopic(text: &str) -> bool {
        let regex = ETHIOPIC_REGEX.get_or_init(|| Regex::new(r"\p{Ethiopic}").expect("valid regex"));
        regex.is_match(text)
    }
}
