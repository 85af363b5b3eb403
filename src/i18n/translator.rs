//! Phrase lookup bound to one locale.

use crate::i18n::{Language, TranslationMetrics, TranslationTable};
use tracing::debug;

/// Resolves phrase keys for a single locale.
///
/// A translator is a snapshot: it never observes later locale changes.
/// Consumers obtain a fresh one from the store (or the language context)
/// each time they render.
#[derive(Debug, Clone, Copy)]
pub struct Translator {
    language: Language,
    table: &'static TranslationTable,
}

impl Translator {
    /// Translator over the built-in phrase table.
    pub fn new(language: Language) -> Self {
        Self::with_table(language, TranslationTable::builtin())
    }

    pub fn with_table(language: Language, table: &'static TranslationTable) -> Self {
        Self { language, table }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Resolve `key` to display text.
    ///
    /// Returns the table string for this locale, even if it is empty. A key
    /// missing from the table is returned unchanged so the gap stays visible.
    pub fn translate<'a>(&self, key: &'a str) -> &'a str {
        match self.table.lookup(key) {
            Some(entry) => {
                TranslationMetrics::global().record_hit();
                entry.get(self.language)
            }
            None => {
                TranslationMetrics::global().record_miss();
                debug!(key, language = %self.language, "Missing translation, showing key");
                key
            }
        }
    }

    /// Shorthand for [`Translator::translate`].
    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        self.translate(key)
    }
}
