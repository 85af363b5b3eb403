//! Language type: a locale validated against the registry.

use crate::i18n::{LanguageConfig, LanguageRegistry};
use anyhow::{bail, Result};
use std::fmt;

/// A supported display locale.
///
/// Only the two registered locales can be constructed, either through the
/// constants or through [`Language::from_code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Language {
    /// Locale tag (e.g., "en", "am")
    code: &'static str,
}

impl Language {
    /// English, the primary locale.
    pub const ENGLISH: Language = Language { code: "en" };

    /// Amharic, the secondary locale.
    pub const AMHARIC: Language = Language { code: "am" };

    /// Create a Language from a locale tag.
    ///
    /// # Returns
    /// * `Ok(Language)` if the tag is registered
    /// * `Err` for any other value, including differently-cased tags
    pub fn from_code(code: &str) -> Result<Language> {
        match LanguageRegistry::get().get_by_code(code) {
            Some(config) => Ok(Language { code: config.code }),
            None => bail!("Unknown language code: '{}'", code),
        }
    }

    /// The primary locale, used when nothing valid is stored.
    pub fn primary() -> Language {
        Language {
            code: LanguageRegistry::get().primary().code,
        }
    }

    /// Both supported locales, primary first.
    pub fn all() -> [Language; 2] {
        [Language::ENGLISH, Language::AMHARIC]
    }

    /// The other member of the supported pair.
    pub fn toggled(&self) -> Language {
        if *self == Language::ENGLISH {
            Language::AMHARIC
        } else {
            Language::ENGLISH
        }
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Registry metadata for this locale.
    ///
    /// # Panics
    /// Never in practice: every constructor validates the code against the
    /// registry.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .expect("Language code should always be valid")
    }

    pub fn name(&self) -> &'static str {
        self.config().name
    }

    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    pub fn is_primary(&self) -> bool {
        self.config().is_primary
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::primary()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Constant Tests ====================

    #[test]
    fn test_english_constant() {
        let english = Language::ENGLISH;
        assert_eq!(english.code(), "en");
        assert_eq!(english.name(), "English");
        assert!(english.is_primary());
    }

    #[test]
    fn test_amharic_constant() {
        let amharic = Language::AMHARIC;
        assert_eq!(amharic.code(), "am");
        assert_eq!(amharic.name(), "Amharic");
        assert_eq!(amharic.native_name(), "አማርኛ");
        assert!(!amharic.is_primary());
    }

    // ==================== from_code Tests ====================

    #[test]
    fn test_from_code_amharic() {
        let language = Language::from_code("am").expect("Should succeed");
        assert_eq!(language, Language::AMHARIC);
    }

    #[test]
    fn test_from_code_invalid() {
        let result = Language::from_code("fr");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Unknown"));
    }

    #[test]
    fn test_from_code_empty() {
        assert!(Language::from_code("").is_err());
    }

    #[test]
    fn test_from_code_rejects_whitespace_and_case_variants() {
        assert!(Language::from_code(" am").is_err());
        assert!(Language::from_code("AM").is_err());
    }

    // ==================== Default / Toggle Tests ====================

    #[test]
    fn test_default_is_primary_english() {
        assert_eq!(Language::default(), Language::ENGLISH);
        assert_eq!(Language::primary(), Language::ENGLISH);
    }

    #[test]
    fn test_toggled_flips_between_the_pair() {
        assert_eq!(Language::ENGLISH.toggled(), Language::AMHARIC);
        assert_eq!(Language::AMHARIC.toggled(), Language::ENGLISH);
    }

    #[test]
    fn test_toggled_twice_is_identity() {
        for language in Language::all() {
            assert_eq!(language.toggled().toggled(), language);
        }
    }

    // ==================== Trait Tests ====================

    #[test]
    fn test_display_writes_code() {
        assert_eq!(Language::AMHARIC.to_string(), "am");
        assert_eq!(format!("{}", Language::ENGLISH), "en");
    }

    #[test]
    fn test_language_equality_across_constructors() {
        assert_eq!(Language::ENGLISH, Language::from_code("en").unwrap());
        assert_ne!(Language::ENGLISH, Language::AMHARIC);
    }
}
