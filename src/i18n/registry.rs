//! Language registry: the fixed pair of locales the shell can display.
//!
//! The registry is initialized once on first access with `OnceLock` and is
//! immutable afterwards. Exactly one entry is the primary locale, which is the
//! default for every new session.

use std::sync::OnceLock;

/// Metadata for a supported locale.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// Locale tag stored in client storage (e.g., "en", "am")
    pub code: &'static str,

    /// English name of the language (e.g., "English", "Amharic")
    pub name: &'static str,

    /// Native name of the language (e.g., "English", "አማርኛ")
    pub native_name: &'static str,

    /// Whether this is the primary (default) locale; exactly one is true
    pub is_primary: bool,
}

/// Global language registry singleton.
#[derive(Debug)]
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Get a language configuration by its locale tag.
    ///
    /// Matching is exact: stored values are written by this crate, so a
    /// differently-cased tag is treated as unrecognized.
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// All supported locales, primary first.
    pub fn list_all(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().collect()
    }

    /// The primary locale configuration.
    ///
    /// # Panics
    /// Panics if the registry does not define exactly one primary locale.
    pub fn primary(&self) -> &LanguageConfig {
        let primary: Vec<_> = self
            .languages
            .iter()
            .filter(|lang| lang.is_primary)
            .collect();

        match primary.len() {
            0 => panic!("No primary language found in registry"),
            1 => primary[0],
            _ => panic!("Multiple primary languages found in registry"),
        }
    }

    /// Check if a locale tag is supported.
    pub fn is_supported(&self, code: &str) -> bool {
        self.get_by_code(code).is_some()
    }
}

/// English is primary, Amharic secondary.
fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            code: "en",
            name: "English",
            native_name: "English",
            is_primary: true,
        },
        LanguageConfig {
            code: "am",
            name: "Amharic",
            native_name: "አማርኛ",
            is_primary: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_get_returns_singleton() {
        let registry1 = LanguageRegistry::get();
        let registry2 = LanguageRegistry::get();
        assert!(std::ptr::eq(registry1, registry2));
    }

    #[test]
    fn test_get_by_code_english() {
        let config = LanguageRegistry::get()
            .get_by_code("en")
            .expect("English should be registered");
        assert_eq!(config.name, "English");
        assert_eq!(config.native_name, "English");
        assert!(config.is_primary);
    }

    #[test]
    fn test_get_by_code_amharic() {
        let config = LanguageRegistry::get()
            .get_by_code("am")
            .expect("Amharic should be registered");
        assert_eq!(config.name, "Amharic");
        assert_eq!(config.native_name, "አማርኛ");
        assert!(!config.is_primary);
    }

    #[test]
    fn test_get_by_code_is_case_sensitive() {
        assert!(LanguageRegistry::get().get_by_code("AM").is_none());
        assert!(LanguageRegistry::get().get_by_code("En").is_none());
    }

    #[test]
    fn test_get_by_code_nonexistent() {
        assert!(LanguageRegistry::get().get_by_code("fr").is_none());
        assert!(LanguageRegistry::get().get_by_code("").is_none());
    }

    #[test]
    fn test_list_all_has_exactly_two_locales_primary_first() {
        let all = LanguageRegistry::get().list_all();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].code, "en");
        assert_eq!(all[1].code, "am");
    }

    #[test]
    fn test_primary_is_english() {
        assert_eq!(LanguageRegistry::get().primary().code, "en");
    }

    #[test]
    fn test_is_supported() {
        let registry = LanguageRegistry::get();
        assert!(registry.is_supported("en"));
        assert!(registry.is_supported("am"));
        assert!(!registry.is_supported("es"));
    }
}
