//! Language toggle control for the header of both shells.

use crate::i18n::{Language, LanguageContext, Scope, UsageError};
use tracing::info;

/// Single control flipping the session between the two locales.
///
/// The label names the locale the user would switch *to*, in that locale's
/// own script, so it is readable whichever language is active.
#[derive(Debug, Clone, Copy)]
pub struct LanguageToggle<'a> {
    language: &'a LanguageContext,
}

impl<'a> LanguageToggle<'a> {
    pub fn new(scope: &'a Scope) -> Result<Self, UsageError> {
        Ok(Self {
            language: scope.language()?,
        })
    }

    /// The locale activation would switch to.
    pub fn target(&self) -> Language {
        self.language.current().toggled()
    }

    pub fn label(&self) -> &'static str {
        self.target().native_name()
    }

    /// Switch to the other locale and return it.
    pub fn activate(&self) -> Language {
        let next = self.target();
        info!("Language toggled to {}", next.name());
        self.language.set_current(next);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{LanguageProvider, DEFAULT_STORAGE_KEY};
    use crate::storage::{ClientStorage, MemoryStorage};

    #[test]
    fn test_toggle_requires_provider() {
        let scope = Scope::detached();
        assert_eq!(
            LanguageToggle::new(&scope).unwrap_err(),
            UsageError::MissingProvider
        );
    }

    #[test]
    fn test_label_names_the_other_locale() {
        let provider = LanguageProvider::new(MemoryStorage::new(), DEFAULT_STORAGE_KEY);
        provider.render(|scope| {
            let toggle = LanguageToggle::new(scope).unwrap();
            assert_eq!(toggle.target(), Language::AMHARIC);
            assert_eq!(toggle.label(), "አማርኛ");

            toggle.activate();
            assert_eq!(toggle.label(), "English");
        });
    }

    #[test]
    fn test_activate_flips_and_persists() {
        let storage = MemoryStorage::new();
        let provider = LanguageProvider::new(storage.clone(), DEFAULT_STORAGE_KEY);

        let first = provider.render(|scope| LanguageToggle::new(scope).unwrap().activate());
        assert_eq!(first, Language::AMHARIC);
        assert_eq!(storage.get_item("language").unwrap().as_deref(), Some("am"));

        let second = provider.render(|scope| LanguageToggle::new(scope).unwrap().activate());
        assert_eq!(second, Language::ENGLISH);
        assert_eq!(storage.get_item("language").unwrap().as_deref(), Some("en"));
    }
}
