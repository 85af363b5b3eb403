//! Explicit language context for render code.
//!
//! A [`LanguageProvider`] owns the session's [`LanguageStore`] and hands out a
//! [`Scope`] to everything it renders. Components take `&Scope` as a parameter
//! and ask it for the [`LanguageContext`]; nothing reaches for global state.
//! Asking a scope that has no provider is a wiring defect and fails with
//! [`UsageError::MissingProvider`] instead of falling back to a default.

use crate::i18n::{Language, LanguageStore, SharedStorage, Subscription, Translator};
use crate::storage::ClientStorage;
use thiserror::Error;

/// Structural misuse of the language context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UsageError {
    #[error("language context requested outside of a LanguageProvider")]
    MissingProvider,
}

/// What a consumer may do with the session language: read it, translate
/// with it, and request a change.
#[derive(Debug, Clone)]
pub struct LanguageContext {
    store: LanguageStore,
}

impl LanguageContext {
    pub fn current(&self) -> Language {
        self.store.current()
    }

    /// Request a locale change through the owning store.
    pub fn set_current(&self, language: Language) {
        self.store.set_current(language);
    }

    /// Translator for the locale current at the time of the call.
    pub fn translator(&self) -> Translator {
        self.store.translator()
    }

    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        self.translator().translate(key)
    }

    pub fn subscribe(&self, callback: impl Fn(Language) + 'static) -> Subscription {
        self.store.subscribe(callback)
    }
}

/// Render scope handed down the component tree.
#[derive(Debug, Clone, Default)]
pub struct Scope {
    language: Option<LanguageContext>,
}

impl Scope {
    /// A scope with no provider above it.
    pub fn detached() -> Self {
        Self::default()
    }

    /// The language context of the enclosing provider.
    pub fn language(&self) -> Result<&LanguageContext, UsageError> {
        self.language.as_ref().ok_or(UsageError::MissingProvider)
    }

    /// Shorthand: the translator of the enclosing provider.
    pub fn translator(&self) -> Result<Translator, UsageError> {
        Ok(self.language()?.translator())
    }
}

/// Owns the language store for one mounted UI tree.
#[derive(Debug)]
pub struct LanguageProvider {
    store: LanguageStore,
}

impl LanguageProvider {
    pub fn new(storage: impl ClientStorage + 'static, storage_key: &str) -> Self {
        Self {
            store: LanguageStore::new(storage, storage_key),
        }
    }

    pub fn with_shared_storage(storage: SharedStorage, storage_key: &str) -> Self {
        Self {
            store: LanguageStore::with_shared_storage(storage, storage_key),
        }
    }

    /// Run the one-time store initialization.
    pub fn mount(&self) -> Language {
        self.store.initialize()
    }

    /// Whether localized content may be shown.
    pub fn is_ready(&self) -> bool {
        self.store.is_initialized()
    }

    /// Scope for children, or `None` while the stored locale has not been
    /// loaded yet, so nothing renders in the default locale first.
    pub fn scope(&self) -> Option<Scope> {
        self.is_ready().then(|| Scope {
            language: Some(LanguageContext {
                store: self.store.clone(),
            }),
        })
    }

    /// Mount if needed, then render `children` inside this provider.
    pub fn render<R>(&self, children: impl FnOnce(&Scope) -> R) -> R {
        self.mount();
        let scope = Scope {
            language: Some(LanguageContext {
                store: self.store.clone(),
            }),
        };
        children(&scope)
    }

    pub fn store(&self) -> &LanguageStore {
        &self.store
    }
}
