//! Internationalization (i18n) for the shell: two locales, one phrase table.
//!
//! # Architecture
//!
//! - `registry`: the supported locales and their metadata
//! - `language`: validated `Language` type
//! - `strings`: the phrase table (build-time data)
//! - `translator`: key → display text for one locale, key fallback
//! - `store`: owned, reactive current-locale state with client persistence
//! - `context`: provider/scope handles passed explicitly to render code
//! - `validator`: authoring checks over the phrase table
//! - `metrics`: lookup and persistence counters
//!
//! # Example
//!
//! ```rust
//! use lms_shell::i18n::{Language, LanguageProvider, DEFAULT_STORAGE_KEY};
//! use lms_shell::storage::MemoryStorage;
//!
//! let provider = LanguageProvider::new(MemoryStorage::new(), DEFAULT_STORAGE_KEY);
//! let label = provider.render(|scope| {
//!     let language = scope.language().expect("inside provider");
//!     language.set_current(Language::AMHARIC);
//!     language.t("Courses")
//! });
//! assert_eq!(label, "ኮርሶች");
//! ```

mod context;
mod language;
mod metrics;
mod registry;
mod store;
mod strings;
mod translator;
mod validator;

pub use context::{LanguageContext, LanguageProvider, Scope, UsageError};
pub use language::Language;
pub use metrics::{MetricsReport, TranslationMetrics};
pub use registry::{LanguageConfig, LanguageRegistry};
pub use store::{LanguageStore, SharedStorage, Subscription, DEFAULT_STORAGE_KEY};
pub use strings::{Translation, TranslationTable, TRANSLATIONS};
pub use translator::Translator;
pub use validator::{TranslationValidator, ValidationReport};
