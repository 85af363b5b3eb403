//! Language store: the single owner of the session's current locale.
//!
//! # Lifecycle
//!
//! 1. Created with the primary locale.
//! 2. [`LanguageStore::initialize`] adopts a valid stored locale, once.
//! 3. [`LanguageStore::set_current`] replaces the locale, notifies subscribers
//!    synchronously, then persists the new tag.
//! 4. Dropped with the session. There is no explicit teardown.
//!
//! # Failure Modes
//!
//! | Failure | Behavior |
//! |---------|----------|
//! | Storage read fails | Logged, primary locale kept |
//! | Stored value unrecognized | Ignored, primary locale kept |
//! | Storage write fails | Logged and counted, in-memory locale still updated |
//!
//! The store is `!Send`: it lives on one thread, and every read sees the last
//! committed value.

use crate::i18n::{Language, TranslationMetrics, Translator};
use crate::storage::{ClientStorage, StorageError};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use tracing::{debug, info, warn};

/// Default client storage key for the locale tag.
pub const DEFAULT_STORAGE_KEY: &str = "language";

/// Storage handle shared between the store and whoever created it.
pub type SharedStorage = Rc<RefCell<dyn ClientStorage>>;

type Callback = dyn Fn(Language);

struct StoreInner {
    current: Language,
    version: u64,
    initialized: bool,
    subscribers: Vec<Weak<Callback>>,
}

/// Reactive holder of the current [`Language`].
///
/// Cloning creates another handle to the same state.
#[derive(Clone)]
pub struct LanguageStore {
    inner: Rc<RefCell<StoreInner>>,
    storage: SharedStorage,
    storage_key: Rc<str>,
}

impl std::fmt::Debug for LanguageStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("LanguageStore")
            .field("current", &inner.current)
            .field("version", &inner.version)
            .field("initialized", &inner.initialized)
            .field("subscriber_count", &inner.subscribers.len())
            .field("storage_key", &self.storage_key)
            .finish()
    }
}

impl LanguageStore {
    /// Store that owns `storage` outright.
    pub fn new(storage: impl ClientStorage + 'static, storage_key: &str) -> Self {
        Self::with_shared_storage(Rc::new(RefCell::new(storage)), storage_key)
    }

    /// Store writing through a storage handle the caller keeps a clone of,
    /// e.g. to collect `Set-Cookie` headers after rendering.
    pub fn with_shared_storage(storage: SharedStorage, storage_key: &str) -> Self {
        Self {
            inner: Rc::new(RefCell::new(StoreInner {
                current: Language::primary(),
                version: 0,
                initialized: false,
                subscribers: Vec::new(),
            })),
            storage,
            storage_key: Rc::from(storage_key),
        }
    }

    /// Adopt the stored locale, if any. Only the first call reads storage;
    /// later calls return the current locale unchanged.
    pub fn initialize(&self) -> Language {
        {
            let mut inner = self.inner.borrow_mut();
            if inner.initialized {
                return inner.current;
            }
            inner.initialized = true;
        }

        let Some(code) = self.read_stored() else {
            debug!(key = %self.storage_key, "No stored language, using primary");
            return self.current();
        };

        let language = match Language::from_code(&code) {
            Ok(language) => language,
            Err(_) => {
                debug!(key = %self.storage_key, value = %code, "Ignoring unrecognized stored language");
                return self.current();
            }
        };

        let changed = {
            let mut inner = self.inner.borrow_mut();
            let changed = inner.current != language;
            inner.current = language;
            changed
        };
        info!(language = %language, "Restored stored language");

        if changed {
            self.notify(language);
        }
        language
    }

    pub fn is_initialized(&self) -> bool {
        self.inner.borrow().initialized
    }

    /// Snapshot of the current locale.
    pub fn current(&self) -> Language {
        self.inner.borrow().current
    }

    /// Replace the current locale, notify subscribers, then persist.
    ///
    /// Setting the current value again is allowed: subscribers are notified
    /// and the tag is written again.
    pub fn set_current(&self, language: Language) {
        {
            let mut inner = self.inner.borrow_mut();
            inner.current = language;
            inner.version += 1;
        }
        TranslationMetrics::global().record_locale_switch();
        debug!(language = %language, "Language changed");

        self.notify(language);
        self.persist(language);
    }

    /// Increments on every `set_current`.
    pub fn version(&self) -> u64 {
        self.inner.borrow().version
    }

    /// A translator bound to the current locale.
    pub fn translator(&self) -> Translator {
        Translator::new(self.current())
    }

    /// Register `callback` for locale changes. Dropping the returned guard
    /// unsubscribes.
    pub fn subscribe(&self, callback: impl Fn(Language) + 'static) -> Subscription {
        let strong: Rc<Callback> = Rc::new(callback);
        self.inner
            .borrow_mut()
            .subscribers
            .push(Rc::downgrade(&strong));
        Subscription { _callback: strong }
    }

    /// Number of live subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.inner
            .borrow()
            .subscribers
            .iter()
            .filter(|weak| weak.strong_count() > 0)
            .count()
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    fn notify(&self, language: Language) {
        // Callbacks run outside the borrow so they may read the store.
        let callbacks: Vec<Rc<Callback>> = {
            let mut inner = self.inner.borrow_mut();
            inner.subscribers.retain(|weak| weak.strong_count() > 0);
            inner.subscribers.iter().filter_map(Weak::upgrade).collect()
        };

        for callback in &callbacks {
            callback(language);
        }
    }

    fn read_stored(&self) -> Option<String> {
        let result = match self.storage.try_borrow() {
            Ok(storage) => storage.get_item(&self.storage_key),
            Err(_) => Err(StorageError::Unavailable("storage is busy".to_string())),
        };

        match result {
            Ok(value) => value,
            Err(e) => {
                warn!(key = %self.storage_key, error = %e, "Failed to read stored language");
                None
            }
        }
    }

    fn persist(&self, language: Language) {
        let result = match self.storage.try_borrow_mut() {
            Ok(mut storage) => storage.set_item(&self.storage_key, language.code()),
            Err(_) => Err(StorageError::Unavailable("storage is busy".to_string())),
        };

        if let Err(e) = result {
            TranslationMetrics::global().record_persist_failure();
            warn!(
                key = %self.storage_key,
                language = %language,
                error = %e,
                "Failed to persist language, keeping it for this session only"
            );
        }
    }
}

/// Guard keeping a subscriber callback alive.
pub struct Subscription {
    _callback: Rc<Callback>,
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").finish_non_exhaustive()
    }
}
