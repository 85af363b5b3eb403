//! Translation observability: lookup hits and misses, locale switches, and
//! persistence failures that the language store absorbs.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

/// Global translation metrics singleton.
#[derive(Debug)]
pub struct TranslationMetrics {
    /// Lookups that found the key in the table
    hits: AtomicUsize,

    /// Lookups that fell back to the raw key
    misses: AtomicUsize,

    /// Calls to `LanguageStore::set_current`
    locale_switches: AtomicUsize,

    /// Storage writes that failed and were swallowed
    persist_failures: AtomicUsize,
}

static METRICS: OnceLock<TranslationMetrics> = OnceLock::new();

impl TranslationMetrics {
    /// A detached set of zeroed counters.
    pub fn new() -> Self {
        Self {
            hits: AtomicUsize::new(0),
            misses: AtomicUsize::new(0),
            locale_switches: AtomicUsize::new(0),
            persist_failures: AtomicUsize::new(0),
        }
    }

    /// Get the global translation metrics instance.
    pub fn global() -> &'static TranslationMetrics {
        METRICS.get_or_init(TranslationMetrics::new)
    }

    pub fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_locale_switch(&self) {
        self.locale_switches.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_persist_failure(&self) {
        self.persist_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn misses(&self) -> usize {
        self.misses.load(Ordering::Relaxed)
    }

    pub fn locale_switches(&self) -> usize {
        self.locale_switches.load(Ordering::Relaxed)
    }

    pub fn persist_failures(&self) -> usize {
        self.persist_failures.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let hits = self.hits();
        let misses = self.misses();
        let total_lookups = hits + misses;
        let hit_rate = if total_lookups > 0 {
            (hits as f64 / total_lookups as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            hits,
            misses,
            hit_rate,
            locale_switches: self.locale_switches(),
            persist_failures: self.persist_failures(),
        }
    }
}

impl Default for TranslationMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Snapshot of translation statistics, served by `GET /metrics`.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    pub hits: usize,
    pub misses: usize,

    /// Hit rate as a percentage (0-100)
    pub hit_rate: f64,

    pub locale_switches: usize,
    pub persist_failures: usize,
}
