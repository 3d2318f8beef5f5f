//! Resolution metrics.
//!
//! Each translator owns one `ResolutionMetrics` and records which step of the
//! fallback policy satisfied every `resolve` call.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};

/// How a lookup was satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Resolution {
    /// The current locale was stored verbatim.
    Exact,
    /// A stored locale starts with the current locale's base language.
    BaseLanguage,
    /// Neither matched; the first stored translation was used.
    FirstAvailable,
    /// The identifier is unknown or has no translations.
    Missing,
}

/// Counters for lookups performed by a single translator.
#[derive(Debug, Default)]
pub struct ResolutionMetrics {
    /// Lookups answered by an exact locale match
    exact: AtomicUsize,

    /// Lookups answered by the base-language prefix fallback
    base_language: AtomicUsize,

    /// Lookups answered by the first-available fallback
    first_available: AtomicUsize,

    /// Lookups that produced nothing
    missing: AtomicUsize,
}

impl ResolutionMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of one lookup.
    pub fn record(&self, resolution: Resolution) {
        let counter = match resolution {
            Resolution::Exact => &self.exact,
            Resolution::BaseLanguage => &self.base_language,
            Resolution::FirstAvailable => &self.first_available,
            Resolution::Missing => &self.missing,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn exact(&self) -> usize {
        self.exact.load(Ordering::Relaxed)
    }

    pub fn base_language(&self) -> usize {
        self.base_language.load(Ordering::Relaxed)
    }

    pub fn first_available(&self) -> usize {
        self.first_available.load(Ordering::Relaxed)
    }

    pub fn missing(&self) -> usize {
        self.missing.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let exact = self.exact();
        let base_language = self.base_language();
        let first_available = self.first_available();
        let missing = self.missing();

        let lookups = exact + base_language + first_available + missing;
        let fallbacks = base_language + first_available;
        let fallback_rate = if lookups > 0 {
            (fallbacks as f64 / lookups as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            lookups,
            exact,
            base_language,
            first_available,
            missing,
            fallback_rate,
        }
    }

    /// Reset all counters to zero.
    pub fn reset(&self) {
        self.exact.store(0, Ordering::Relaxed);
        self.base_language.store(0, Ordering::Relaxed);
        self.first_available.store(0, Ordering::Relaxed);
        self.missing.store(0, Ordering::Relaxed);
    }
}

/// Snapshot of a translator's lookup statistics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsReport {
    /// Total number of lookups
    pub lookups: usize,

    /// Exact locale matches
    pub exact: usize,

    /// Base-language fallbacks
    pub base_language: usize,

    /// First-available fallbacks
    pub first_available: usize,

    /// Lookups with no result
    pub missing: usize,

    /// Share of lookups answered by a fallback, as a percentage (0-100)
    pub fallback_rate: f64,
}
