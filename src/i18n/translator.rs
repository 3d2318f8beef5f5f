//! Locale-aware translation lookups.
//!
//! A [`Translator`] owns a [`TranslationStore`] and a current locale. Lookups
//! for the current locale go through a fixed fallback policy:
//!
//! 1. the exact locale code;
//! 2. the first stored locale whose code starts with the current locale's
//!    base language (the part before the first `-`);
//! 3. the first stored translation.
//!
//! Step 2 is a raw string-prefix test: with a current locale of `en-US`, a
//! stored code of `english` matches just like `en` or `en-GB` would.

use crate::i18n::{
    LocaleDetector, Resolution, ResolutionMetrics, StoreError, SystemLocale, TranslationProvider,
    TranslationStore,
};
use std::collections::BTreeSet;
use tracing::{debug, trace, warn};

/// Separator between language and region in a locale code.
const REGION_SEPARATOR: char = '-';

#[derive(Debug)]
pub struct Translator {
    store: TranslationStore,
    current_locale: String,
    metrics: ResolutionMetrics,
}

impl Translator {
    /// Create a translator seeded from `provider`, with the current locale
    /// taken from the operating system.
    pub fn new(provider: &impl TranslationProvider) -> Self {
        Self::with_detector(provider, &SystemLocale)
    }

    /// Create a translator seeded from `provider`, with the current locale
    /// taken from `detector`.
    pub fn with_detector(
        provider: &impl TranslationProvider,
        detector: &impl LocaleDetector,
    ) -> Self {
        let current_locale = detector.detect();
        let store = provider.translations();
        debug!(
            "Translator created with {} identifiers, locale {}",
            store.len(),
            current_locale
        );

        Self {
            store,
            current_locale,
            metrics: ResolutionMetrics::new(),
        }
    }

    /// Replace the store with the contents of a JSON document.
    ///
    /// Returns `true` when the document parsed and holds at least one
    /// identifier. On failure the store is left empty; previous content is
    /// not restored.
    pub fn load(&mut self, content: &str) -> bool {
        match self.try_load(content) {
            Ok(_) => true,
            Err(e) => {
                warn!("Failed to load translations: {}", e);
                false
            }
        }
    }

    /// Fallible form of [`Translator::load`], returning the number of
    /// identifiers loaded.
    pub fn try_load(&mut self, content: &str) -> Result<usize, StoreError> {
        match TranslationStore::from_json(content) {
            Ok(store) => {
                self.store = store;
                debug!("Loaded translations for {} identifiers", self.store.len());
                Ok(self.store.len())
            }
            Err(e) => {
                self.store = TranslationStore::default();
                Err(e)
            }
        }
    }

    /// Replace the store with the provider's translations.
    pub fn load_embedded(&mut self, provider: &impl TranslationProvider) {
        self.store = provider.translations();
        debug!(
            "Loaded embedded translations for {} identifiers",
            self.store.len()
        );
    }

    pub fn store(&self) -> &TranslationStore {
        &self.store
    }

    pub fn set_current_locale(&mut self, locale: impl Into<String>) {
        self.current_locale = locale.into();
    }

    pub fn current_locale(&self) -> &str {
        &self.current_locale
    }

    /// Translate `identifier` for the current locale, applying the fallback
    /// policy described at the module level.
    pub fn resolve(&self, identifier: &str) -> Option<&str> {
        let (text, resolution) = self.lookup(identifier);
        trace!(
            "Resolved '{}' for {} via {:?}",
            identifier,
            self.current_locale,
            resolution
        );
        self.metrics.record(resolution);
        text
    }

    /// Like [`Translator::resolve`], returning `fallback` when nothing matches.
    pub fn resolve_or<'a>(&'a self, identifier: &str, fallback: &'a str) -> &'a str {
        self.resolve(identifier).unwrap_or(fallback)
    }

    /// Translate `identifier` for exactly `locale`, with no fallbacks.
    pub fn resolve_for_locale(&self, identifier: &str, locale: &str) -> Option<&str> {
        self.store.get(identifier)?.get(locale)
    }

    /// Whether [`Translator::resolve`] would produce a value.
    pub fn has_translation(&self, identifier: &str) -> bool {
        self.resolve(identifier).is_some()
    }

    /// Every locale code present anywhere in the store.
    pub fn available_locales(&self) -> BTreeSet<&str> {
        self.store.locales()
    }

    pub fn metrics(&self) -> &ResolutionMetrics {
        &self.metrics
    }

    fn lookup(&self, identifier: &str) -> (Option<&str>, Resolution) {
        let Some(locales) = self.store.get(identifier) else {
            return (None, Resolution::Missing);
        };

        if let Some(text) = locales.get(&self.current_locale) {
            return (Some(text), Resolution::Exact);
        }

        if let Some((base, _)) = self.current_locale.split_once(REGION_SEPARATOR) {
            if let Some((_, text)) = locales.iter().find(|(code, _)| code.starts_with(base)) {
                return (Some(text), Resolution::BaseLanguage);
            }
        }

        match locales.first() {
            Some((_, text)) => (Some(text), Resolution::FirstAvailable),
            None => (None, Resolution::Missing),
        }
    }
}
