//! Sources of embedded translations.
//!
//! A translator is seeded from a [`TranslationProvider`] at construction
//! instead of reaching for a global table. Applications normally pass a
//! [`StaticTable`] wrapping the static generated by `linguist-embed`; tests
//! can hand in any table or store directly.

use crate::i18n::{LocaleMap, TranslationStore};

/// Shape of the table emitted by `linguist-embed`:
/// `(identifier, [(locale, text), ...])`.
pub type EmbeddedTable = &'static [(&'static str, &'static [(&'static str, &'static str)])];

/// Supplies the translations a translator starts with.
pub trait TranslationProvider {
    fn translations(&self) -> TranslationStore;
}

/// A compiled-in table generated ahead of time from a JSON document.
#[derive(Debug, Clone, Copy)]
pub struct StaticTable(pub EmbeddedTable);

impl TranslationProvider for StaticTable {
    fn translations(&self) -> TranslationStore {
        TranslationStore::from_entries(self.0.iter().map(|(identifier, locales)| {
            (
                (*identifier).to_string(),
                locales.iter().copied().collect::<LocaleMap>(),
            )
        }))
    }
}

/// Provider for applications that only load translations at run time.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTranslations;

impl TranslationProvider for NoTranslations {
    fn translations(&self) -> TranslationStore {
        TranslationStore::default()
    }
}

impl TranslationProvider for TranslationStore {
    fn translations(&self) -> TranslationStore {
        self.clone()
    }
}
