//! Translation store: identifier → locale → translated string.
//!
//! The store is populated in one shot, either from a JSON document shaped as
//! `{ "identifier": { "locale": "text", ... }, ... }` or from an embedded table
//! supplied by a [`TranslationProvider`](crate::i18n::TranslationProvider).
//! Once built it is never modified in place; a new load replaces it wholesale.

use serde_json::Value;
use std::collections::{BTreeSet, HashMap};
use thiserror::Error;

/// Reasons a translation document could not be turned into a store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The content is not valid JSON.
    #[error("malformed translation document: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The top-level value is not an object of identifiers.
    #[error("translation document must be a JSON object keyed by identifier")]
    NotAnObject,

    /// An identifier maps to something other than an object of locales.
    #[error("translations for '{identifier}' must be a JSON object keyed by locale")]
    InvalidLocaleMap { identifier: String },

    /// A leaf value is not a string.
    #[error("translation of '{identifier}' for locale '{locale}' must be a string")]
    InvalidTranslation { identifier: String, locale: String },

    /// The document is well formed but contains no identifiers.
    #[error("translation document contains no identifiers")]
    Empty,
}

/// Translated strings for a single identifier, keyed by locale code.
///
/// Entries keep insertion order. The resolver's base-language and
/// first-available fallbacks walk this order, so it must stay stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleMap {
    entries: Vec<(String, String)>,
}

impl LocaleMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a translation. An existing locale keeps its position and takes
    /// the new text.
    pub fn insert(&mut self, locale: impl Into<String>, text: impl Into<String>) {
        let locale = locale.into();
        let text = text.into();

        match self.entries.iter_mut().find(|(code, _)| *code == locale) {
            Some(entry) => entry.1 = text,
            None => self.entries.push((locale, text)),
        }
    }

    /// Exact lookup by locale code.
    pub fn get(&self, locale: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(code, _)| code == locale)
            .map(|(_, text)| text.as_str())
    }

    /// The first entry in insertion order.
    pub fn first(&self) -> Option<(&str, &str)> {
        self.entries
            .first()
            .map(|(code, text)| (code.as_str(), text.as_str()))
    }

    /// Iterate `(locale, text)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(code, text)| (code.as_str(), text.as_str()))
    }

    /// Locale codes in insertion order.
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(code, _)| code.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<L, T> FromIterator<(L, T)> for LocaleMap
where
    L: Into<String>,
    T: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (L, T)>>(iter: I) -> Self {
        let mut map = LocaleMap::new();
        for (locale, text) in iter {
            map.insert(locale, text);
        }
        map
    }
}

/// In-memory mapping from identifier to its [`LocaleMap`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationStore {
    translations: HashMap<String, LocaleMap>,
}

impl TranslationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from `(identifier, locales)` pairs. A repeated identifier
    /// replaces the earlier one.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, LocaleMap)>,
    {
        Self {
            translations: entries.into_iter().collect(),
        }
    }

    /// Parse a translation document into `(identifier, locales)` pairs,
    /// keeping document order at both levels.
    ///
    /// A well-formed but empty document yields an empty vector; callers that
    /// need at least one identifier should use [`TranslationStore::from_json`].
    pub fn parse_document(content: &str) -> Result<Vec<(String, LocaleMap)>, StoreError> {
        let Value::Object(root) = serde_json::from_str::<Value>(content)? else {
            return Err(StoreError::NotAnObject);
        };

        let mut entries = Vec::with_capacity(root.len());
        for (identifier, locales) in root {
            let Value::Object(locales) = locales else {
                return Err(StoreError::InvalidLocaleMap { identifier });
            };

            let mut map = LocaleMap::new();
            for (locale, text) in locales {
                let Value::String(text) = text else {
                    return Err(StoreError::InvalidTranslation { identifier, locale });
                };
                map.insert(locale, text);
            }

            entries.push((identifier, map));
        }

        Ok(entries)
    }

    /// Parse a translation document into a store.
    ///
    /// # Errors
    /// Returns [`StoreError::Empty`] when the document has no identifiers, and
    /// the other variants when it is not a two-level object of strings.
    pub fn from_json(content: &str) -> Result<Self, StoreError> {
        let entries = Self::parse_document(content)?;
        if entries.is_empty() {
            return Err(StoreError::Empty);
        }
        Ok(Self::from_entries(entries))
    }

    pub fn get(&self, identifier: &str) -> Option<&LocaleMap> {
        self.translations.get(identifier)
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.translations.contains_key(identifier)
    }

    /// Identifiers in unspecified order.
    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.translations.keys().map(String::as_str)
    }

    /// `(identifier, locales)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &LocaleMap)> {
        self.translations
            .iter()
            .map(|(identifier, locales)| (identifier.as_str(), locales))
    }

    /// Every locale code used by any identifier, deduplicated.
    pub fn locales(&self) -> BTreeSet<&str> {
        self.translations
            .values()
            .flat_map(LocaleMap::locales)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.translations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.translations.is_empty()
    }
}
