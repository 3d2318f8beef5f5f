//! Locale-aware string translation lookups.
//!
//! Translations are a two-level JSON document, identifier → locale → text.
//! The [`i18n::Translator`] resolves identifiers for a current locale with a
//! base-language and first-available fallback, and the `linguist-embed`
//! binary ([`embed`]) turns a document into a static table that can be
//! compiled into an application.

pub mod config;
pub mod embed;
pub mod i18n;
