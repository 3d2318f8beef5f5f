//! Translation coverage validation.
//!
//! This module checks a loaded store for gaps that the resolver would
//! silently paper over with fallbacks: identifiers missing some locales,
//! empty strings, and locale codes that do not look like `language-REGION`.

use crate::i18n::TranslationStore;
use regex::Regex;
use std::sync::OnceLock;

/// Validation report containing errors and warnings about a store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Problems that make an entry unusable
    pub errors: Vec<String>,

    /// Non-critical issues that will trigger fallbacks
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Create a new empty validation report
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Check if the report has any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check if the report has any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for translation coverage.
pub struct CoverageValidator;

static LOCALE_CODE_REGEX: OnceLock<Regex> = OnceLock::new();

impl CoverageValidator {
    /// Validate every identifier in `store`.
    ///
    /// Messages are sorted by identifier so reports are stable across runs.
    pub fn validate(store: &TranslationStore) -> ValidationReport {
        let mut report = ValidationReport::new();
        let all_locales = store.locales();

        for locale in &all_locales {
            if locale.is_empty() {
                continue;
            }
            if !Self::is_conventional_locale(locale) {
                report.warnings.push(format!(
                    "Locale '{}' is not in language-REGION form and may match base-language fallbacks unexpectedly",
                    locale
                ));
            }
        }

        let mut identifiers: Vec<_> = store.iter().collect();
        identifiers.sort_by(|a, b| a.0.cmp(b.0));

        for (identifier, locales) in identifiers {
            if identifier.is_empty() {
                report.errors.push("Empty identifier".to_string());
            }

            if locales.is_empty() {
                report
                    .warnings
                    .push(format!("'{}' has no translations", identifier));
                continue;
            }

            for (locale, text) in locales.iter() {
                if locale.is_empty() {
                    report
                        .errors
                        .push(format!("'{}' has a translation with an empty locale", identifier));
                } else if text.is_empty() {
                    report
                        .warnings
                        .push(format!("'{}' is empty for locale '{}'", identifier, locale));
                }
            }

            let missing: Vec<_> = all_locales
                .iter()
                .filter(|locale| locales.get(locale).is_none())
                .collect();
            if !missing.is_empty() {
                report.warnings.push(format!(
                    "'{}' is missing locales {:?}",
                    identifier, missing
                ));
            }
        }

        report
    }

    /// Whether `locale` looks like `en`, `en-US` or `zh-Hant-TW`.
    fn is_conventional_locale(locale: &str) -> bool {
        let regex = LOCALE_CODE_REGEX
            .get_or_init(|| Regex::new(r"^[A-Za-z]{2,3}(-[A-Za-z0-9]{2,8})*$").unwrap());

        regex.is_match(locale)
    }
}
