//! Locale-aware translation lookups.
//!
//! # Architecture
//!
//! - `store`: identifier → locale → string mapping and the JSON loader
//! - `provider`: injectable sources of embedded translations
//! - `locale`: system locale detection
//! - `translator`: the resolver and its fallback policy
//! - `metrics`: per-translator counters of how lookups were satisfied
//! - `validator`: coverage checks over a loaded store
//!
//! # Example
//!
//! ```rust
//! use linguist::i18n::{FixedLocale, NoTranslations, Translator};
//!
//! let mut translator = Translator::with_detector(&NoTranslations, &FixedLocale::new("en-US"));
//! assert!(translator.load(r#"{ "home.title": { "en": "Home", "fr-FR": "Accueil" } }"#));
//!
//! // No "en-US" entry, so the base language "en" is used
//! assert_eq!(translator.resolve("home.title"), Some("Home"));
//! assert_eq!(translator.resolve_for_locale("home.title", "fr-FR"), Some("Accueil"));
//! assert_eq!(translator.resolve_or("missing", "fallback"), "fallback");
//! ```

mod locale;
mod metrics;
mod provider;
mod store;
mod translator;
mod validator;

pub use locale::{
    detect_system_locale, normalize_locale, EnvLocale, FixedLocale, LocaleDetector, SystemLocale,
    DEFAULT_LOCALE, LOCALE_ENV_VARS,
};
pub use metrics::{MetricsReport, Resolution, ResolutionMetrics};
pub use provider::{EmbeddedTable, NoTranslations, StaticTable, TranslationProvider};
pub use store::{LocaleMap, StoreError, TranslationStore};
pub use translator::Translator;
pub use validator::{CoverageValidator, ValidationReport};
