//! System locale detection.
//!
//! Detection is a collaborator injected into the translator rather than a
//! compile-time switch. [`SystemLocale`] asks the operating system,
//! [`EnvLocale`] reads the POSIX environment variables directly and
//! [`FixedLocale`] (or any `Fn() -> String`) pins a value.

use tracing::debug;

/// Locale used when the platform offers no usable signal.
pub const DEFAULT_LOCALE: &str = "en-US";

/// Environment variables consulted by [`EnvLocale`], highest precedence first.
pub const LOCALE_ENV_VARS: &[&str] = &["LC_ALL", "LC_MESSAGES", "LANG"];

/// Produces a best-guess `language-REGION` code for the current environment.
pub trait LocaleDetector {
    fn detect(&self) -> String;
}

impl<F> LocaleDetector for F
where
    F: Fn() -> String,
{
    fn detect(&self) -> String {
        self()
    }
}

/// Queries the operating system locale setting.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLocale;

impl LocaleDetector for SystemLocale {
    fn detect(&self) -> String {
        let raw = sys_locale::get_locale();
        debug!("System locale reported by platform: {:?}", raw);

        raw.as_deref()
            .and_then(normalize_locale)
            .unwrap_or_else(|| DEFAULT_LOCALE.to_string())
    }
}

/// Reads the locale from environment variables.
///
/// The first variable that is set and non-blank decides the result, even if
/// it names the minimal `C`/`POSIX` locale.
#[derive(Debug, Clone, Copy)]
pub struct EnvLocale {
    variables: &'static [&'static str],
}

impl EnvLocale {
    pub fn new() -> Self {
        Self {
            variables: LOCALE_ENV_VARS,
        }
    }

    /// Consult only the given variables, in order.
    pub fn with_variables(variables: &'static [&'static str]) -> Self {
        Self { variables }
    }
}

impl Default for EnvLocale {
    fn default() -> Self {
        Self::new()
    }
}

impl LocaleDetector for EnvLocale {
    fn detect(&self) -> String {
        for name in self.variables {
            match std::env::var(name) {
                Ok(value) if !value.trim().is_empty() => {
                    debug!("Locale taken from {}={}", name, value);
                    return normalize_locale(&value).unwrap_or_else(|| DEFAULT_LOCALE.to_string());
                }
                _ => {}
            }
        }

        DEFAULT_LOCALE.to_string()
    }
}

/// Always reports the same locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedLocale(pub String);

impl FixedLocale {
    pub fn new(locale: impl Into<String>) -> Self {
        Self(locale.into())
    }
}

impl LocaleDetector for FixedLocale {
    fn detect(&self) -> String {
        self.0.clone()
    }
}

/// Detect the locale of the running system, falling back to [`DEFAULT_LOCALE`].
pub fn detect_system_locale() -> String {
    SystemLocale.detect()
}

/// Convert a platform locale string such as `en_US.UTF-8@euro` into `en-US`.
///
/// Returns `None` for blank input and for the minimal `C`/`POSIX` locales.
pub fn normalize_locale(raw: &str) -> Option<String> {
    let name = raw.trim().split(['.', '@']).next().unwrap_or("");

    if name.is_empty() || name == "C" || name == "POSIX" {
        return None;
    }

    Some(name.replacen('_', "-", 1))
}
