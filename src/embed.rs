//! Build-time embedding of translation documents.
//!
//! Reads a translation JSON document and writes a Rust source file defining a
//! static table in the [`EmbeddedTable`](crate::i18n::EmbeddedTable) shape, so
//! an application can `include!` it and hand it to
//! [`StaticTable`](crate::i18n::StaticTable).

use crate::config::Config;
use crate::i18n::{CoverageValidator, LocaleMap, TranslationStore};
use anyhow::{bail, Context, Result};
use std::fs;
use tracing::{info, warn};

/// Outcome of a successful embed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedSummary {
    pub identifiers: usize,
    pub translations: usize,
    pub warnings: usize,
}

/// Render the generated source for `entries`.
///
/// Strings are written with Rust escaping (quotes, backslashes and control
/// characters), so every identifier/locale/text triple survives unchanged.
pub fn render_table(source_name: &str, table_name: &str, entries: &[(String, LocaleMap)]) -> String {
    let mut out = String::new();

    out.push_str("//\n");
    out.push_str("// Generated file - DO NOT EDIT\n");
    out.push_str(&format!("// Generated from: {}\n", source_name));
    out.push_str("//\n\n");

    out.push_str(&format!(
        "pub static {}: &[(&str, &[(&str, &str)])] = &[\n",
        table_name
    ));
    for (identifier, locales) in entries {
        out.push_str(&format!("    ({:?}, &[\n", identifier));
        for (locale, text) in locales.iter() {
            out.push_str(&format!("        ({:?}, {:?}),\n", locale, text));
        }
        out.push_str("    ]),\n");
    }
    out.push_str("];\n");

    out
}

/// Read `config.input`, validate it and write the generated table to
/// `config.output`.
///
/// Nothing is written when the input cannot be read or parsed, or when
/// strict mode is on and validation reports errors.
pub fn embed_file(config: &Config) -> Result<EmbedSummary> {
    config.validate()?;

    let content = fs::read_to_string(&config.input)
        .with_context(|| format!("Cannot open input file: {}", config.input.display()))?;

    let entries = TranslationStore::parse_document(&content)
        .with_context(|| format!("Failed to parse {}", config.input.display()))?;

    if entries.is_empty() {
        warn!("{} contains no identifiers", config.input.display());
    }

    let report = CoverageValidator::validate(&TranslationStore::from_entries(entries.clone()));
    for warning in &report.warnings {
        warn!("{}", warning);
    }
    for error in &report.errors {
        warn!("Validation error: {}", error);
    }
    if config.strict && report.has_errors() {
        bail!(
            "{} has {} validation error(s); refusing to embed in strict mode",
            config.input.display(),
            report.errors.len()
        );
    }

    let source_name = config
        .input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| config.input.display().to_string());

    let source = render_table(&source_name, &config.table_name, &entries);
    fs::write(&config.output, source)
        .with_context(|| format!("Cannot write output file: {}", config.output.display()))?;

    let summary = EmbedSummary {
        identifiers: entries.len(),
        translations: entries.iter().map(|(_, locales)| locales.len()).sum(),
        warnings: report.warnings.len(),
    };

    info!(
        "Generated {} from {} ({} identifiers, {} translations)",
        config.output.display(),
        config.input.display(),
        summary.identifiers,
        summary.translations
    );

    Ok(summary)
}
