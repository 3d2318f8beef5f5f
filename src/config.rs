use anyhow::{bail, Context, Result};
use regex::Regex;
use std::path::PathBuf;
use std::sync::OnceLock;

/// Name of the generated static when `LINGUIST_TABLE_NAME` is unset.
pub const DEFAULT_TABLE_NAME: &str = "EMBEDDED_TRANSLATIONS";

const USAGE: &str = "Usage: linguist-embed <input.json> <output.rs>";

static IDENTIFIER_REGEX: OnceLock<Regex> = OnceLock::new();

/// Settings for the `linguist-embed` tool.
#[derive(Debug, Clone)]
pub struct Config {
    // Files
    pub input: PathBuf,
    pub output: PathBuf,

    // Generated source
    pub table_name: String,

    // Validation
    pub strict: bool,
}

impl Config {
    /// Defaults for the given input and output paths.
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            table_name: DEFAULT_TABLE_NAME.to_string(),
            strict: false,
        }
    }

    /// Build from the command-line arguments (program name excluded) plus
    /// `LINGUIST_TABLE_NAME` and `LINGUIST_STRICT` from the environment.
    pub fn from_args<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let args: Vec<String> = args.into_iter().collect();
        let [input, output] = args.as_slice() else {
            bail!("{}", USAGE);
        };

        let mut config = Self::new(input, output);

        // Generated source
        if let Ok(name) = std::env::var("LINGUIST_TABLE_NAME") {
            config.table_name = name;
        }

        // Validation
        if let Ok(value) = std::env::var("LINGUIST_STRICT") {
            config.strict = parse_flag(&value)
                .with_context(|| format!("LINGUIST_STRICT has invalid value '{}'", value))?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Check that the table name can be emitted as a Rust identifier.
    pub fn validate(&self) -> Result<()> {
        let regex = IDENTIFIER_REGEX
            .get_or_init(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap());

        if self.table_name == "_" || !regex.is_match(&self.table_name) {
            bail!(
                "Table name '{}' is not a valid Rust identifier",
                self.table_name
            );
        }
        Ok(())
    }
}

fn parse_flag(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("expected a boolean, got '{}'", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn clear_env() {
        std::env::remove_var("LINGUIST_TABLE_NAME");
        std::env::remove_var("LINGUIST_STRICT");
    }

    #[test]
    #[serial]
    fn test_from_args_defaults() {
        clear_env();
        let config = Config::from_args(args(&["in.json", "out.rs"])).expect("Should parse");

        assert_eq!(config.input, PathBuf::from("in.json"));
        assert_eq!(config.output, PathBuf::from("out.rs"));
        assert_eq!(config.table_name, DEFAULT_TABLE_NAME);
        assert!(!config.strict);
    }

    #[test]
    #[serial]
    fn test_from_args_wrong_count() {
        clear_env();
        let err = Config::from_args(args(&["in.json"])).unwrap_err();
        assert!(err.to_string().contains("Usage"));

        assert!(Config::from_args(args(&[])).is_err());
        assert!(Config::from_args(args(&["a", "b", "c"])).is_err());
    }

    #[test]
    #[serial]
    fn test_from_args_reads_env() {
        clear_env();
        std::env::set_var("LINGUIST_TABLE_NAME", "APP_STRINGS");
        std::env::set_var("LINGUIST_STRICT", "true");

        let config = Config::from_args(args(&["in.json", "out.rs"]));
        clear_env();

        let config = config.expect("Should parse");
        assert_eq!(config.table_name, "APP_STRINGS");
        assert!(config.strict);
    }

    #[test]
    #[serial]
    fn test_from_args_rejects_bad_strict_flag() {
        clear_env();
        std::env::set_var("LINGUIST_STRICT", "maybe");

        let result = Config::from_args(args(&["in.json", "out.rs"]));
        clear_env();

        assert!(result.is_err());
    }

    #[test]
    #[serial]
    fn test_from_args_rejects_bad_table_name() {
        clear_env();
        std::env::set_var("LINGUIST_TABLE_NAME", "not valid");

        let result = Config::from_args(args(&["in.json", "out.rs"]));
        clear_env();

        assert!(result.unwrap_err().to_string().contains("not a valid Rust identifier"));
    }

    #[test]
    fn test_validate_table_names() {
        let mut config = Config::new("in.json", "out.rs");
        assert!(config.validate().is_ok());

        config.table_name = "_private_table".to_string();
        assert!(config.validate().is_ok());

        config.table_name = "_".to_string();
        assert!(config.validate().is_err());

        config.table_name = "1TABLE".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("1").unwrap());
        assert!(parse_flag(" TRUE ").unwrap());
        assert!(!parse_flag("off").unwrap());
        assert!(!parse_flag("").unwrap());
        assert!(parse_flag("2").is_err());
    }
}
