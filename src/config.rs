use std::fs;
use std::io;
use std::path::Path;

use serde::Deserialize;

use crate::catalog::{normalize_name, Catalog};
use crate::error::PatternError;

pub const DEFAULT_CONFIG_PATH: &str = "patterns.toml";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Colored headings in the CLI.
    pub color: bool,
    /// Tracing filter used when RUST_LOG is unset.
    pub log_level: String,
    /// Restricts `run --all`; empty means every pattern.
    pub only: Vec<String>,
    pub skip: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            color: true,
            log_level: "warn".to_string(),
            only: Vec::new(),
            skip: Vec::new(),
        }
    }
}

impl Config {
    pub fn from_toml_str(source: &str) -> Result<Self, PatternError> {
        Self::parse(source, "<inline>")
    }

    /// Loads `path`. A missing file is only tolerated when it is the default
    /// path, so `--config typo.toml` still fails loudly.
    pub fn load(path: &Path) -> Result<Self, PatternError> {
        match fs::read_to_string(path) {
            Ok(source) => Self::parse(&source, &path.display().to_string()),
            Err(e) if e.kind() == io::ErrorKind::NotFound && path == Path::new(DEFAULT_CONFIG_PATH) => {
                Ok(Config::default())
            }
            Err(e) => Err(PatternError::Config {
                path: path.display().to_string(),
                reason: e.to_string(),
            }),
        }
    }

    fn parse(source: &str, origin: &str) -> Result<Self, PatternError> {
        let config: Config = toml::from_str(source).map_err(|e| PatternError::Config {
            path: origin.to_string(),
            reason: e.message().to_string(),
        })?;

        match config.log_level.to_ascii_lowercase().as_str() {
            "error" | "warn" | "info" | "debug" | "trace" | "off" => Ok(config),
            other => Err(PatternError::Config {
                path: origin.to_string(),
                reason: format!("unknown log_level '{other}'"),
            }),
        }
    }

    /// Every name in `only` and `skip` must resolve in the catalog.
    pub fn validate(&self, catalog: &Catalog) -> Result<(), PatternError> {
        for name in self.only.iter().chain(&self.skip) {
            catalog.find(name)?;
        }
        Ok(())
    }

    pub fn selects(&self, name: &str) -> bool {
        let wanted = normalize_name(name);
        let listed = |names: &[String]| names.iter().any(|n| normalize_name(n) == wanted);

        (self.only.is_empty() || listed(&self.only)) && !listed(&self.skip)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_source_gives_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
        assert!(config.color);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_parse_all_fields() {
        let config = Config::from_toml_str(
            r#"
            color = false
            log_level = "debug"
            only = ["builder", "Chain of Responsibility"]
            skip = ["builder"]
            "#,
        )
        .unwrap();

        assert!(!config.color);
        assert!(config.selects("chain-of-responsibility"));
        assert!(!config.selects("builder"));
        assert!(!config.selects("proxy"));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = Config::from_toml_str("colour = true").unwrap_err();
        assert!(matches!(err, PatternError::Config { .. }));
    }

    #[test]
    fn test_bad_log_level_rejected() {
        let err = Config::from_toml_str("log_level = \"loud\"").unwrap_err();
        assert!(err.to_string().contains("unknown log_level 'loud'"));
    }

    #[test]
    fn test_validate_reports_suggestion() {
        let catalog = Catalog::standard();
        let config = Config::from_toml_str("skip = [\"singelton\"]").unwrap();
        match config.validate(&catalog) {
            Err(PatternError::UnknownPattern { suggestion, .. }) => {
                assert_eq!(suggestion.as_deref(), Some("singleton"));
            }
            other => panic!("expected UnknownPattern, got {other:?}"),
        }
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "only = [\"visitor\"]").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.only, vec!["visitor".to_string()]);
        assert!(config.selects("visitor"));
        assert!(!config.selects("state"));
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, PatternError::Config { .. }));
    }
}
