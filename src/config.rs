//! Optional `patterns.toml` settings shared by the demo programs.
//!
//! ```toml
//! [logging]
//! level = "debug"
//! format = "pretty"
//! ```
//!
//! Only logging is configurable; the demo output itself is fixed. Unknown
//! keys are ignored.

use crate::error::{PatternError, Result};
use crate::logging::LogFormat;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_ENV: &str = "PATTERNS_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "patterns.toml";

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub logging: LoggingSection,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    pub level: String,
    pub format: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: "text".to_string(),
        }
    }
}

impl LoggingSection {
    pub fn log_format(&self) -> Result<LogFormat> {
        self.format.parse()
    }
}

impl DemoConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: DemoConfig = toml::from_str(content)?;
        config.logging.log_format()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| PatternError::config_read(path, err))?;
        Self::from_toml_str(&content)
    }

    /// `$PATTERNS_CONFIG` if set, else `./patterns.toml` if it exists,
    /// else the defaults.
    pub fn load() -> Result<Self> {
        match Self::locate(std::env::var_os(CONFIG_ENV).map(PathBuf::from)) {
            Some(path) => Self::from_file(&path),
            None => Ok(Self::default()),
        }
    }

    /// Swaps an unusable config for the defaults, keeping the reason so the
    /// caller can report it once logging is up.
    pub fn or_default(loaded: Result<Self>) -> (Self, Option<PatternError>) {
        match loaded {
            Ok(config) => (config, None),
            Err(err) => (Self::default(), Some(err)),
        }
    }

    fn locate(explicit: Option<PathBuf>) -> Option<PathBuf> {
        if explicit.is_some() {
            return explicit;
        }
        let local = PathBuf::from(DEFAULT_CONFIG_FILE);
        local.is_file().then_some(local)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge;
    use crate::console::Transcript;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = DemoConfig::from_toml_str("").unwrap();

        assert_eq!(config, DemoConfig::default());
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.logging.log_format().unwrap(), LogFormat::Text);
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let config = DemoConfig::from_toml_str("unrelated = 1\n[bridge]\ntune_to = 9\n").unwrap();
        assert_eq!(config, DemoConfig::default());
    }

    #[test]
    fn test_config_cannot_change_bridge_output() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[bridge]\ntune_to = 9\n[logging]\nlevel = \"debug\"").unwrap();
        let config = DemoConfig::from_file(file.path()).unwrap();
        assert_eq!(config.logging.level, "debug");

        let transcript = Transcript::new();
        bridge::run_demo(&transcript).unwrap();

        assert_eq!(
            transcript.lines(),
            vec![
                "Turning TV on!",
                "Changing channel to=2",
                "Changing channel to=3",
                "Changing channel to=2",
                "Turning TV off!",
            ]
        );
    }

    #[test]
    fn test_unusable_config_falls_back_to_defaults() {
        let (config, reason) = DemoConfig::or_default(DemoConfig::from_toml_str(
            "[logging]\nformat = \"xml\"\n",
        ));

        assert_eq!(config, DemoConfig::default());
        assert!(matches!(reason, Some(PatternError::LogFormat(_))));

        let (config, reason) = DemoConfig::or_default(DemoConfig::from_toml_str("[logging]\n"));
        assert_eq!(config, DemoConfig::default());
        assert!(reason.is_none());
    }

    #[test]
    fn test_malformed_toml_rejected() {
        let err = DemoConfig::from_toml_str("[logging\n").unwrap_err();
        assert!(matches!(err, PatternError::ConfigParse(_)));
    }

    #[test]
    fn test_bad_log_format_rejected() {
        let err = DemoConfig::from_toml_str("[logging]\nformat = \"xml\"\n").unwrap_err();
        assert!(matches!(err, PatternError::LogFormat(ref f) if f == "xml"));
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[logging]\nlevel = \"debug\"\nformat = \"json\"").unwrap();

        let config = DemoConfig::from_file(file.path()).unwrap();

        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.log_format().unwrap(), LogFormat::Json);
    }

    #[test]
    fn test_missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        let err = DemoConfig::from_file(&path).unwrap_err();

        assert!(matches!(err, PatternError::ConfigRead { .. }));
        assert!(err.to_string().contains("absent.toml"));
    }

    #[test]
    fn test_explicit_path_wins() {
        let path = PathBuf::from("/somewhere/else.toml");
        assert_eq!(DemoConfig::locate(Some(path.clone())), Some(path));
    }
}
