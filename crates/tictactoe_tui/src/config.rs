//! Application configuration loaded from a TOML file.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

use crate::theme::Theme;

/// User configuration.
///
/// Every field has a default, so an empty or missing file is valid. CLI
/// flags override whatever is loaded here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Initial theme.
    pub theme: Theme,

    /// Log file path; `tictactoe_tui.log` in the working directory when
    /// unset.
    pub log_file: Option<PathBuf>,
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(theme = config.theme.label(), "Config loaded");
        Ok(config)
    }

    /// Loads the file at `path`, falling back to defaults when it does not
    /// exist. A present-but-invalid file is an error rather than a silent
    /// fallback.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("No config file, using defaults");
            Ok(Self::default())
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where the error was constructed.
    pub line: u32,
    /// Source file where the error was constructed.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error, capturing the caller location.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_when_file_missing() {
        let config = AppConfig::load_or_default("definitely/not/here.toml")
            .expect("missing file falls back to defaults");
        assert_eq!(config.theme, Theme::Light);
        assert!(config.log_file.is_none());
    }

    #[test]
    fn test_parses_theme_and_log_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "theme = \"dark\"\nlog_file = \"game.log\"").expect("write config");

        let config = AppConfig::from_file(file.path()).expect("valid config");
        assert_eq!(config.theme, Theme::Dark);
        assert_eq!(config.log_file.as_deref(), Some(Path::new("game.log")));
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "theme = \"plaid\"").expect("write config");

        let err = AppConfig::from_file(file.path()).expect_err("unknown theme");
        assert!(err.to_string().contains("Failed to parse config"));
    }
}
