//! Application Configuration
//!
//! JSON configuration file with serde defaults for every field. An empty
//! object `{}` is a valid configuration.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::notify::EmailConfig;

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl ConfigError {
    pub fn code(&self) -> &'static str {
        match self {
            ConfigError::Io { .. } => "CONFIG_IO_ERROR",
            ConfigError::Parse { .. } => "CONFIG_PARSE_ERROR",
            ConfigError::Invalid(_) => "CONFIG_INVALID",
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Content languages (default: ["en"])
    #[serde(default = "default_languages")]
    pub languages: Vec<String>,

    /// Language used when none is given (default: "en")
    #[serde(default = "default_language")]
    pub default_language: String,

    #[serde(default)]
    pub logging: LogConfig,

    #[serde(default)]
    pub notifications: NotificationConfig,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Filter directive, e.g. "info" or "pagesmith=debug" (default: "info")
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

/// Content update notifications
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NotificationConfig {
    #[serde(default)]
    pub enabled: bool,

    /// Addresses mailed on every section update
    #[serde(default)]
    pub recipients: Vec<String>,

    /// SMTP settings; absent means messages stay in an in-memory outbox
    #[serde(default)]
    pub smtp: Option<EmailConfig>,
}

fn default_languages() -> Vec<String> {
    vec!["en".to_string()]
}

fn default_language() -> String {
    "en".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            languages: default_languages(),
            default_language: default_language(),
            logging: LogConfig::default(),
            notifications: NotificationConfig::default(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

impl AppConfig {
    /// Parse a configuration from JSON text without validating it
    pub fn from_json(content: &str, origin: &str) -> ConfigResult<Self> {
        serde_json::from_str(content).map_err(|source| ConfigError::Parse {
            path: origin.to_string(),
            source,
        })
    }

    /// Read, parse and validate a configuration file
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_json(&content, &path.display().to_string())?;
        config.validate()?;
        Ok(config)
    }

    /// Like `load`, but a missing file yields the defaults
    pub fn load_or_default(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Checks cross-field constraints
    pub fn validate(&self) -> ConfigResult<()> {
        if self.languages.is_empty() {
            return Err(ConfigError::Invalid("at least one language is required".into()));
        }

        let mut seen = HashSet::new();
        for language in &self.languages {
            if language.trim().is_empty() {
                return Err(ConfigError::Invalid("language codes must not be blank".into()));
            }
            if !seen.insert(language.as_str()) {
                return Err(ConfigError::Invalid(format!(
                    "language '{}' is listed twice",
                    language
                )));
            }
        }

        if !self.languages.contains(&self.default_language) {
            return Err(ConfigError::Invalid(format!(
                "default language '{}' is not in the language list",
                self.default_language
            )));
        }

        if self.notifications.enabled && self.notifications.recipients.is_empty() {
            return Err(ConfigError::Invalid(
                "notifications are enabled but no recipients are configured".into(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_defaults_from_empty_object() {
        let config = AppConfig::from_json("{}", "inline").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.languages, vec!["en"]);
        assert_eq!(config.logging.level, "info");
        assert!(!config.notifications.enabled);
        config.validate().unwrap();
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "languages": ["en", "de"],
                "default_language": "de",
                "logging": {{"level": "debug", "json": true}},
                "notifications": {{
                    "enabled": true,
                    "recipients": ["editor@example.com"],
                    "smtp": {{"smtp_host": "mail.example.com", "smtp_port": 587}}
                }}
            }}"#
        )
        .unwrap();

        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.default_language, "de");
        assert!(config.logging.json);
        let smtp = config.notifications.smtp.unwrap();
        assert_eq!(smtp.smtp_host, "mail.example.com");
        assert_eq!(smtp.from_name, "Pagesmith");
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = TempDir::new().unwrap();
        let config = AppConfig::load_or_default(&dir.path().join("absent.json")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = AppConfig::load(&dir.path().join("absent.json")).unwrap_err();
        assert_eq!(err.code(), "CONFIG_IO_ERROR");
    }

    #[test]
    fn test_parse_error() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        let err = AppConfig::load(file.path()).unwrap_err();
        assert_eq!(err.code(), "CONFIG_PARSE_ERROR");
    }

    #[test]
    fn test_validate_rejects_bad_languages() {
        let empty = AppConfig {
            languages: vec![],
            ..AppConfig::default()
        };
        assert!(empty.validate().is_err());

        let duplicate = AppConfig {
            languages: vec!["en".into(), "en".into()],
            ..AppConfig::default()
        };
        assert!(duplicate.validate().is_err());

        let foreign_default = AppConfig {
            default_language: "fr".into(),
            ..AppConfig::default()
        };
        assert!(foreign_default.validate().is_err());
    }

    #[test]
    fn test_validate_notifications_need_recipients() {
        let mut config = AppConfig::default();
        config.notifications.enabled = true;
        let err = config.validate().unwrap_err();
        assert_eq!(err.code(), "CONFIG_INVALID");

        config.notifications.recipients.push("editor@example.com".into());
        config.validate().unwrap();
    }
}
