//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod api;
mod logging;
mod output;
mod quiz;

pub use api::FileApiConfig;
pub use logging::FileLoggingConfig;
pub use output::{FileOutputConfig, FileOutputFormat};
pub use quiz::FileQuizConfig;

use petmatch_domain::config::{ConfigIssue, Severity};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("invalid configuration: {}", .0.join("; "))]
    Invalid(Vec<String>),
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Catalog service connection
    pub api: FileApiConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Quiz settings
    pub quiz: FileQuizConfig,
    /// Log sinks
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// This is the single entry point for config validation. It checks:
    /// 1. API base URL scheme and timeout
    /// 2. Enum parse failures for quiz fields
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        issues.extend(self.api.validate());
        issues.extend(self.quiz.parse_classifier().1);
        issues
    }

    /// Fail if any issue is [`Severity::Error`]; warnings pass through
    pub fn ensure_valid(&self) -> Result<Vec<ConfigIssue>, ConfigValidationError> {
        let (errors, warnings): (Vec<_>, Vec<_>) = self
            .validate()
            .into_iter()
            .partition(|i| i.severity == Severity::Error);
        if errors.is_empty() {
            Ok(warnings)
        } else {
            Err(ConfigValidationError::Invalid(
                errors.into_iter().map(|i| i.message).collect(),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use petmatch_application::ClassifierChoice;
    use petmatch_domain::OutputFormat;
    use std::path::PathBuf;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[api]
base_url = "https://pets.example.org"
timeout_secs = 5

[output]
format = "json"
color = false

[quiz]
classifier = "local"

[logging]
file = "/tmp/petmatch.log"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.api.base_url, "https://pets.example.org");
        assert_eq!(config.api.timeout_secs, Some(5));
        assert_eq!(config.output.format, Some(OutputFormat::Json));
        assert!(!config.output.color);
        assert_eq!(config.quiz.parse_classifier().0, ClassifierChoice::Local);
        assert_eq!(config.logging.file, Some(PathBuf::from("/tmp/petmatch.log")));
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[api]
base_url = "http://10.0.0.2:8000"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.api.base_url, "http://10.0.0.2:8000");
        // Defaults should apply
        assert_eq!(config.api.timeout_secs, Some(10));
        assert!(config.output.format.is_none());
        assert!(config.output.color);
        assert_eq!(config.quiz.classifier, "remote");
    }

    #[test]
    fn test_validate_valid_config() {
        let config = FileConfig::default();
        assert!(config.validate().is_empty());
        assert!(config.ensure_valid().unwrap().is_empty());
    }

    #[test]
    fn test_ensure_valid_splits_errors_from_warnings() {
        let mut config = FileConfig::default();
        config.quiz.classifier = "tarot".to_string();
        assert_eq!(config.ensure_valid().unwrap().len(), 1);

        config.api.timeout_secs = Some(0);
        let err = config.ensure_valid().unwrap_err();
        assert!(err.to_string().contains("api.timeout_secs cannot be 0"));
    }
}
