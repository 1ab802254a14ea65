//! Catalog service configuration from TOML (`[api]` section)

use petmatch_application::{ApiConfig, DEFAULT_BASE_URL};
use petmatch_domain::config::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};

/// Raw API configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileApiConfig {
    /// Root URL of the pet catalog service
    pub base_url: String,
    /// Request timeout in seconds (transport default when unset)
    pub timeout_secs: Option<u64>,
}

impl Default for FileApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: Some(10),
        }
    }
}

impl FileApiConfig {
    /// Check the URL scheme and timeout
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        let url = self.base_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::InvalidUrl {
                    field: "api.base_url".to_string(),
                    value: self.base_url.clone(),
                },
                format!(
                    "api.base_url: '{}' is not an http(s) URL",
                    self.base_url
                ),
            ));
        }

        if self.timeout_secs == Some(0) {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::ZeroTimeout {
                    field: "api.timeout_secs".to_string(),
                },
                "api.timeout_secs cannot be 0",
            ));
        }

        issues
    }

    pub fn to_api_config(&self) -> ApiConfig {
        ApiConfig::new(self.base_url.trim()).with_optional_timeout_seconds(self.timeout_secs)
    }
}
