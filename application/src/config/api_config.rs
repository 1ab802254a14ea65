//! Catalog service connection settings.

use std::time::Duration;

/// Base URL used when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Connection settings handed to catalog adapters at construction time.
///
/// There is no module-wide base URL; every adapter receives one of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Root of the catalog service, without a trailing slash
    pub base_url: String,
    /// Maximum time to wait for a response before timing out.
    pub timeout: Option<Duration>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: None,
        }
    }

    /// Sets the timeout in seconds.
    pub fn with_timeout_seconds(mut self, seconds: u64) -> Self {
        self.timeout = Some(Duration::from_secs(seconds));
        self
    }

    /// Sets the timeout from an optional value in seconds.
    ///
    /// If `seconds` is `None`, the transport's own default applies.
    pub fn with_optional_timeout_seconds(mut self, seconds: Option<u64>) -> Self {
        self.timeout = seconds.map(Duration::from_secs);
        self
    }

    /// Join a path onto the base URL
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}
