//! Configuration issue reporting.
//!
//! Loaders validate raw configuration and report problems as structured
//! [`ConfigIssue`]s instead of failing on the first one.
//!
//! # Examples
//!
//! ```
//! use petmatch_domain::config::{ConfigIssue, ConfigIssueCode, Severity};
//!
//! let issue = ConfigIssue::warning(
//!     ConfigIssueCode::InvalidEnumValue {
//!         field: "quiz.classifier".into(),
//!         value: "magic".into(),
//!         valid_values: vec!["remote".into(), "local".into()],
//!     },
//!     "quiz.classifier: unknown value 'magic', falling back to 'remote'",
//! );
//! assert_eq!(issue.severity, Severity::Warning);
//! ```

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// A URL field is not an http(s) URL.
    InvalidUrl { field: String, value: String },
    /// A timeout of zero would fail every request.
    ZeroTimeout { field: String },
    /// A string field holds a value outside its known set.
    InvalidEnumValue {
        field: String,
        value: String,
        valid_values: Vec<String>,
    },
}

/// A detected issue in the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn error(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
        }
    }

    pub fn warning(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}
