//! Logging configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw logging configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Also write logs to this file (appended)
    pub file: Option<PathBuf>,
    /// Filter directive used when `-v` is not given (e.g. "petmatch=debug")
    pub filter: Option<String>,
}
