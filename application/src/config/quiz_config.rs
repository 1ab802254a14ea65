//! Quiz classifier selection.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Which classifier completes a quiz round
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassifierChoice {
    /// `POST /pets/game` on the catalog service
    #[default]
    Remote,
    /// Built-in rules, no network
    Local,
}

impl ClassifierChoice {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClassifierChoice::Remote => "remote",
            ClassifierChoice::Local => "local",
        }
    }
}

impl FromStr for ClassifierChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "remote" | "server" => Ok(ClassifierChoice::Remote),
            "local" | "offline" => Ok(ClassifierChoice::Local),
            other => Err(format!("unknown classifier '{}'", other)),
        }
    }
}
