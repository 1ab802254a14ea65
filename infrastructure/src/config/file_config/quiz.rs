//! Quiz configuration from TOML (`[quiz]` section)

use petmatch_application::ClassifierChoice;
use petmatch_domain::config::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};

/// Raw quiz configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileQuizConfig {
    /// "remote" (catalog service) or "local" (built-in rules)
    pub classifier: String,
}

impl Default for FileQuizConfig {
    fn default() -> Self {
        Self {
            classifier: "remote".to_string(),
        }
    }
}

impl FileQuizConfig {
    /// Parse classifier string into ClassifierChoice
    ///
    /// Accepts: "remote", "server", "local", "offline"
    pub fn parse_classifier(&self) -> (ClassifierChoice, Vec<ConfigIssue>) {
        match self.classifier.parse::<ClassifierChoice>() {
            Ok(choice) => (choice, vec![]),
            Err(_) => {
                let issue = ConfigIssue::warning(
                    ConfigIssueCode::InvalidEnumValue {
                        field: "quiz.classifier".to_string(),
                        value: self.classifier.clone(),
                        valid_values: vec!["remote".to_string(), "local".to_string()],
                    },
                    format!(
                        "quiz.classifier: unknown value '{}', falling back to 'remote'",
                        self.classifier
                    ),
                );
                (ClassifierChoice::default(), vec![issue])
            }
        }
    }
}
