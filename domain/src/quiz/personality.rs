//! Personality labels produced by a quiz round

use serde::{Deserialize, Serialize};

/// Text shown when classification fails for any reason
pub const FALLBACK_PERSONALITY: &str = "Could not determine your personality. Please try again!";

const OUTGOING: &str = "You're an outgoing and energetic soul, always ready for an adventure!";
const CALM: &str =
    "You're a calm and introverted soul, who enjoys quiet moments and deep thoughts.";
const BALANCED: &str =
    "You have a balanced personality, enjoying both social activities and peaceful solitude.";

/// Result surfaced at the end of a quiz round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Personality {
    pub label: String,
    /// True when `label` is [`FALLBACK_PERSONALITY`] because classification failed
    pub is_fallback: bool,
}

impl Personality {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            is_fallback: false,
        }
    }

    pub fn fallback() -> Self {
        Self {
            label: FALLBACK_PERSONALITY.to_string(),
            is_fallback: true,
        }
    }
}

impl std::fmt::Display for Personality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// Offline classification rules
///
/// All dogs reads as outgoing, all cats as calm, any mix as balanced.
/// Categories are expected lower-cased.
pub fn classify_by_rules(categories: &[String]) -> Personality {
    let all = |wanted: &str| !categories.is_empty() && categories.iter().all(|c| c == wanted);
    if all("dog") {
        Personality::new(OUTGOING)
    } else if all("cat") {
        Personality::new(CALM)
    } else {
        Personality::new(BALANCED)
    }
}
