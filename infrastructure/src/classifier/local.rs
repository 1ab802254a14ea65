//! Offline classifier

use async_trait::async_trait;
use petmatch_application::{CatalogError, PersonalityClassifier};
use petmatch_domain::classify_by_rules;
use tracing::debug;

/// Classifies a selection with fixed rules, no network involved
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleBasedClassifier;

#[async_trait]
impl PersonalityClassifier for RuleBasedClassifier {
    async fn classify(&self, categories: &[String]) -> Result<String, CatalogError> {
        let personality = classify_by_rules(categories);
        debug!("Rule-based classification of {:?}", categories);
        Ok(personality.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn picks(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_three_dogs_outgoing() {
        let label = RuleBasedClassifier
            .classify(&picks(&["dog", "dog", "dog"]))
            .await
            .unwrap();
        assert!(label.contains("outgoing"));
    }

    #[tokio::test]
    async fn test_three_cats_calm() {
        let label = RuleBasedClassifier
            .classify(&picks(&["cat", "cat", "cat"]))
            .await
            .unwrap();
        assert!(label.contains("calm"));
    }

    #[tokio::test]
    async fn test_mix_balanced() {
        let label = RuleBasedClassifier
            .classify(&picks(&["dog", "cat", "dog"]))
            .await
            .unwrap();
        assert!(label.contains("balanced"));
    }
}
