//! Personality classifier adapters

mod local;

pub use local::RuleBasedClassifier;

use crate::http::HttpCatalogService;
use async_trait::async_trait;
use petmatch_application::{CatalogError, ClassifierChoice, PersonalityClassifier};

/// The classifier selected by configuration
#[derive(Debug, Clone)]
pub enum ConfiguredClassifier {
    /// `POST /pets/game` on the catalog service
    Remote(HttpCatalogService),
    Local(RuleBasedClassifier),
}

impl ConfiguredClassifier {
    pub fn from_choice(choice: ClassifierChoice, service: HttpCatalogService) -> Self {
        match choice {
            ClassifierChoice::Remote => Self::Remote(service),
            ClassifierChoice::Local => Self::Local(RuleBasedClassifier),
        }
    }

    pub fn choice(&self) -> ClassifierChoice {
        match self {
            Self::Remote(_) => ClassifierChoice::Remote,
            Self::Local(_) => ClassifierChoice::Local,
        }
    }
}

#[async_trait]
impl PersonalityClassifier for ConfiguredClassifier {
    async fn classify(&self, categories: &[String]) -> Result<String, CatalogError> {
        match self {
            Self::Remote(service) => service.classify(categories).await,
            Self::Local(rules) => rules.classify(categories).await,
        }
    }
}
