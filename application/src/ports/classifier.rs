//! Personality classifier port

use super::catalog_service::CatalogError;
use async_trait::async_trait;

/// Maps a completed quiz selection to a personality label
#[async_trait]
pub trait PersonalityClassifier: Send + Sync {
    /// `categories` are lower-cased, in selection order
    async fn classify(&self, categories: &[String]) -> Result<String, CatalogError>;
}
