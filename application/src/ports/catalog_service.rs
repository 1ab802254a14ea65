//! Pet Catalog Service port
//!
//! Defines the interface for talking to the remote pet catalog.

use async_trait::async_trait;
use petmatch_domain::{PetRecord, VoteDirection};
use thiserror::Error;

/// Errors that can occur during catalog service operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// 409: the resource already exists (e.g. pet already favorited)
    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unexpected status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Timeout")]
    Timeout,

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Failed to decode response: {0}")]
    Decode(String),
}

impl CatalogError {
    pub fn is_conflict(&self) -> bool {
        matches!(self, CatalogError::Conflict(_))
    }
}

/// Body of an add-favorite request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFavorite {
    pub image_url: String,
    pub category: String,
    pub user_comment: Option<String>,
}

impl NewFavorite {
    pub fn new(image_url: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            image_url: image_url.into(),
            category: category.into(),
            user_comment: None,
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.user_comment = Some(comment.into());
        self
    }
}

impl From<&PetRecord> for NewFavorite {
    fn from(pet: &PetRecord) -> Self {
        Self::new(pet.image_url.clone(), pet.category.clone())
    }
}

/// Gateway to the remote pet catalog
///
/// This port defines how the application layer reaches the catalog service.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait PetCatalogService: Send + Sync {
    /// Fetch the home listing
    async fn list_pets(&self) -> Result<Vec<PetRecord>, CatalogError>;

    /// Fetch every saved favorite
    async fn list_favorites(&self) -> Result<Vec<PetRecord>, CatalogError>;

    /// Save a favorite; [`CatalogError::Conflict`] if it is already saved
    async fn add_favorite(&self, favorite: &NewFavorite) -> Result<PetRecord, CatalogError>;

    /// Up- or down-vote a saved favorite by server id
    async fn vote(&self, id: &str, direction: VoteDirection) -> Result<PetRecord, CatalogError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_favorite_from_record() {
        let pet = PetRecord::new("", "dog").with_image_url("https://images.dog.ceo/a.jpg");
        let fav = NewFavorite::from(&pet);
        assert_eq!(fav.image_url, "https://images.dog.ceo/a.jpg");
        assert_eq!(fav.category, "dog");
        assert!(fav.user_comment.is_none());
    }

    #[test]
    fn test_is_conflict() {
        assert!(CatalogError::Conflict("dup".into()).is_conflict());
        assert!(!CatalogError::Timeout.is_conflict());
    }
}
