//! Favorites use case
//!
//! Saving a pet and voting on saved pets. Failures here are transient
//! notices; they never replace the current listing.

use crate::error::GalleryError;
use crate::ports::catalog_service::{NewFavorite, PetCatalogService};
use crate::ports::notifier::{GalleryNotifier, NoNotifier, Notice};
use petmatch_domain::core::string::capitalize;
use petmatch_domain::{DomainError, PetRecord, VoteDirection};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Use case for adding and voting on favorites
pub struct ManageFavoritesUseCase<S: PetCatalogService + 'static> {
    service: Arc<S>,
}

impl<S: PetCatalogService + 'static> ManageFavoritesUseCase<S> {
    pub fn new(service: Arc<S>) -> Self {
        Self { service }
    }

    /// Save a favorite with default (no-op) notices
    pub async fn add(&self, favorite: NewFavorite) -> Result<PetRecord, GalleryError> {
        self.add_with_notifier(favorite, &NoNotifier).await
    }

    /// Save a favorite, reporting the outcome as a notice
    pub async fn add_with_notifier(
        &self,
        favorite: NewFavorite,
        notifier: &dyn GalleryNotifier,
    ) -> Result<PetRecord, GalleryError> {
        debug!("Adding favorite {}", favorite.image_url);

        match self.service.add_favorite(&favorite).await {
            Ok(created) => {
                info!("Saved favorite {}", created.key());
                notifier.on_notice(&Notice::Success(format!(
                    "{} added to your favorites!",
                    capitalize(&favorite.category)
                )));
                Ok(created)
            }
            Err(e) => {
                warn!("Failed to favorite {}: {}", favorite.image_url, e);
                let error = GalleryError::favorite_failed(e);
                let notice = match &error {
                    GalleryError::Conflict(m) => Notice::Warning(m.clone()),
                    other => Notice::Failure(other.to_string()),
                };
                notifier.on_notice(&notice);
                Err(error)
            }
        }
    }

    /// Up- or down-vote a saved favorite
    pub async fn vote(
        &self,
        id: &str,
        direction: VoteDirection,
        notifier: &dyn GalleryNotifier,
    ) -> Result<PetRecord, VoteError> {
        let id = id.trim();
        if id.is_empty() {
            return Err(DomainError::EmptyPetId.into());
        }

        match self.service.vote(id, direction).await {
            Ok(updated) => {
                info!("Voted {} on {}", direction, id);
                notifier.on_notice(&Notice::Success(format!(
                    "Vote recorded ({} votes)",
                    updated.votes.unwrap_or_default()
                )));
                Ok(updated)
            }
            Err(e) => {
                warn!("Vote on {} failed: {}", id, e);
                let error = GalleryError::action_failed("record your vote", e);
                notifier.on_notice(&Notice::Failure(error.to_string()));
                Err(error.into())
            }
        }
    }
}

/// Errors from [`ManageFavoritesUseCase::vote`]
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum VoteError {
    #[error(transparent)]
    Invalid(#[from] DomainError),

    #[error(transparent)]
    Gallery(#[from] GalleryError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ALREADY_FAVORITED;
    use crate::ports::catalog_service::CatalogError;
    use async_trait::async_trait;
    use std::collections::HashSet;
    use std::sync::Mutex;

    // ==================== Test Mocks ====================

    /// In-memory catalog that rejects duplicate image URLs with 409
    #[derive(Default)]
    struct MemoryCatalog {
        saved: Mutex<HashSet<String>>,
        votes: Mutex<i64>,
    }

    #[async_trait]
    impl PetCatalogService for MemoryCatalog {
        async fn list_pets(&self) -> Result<Vec<PetRecord>, CatalogError> {
            Ok(vec![])
        }

        async fn list_favorites(&self) -> Result<Vec<PetRecord>, CatalogError> {
            Ok(vec![])
        }

        async fn add_favorite(&self, favorite: &NewFavorite) -> Result<PetRecord, CatalogError> {
            if !self.saved.lock().unwrap().insert(favorite.image_url.clone()) {
                return Err(CatalogError::Conflict(
                    "This pet has already been favorited.".into(),
                ));
            }
            Ok(PetRecord::new("", favorite.category.clone())
                .with_id("abc")
                .with_image_url(favorite.image_url.clone())
                .with_votes(0))
        }

        async fn vote(&self, id: &str, d: VoteDirection) -> Result<PetRecord, CatalogError> {
            if id == "dup" {
                return Err(CatalogError::Conflict("vote already counted".into()));
            }
            if id != "abc" {
                return Err(CatalogError::NotFound(format!("Pet with id {id} not found")));
            }
            let mut votes = self.votes.lock().unwrap();
            *votes += d.delta();
            Ok(PetRecord::new("", "dog").with_id(id).with_votes(*votes))
        }
    }

    #[derive(Default)]
    struct NoticeLog {
        notices: Mutex<Vec<Notice>>,
    }

    impl GalleryNotifier for NoticeLog {
        fn on_fetch_start(&self, _view: petmatch_domain::ViewMode) {}
        fn on_fetch_complete(&self, _v: petmatch_domain::ViewMode, _c: usize, _s: bool) {}
        fn on_notice(&self, notice: &Notice) {
            self.notices.lock().unwrap().push(notice.clone());
        }
    }

    fn use_case() -> ManageFavoritesUseCase<MemoryCatalog> {
        ManageFavoritesUseCase::new(Arc::new(MemoryCatalog::default()))
    }

    #[tokio::test]
    async fn test_add_then_duplicate_conflicts() {
        let uc = use_case();
        let log = NoticeLog::default();
        let fav = NewFavorite::new("https://images.dog.ceo/a.jpg", "dog");

        let created = uc.add_with_notifier(fav.clone(), &log).await.unwrap();
        assert_eq!(created.id.as_deref(), Some("abc"));

        let err = uc.add_with_notifier(fav, &log).await.unwrap_err();
        assert_eq!(err, GalleryError::Conflict(ALREADY_FAVORITED.to_string()));

        let notices = log.notices.lock().unwrap();
        assert_eq!(notices[0], Notice::Success("Dog added to your favorites!".into()));
        assert_eq!(notices[1], Notice::Warning(ALREADY_FAVORITED.into()));
    }

    #[tokio::test]
    async fn test_vote_up_and_down() {
        let uc = use_case();
        let up = uc.vote("abc", VoteDirection::Up, &NoNotifier).await.unwrap();
        assert_eq!(up.votes, Some(1));
        let down = uc.vote("abc", VoteDirection::Down, &NoNotifier).await.unwrap();
        assert_eq!(down.votes, Some(0));
    }

    #[tokio::test]
    async fn test_vote_unknown_id_is_action_failure() {
        let uc = use_case();
        let err = uc.vote("zzz", VoteDirection::Up, &NoNotifier).await.unwrap_err();
        assert!(matches!(
            err,
            VoteError::Gallery(GalleryError::ActionFailed { .. })
        ));
    }

    #[tokio::test]
    async fn test_vote_conflict_is_not_reported_as_favorited() {
        let uc = use_case();
        let log = NoticeLog::default();
        let err = uc.vote("dup", VoteDirection::Up, &log).await.unwrap_err();
        assert!(matches!(
            err,
            VoteError::Gallery(GalleryError::ActionFailed { .. })
        ));
        assert_eq!(
            log.notices.lock().unwrap()[0],
            Notice::Failure("Failed to record your vote. Please try again.".into())
        );
    }

    #[tokio::test]
    async fn test_vote_rejects_blank_id() {
        let uc = use_case();
        let err = uc.vote("  ", VoteDirection::Up, &NoNotifier).await.unwrap_err();
        assert_eq!(err, VoteError::Invalid(DomainError::EmptyPetId));
    }
}
