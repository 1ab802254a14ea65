//! User-facing error taxonomy

use crate::ports::catalog_service::CatalogError;
use petmatch_domain::ViewMode;
use thiserror::Error;

/// Message for a 409 on add-favorite
pub const ALREADY_FAVORITED: &str = "You have already favorited this pet!";

/// Errors surfaced to the user
///
/// Each is terminal for the single operation that raised it; the user may
/// retry by repeating the action.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GalleryError {
    /// Listing load failed; replaces the page content
    #[error("{message}")]
    FetchFailed {
        view: ViewMode,
        message: String,
        #[source]
        cause: CatalogError,
    },

    /// Favorite/vote/classify failed; shown as a transient notice
    #[error("{message}")]
    ActionFailed {
        message: String,
        #[source]
        cause: CatalogError,
    },

    /// 409 on add-favorite
    #[error("{0}")]
    Conflict(String),
}

impl GalleryError {
    /// Build the page-level error for a failed listing load
    pub fn fetch_failed(view: ViewMode, cause: CatalogError) -> Self {
        let message = match view {
            ViewMode::Favorites => "Could not load your favorite pets.",
            ViewMode::Home | ViewMode::Quiz => "Could not load pet data. Please try again later.",
        };
        GalleryError::FetchFailed {
            view,
            message: message.to_string(),
            cause,
        }
    }

    /// Build a failed add-favorite error; 409 becomes [`GalleryError::Conflict`]
    pub fn favorite_failed(cause: CatalogError) -> Self {
        if cause.is_conflict() {
            return GalleryError::Conflict(ALREADY_FAVORITED.to_string());
        }
        Self::action_failed("add pet to favorites", cause)
    }

    /// Build a transient action error
    pub fn action_failed(action: &str, cause: CatalogError) -> Self {
        GalleryError::ActionFailed {
            message: format!("Failed to {}. Please try again.", action),
            cause,
        }
    }

    /// Whether the error replaces page content rather than showing a notice
    pub fn is_blocking(&self) -> bool {
        matches!(self, GalleryError::FetchFailed { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_failed_messages_per_view() {
        let home = GalleryError::fetch_failed(ViewMode::Home, CatalogError::Timeout);
        assert_eq!(home.to_string(), "Could not load pet data. Please try again later.");
        assert!(home.is_blocking());

        let favs = GalleryError::fetch_failed(ViewMode::Favorites, CatalogError::Timeout);
        assert_eq!(favs.to_string(), "Could not load your favorite pets.");
    }

    #[test]
    fn test_conflict_maps_to_already_favorited() {
        let err = GalleryError::favorite_failed(CatalogError::Conflict(
            "This pet has already been favorited.".into(),
        ));
        assert_eq!(err, GalleryError::Conflict(ALREADY_FAVORITED.to_string()));
        assert!(!err.is_blocking());
    }

    #[test]
    fn test_conflict_outside_favorites_stays_generic() {
        let err = GalleryError::action_failed(
            "record your vote",
            CatalogError::Conflict("vote already counted".into()),
        );
        assert!(matches!(err, GalleryError::ActionFailed { .. }));
        assert_eq!(err.to_string(), "Failed to record your vote. Please try again.");
    }

    #[test]
    fn test_other_failures_are_generic() {
        let err = GalleryError::favorite_failed(
            CatalogError::Status {
                status: 500,
                message: "boom".into(),
            },
        );
        assert_eq!(
            err.to_string(),
            "Failed to add pet to favorites. Please try again."
        );
    }
}
