//! Application layer for petmatch
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod error;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{ApiConfig, ClassifierChoice, DEFAULT_BASE_URL};
pub use error::{ALREADY_FAVORITED, GalleryError};
pub use ports::{
    catalog_service::{CatalogError, NewFavorite, PetCatalogService},
    classifier::PersonalityClassifier,
    notifier::{GalleryNotifier, NoNotifier, Notice},
};
pub use use_cases::browse_catalog::{BrowseCatalogUseCase, CatalogView};
pub use use_cases::manage_favorites::{ManageFavoritesUseCase, VoteError};
pub use use_cases::play_quiz::QuizSession;
