//! Browse Catalog use case
//!
//! Loads the listing for a view and derives the visible subset from it.

use crate::error::GalleryError;
use crate::ports::catalog_service::PetCatalogService;
use crate::ports::notifier::{GalleryNotifier, NoNotifier};
use petmatch_domain::{FilterQuery, PetRecord, ViewMode, category_options, filter};
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, warn};

/// A loaded listing, immutable for the lifetime of the view
#[derive(Debug, Clone, Serialize)]
pub struct CatalogView {
    pub view: ViewMode,
    records: Vec<PetRecord>,
}

impl CatalogView {
    pub fn new(view: ViewMode, records: Vec<PetRecord>) -> Self {
        Self { view, records }
    }

    /// The full, unfiltered batch
    pub fn records(&self) -> &[PetRecord] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records passing `query`, in batch order
    pub fn visible(&self, query: &FilterQuery) -> Vec<PetRecord> {
        filter(&self.records, query)
    }

    /// `"all"` followed by the batch's distinct categories
    pub fn category_options(&self) -> Vec<String> {
        category_options(&self.records)
    }
}

/// Use case for loading a listing
pub struct BrowseCatalogUseCase<S: PetCatalogService + 'static> {
    service: Arc<S>,
}

impl<S: PetCatalogService + 'static> BrowseCatalogUseCase<S> {
    pub fn new(service: Arc<S>) -> Self {
        Self { service }
    }

    /// Load a view with default (no-op) progress
    pub async fn load(&self, view: ViewMode) -> Result<CatalogView, GalleryError> {
        self.load_with_progress(view, &NoNotifier).await
    }

    /// Load a view with progress callbacks
    ///
    /// The quiz picks from the same batch as the home listing.
    pub async fn load_with_progress(
        &self,
        view: ViewMode,
        notifier: &dyn GalleryNotifier,
    ) -> Result<CatalogView, GalleryError> {
        notifier.on_fetch_start(view);

        let result = match view {
            ViewMode::Home | ViewMode::Quiz => self.service.list_pets().await,
            ViewMode::Favorites => self.service.list_favorites().await,
        };

        match result {
            Ok(records) => {
                info!("Loaded {} pets for {} view", records.len(), view);
                notifier.on_fetch_complete(view, records.len(), true);
                Ok(CatalogView::new(view, records))
            }
            Err(e) => {
                warn!("Failed to load {} view: {}", view, e);
                notifier.on_fetch_complete(view, 0, false);
                Err(GalleryError::fetch_failed(view, e))
            }
        }
    }
}
