//! HTTP adapter for the Pet Catalog Service
//!
//! [`HttpCatalogService`] implements both [`PetCatalogService`] and
//! [`PersonalityClassifier`] over reqwest.
//!
//! [`PetCatalogService`]: petmatch_application::PetCatalogService
//! [`PersonalityClassifier`]: petmatch_application::PersonalityClassifier

mod client;
mod error;
mod wire;

pub use client::HttpCatalogService;
pub use error::{from_reqwest, map_status};
