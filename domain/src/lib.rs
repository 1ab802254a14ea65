//! Domain layer for petmatch
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Catalog Filter
//!
//! A pure, stable, conjunctive filter over a fetched batch of
//! [`PetRecord`]s: a case-insensitive substring match on name/description
//! AND an exact category match (or the `"all"` sentinel).
//!
//! ## Personality Quiz
//!
//! - **Selection**: at most three distinct pets, toggled in and out
//! - **Fire-once**: filling the selection emits exactly one classification
//!   request; it fires again only after a fresh fill
//! - **Epochs**: replies from superseded requests are discarded

pub mod catalog;
pub mod config;
pub mod core;
pub mod pet;
pub mod quiz;
pub mod view;

// Re-export commonly used types
pub use catalog::{
    filter::{categories, category_options, filter},
    query::{ALL_CATEGORIES, CategoryFilter, FilterQuery},
};
pub use config::OutputFormat;
pub use core::error::DomainError;
pub use pet::{
    entities::PetRecord,
    value_objects::{PetKey, VoteDirection},
};
pub use quiz::{
    personality::{FALLBACK_PERSONALITY, Personality, classify_by_rules},
    selection::{QUIZ_CAPACITY, SelectionSet, ToggleOutcome},
    tracker::{ClassificationReply, ClassificationRequest, Epoch, QuizPhase, QuizTracker, ToggleReport},
};
pub use view::ViewMode;
