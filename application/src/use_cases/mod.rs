//! Use cases (application business logic)
//!
//! Each use case orchestrates domain logic and ports for one user action.

pub mod browse_catalog;
pub mod manage_favorites;
pub mod play_quiz;
