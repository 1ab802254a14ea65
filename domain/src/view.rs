//! Active view of the gallery

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Which listing (or game) is currently on screen
///
/// Each view owns its own record list; nothing carries over when the
/// view changes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Home,
    Favorites,
    Quiz,
}

impl ViewMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Home => "home",
            ViewMode::Favorites => "favorites",
            ViewMode::Quiz => "quiz",
        }
    }

    /// Page heading for the view
    pub fn heading(&self) -> &'static str {
        match self {
            ViewMode::Home => "Find Your New Best Friend",
            ViewMode::Favorites => "Your Favorite Pets",
            ViewMode::Quiz => "Personality Game",
        }
    }

    /// Message shown when the view's listing is empty
    pub fn empty_message(&self) -> &'static str {
        match self {
            ViewMode::Home => "No pets match your search.",
            ViewMode::Favorites => "You haven't saved any favorites yet!",
            ViewMode::Quiz => "No pets available to pick from.",
        }
    }
}

impl std::fmt::Display for ViewMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ViewMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "home" => Ok(ViewMode::Home),
            "favorites" | "favourites" | "favs" => Ok(ViewMode::Favorites),
            "quiz" | "game" => Ok(ViewMode::Quiz),
            other => Err(DomainError::InvalidView(other.to_string())),
        }
    }
}
