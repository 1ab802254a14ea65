//! Filter query value objects

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Sentinel category value meaning "no category restriction"
pub const ALL_CATEGORIES: &str = "all";

/// Category axis of a [`FilterQuery`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryFilter {
    /// Every category passes
    #[default]
    All,
    /// Only records whose category equals this value exactly
    Only(String),
}

impl CategoryFilter {
    /// Exact, case-sensitive comparison against a record's category
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == category,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Only(category) => category,
        }
    }
}

impl std::fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CategoryFilter {
    type Err = std::convert::Infallible;

    /// `all` (any case) or an empty string is the sentinel; anything else
    /// is kept verbatim as an exact category.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(ALL_CATEGORIES) {
            Ok(CategoryFilter::All)
        } else {
            Ok(CategoryFilter::Only(trimmed.to_string()))
        }
    }
}

/// The (search text, category) pair driving the catalog filter
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterQuery {
    pub search_term: String,
    pub category: CategoryFilter,
}

impl FilterQuery {
    pub fn new(search_term: impl Into<String>, category: CategoryFilter) -> Self {
        Self {
            search_term: search_term.into(),
            category,
        }
    }

    /// Query that lets every record through
    pub fn everything() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search_term: impl Into<String>) -> Self {
        self.search_term = search_term.into();
        self
    }

    pub fn with_category(mut self, category: CategoryFilter) -> Self {
        self.category = category;
        self
    }

    /// True when neither axis restricts anything
    pub fn is_unrestricted(&self) -> bool {
        self.search_term.is_empty() && self.category == CategoryFilter::All
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sentinel() {
        assert_eq!("all".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!("ALL".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!("".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
    }

    #[test]
    fn test_parse_exact_category_keeps_case() {
        assert_eq!(
            "Dog".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Only("Dog".to_string())
        );
    }

    #[test]
    fn test_category_match_is_exact() {
        let filter = CategoryFilter::Only("Dog".to_string());
        assert!(filter.matches("Dog"));
        assert!(!filter.matches("dog"));
        assert!(!filter.matches("Doggo"));
        assert!(CategoryFilter::All.matches(""));
    }

    #[test]
    fn test_unrestricted() {
        assert!(FilterQuery::everything().is_unrestricted());
        assert!(!FilterQuery::everything().with_search("mi").is_unrestricted());
    }
}
