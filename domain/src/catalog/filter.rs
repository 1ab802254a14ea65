//! Catalog filtering
//!
//! Pure functions over a fetched batch. The batch itself is never mutated;
//! every call returns a fresh `Vec`.

use super::query::{ALL_CATEGORIES, FilterQuery};
use crate::pet::entities::PetRecord;
use std::collections::HashSet;

/// Case-insensitive substring test against a record's name or description
fn text_matches(record: &PetRecord, needle_lower: &str) -> bool {
    if needle_lower.is_empty() {
        return true;
    }
    record.name.to_lowercase().contains(needle_lower)
        || record.description.to_lowercase().contains(needle_lower)
}

/// Return the records that satisfy both axes of `query`, in input order
///
/// # Example
///
/// ```
/// use petmatch_domain::{FilterQuery, PetRecord, filter};
///
/// let batch = vec![
///     PetRecord::new("Buddy", "Dog").with_description("Golden"),
///     PetRecord::new("Milo", "Cat").with_description("Tabby"),
/// ];
/// let visible = filter(&batch, &FilterQuery::everything().with_search("mi"));
/// assert_eq!(visible.len(), 1);
/// assert_eq!(visible[0].name, "Milo");
/// ```
pub fn filter(records: &[PetRecord], query: &FilterQuery) -> Vec<PetRecord> {
    let needle = query.search_term.to_lowercase();
    records
        .iter()
        .filter(|r| query.category.matches(&r.category) && text_matches(r, &needle))
        .cloned()
        .collect()
}

/// Distinct categories of the unfiltered batch, in first-occurrence order
///
/// Records with an empty category contribute nothing.
pub fn categories(records: &[PetRecord]) -> Vec<String> {
    let mut seen = HashSet::new();
    records
        .iter()
        .filter(|r| !r.category.is_empty())
        .filter(|r| seen.insert(r.category.as_str()))
        .map(|r| r.category.clone())
        .collect()
}

/// Options offered to the user: the `"all"` sentinel, then [`categories`]
pub fn category_options(records: &[PetRecord]) -> Vec<String> {
    std::iter::once(ALL_CATEGORIES.to_string())
        .chain(categories(records))
        .collect()
}
