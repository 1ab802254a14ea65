//! Bounded, ordered pet selection for the personality quiz

use crate::pet::entities::PetRecord;
use crate::pet::value_objects::PetKey;
use serde::{Deserialize, Serialize};

/// Number of picks that completes a quiz round
pub const QUIZ_CAPACITY: usize = 3;

/// What a single toggle did to the selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// Candidate was appended
    Added,
    /// Candidate was already selected and has been removed
    Removed,
    /// Selection is full and the candidate is not part of it
    IgnoredFull,
    /// A result is on screen; picks are locked until it is dismissed
    Locked,
}

/// Ordered selection of at most [`QUIZ_CAPACITY`] distinct pets
///
/// Membership is decided by [`PetRecord::key`]. When full, picking a new pet
/// is ignored rather than evicting an older pick.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionSet {
    items: Vec<PetRecord>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= QUIZ_CAPACITY
    }

    pub fn items(&self) -> &[PetRecord] {
        &self.items
    }

    pub fn contains(&self, key: &PetKey) -> bool {
        self.items.iter().any(|p| &p.key() == key)
    }

    /// Add the candidate if absent and there is room, remove it if present
    pub fn toggle(&mut self, candidate: &PetRecord) -> ToggleOutcome {
        let key = candidate.key();
        if let Some(pos) = self.items.iter().position(|p| p.key() == key) {
            self.items.remove(pos);
            ToggleOutcome::Removed
        } else if self.is_full() {
            ToggleOutcome::IgnoredFull
        } else {
            self.items.push(candidate.clone());
            ToggleOutcome::Added
        }
    }

    /// Non-mutating form of [`toggle`](Self::toggle)
    pub fn toggled(&self, candidate: &PetRecord) -> SelectionSet {
        let mut next = self.clone();
        next.toggle(candidate);
        next
    }

    /// Selected categories, lower-cased, in selection order
    pub fn categories(&self) -> Vec<String> {
        self.items.iter().map(|p| p.category.to_lowercase()).collect()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}
