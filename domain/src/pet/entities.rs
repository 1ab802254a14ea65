//! Pet entities
//!
//! [`PetRecord`] is the single canonical schema for a catalog entry. The
//! catalog service has shipped several field spellings over time
//! (`name`/`type`, `title`/`category`, `animal_type`/`_id`); they are all
//! folded into this one shape at deserialization time.

use super::value_objects::PetKey;
use serde::{Deserialize, Serialize};

/// One adoptable animal as returned by the catalog service
///
/// Missing string fields deserialize to the empty string so that a
/// malformed record never fails a whole batch.
///
/// # Example
///
/// ```
/// use petmatch_domain::PetRecord;
///
/// let pet: PetRecord = serde_json::from_str(
///     r#"{"name": "Milo", "type": "Cat", "description": "Lazy but cuddly tabby"}"#,
/// ).unwrap();
/// assert_eq!(pet.category, "Cat");
/// assert_eq!(pet.key().as_str(), "Milo");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PetRecord {
    /// Server-side identifier, present on favorites
    #[serde(default, alias = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Human-readable label
    #[serde(default, alias = "title")]
    pub name: String,
    /// Short classification ("Dog", "Cat", ...)
    #[serde(default, alias = "type", alias = "animal_type")]
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: String,
    /// Vote tally (favorites only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub votes: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_comment: Option<String>,
}

impl PetRecord {
    /// Create a record with a name and category
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            ..Default::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = image_url.into();
        self
    }

    pub fn with_votes(mut self, votes: i64) -> Self {
        self.votes = Some(votes);
        self
    }

    /// Identity key used for selection and de-duplication
    ///
    /// Prefers the server id, then the image URL, then the name.
    pub fn key(&self) -> PetKey {
        match self.id.as_deref() {
            Some(id) if !id.is_empty() => PetKey::new(id),
            _ if !self.image_url.is_empty() => PetKey::new(self.image_url.as_str()),
            _ => PetKey::new(self.name.as_str()),
        }
    }

    /// Text shown as the card heading
    ///
    /// Records fetched from the random feed carry no name, so the category
    /// stands in for it.
    pub fn display_title(&self) -> &str {
        if self.name.is_empty() {
            &self.category
        } else {
            &self.name
        }
    }
}
