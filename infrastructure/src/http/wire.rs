//! JSON bodies exchanged with the catalog service

use petmatch_application::NewFavorite;
use serde::{Deserialize, Serialize};

/// `POST /pets/favorites` body
#[derive(Debug, Serialize)]
pub(crate) struct FavoriteBody<'a> {
    pub image_url: &'a str,
    pub animal_type: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_comment: Option<&'a str>,
}

impl<'a> From<&'a NewFavorite> for FavoriteBody<'a> {
    fn from(fav: &'a NewFavorite) -> Self {
        Self {
            image_url: &fav.image_url,
            animal_type: &fav.category,
            user_comment: fav.user_comment.as_deref(),
        }
    }
}

/// `POST /pets/vote/{id}` body
#[derive(Debug, Serialize)]
pub(crate) struct VoteBody<'a> {
    pub direction: &'a str,
}

/// `POST /pets/game` response
#[derive(Debug, Deserialize)]
pub(crate) struct PersonalityResponse {
    #[serde(alias = "personality_description")]
    pub personality: String,
}

/// Error body the service returns alongside non-2xx statuses
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub detail: serde_json::Value,
}

impl ErrorBody {
    /// Flatten `detail` (string or object) into one line
    pub fn message(&self) -> String {
        match &self.detail {
            serde_json::Value::String(s) => s.clone(),
            serde_json::Value::Object(map) => map
                .get("error")
                .and_then(|v| v.as_str())
                .map(str::to_string)
                .unwrap_or_else(|| self.detail.to_string()),
            other => other.to_string(),
        }
    }
}
