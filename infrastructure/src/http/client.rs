//! reqwest-backed catalog client

use super::error::{from_reqwest, map_status};
use super::wire::{FavoriteBody, PersonalityResponse, VoteBody};
use async_trait::async_trait;
use petmatch_application::{
    ApiConfig, CatalogError, NewFavorite, PersonalityClassifier, PetCatalogService,
};
use petmatch_domain::{PetRecord, VoteDirection};
use serde::de::DeserializeOwned;
use tracing::{debug, trace};

const USER_AGENT: &str = concat!("petmatch/", env!("CARGO_PKG_VERSION"));

/// Client for the remote Pet Catalog Service
#[derive(Debug, Clone)]
pub struct HttpCatalogService {
    client: reqwest::Client,
    config: ApiConfig,
}

impl HttpCatalogService {
    /// Build a client for `config.base_url`, applying its timeout if set
    pub fn new(config: ApiConfig) -> Result<Self, CatalogError> {
        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(from_reqwest)?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, CatalogError> {
        let url = self.config.endpoint(path);
        debug!("GET {}", url);
        let response = self.client.get(&url).send().await.map_err(from_reqwest)?;
        Self::decode(response).await
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, CatalogError>
    where
        B: serde::Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.config.endpoint(path);
        debug!("POST {}", url);
        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(from_reqwest)?;
        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, CatalogError> {
        let status = response.status();
        let body = response.text().await.map_err(from_reqwest)?;
        trace!("{} body: {}", status, body);

        if !status.is_success() {
            return Err(map_status(status.as_u16(), &body));
        }
        serde_json::from_str(&body).map_err(|e| CatalogError::Decode(e.to_string()))
    }
}

#[async_trait]
impl PetCatalogService for HttpCatalogService {
    async fn list_pets(&self) -> Result<Vec<PetRecord>, CatalogError> {
        self.get_json("/pets/random").await
    }

    async fn list_favorites(&self) -> Result<Vec<PetRecord>, CatalogError> {
        self.get_json("/pets/favorites").await
    }

    async fn add_favorite(&self, favorite: &NewFavorite) -> Result<PetRecord, CatalogError> {
        self.post_json("/pets/favorites", &FavoriteBody::from(favorite))
            .await
    }

    async fn vote(&self, id: &str, direction: VoteDirection) -> Result<PetRecord, CatalogError> {
        let body = VoteBody {
            direction: direction.as_str(),
        };
        self.post_json(&format!("/pets/vote/{id}"), &body).await
    }
}

#[async_trait]
impl PersonalityClassifier for HttpCatalogService {
    async fn classify(&self, categories: &[String]) -> Result<String, CatalogError> {
        let response: PersonalityResponse = self.post_json("/pets/game", categories).await?;
        Ok(response.personality)
    }
}
