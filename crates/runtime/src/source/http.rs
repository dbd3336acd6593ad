//! Collaborator HTTP record source.

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use battle_content::{AbilityRecord, HeroRecord, ItemRecord};

use crate::error::SourceError;
use crate::source::RecordSource;

/// Record source backed by the collaborator's key/value read API.
///
/// The API serves three JSON list endpoints (`/heroes`, `/abilities`,
/// `/items`) and one delete endpoint (`DELETE /items/{id}`). Reads are
/// a one-shot snapshot at encounter start; there is no write-back,
/// pagination or streaming.
pub struct HttpRecordSource {
    base_url: String,
    client: reqwest::Client,
}

impl HttpRecordSource {
    /// Creates a source against `base_url` (e.g. `http://localhost:5000`).
    /// A trailing slash on the base URL is tolerated.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    async fn list<T: DeserializeOwned>(&self, endpoint: &str) -> Result<Vec<T>, SourceError> {
        let url = format!("{}/{endpoint}", self.base_url);
        let records = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(records)
    }
}

#[async_trait]
impl RecordSource for HttpRecordSource {
    async fn heroes(&self) -> Result<Vec<HeroRecord>, SourceError> {
        self.list("heroes").await
    }

    async fn abilities(&self) -> Result<Vec<AbilityRecord>, SourceError> {
        self.list("abilities").await
    }

    async fn items(&self) -> Result<Vec<ItemRecord>, SourceError> {
        self.list("items").await
    }

    async fn delete_item(&self, id: &str) -> Result<(), SourceError> {
        let url = format!("{}/items/{id}", self.base_url);
        self.client
            .delete(&url)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}
