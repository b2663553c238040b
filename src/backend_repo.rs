// Transport-server feed client (the JSON list endpoints the dashboard polls)

use serde::de::DeserializeOwned;
use tracing::instrument;

use crate::models::{ClientStatus, DetailRow, EnergySummary, FrequencySummary};

/// Fetch failure taxonomy. There is no retry and no request timeout: the
/// caller's next poll tick is the only recovery, and a hung request simply
/// stalls that caller until it resolves.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("backend returned status {0}")]
    Status(reqwest::StatusCode),
}

pub struct BackendRepo {
    client: reqwest::Client,
    base_url: String,
}

impl BackendRepo {
    pub fn new(base_url: &str) -> Self {
        BackendRepo {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn get_list<T: DeserializeOwned>(
        &self,
        path: &str,
        frequency: Option<&str>,
    ) -> Result<Vec<T>, FetchError> {
        let mut request = self.client.get(format!("{}{}", self.base_url, path));
        if let Some(frequency) = frequency {
            request = request.query(&[("frequency", frequency)]);
        }
        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(FetchError::Status(response.status()));
        }
        Ok(response.json().await?)
    }

    #[instrument(skip(self), fields(repo = "backend", operation = "get_item_frequencies"))]
    pub async fn get_item_frequencies(&self) -> Result<Vec<FrequencySummary>, FetchError> {
        self.get_list("/api/list/item_frequency.json", None).await
    }

    #[instrument(skip(self), fields(repo = "backend", operation = "get_fluid_frequencies"))]
    pub async fn get_fluid_frequencies(&self) -> Result<Vec<FrequencySummary>, FetchError> {
        self.get_list("/api/list/fluid_frequency.json", None).await
    }

    #[instrument(skip(self), fields(repo = "backend", operation = "get_energy_frequencies"))]
    pub async fn get_energy_frequencies(&self) -> Result<Vec<EnergySummary>, FetchError> {
        self.get_list("/api/list/energy_frequency.json", None).await
    }

    #[instrument(skip(self), fields(repo = "backend", operation = "get_clients"))]
    pub async fn get_clients(&self) -> Result<Vec<ClientStatus>, FetchError> {
        self.get_list("/api/list/clients.json", None).await
    }

    /// Item detail rows for one channel. The backend answers [] for a channel
    /// it has never seen.
    #[instrument(skip(self), fields(repo = "backend", operation = "get_items"))]
    pub async fn get_items(&self, frequency: &str) -> Result<Vec<DetailRow>, FetchError> {
        self.get_list("/api/list/items.json", Some(frequency)).await
    }

    #[instrument(skip(self), fields(repo = "backend", operation = "get_fluids"))]
    pub async fn get_fluids(&self, frequency: &str) -> Result<Vec<DetailRow>, FetchError> {
        self.get_list("/api/list/fluids.json", Some(frequency))
            .await
    }
}
