use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::api::model::{NetworkSnapshot, StatusResponse, TrainsResponse};
use crate::config::ApiConfig;

/// Errors from one poll request.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("decoding response from {url} failed: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Typed client for the monitoring service.
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Self {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()
            .expect("Failed to build API client");

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch `/status` and `/trains` concurrently and merge them into one
    /// snapshot. Either request failing fails the whole cycle; there is no
    /// partial merge.
    pub async fn fetch_snapshot(&self) -> Result<NetworkSnapshot, ApiError> {
        let (status, trains) = tokio::try_join!(self.fetch_status(), self.fetch_trains())?;
        Ok(NetworkSnapshot {
            stations: status.stations,
            summary: status.summary,
            trains: trains.trains,
        })
    }

    pub async fn fetch_status(&self) -> Result<StatusResponse, ApiError> {
        self.get_json("/status").await
    }

    pub async fn fetch_trains(&self) -> Result<TrainsResponse, ApiError> {
        self.get_json("/trains").await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = join_url(&self.base_url, path);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|source| ApiError::Request {
                url: url.clone(),
                source,
            })?;

        response
            .json()
            .await
            .map_err(|source| ApiError::Decode { url, source })
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}{}", base, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let config = ApiConfig {
            base_url: "http://localhost:8000/".to_string(),
            ..ApiConfig::default()
        };
        let client = ApiClient::new(&config);
        assert_eq!(join_url(&client.base_url, "/status"), "http://localhost:8000/status");
    }

    #[test]
    fn join_url_appends_path() {
        assert_eq!(
            join_url("http://metro.example:9000", "/trains"),
            "http://metro.example:9000/trains"
        );
    }
}
