//! Practicum homework status API client

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use std::time::Duration;

use super::{body_preview, StatusSource};
use crate::models::StatusResponse;

pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

#[derive(Clone)]
pub struct PracticumClient {
    http: Client,
    endpoint: String,
    token: String,
}

impl std::fmt::Debug for PracticumClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PracticumClient")
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

impl PracticumClient {
    pub fn new(endpoint: String, token: String) -> Self {
        Self {
            http: Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .unwrap_or_else(|_| Client::new()),
            endpoint,
            token,
        }
    }
}

#[async_trait]
impl StatusSource for PracticumClient {
    async fn fetch_statuses(&self, from_date: i64) -> Result<StatusResponse> {
        debug!("GET {} from_date={}", self.endpoint, from_date);

        let resp = self
            .http
            .get(&self.endpoint)
            .header("Authorization", format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await
            .with_context(|| format!("Practicum API request failed: {}", self.endpoint))?;

        let status = resp.status();
        let text = resp
            .text()
            .await
            .context("Failed to read Practicum API response body")?;
        if !status.is_success() {
            anyhow::bail!("Practicum API non-2xx: {status} body={}", body_preview(&text));
        }

        // Outermost message stays fixed so repeated failures read the same
        serde_json::from_str(&text)
            .with_context(|| format!("response body: {}", body_preview(&text)))
            .context("Malformed Practicum API response")
    }
}
