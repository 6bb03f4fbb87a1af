// src/ai/client.rs
use anyhow::{Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{error, info};

use crate::config::AiServiceConfig;

#[derive(Debug, Clone, Serialize)]
struct SemanticMessage {
    context: String,
    content: String,
}

#[derive(Debug, Clone, Serialize)]
struct SemanticRequest {
    messages: Vec<SemanticMessage>,
}

#[derive(Debug, Clone, Deserialize)]
struct SemanticResponse {
    message: String,
}

/// HTTP client for the external semantic completion service.
///
/// Credentials and endpoint are injected at construction; the client
/// never reads ambient environment state, so tests can point it at a
/// mock server.
pub struct SemanticClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl SemanticClient {
    pub fn new(config: &AiServiceConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            base_url: config.base_url.clone(),
        })
    }

    /// Send one completion request and return the raw text reply.
    pub async fn send_completion(&self, context: &str, content: &str) -> Result<String> {
        let request = SemanticRequest {
            messages: vec![SemanticMessage {
                context: context.to_string(),
                content: content.to_string(),
            }],
        };

        info!("Sending request to Semantic API: {}", context);

        let response = self
            .client
            .post(format!("{}/chat", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .context("Failed to send request to Semantic API")?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            error!("Semantic API error {}: {}", status, error_text);
            anyhow::bail!("Semantic API returned error {}: {}", status, error_text);
        }

        let semantic_response: SemanticResponse = response
            .json()
            .await
            .context("Failed to parse Semantic API response")?;

        info!("Successfully received response from Semantic API");
        Ok(semantic_response.message)
    }
}
