use async_trait::async_trait;
use lingvec_common::{LingvecError, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info};

use crate::encoder::TextEncoder;

/// Embedding request body
#[derive(Debug, Serialize)]
struct EmbedRequest<'a> {
    model: &'a str,
    prompt: &'a str,
}

/// Embedding response body
#[derive(Debug, Deserialize)]
struct EmbedResponse {
    embedding: Vec<f32>,
}

/// Encoder backed by an Ollama server
#[derive(Debug, Clone)]
pub struct OllamaEncoder {
    base_url: String,
    model: String,
    client: Client,
}

impl OllamaEncoder {
    /// Create new Ollama encoder
    pub fn new(
        base_url: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let model = model.into();
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LingvecError::network(format!("Failed to create HTTP client: {}", e)))?;

        info!("Ollama encoder initialized: {} ({})", base_url, model);
        Ok(Self {
            base_url,
            model,
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Test connection to Ollama
    pub async fn test_connection(&self) -> Result<bool> {
        let url = format!("{}/api/tags", self.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| LingvecError::network(format!("Failed to connect to Ollama: {}", e)))?;
        Ok(response.status().is_success())
    }
}

#[async_trait]
impl TextEncoder for OllamaEncoder {
    fn model_name(&self) -> &str {
        &self.model
    }

    async fn encode(&self, text: &str) -> Result<Vec<f32>> {
        let url = format!("{}/api/embeddings", self.base_url);

        debug!(
            "Generating embedding - Model: {}, Text length: {}",
            self.model,
            text.len()
        );

        let request = EmbedRequest {
            model: &self.model,
            prompt: text,
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| LingvecError::encoding(format!("Failed to send embedding request: {}", e)))?
            .error_for_status()
            .map_err(|e| LingvecError::encoding(format!("Ollama embedding API error: {}", e)))?;

        let result: EmbedResponse = response.json().await.map_err(|e| {
            LingvecError::encoding(format!("Failed to parse embedding response: {}", e))
        })?;

        if result.embedding.is_empty() {
            return Err(LingvecError::encoding("Empty embedding from Ollama"));
        }

        Ok(result.embedding)
    }
}
