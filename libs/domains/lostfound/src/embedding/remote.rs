//! Remote OpenAI-compatible embedding client.

use std::time::Duration;

use async_trait::async_trait;
use core_config::{ConfigError, FromEnv, env_or_default, env_required};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::EmbeddingProvider;
use crate::error::ProviderError;

/// Bounded wait for one embedding round trip. The original demo had no
/// timeout at all; failing fast keeps a stuck provider from hanging the UI.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Which flavor of OpenAI-compatible API to speak
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApiType {
    /// Azure OpenAI: deployment-style URL, `api-key` header, `api-version`
    /// query parameter
    Azure,
    /// Plain OpenAI: `/v1/embeddings`, bearer auth, model in the body
    OpenAi,
}

impl ApiType {
    fn parse(raw: &str) -> Result<Self, ConfigError> {
        match raw.to_ascii_lowercase().as_str() {
            "azure" => Ok(ApiType::Azure),
            "openai" | "open_ai" => Ok(ApiType::OpenAi),
            other => Err(ConfigError::InvalidValue {
                key: "API_TYPE".to_string(),
                details: format!("expected 'azure' or 'openai', got '{}'", other),
            }),
        }
    }
}

/// Embedding provider configuration
#[derive(Clone, Debug)]
pub struct EmbeddingConfig {
    /// Model name (Azure: the deployment name)
    pub model: String,
    pub api_type: ApiType,
    /// Azure `api-version` query parameter
    pub api_version: String,
    pub api_key: String,
    /// Base URL of the provider, e.g. `https://myresource.openai.azure.com`
    pub api_base: String,
    /// Expected output dimensionality, used by the index to reject
    /// mismatched vectors before the round trip
    pub dimensions: Option<usize>,
    /// Capacity of the LRU memo in [`super::CachedEmbedder`]
    pub cache_size: usize,
}

/// Load the provider configuration from environment variables.
///
/// Required: `EMBEDDING_MODEL`, `API_KEY`, `API_BASE`.
/// Optional: `API_TYPE` (default `azure`), `API_VERSION` (default
/// `2023-05-15`), `VECTOR_DIMENSIONS`, `EMBEDDING_CACHE_SIZE` (default 256).
impl FromEnv for EmbeddingConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let model = env_required("EMBEDDING_MODEL")?;
        let api_key = env_required("API_KEY")?;
        let api_base = env_required("API_BASE")?;
        let api_type = ApiType::parse(&env_or_default("API_TYPE", "azure"))?;
        let api_version = env_or_default("API_VERSION", "2023-05-15");

        let dimensions = match std::env::var("VECTOR_DIMENSIONS") {
            Ok(raw) => Some(raw.parse().map_err(|e| ConfigError::ParseError {
                key: "VECTOR_DIMENSIONS".to_string(),
                details: format!("{}", e),
            })?),
            Err(_) => None,
        };

        let cache_size = env_or_default("EMBEDDING_CACHE_SIZE", "256")
            .parse()
            .map_err(|e| ConfigError::ParseError {
                key: "EMBEDDING_CACHE_SIZE".to_string(),
                details: format!("{}", e),
            })?;

        Ok(Self {
            model,
            api_type,
            api_version,
            api_key,
            api_base,
            dimensions,
            cache_size,
        })
    }
}

#[derive(Debug, Serialize)]
struct EmbeddingRequest<'a> {
    input: &'a str,
    /// Plain OpenAI wants the model in the body; Azure encodes it in the URL
    #[serde(skip_serializing_if = "Option::is_none")]
    model: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingData {
    embedding: Vec<f32>,
}

/// HTTP client for the embeddings endpoint
pub struct RemoteEmbedder {
    config: EmbeddingConfig,
    client: Client,
}

impl RemoteEmbedder {
    pub fn new(config: EmbeddingConfig) -> Result<Self, ProviderError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { config, client })
    }

    /// Full URL of the embeddings endpoint for the configured API flavor
    fn endpoint(&self) -> String {
        let base = self.config.api_base.trim_end_matches('/');
        match self.config.api_type {
            ApiType::Azure => format!(
                "{}/openai/deployments/{}/embeddings?api-version={}",
                base, self.config.model, self.config.api_version
            ),
            ApiType::OpenAi => format!("{}/v1/embeddings", base),
        }
    }

    async fn call_api(&self, text: &str) -> Result<EmbeddingResponse, ProviderError> {
        let body = EmbeddingRequest {
            input: text,
            model: match self.config.api_type {
                ApiType::Azure => None,
                ApiType::OpenAi => Some(&self.config.model),
            },
        };

        let request = self.client.post(self.endpoint()).json(&body);
        let request = match self.config.api_type {
            ApiType::Azure => request.header("api-key", &self.config.api_key),
            ApiType::OpenAi => request.bearer_auth(&self.config.api_key),
        };

        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(ProviderError::Status { status, body });
        }

        response
            .json()
            .await
            .map_err(|e| ProviderError::MalformedResponse(e.to_string()))
    }
}

#[async_trait]
impl EmbeddingProvider for RemoteEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, ProviderError> {
        let response = self.call_api(text).await?;

        let embedding = response
            .data
            .into_iter()
            .next()
            .map(|d| d.embedding)
            .ok_or_else(|| ProviderError::MalformedResponse("empty data field".to_string()))?;

        if embedding.is_empty() {
            return Err(ProviderError::MalformedResponse(
                "empty embedding field".to_string(),
            ));
        }

        debug!(dimensions = embedding.len(), "embedding received");
        Ok(embedding)
    }

    fn dimensions(&self) -> Option<usize> {
        self.config.dimensions
    }
}
