//! Embedding provider client.
//!
//! [`RemoteEmbedder`] talks to an OpenAI-compatible embeddings endpoint
//! (Azure deployment-style or plain OpenAI, selected by `API_TYPE`);
//! [`CachedEmbedder`] wraps any provider with a bounded LRU memo so repeated
//! identical queries skip the network round trip.

mod cache;
mod remote;

pub use cache::CachedEmbedder;
pub use remote::{ApiType, EmbeddingConfig, RemoteEmbedder};

use async_trait::async_trait;

use crate::error::ProviderError;

/// Turns text into a fixed-length float vector.
///
/// Implementations must be cheap to share behind an `Arc`; the service holds
/// one for the process lifetime.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Embed a single text. The returned vector length is the provider's
    /// fixed dimensionality for the configured model.
    async fn embed(&self, text: &str) -> Result<Vec<f32>, ProviderError>;

    /// Expected output dimensionality, when known from configuration.
    fn dimensions(&self) -> Option<usize>;
}
