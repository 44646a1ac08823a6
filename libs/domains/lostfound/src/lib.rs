//! Found-report similarity search domain.
//!
//! The pipeline is: user text -> remote embedding provider -> filtered KNN
//! search over the RediSearch report index -> ranked hits. Everything here is
//! orchestration around two outbound calls; the index itself is populated out
//! of band and treated as read-only.
//!
//! Seams are traits so the HTTP layer can be tested against fakes:
//! [`EmbeddingProvider`] for the embedding call and [`VectorIndex`] for the
//! KNN query.

pub mod embedding;
pub mod error;
pub mod index;
pub mod models;
pub mod query;
pub mod service;

pub use embedding::{CachedEmbedder, EmbeddingConfig, EmbeddingProvider, RemoteEmbedder};
pub use error::{LostFoundError, ProviderError, SearchError};
pub use index::{IndexConfig, RedisReportIndex, VectorIndex};
pub use models::{FoundReport, PartnerFilter, PartnerSet, SearchQuery, FOUND_TAG, NO_PARTNER_SELECTED};
pub use query::KnnQuery;
pub use service::SearchService;
