//! Domain error types.
//!
//! Two failure families mirror the two outbound calls: [`ProviderError`] for
//! the embedding request and [`SearchError`] for the index query. Both are
//! recovered at the HTTP boundary as non-fatal responses; neither synthesizes
//! a partial result.

/// Embedding provider failures
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// Transport-level failure (DNS, TLS, timeout, connection refused)
    #[error("embedding request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Provider answered with a non-success status
    #[error("embedding provider returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// Provider answered 200 but the body is unusable (missing or empty
    /// embedding field)
    #[error("malformed embedding response: {0}")]
    MalformedResponse(String),
}

/// Vector index failures
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// Index store unreachable, unknown index, or query rejected by Redis
    #[error("search index error: {0}")]
    Redis(#[from] redis::RedisError),

    /// Query vector length does not match the configured index dimensionality.
    /// Caught before the round trip so a misconfigured embedding model never
    /// silently returns zero results.
    #[error("query vector has {actual} dimensions but the index expects {expected}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Reply shape was not the FT.SEARCH array we expect
    #[error("malformed search reply: {0}")]
    MalformedReply(String),
}

/// Top-level domain error, mapped to HTTP status codes in the API layer
#[derive(Debug, thiserror::Error)]
pub enum LostFoundError {
    #[error("query text must not be empty")]
    EmptyQuery,

    #[error("unknown partner id '{0}'")]
    UnknownPartner(String),

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error(transparent)]
    Search(#[from] SearchError),
}
