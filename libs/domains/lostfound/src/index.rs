//! Report index access: FT.SEARCH execution and reply decoding.

use async_trait::async_trait;
use core_config::{ConfigError, FromEnv, env_or_default, env_required};
use database::redis::ConnectionManager;
use redis::Value;
use tracing::{debug, warn};

use crate::error::SearchError;
use crate::models::FoundReport;
use crate::query::{DEFAULT_K, KnnQuery};

/// Search index configuration
#[derive(Clone, Debug)]
pub struct IndexConfig {
    /// RediSearch index name (required, `INDEX_NAME`)
    pub name: String,
    /// Neighbors requested per search (`SEARCH_K`, default 5)
    pub k: usize,
}

impl FromEnv for IndexConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let name = env_required("INDEX_NAME")?;
        let k = env_or_default("SEARCH_K", &DEFAULT_K.to_string())
            .parse()
            .map_err(|e| ConfigError::ParseError {
                key: "SEARCH_K".to_string(),
                details: format!("{}", e),
            })?;

        Ok(Self { name, k })
    }
}

/// KNN lookup over pre-indexed report vectors.
///
/// The trait seam lets the orchestrator be tested against an in-memory fake.
#[async_trait]
pub trait VectorIndex: Send + Sync {
    /// Return up to `k` reports nearest to `vector`, restricted to the given
    /// partner and the fixed `Found` tag, ordered ascending by cosine
    /// distance.
    async fn knn(
        &self,
        partner_id: &str,
        vector: &[f32],
        k: usize,
    ) -> Result<Vec<FoundReport>, SearchError>;
}

/// RediSearch-backed implementation of [`VectorIndex`]
pub struct RedisReportIndex {
    conn: ConnectionManager,
    index: String,
    dimensions: Option<usize>,
}

impl RedisReportIndex {
    pub fn new(conn: ConnectionManager, index: impl Into<String>) -> Self {
        Self {
            conn,
            index: index.into(),
            dimensions: None,
        }
    }

    /// Enable the local dimensionality guard. A query vector of any other
    /// length is rejected with [`SearchError::DimensionMismatch`] instead of
    /// being sent to the index.
    pub fn with_dimensions(mut self, dimensions: Option<usize>) -> Self {
        self.dimensions = dimensions;
        self
    }

    pub fn index_name(&self) -> &str {
        &self.index
    }
}

#[async_trait]
impl VectorIndex for RedisReportIndex {
    async fn knn(
        &self,
        partner_id: &str,
        vector: &[f32],
        k: usize,
    ) -> Result<Vec<FoundReport>, SearchError> {
        ensure_dimensions(self.dimensions, vector.len())?;

        let query = KnnQuery::new(&self.index, partner_id, vector.to_vec()).with_k(k);

        debug!(index = %self.index, partner_id, k, "executing KNN search");

        let mut conn = self.conn.clone();
        let reply: Value = query.to_cmd().query_async(&mut conn).await?;

        parse_search_reply(reply)
    }
}

/// Reject a query vector whose length cannot match the indexed vectors
fn ensure_dimensions(expected: Option<usize>, actual: usize) -> Result<(), SearchError> {
    match expected {
        Some(expected) if actual != expected => {
            Err(SearchError::DimensionMismatch { expected, actual })
        }
        _ => Ok(()),
    }
}

/// Decode an RESP2 FT.SEARCH reply: `[total, docid, [field, value, ...], ...]`.
///
/// Documents missing expected fields are skipped with a warning rather than
/// failing the whole result; a reply that is not the expected array shape is
/// a [`SearchError::MalformedReply`].
fn parse_search_reply(reply: Value) -> Result<Vec<FoundReport>, SearchError> {
    let Value::Array(items) = reply else {
        return Err(SearchError::MalformedReply(format!(
            "expected array reply, got {:?}",
            reply
        )));
    };

    let mut iter = items.into_iter();

    match iter.next() {
        Some(Value::Int(total)) => {
            debug!(total, "FT.SEARCH matched documents");
        }
        other => {
            return Err(SearchError::MalformedReply(format!(
                "expected integer total as first element, got {:?}",
                other
            )));
        }
    }

    let mut reports = Vec::new();

    // Remaining elements alternate: document id, then field/value array
    while let Some(doc_id) = iter.next() {
        let Some(fields) = iter.next() else {
            warn!("dangling document id without field array, ignoring");
            break;
        };

        match decode_document(fields) {
            Some(report) => reports.push(report),
            None => {
                warn!(
                    doc_id = as_string(&doc_id).unwrap_or_default(),
                    "skipping document with missing or malformed fields"
                );
            }
        }
    }

    Ok(reports)
}

/// Turn one `[field, value, field, value, ...]` array into a report
fn decode_document(fields: Value) -> Option<FoundReport> {
    let Value::Array(pairs) = fields else {
        return None;
    };

    let mut item = None;
    let mut description = None;
    let mut partner_id = None;
    let mut score = None;

    let mut iter = pairs.into_iter();
    while let (Some(key), Some(value)) = (iter.next(), iter.next()) {
        let Some(key) = as_string(&key) else { continue };
        match key.as_str() {
            "Item" => item = as_string(&value),
            "Description" => description = as_string(&value),
            "PartnerID" => partner_id = as_string(&value),
            "score" => score = as_string(&value).and_then(|s| s.parse::<f32>().ok()),
            _ => {}
        }
    }

    Some(FoundReport {
        item: item?,
        description: description?,
        partner_id: partner_id?,
        score: score?,
    })
}

/// Best-effort string view of a scalar reply value
fn as_string(value: &Value) -> Option<String> {
    match value {
        Value::BulkString(bytes) => Some(String::from_utf8_lossy(bytes).into_owned()),
        Value::SimpleString(s) => Some(s.clone()),
        Value::Int(i) => Some(i.to_string()),
        Value::Double(d) => Some(d.to_string()),
        _ => None,
    }
}
