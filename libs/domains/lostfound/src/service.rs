//! Search orchestration: gate, embed, then query the index.

use std::sync::Arc;

use tracing::{debug, info};

use crate::embedding::EmbeddingProvider;
use crate::error::LostFoundError;
use crate::index::VectorIndex;
use crate::models::{FoundReport, PartnerFilter, SearchQuery};
use crate::query::DEFAULT_K;

/// The one in-scope piece of logic: accepts a user query, requests an
/// embedding, runs the filtered KNN search, and returns the ranked hits.
///
/// Both collaborators are trait objects so the service can be exercised with
/// fakes. The calls are sequential by construction: the search needs the
/// embedding, so it cannot start earlier.
#[derive(Clone)]
pub struct SearchService {
    embedder: Arc<dyn EmbeddingProvider>,
    index: Arc<dyn VectorIndex>,
    k: usize,
}

impl SearchService {
    pub fn new(embedder: Arc<dyn EmbeddingProvider>, index: Arc<dyn VectorIndex>) -> Self {
        Self {
            embedder,
            index,
            k: DEFAULT_K,
        }
    }

    pub fn with_k(mut self, k: usize) -> Self {
        self.k = k.max(1);
        self
    }

    /// Run one search interaction.
    ///
    /// The partner sentinel short-circuits to an empty result before any
    /// outbound call is made; that is the UI gating rule from the original
    /// demo, not an error. Empty query text is a validation error.
    pub async fn search_reports(
        &self,
        query: &SearchQuery,
    ) -> Result<Vec<FoundReport>, LostFoundError> {
        let partner_id = match &query.partner {
            PartnerFilter::None => {
                debug!("no partner selected, skipping search");
                return Ok(Vec::new());
            }
            PartnerFilter::Id(id) => id,
        };

        let text = query.text.trim();
        if text.is_empty() {
            return Err(LostFoundError::EmptyQuery);
        }

        let vector = self.embedder.embed(text).await?;
        let hits = self.index.knn(partner_id, &vector, self.k).await?;

        info!(
            partner_id,
            hits = hits.len(),
            "search completed"
        );

        Ok(hits)
    }
}
