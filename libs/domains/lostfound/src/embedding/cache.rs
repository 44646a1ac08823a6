//! Bounded memoization for embedding lookups.

use std::num::NonZeroUsize;
use std::sync::Mutex;

use async_trait::async_trait;
use lru::LruCache;
use tracing::trace;

use super::EmbeddingProvider;
use crate::error::ProviderError;

/// LRU memo keyed by exact input text.
///
/// The original demo memoized embeddings without bound; a long-running
/// service needs a cap, so this keeps the most recent `capacity` texts and
/// evicts least-recently-used beyond that. Errors are never cached.
pub struct CachedEmbedder<P> {
    inner: P,
    cache: Mutex<LruCache<String, Vec<f32>>>,
}

impl<P: EmbeddingProvider> CachedEmbedder<P> {
    /// Wrap a provider with a memo of the given capacity (minimum 1).
    pub fn new(inner: P, capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            inner,
            cache: Mutex::new(LruCache::new(capacity)),
        }
    }

    /// Number of entries currently memoized
    pub fn len(&self) -> usize {
        self.cache.lock().expect("cache lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl<P: EmbeddingProvider> EmbeddingProvider for CachedEmbedder<P> {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, ProviderError> {
        // Lock is never held across the await below
        if let Some(hit) = self
            .cache
            .lock()
            .expect("cache lock poisoned")
            .get(text)
            .cloned()
        {
            trace!("embedding cache hit");
            return Ok(hit);
        }

        let embedding = self.inner.embed(text).await?;

        self.cache
            .lock()
            .expect("cache lock poisoned")
            .put(text.to_string(), embedding.clone());

        Ok(embedding)
    }

    fn dimensions(&self) -> Option<usize> {
        self.inner.dimensions()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingProvider {
        calls: AtomicUsize,
    }

    impl CountingProvider {
        fn new() -> Self {
            Self {
                calls: AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl EmbeddingProvider for CountingProvider {
        async fn embed(&self, text: &str) -> Result<Vec<f32>, ProviderError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            // Deterministic per-text vector so hits are distinguishable
            Ok(vec![text.len() as f32, 1.0, 2.0])
        }

        fn dimensions(&self) -> Option<usize> {
            Some(3)
        }
    }

    #[tokio::test]
    async fn test_repeated_text_hits_cache() {
        let cached = CachedEmbedder::new(CountingProvider::new(), 8);

        let first = cached.embed("I lost my iPhone 14").await.unwrap();
        let second = cached.embed("I lost my iPhone 14").await.unwrap();

        assert_eq!(first, second);
        assert_eq!(cached.inner.calls(), 1);
        assert_eq!(cached.len(), 1);
    }

    #[tokio::test]
    async fn test_distinct_texts_miss() {
        let cached = CachedEmbedder::new(CountingProvider::new(), 8);

        cached.embed("blue wallet").await.unwrap();
        cached.embed("red umbrella").await.unwrap();

        assert_eq!(cached.inner.calls(), 2);
        assert_eq!(cached.len(), 2);
    }

    #[tokio::test]
    async fn test_capacity_evicts_least_recently_used() {
        let cached = CachedEmbedder::new(CountingProvider::new(), 2);

        cached.embed("a").await.unwrap();
        cached.embed("bb").await.unwrap();
        cached.embed("ccc").await.unwrap(); // evicts "a"

        assert_eq!(cached.len(), 2);

        cached.embed("a").await.unwrap(); // miss again
        assert_eq!(cached.inner.calls(), 4);
    }

    #[tokio::test]
    async fn test_dimensions_passthrough() {
        let cached = CachedEmbedder::new(CountingProvider::new(), 2);
        assert_eq!(cached.dimensions(), Some(3));
    }

    #[test]
    fn test_zero_capacity_clamped() {
        let cached = CachedEmbedder::new(CountingProvider::new(), 0);
        assert!(cached.is_empty());
    }
}
