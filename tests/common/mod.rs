//! Shared test fixtures: scripted ranked-search providers.
//!
//! The engine's only collaborator is [`RankedSearch`], so tests script it
//! in-memory: a fixed ranked list, a provider that always fails upstream, and
//! a call-counting wrapper for asserting the batch path's single-fetch
//! contract. No network, no shared state between tests.

use async_trait::async_trait;
use rankscout::{FetchError, RankedSearch, SearchHit, SearchQuery};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Provider that returns a fixed ranked list regardless of query.
#[allow(dead_code)] // Constructors used across different integration test crates
pub struct ScriptedSearch {
    hits: Vec<SearchHit>,
}

#[allow(dead_code)] // Constructors used across different integration test crates
impl ScriptedSearch {
    pub fn new(names: &[&str]) -> Self {
        Self {
            hits: names.iter().map(|name| SearchHit::new(*name)).collect(),
        }
    }

    /// Build from a JSON array of hit objects, the shape real providers return.
    pub fn from_json(json: &str) -> Self {
        Self {
            hits: serde_json::from_str(json).expect("valid search hit fixture"),
        }
    }
}

#[async_trait]
impl RankedSearch for ScriptedSearch {
    async fn fetch_ranked(
        &self,
        _query: &SearchQuery,
        top_n: usize,
    ) -> Result<Vec<SearchHit>, FetchError> {
        Ok(self.hits.iter().take(top_n).cloned().collect())
    }
}

/// Provider whose every call fails upstream.
pub struct FailingSearch;

#[async_trait]
impl RankedSearch for FailingSearch {
    async fn fetch_ranked(
        &self,
        _query: &SearchQuery,
        _top_n: usize,
    ) -> Result<Vec<SearchHit>, FetchError> {
        Err(FetchError::Upstream {
            provider: "scripted".to_string(),
            message: "connection reset".to_string(),
        })
    }
}

/// Wrapper that counts outbound fetches, for single-fetch assertions.
#[allow(dead_code)] // Used in batch_matcher_test.rs
pub struct CountingSearch {
    inner: ScriptedSearch,
    calls: AtomicUsize,
}

#[allow(dead_code)] // Used in batch_matcher_test.rs
impl CountingSearch {
    pub fn new(names: &[&str]) -> Self {
        Self {
            inner: ScriptedSearch::new(names),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RankedSearch for CountingSearch {
    async fn fetch_ranked(
        &self,
        query: &SearchQuery,
        top_n: usize,
    ) -> Result<Vec<SearchHit>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.fetch_ranked(query, top_n).await
    }
}
