//! The ranked-search collaborator boundary.
//!
//! The matching engine is a pure function of (business names, ranked results);
//! obtaining the ranked results is someone else's job. [`RankedSearch`] is that
//! someone: one call, one ordered list of name-bearing hits, best first.
//! Caching, retries, timeouts, and quota enforcement all live behind the trait.

use crate::error::FetchError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A niche/location pair identifying one ranked search.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Business category being searched, e.g. "plumber".
    pub niche: String,
    /// Geographic area, e.g. "Austin, TX".
    pub location: String,
}

impl SearchQuery {
    pub fn new(niche: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            niche: niche.into(),
            location: location.into(),
        }
    }
}

/// One record in a ranked result list.
///
/// The sequence order IS the rank: the engine derives position `index + 1`
/// and reads no field besides `name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    /// Business name as reported by the search provider.
    pub name: String,
}

impl SearchHit {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Ranked-search collaborator.
///
/// Implementations return at most `top_n` hits ordered best-first. The engine
/// makes exactly one call per matching operation and never retries; timeout
/// and cancellation policy belong to the implementation.
#[async_trait]
pub trait RankedSearch: Send + Sync {
    async fn fetch_ranked(
        &self,
        query: &SearchQuery,
        top_n: usize,
    ) -> Result<Vec<SearchHit>, FetchError>;
}
