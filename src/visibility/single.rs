//! Single-business visibility lookup.

use super::VISIBILITY_TOP_N;
use super::scoring::{normalize_name, score_names};
use crate::error::Result;
use crate::provider::{RankedSearch, SearchQuery};
use anyhow::Context as _;

/// Check whether one business appears in the top ranked results for a
/// niche/location search.
///
/// Fetches the top [`VISIBILITY_TOP_N`] results once, then scans them in rank
/// order and returns the 1-based position of the first result the business
/// matches at any tier. `None` means the business is absent from the top
/// results — a normal outcome, not an error.
///
/// A provider failure propagates to the caller; unlike
/// [`batch_check_visibility`](super::batch_check_visibility), no placeholder
/// result is fabricated.
pub async fn check_visibility(
    provider: &dyn RankedSearch,
    business_name: &str,
    niche: &str,
    location: &str,
) -> Result<Option<u32>> {
    tracing::info!(
        business = business_name,
        niche,
        location,
        "checking search visibility"
    );

    let query = SearchQuery::new(niche, location);
    let hits = provider
        .fetch_ranked(&query, VISIBILITY_TOP_N)
        .await
        .with_context(|| format!("ranked search for '{niche}' in '{location}' failed"))?;

    let normalized = normalize_name(business_name);

    for (index, hit) in hits.iter().enumerate() {
        let position = index as u32 + 1;
        let tier = score_names(&normalized, &normalize_name(&hit.name));
        if tier.is_match() {
            tracing::debug!(
                business = business_name,
                position,
                ?tier,
                result = hit.name.as_str(),
                "business found in ranked results"
            );
            return Ok(Some(position));
        }
    }

    tracing::debug!(
        business = business_name,
        searched = hits.len(),
        "business not found in top results"
    );
    Ok(None)
}
