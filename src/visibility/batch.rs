//! Batch visibility matching with unique rank assignment.

use super::VISIBILITY_TOP_N;
use super::scoring::{MatchTier, normalize_name, score_names};
use crate::provider::{RankedSearch, SearchQuery};
use ahash::AHashSet;
use std::collections::HashMap;

/// A ranked hit with its normalized name retained for scoring.
struct RankedEntry {
    normalized: String,
    position: u32,
}

/// Assignment passes, strongest evidence first. Resolving every exact match
/// across the whole batch before any weaker tier keeps a token-overlap match
/// from claiming a position that another candidate matches exactly.
const PASS_ORDER: [MatchTier; 3] = [MatchTier::Exact, MatchTier::Contains, MatchTier::TokenOverlap];

/// Check visibility for many businesses with a single ranked search.
///
/// Fetches the top [`VISIBILITY_TOP_N`] results exactly once and assigns each
/// business a rank or absence. The returned map is keyed by the verbatim
/// input names, always has exactly one entry per distinct input name, and is
/// injective over assigned positions: no two businesses share a rank.
///
/// Assignment is greedy by tier: three passes in descending tier order, and
/// within a pass businesses resolve in caller-supplied order, each taking the
/// best-ranked unclaimed result that scores exactly the pass's tier. This is
/// deterministic and cheap rather than globally optimal, which is acceptable
/// for a list capped at twenty results.
///
/// A provider failure degrades soft: every business maps to `None` and the
/// failure is logged, never surfaced. This is intentionally asymmetric with
/// [`check_visibility`](super::check_visibility) — batch callers expect a
/// best-effort summary that a single upstream outage must not block.
pub async fn batch_check_visibility(
    provider: &dyn RankedSearch,
    business_names: &[String],
    niche: &str,
    location: &str,
) -> HashMap<String, Option<u32>> {
    tracing::info!(
        count = business_names.len(),
        niche,
        location,
        "batch visibility check"
    );

    let mut report: HashMap<String, Option<u32>> = business_names
        .iter()
        .map(|name| (name.clone(), None))
        .collect();

    let query = SearchQuery::new(niche, location);
    let hits = match provider.fetch_ranked(&query, VISIBILITY_TOP_N).await {
        Ok(hits) => hits,
        Err(error) => {
            tracing::warn!(%error, "ranked search failed; reporting all businesses as absent");
            return report;
        }
    };

    let entries: Vec<RankedEntry> = hits
        .iter()
        .enumerate()
        .map(|(index, hit)| RankedEntry {
            normalized: normalize_name(&hit.name),
            position: index as u32 + 1,
        })
        .collect();

    let mut claimed: AHashSet<u32> = AHashSet::new();

    // Caller order within a pass, so ties resolve deterministically. A name
    // supplied twice resolves once; both copies share the one report entry.
    let mut seen: AHashSet<&str> = AHashSet::new();
    let mut unresolved: Vec<(&str, String)> = business_names
        .iter()
        .filter(|name| seen.insert(name.as_str()))
        .map(|name| (name.as_str(), normalize_name(name)))
        .collect();

    for pass_tier in PASS_ORDER {
        unresolved.retain(|(name, normalized)| {
            let assigned = entries.iter().find(|entry| {
                !claimed.contains(&entry.position)
                    && score_names(normalized, &entry.normalized) == pass_tier
            });
            match assigned {
                Some(entry) => {
                    tracing::debug!(
                        business = *name,
                        position = entry.position,
                        tier = ?pass_tier,
                        "assigned rank"
                    );
                    claimed.insert(entry.position);
                    report.insert((*name).to_string(), Some(entry.position));
                    false
                }
                None => true,
            }
        });
    }

    let ranked = report.values().filter(|rank| rank.is_some()).count();
    tracing::info!(
        ranked,
        total = report.len(),
        searched = entries.len(),
        "batch visibility check complete"
    );
    report
}
