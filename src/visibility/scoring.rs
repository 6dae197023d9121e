//! Name similarity scoring for visibility matching.
//!
//! Produces a discrete tier rather than a continuous score: the assignment
//! loop needs a strict priority order between kinds of evidence, not a float
//! to threshold.

use ahash::AHashSet;

/// Tokens must be strictly longer than this to count toward word overlap.
/// Filters out articles and short legal suffixes ("the", "LLC", "Co").
const MIN_TOKEN_LEN: usize = 3;

/// Fraction of a candidate's significant tokens that must appear among the
/// result's tokens for a tier-1 match. Behavioral constant: changing it
/// changes which businesses are reported as ranked.
const TOKEN_OVERLAP_RATIO: f64 = 0.6;

/// Discrete similarity tier between a candidate name and a result name.
///
/// Higher is strictly stronger evidence that the two names denote the same
/// business. `None` is the "does not match" sentinel and is never assignable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MatchTier {
    /// No rule matched.
    None = 0,
    /// Enough of the candidate's significant tokens appear in the result.
    TokenOverlap = 1,
    /// One name is a substring of the other ("Joe's Plumbing" vs
    /// "Joe's Plumbing LLC").
    Contains = 2,
    /// The normalized names are identical.
    Exact = 3,
}

impl MatchTier {
    /// Whether this tier is strong enough to assign a rank at all.
    pub fn is_match(self) -> bool {
        self != Self::None
    }
}

/// Normalize a business name for comparison: trim and lowercase.
///
/// Normalization is strictly a scoring concern — result mappings are always
/// keyed by the caller's verbatim string, never the normalized form.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Score two normalized names against each other.
///
/// Rules are evaluated strictest-first and the first hit wins; the ranges are
/// disjoint by construction so ties are impossible. Both inputs must already
/// be normalized (see [`normalize_name`]) — the scorer does not re-normalize.
///
/// Containment is symmetric. Token overlap is directional: it asks how much
/// of the *candidate* is covered by the result, not the reverse.
pub fn score_names(candidate: &str, result: &str) -> MatchTier {
    if candidate == result {
        return MatchTier::Exact;
    }

    if result.contains(candidate) || candidate.contains(result) {
        return MatchTier::Contains;
    }

    let candidate_tokens: Vec<&str> = significant_tokens(candidate).collect();
    if candidate_tokens.is_empty() {
        return MatchTier::None;
    }

    let result_tokens: AHashSet<&str> = significant_tokens(result).collect();
    let overlap = candidate_tokens
        .iter()
        .filter(|token| result_tokens.contains(*token))
        .count();
    let required = (candidate_tokens.len() as f64 * TOKEN_OVERLAP_RATIO).ceil() as usize;

    if overlap >= required {
        MatchTier::TokenOverlap
    } else {
        MatchTier::None
    }
}

/// Whitespace-split tokens long enough to carry identity signal.
fn significant_tokens(name: &str) -> impl Iterator<Item = &str> {
    name.split_whitespace()
        .filter(|token| token.len() > MIN_TOKEN_LEN)
}
