//! Search visibility matching.
//!
//! Given a ranked result list for a niche/location search and one or more
//! known business names, determine the 1-based rank each business occupies,
//! or that it is absent from the top results. Matching is tiered (exact,
//! containment, token overlap) and, on the batch path, injective: a rank
//! position is assigned to at most one business.

// Module declarations
pub(crate) mod batch;
pub(crate) mod scoring;
pub(crate) mod single;

// Public re-exports (used via lib.rs)
pub use batch::batch_check_visibility;
pub use scoring::{MatchTier, normalize_name, score_names};
pub use single::check_visibility;

/// Number of top-ranked results a visibility check inspects.
pub const VISIBILITY_TOP_N: usize = 20;
