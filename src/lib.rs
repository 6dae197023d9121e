pub mod error;
pub mod provider;
pub mod tracing;
pub mod visibility;

pub use error::{FetchError, Result};
pub use provider::{RankedSearch, SearchHit, SearchQuery};
pub use visibility::{MatchTier, VISIBILITY_TOP_N, batch_check_visibility, check_visibility};
