//! Domain-token extraction from accumulated text.

pub mod candidates;
pub mod matcher;

pub use candidates::{CandidateTracker, MAX_CANDIDATE_LEN};
pub use matcher::{DomainMatcher, Suffix, SuffixKind};
