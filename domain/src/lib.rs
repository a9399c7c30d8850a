//! Domain layer for namescout
//!
//! This crate contains the pure logic of the suggestion pipeline and has no
//! dependencies on infrastructure or I/O concerns.
//!
//! # Core Concepts
//!
//! ## Candidate
//!
//! A domain-name-shaped token extracted from generated text, not yet known
//! to be registrable. Candidates are discovered incrementally: the matcher
//! re-scans the full [`Transcript`] after every text fragment so tokens
//! that straddle fragment boundaries are still found.
//!
//! ## Definitive
//!
//! An availability result is *definitive* when it came from a real lookup.
//! When the lookup service is unreachable or throttling, results are
//! synthesized optimistically with `definitive = false` so the consumer can
//! re-verify instead of silently losing a candidate.

pub mod availability;
pub mod core;
pub mod extract;
pub mod generation;

// Re-export commonly used types
pub use availability::record::DomainAvailability;
pub use core::error::MatcherError;
pub use extract::{
    candidates::{CandidateTracker, MAX_CANDIDATE_LEN},
    matcher::{DomainMatcher, Suffix, SuffixKind},
};
pub use generation::{
    event::{GenerationEvent, parse_line},
    lines::LineReassembler,
    transcript::Transcript,
};
