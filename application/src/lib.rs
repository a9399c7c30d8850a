//! Application layer for namescout
//!
//! This crate contains the streaming use case, port definitions, and the
//! process-wide matcher cache. It depends only on the domain layer;
//! adapters for the ports live in the infrastructure layer.

pub mod matcher_cache;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use matcher_cache::{MatcherCache, MatcherInitError};
pub use ports::{
    availability::{AvailabilityLookup, LookupError},
    generation::{ChunkStream, GenerationError, GenerationSource},
    suffixes::{SuffixSource, SuffixSourceError},
};
pub use use_cases::stream_domains::{
    DomainStreamHandle, StreamDomainsError, StreamDomainsInput, StreamDomainsUseCase,
};
