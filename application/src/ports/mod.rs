//! Port definitions for the application layer.
//!
//! Ports are the interfaces through which the pipeline reaches its
//! external collaborators: the generation source, the availability lookup
//! service, and the suffix listing. Implementations (adapters) live in the
//! infrastructure layer.

pub mod availability;
pub mod generation;
pub mod suffixes;

pub use availability::{AvailabilityLookup, LookupError};
pub use generation::{ChunkStream, GenerationError, GenerationSource};
pub use suffixes::{SuffixSource, SuffixSourceError};
