//! Availability lookup port
//!
//! Defines the interface to the registrar's batch availability query.

use async_trait::async_trait;
use namescout_domain::DomainAvailability;
use thiserror::Error;

/// Errors that can occur during an availability lookup.
///
/// All of these are treated as recoverable by the orchestrator: a failed
/// batch degrades to optimistic records rather than surfacing an error on
/// the output stream.
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("Lookup request failed with status {0}")]
    Status(u16),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Malformed lookup response: {0}")]
    Decode(String),
}

/// Port for the batch domain-availability lookup service.
#[async_trait]
pub trait AvailabilityLookup: Send + Sync {
    /// Query availability for a batch of candidate names.
    ///
    /// Returns every record the service reported, available or not; the
    /// caller filters. Implementations must map a non-success service
    /// status to an error rather than an empty result.
    async fn check(&self, domains: &[String]) -> Result<Vec<DomainAvailability>, LookupError>;
}
