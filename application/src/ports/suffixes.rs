//! Suffix list port
//!
//! Defines the interface to the registrar's one-time suffix (TLD) listing,
//! fetched once per process to build the token matcher.

use async_trait::async_trait;
use namescout_domain::Suffix;
use thiserror::Error;

/// Errors that can occur while fetching the suffix listing.
#[derive(Error, Debug)]
pub enum SuffixSourceError {
    #[error("Suffix listing request failed with status {0}")]
    Status(u16),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Malformed suffix listing: {0}")]
    Decode(String),
}

/// Port for the registrar's suffix listing.
#[async_trait]
pub trait SuffixSource: Send + Sync {
    /// Fetch the full list of valid domain suffixes.
    async fn fetch(&self) -> Result<Vec<Suffix>, SuffixSourceError>;
}
