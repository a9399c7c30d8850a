//! Process-wide cache for the suffix matcher.
//!
//! The suffix listing is fetched at most once per process; the compiled
//! matcher is shared by every subsequent request. A failed fetch is fatal
//! for the request that triggered it but leaves the cache empty, so a
//! later request retries the initialization.

use crate::ports::suffixes::{SuffixSource, SuffixSourceError};
use namescout_domain::{DomainMatcher, MatcherError};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::OnceCell;
use tracing::info;

/// Errors that can occur during one-time matcher initialization.
///
/// Initialization failure aborts the request before any streaming starts.
#[derive(Error, Debug)]
pub enum MatcherInitError {
    #[error("Suffix listing unavailable: {0}")]
    SuffixSource(#[from] SuffixSourceError),

    #[error("Matcher build failed: {0}")]
    Build(#[from] MatcherError),
}

/// Lazily-initialized, process-scoped holder for the compiled matcher.
#[derive(Debug, Default)]
pub struct MatcherCache {
    cell: OnceCell<Arc<DomainMatcher>>,
}

impl MatcherCache {
    pub const fn new() -> Self {
        Self {
            cell: OnceCell::const_new(),
        }
    }

    /// Return the cached matcher, fetching the suffix listing and building
    /// it on first use.
    ///
    /// Only a successful build populates the cache.
    pub async fn get_or_build(
        &self,
        source: &dyn SuffixSource,
    ) -> Result<Arc<DomainMatcher>, MatcherInitError> {
        self.cell
            .get_or_try_init(|| async {
                let suffixes = source.fetch().await?;
                info!("Building domain matcher from {} suffixes", suffixes.len());
                Ok(Arc::new(DomainMatcher::build(&suffixes)?))
            })
            .await
            .cloned()
    }

    /// Whether the matcher has been built.
    pub fn initialized(&self) -> bool {
        self.cell.initialized()
    }
}
