//! Per-request candidate tracking and deduplication.

use crate::extract::matcher::DomainMatcher;
use std::collections::HashSet;

/// Matches of this length or longer are discarded before lookup.
pub const MAX_CANDIDATE_LEN: usize = 25;

/// Tracks which candidate tokens have already been extracted for one
/// request.
///
/// The set is append-only: once a token is seen it never enters another
/// batch, no matter how often it reappears in the growing transcript.
#[derive(Debug, Default)]
pub struct CandidateTracker {
    seen: HashSet<String>,
}

impl CandidateTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan the full accumulated text and return the candidates discovered
    /// for the first time, lower-cased, in first-seen order.
    ///
    /// The whole transcript is re-scanned on every call; tokens straddling
    /// fragment boundaries only complete once the later fragment arrives.
    pub fn extract_new(&mut self, matcher: &DomainMatcher, full_text: &str) -> Vec<String> {
        let mut fresh = Vec::new();

        for token in matcher.find_all(full_text) {
            let candidate = token.to_lowercase();
            if candidate.len() >= MAX_CANDIDATE_LEN {
                continue;
            }
            if self.seen.insert(candidate.clone()) {
                fresh.push(candidate);
            }
        }

        fresh
    }

    /// Number of distinct candidates extracted so far.
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}
