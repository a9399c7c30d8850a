//! Domain error types

use thiserror::Error;

/// Errors raised while building the suffix matcher.
///
/// These are fatal: there is no safe empty-matcher fallback, since an empty
/// matcher would silently suppress all downstream extraction.
#[derive(Error, Debug)]
pub enum MatcherError {
    #[error("Suffix list is empty")]
    EmptySuffixList,

    #[error("Invalid matcher pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_suffix_list_display() {
        let error = MatcherError::EmptySuffixList;
        assert_eq!(error.to_string(), "Suffix list is empty");
    }
}
