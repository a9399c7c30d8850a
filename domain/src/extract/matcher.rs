//! Suffix-driven matcher for domain-name-shaped tokens.
//!
//! The matcher is built once per process from the registrar's list of
//! valid suffixes and applied to arbitrary text. A token is a `label.suffix`
//! pair: the label is 2–63 characters of letters, digits, and hyphens, not
//! starting or ending with a hyphen; the suffix must be one of the supplied
//! suffixes, matched case-insensitively with its dots literal.

use crate::core::error::MatcherError;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// One valid domain suffix as described by the registrar's listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suffix {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: SuffixKind,
}

impl Suffix {
    pub fn new(name: impl Into<String>, kind: SuffixKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

/// Registrar classification of a suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SuffixKind {
    Generic,
    CountryCode,
}

/// Compiled token matcher over a fixed suffix alternation.
#[derive(Debug, Clone)]
pub struct DomainMatcher {
    pattern: Regex,
}

impl DomainMatcher {
    /// Build a matcher from the supplied suffix list.
    ///
    /// Fails on an empty list: an empty alternation would match nothing
    /// and silently suppress all extraction downstream.
    pub fn build(suffixes: &[Suffix]) -> Result<Self, MatcherError> {
        if suffixes.is_empty() {
            return Err(MatcherError::EmptySuffixList);
        }

        let alternation = suffixes
            .iter()
            .map(|suffix| regex::escape(&suffix.name))
            .collect::<Vec<_>>()
            .join("|");

        let pattern = Regex::new(&format!(
            r"(?i)[a-zA-Z0-9][a-zA-Z0-9-]{{0,61}}[a-zA-Z0-9]\.(?:{alternation})"
        ))?;

        Ok(Self { pattern })
    }

    /// Lazily iterate every token match in `text`.
    pub fn find_all<'t>(&self, text: &'t str) -> impl Iterator<Item = &'t str> {
        self.pattern.find_iter(text).map(|m| m.as_str())
    }
}
