//! Core domain errors

pub mod error;

pub use error::MatcherError;
