//! Infrastructure layer for namescout
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer: the chat-completions generation source, the
//! registrar availability and suffix-listing clients, and configuration
//! loading.

pub mod config;
pub mod godaddy;
pub mod openai;

// Re-export commonly used types
pub use config::{ConfigLoader, GenerationConfig, RegistrarConfig, ServiceConfig};
pub use godaddy::{availability::GoDaddyAvailability, tlds::GoDaddyTlds};
pub use openai::source::OpenAiGenerationSource;
