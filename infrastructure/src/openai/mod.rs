//! Chat-completions generation source adapter.

pub mod source;

pub use source::OpenAiGenerationSource;
