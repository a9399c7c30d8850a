//! Service configuration: endpoints and credentials.

pub mod loader;
pub mod settings;

pub use loader::ConfigLoader;
pub use settings::{GenerationConfig, RegistrarConfig, ServiceConfig};
