//! Configuration schema for the external services.

use serde::{Deserialize, Serialize};

/// Top-level configuration for both external services.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub generation: GenerationConfig,
    pub registrar: RegistrarConfig,
}

/// Generation source settings (chat-completions endpoint).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Full URL of the streaming chat-completions endpoint.
    pub api_url: String,
    pub api_key: String,
    /// Model identifier sent with each generation request.
    pub model: String,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.openai.com/v1/chat/completions".to_string(),
            api_key: String::new(),
            model: "gpt-3.5-turbo".to_string(),
        }
    }
}

/// Registrar settings (availability lookup and suffix listing).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistrarConfig {
    /// Base URL of the registrar API.
    pub api_url: String,
    pub api_key: String,
    pub api_secret: String,
}

impl Default for RegistrarConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.godaddy.com".to_string(),
            api_key: String::new(),
            api_secret: String::new(),
        }
    }
}
