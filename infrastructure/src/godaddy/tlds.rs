//! Suffix (TLD) listing client implementing [`SuffixSource`].

use super::sso_key;
use crate::config::RegistrarConfig;
use async_trait::async_trait;
use namescout_application::ports::suffixes::{SuffixSource, SuffixSourceError};
use namescout_domain::Suffix;
use tracing::info;

/// Suffix listing backed by the registrar's TLD endpoint.
///
/// Fetched once per process by the matcher cache.
pub struct GoDaddyTlds {
    client: reqwest::Client,
    config: RegistrarConfig,
}

impl GoDaddyTlds {
    pub fn new(client: reqwest::Client, config: RegistrarConfig) -> Self {
        Self { client, config }
    }
}

#[async_trait]
impl SuffixSource for GoDaddyTlds {
    async fn fetch(&self) -> Result<Vec<Suffix>, SuffixSourceError> {
        let response = self
            .client
            .get(format!("{}/v1/domains/tlds", self.config.api_url))
            .header(reqwest::header::AUTHORIZATION, sso_key(&self.config))
            .send()
            .await
            .map_err(|e| SuffixSourceError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SuffixSourceError::Status(status.as_u16()));
        }

        let suffixes: Vec<Suffix> = response
            .json()
            .await
            .map_err(|e| SuffixSourceError::Decode(e.to_string()))?;

        info!("Fetched {} domain suffixes", suffixes.len());

        Ok(suffixes)
    }
}
