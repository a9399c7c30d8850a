//! Batch availability client implementing [`AvailabilityLookup`].

use super::sso_key;
use crate::config::RegistrarConfig;
use async_trait::async_trait;
use namescout_application::ports::availability::{AvailabilityLookup, LookupError};
use namescout_domain::DomainAvailability;
use serde::Deserialize;
use tracing::{debug, warn};

/// Wire shape of the registrar's batch availability response.
#[derive(Debug, Deserialize)]
struct AvailabilityResponse {
    domains: Vec<DomainAvailability>,
}

/// Availability lookup backed by the registrar's batch endpoint.
pub struct GoDaddyAvailability {
    client: reqwest::Client,
    config: RegistrarConfig,
}

impl GoDaddyAvailability {
    pub fn new(client: reqwest::Client, config: RegistrarConfig) -> Self {
        Self { client, config }
    }
}

#[async_trait]
impl AvailabilityLookup for GoDaddyAvailability {
    async fn check(&self, domains: &[String]) -> Result<Vec<DomainAvailability>, LookupError> {
        if domains.is_empty() {
            return Ok(Vec::new());
        }

        let response = self
            .client
            .post(format!("{}/v1/domains/available", self.config.api_url))
            .header(reqwest::header::AUTHORIZATION, sso_key(&self.config))
            .json(&domains)
            .send()
            .await
            .map_err(|e| LookupError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            // Throttling lands here; the caller degrades optimistically.
            warn!("Availability service not ok: {}", status);
            return Err(LookupError::Status(status.as_u16()));
        }

        let decoded: AvailabilityResponse = response
            .json()
            .await
            .map_err(|e| LookupError::Decode(e.to_string()))?;

        debug!(
            "Availability service returned {} records for {} names",
            decoded.domains.len(),
            domains.len()
        );

        Ok(decoded.domains)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_batch_response() {
        let json = r#"{
            "domains": [
                {"domain": "a.com", "available": true, "definitive": true, "price": 11990000, "currency": "USD", "period": 1},
                {"domain": "b.com", "available": false, "definitive": true}
            ]
        }"#;

        let decoded: AvailabilityResponse = serde_json::from_str(json).unwrap();
        assert_eq!(decoded.domains.len(), 2);
        assert!(decoded.domains[0].available);
        assert_eq!(decoded.domains[0].price, Some(11_990_000));
        assert!(!decoded.domains[1].available);
    }
}
