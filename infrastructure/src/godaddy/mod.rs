//! Registrar API adapters (GoDaddy wire format).
//!
//! Both clients authenticate with the registrar's `sso-key` scheme and
//! share a [`RegistrarConfig`](crate::config::RegistrarConfig) for the
//! base URL and credentials.

pub mod availability;
pub mod tlds;

pub use availability::GoDaddyAvailability;
pub use tlds::GoDaddyTlds;

use crate::config::RegistrarConfig;

/// Authorization header value for the registrar API.
fn sso_key(config: &RegistrarConfig) -> String {
    format!("sso-key {}:{}", config.api_key, config.api_secret)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sso_key_header_format() {
        let config = RegistrarConfig {
            api_key: "key".to_string(),
            api_secret: "secret".to_string(),
            ..RegistrarConfig::default()
        };
        assert_eq!(sso_key(&config), "sso-key key:secret");
    }
}
