//! The availability record for a single domain candidate.

use serde::{Deserialize, Serialize};

/// Availability of one domain name, as reported by the lookup service or
/// synthesized under degraded conditions.
///
/// `definitive` distinguishes a real lookup result from an optimistic
/// assumption made while the lookup service was unreachable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainAvailability {
    pub domain: String,
    pub available: bool,
    pub definitive: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

impl DomainAvailability {
    /// An optimistic record for a candidate whose real availability could
    /// not be checked.
    pub fn optimistic(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            available: true,
            definitive: false,
            period: None,
            price: None,
            currency: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optimistic_record_is_available_but_not_definitive() {
        let record = DomainAvailability::optimistic("example.com");
        assert_eq!(record.domain, "example.com");
        assert!(record.available);
        assert!(!record.definitive);
        assert!(record.price.is_none());
    }

    #[test]
    fn serializes_without_absent_fields() {
        let json = serde_json::to_string(&DomainAvailability::optimistic("x.io")).unwrap();
        assert_eq!(
            json,
            r#"{"domain":"x.io","available":true,"definitive":false}"#
        );
    }

    #[test]
    fn deserializes_full_service_record() {
        let json = r#"{
            "domain": "coolsite.com",
            "available": true,
            "definitive": true,
            "period": 1,
            "price": 10990000,
            "currency": "USD"
        }"#;
        let record: DomainAvailability = serde_json::from_str(json).unwrap();
        assert!(record.definitive);
        assert_eq!(record.period, Some(1));
        assert_eq!(record.price, Some(10_990_000));
        assert_eq!(record.currency.as_deref(), Some("USD"));
    }
}
