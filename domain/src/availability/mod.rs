//! Availability records returned by the lookup service.

pub mod record;

pub use record::DomainAvailability;
