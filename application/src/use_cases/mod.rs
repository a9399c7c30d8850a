//! Application use cases.

pub mod sink;
pub mod stream_domains;

pub use stream_domains::{
    DomainStreamHandle, StreamDomainsError, StreamDomainsInput, StreamDomainsUseCase,
};
