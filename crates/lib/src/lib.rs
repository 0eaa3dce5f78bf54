//!
//! docfeed: building blocks for content connectors that feed documents and
//! their metadata to a search system.
//!
//! ## Core Concepts
//!
//! * **Proxy adapters (`proxy::ProxyAdapter`)**: Serialize a domain type by routing all wire work through a
//!   purpose-built proxy type, keeping the domain type free of serde concerns.
//! * **Proxy registry (`proxy::ProxyRegistry`)**: Binds each domain type to exactly one adapter and reports
//!   missing or ambiguous bindings at setup time.
//! * **Anchor maps (`anchor::AnchorMap`)**: Record every hyperlink found in a document, with its optional
//!   anchor text, in insertion order.
//! * **Connector model (`model`)**: Document identifiers and ACLs, serialized only through their proxies.

pub mod anchor;
pub mod constants;
pub mod model;
pub mod proxy;

pub use anchor::{Anchor, AnchorMap};
pub use proxy::{ProxyAdapter, ProxyRegistry, TypeProxy};

/// Result type used throughout the docfeed library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the docfeed library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Structured proxy errors from the proxy module
    #[error(transparent)]
    Proxy(proxy::ProxyError),

    /// Structured anchor errors from the anchor module
    #[error(transparent)]
    Anchor(anchor::AnchorError),

    /// Structured ACL errors from the model module
    #[error(transparent)]
    Acl(model::AclError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Json(_) => "json",
            Error::Proxy(_) => "proxy",
            Error::Anchor(_) => "anchor",
            Error::Acl(_) => "model",
        }
    }

    /// Check if this error is a setup-time binding failure.
    pub fn is_configuration_error(&self) -> bool {
        match self {
            Error::Proxy(proxy_err) => proxy_err.is_configuration_error(),
            _ => false,
        }
    }

    /// Check if this error reports a value that failed a validity check.
    pub fn is_invalid_argument(&self) -> bool {
        match self {
            Error::Proxy(proxy_err) => proxy_err.is_invalid_argument(),
            Error::Anchor(anchor_err) => anchor_err.is_invalid_uri(),
            Error::Acl(_) => true,
            _ => false,
        }
    }

    /// Check if this error reports a missing required argument.
    pub fn is_null_argument(&self) -> bool {
        match self {
            Error::Anchor(anchor_err) => anchor_err.is_null_argument(),
            _ => false,
        }
    }

    /// Check if this error came from JSON encoding or decoding.
    pub fn is_serialization_error(&self) -> bool {
        match self {
            Error::Json(_) => true,
            Error::Proxy(proxy_err) => proxy_err.is_engine_error(),
            _ => false,
        }
    }
}
