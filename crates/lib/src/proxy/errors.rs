//! Error types for proxy-based serialization.
//!
//! Configuration failures surface while wiring adapters into a registry.
//! Every other variant is raised by a single serialize or deserialize call
//! and propagated to its caller unchanged.

use thiserror::Error;

/// Errors that can occur while binding or using a proxy adapter.
///
/// # Stability
///
/// - New variants may be added in minor versions (enum is `#[non_exhaustive]`)
/// - Existing variants will not be removed in minor versions
/// - Helper methods like `is_*()` provide stable APIs
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ProxyError {
    /// No usable adapter could be bound for a domain type
    #[error("Proxy configuration error for '{type_name}': {reason}")]
    Configuration {
        /// Name of the domain type being configured
        type_name: &'static str,
        /// Why the binding is unusable
        reason: String,
    },

    /// A domain or proxy value failed a type-specific validity check
    #[error("Invalid argument for '{type_name}': {reason}")]
    InvalidArgument {
        /// Name of the type whose check failed
        type_name: &'static str,
        /// What was wrong with the value
        reason: String,
    },

    /// The proxy value could not be encoded into the wire format
    #[error("Failed to encode '{type_name}' through its proxy")]
    Encoding {
        type_name: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// The wire value could not be decoded as the proxy type
    #[error("Failed to decode '{type_name}' through its proxy")]
    Decoding {
        type_name: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl ProxyError {
    /// Shorthand for building an [`ProxyError::InvalidArgument`].
    pub fn invalid_argument(type_name: &'static str, reason: impl Into<String>) -> Self {
        ProxyError::InvalidArgument {
            type_name,
            reason: reason.into(),
        }
    }

    /// Check if this error is a setup-time binding failure.
    pub fn is_configuration_error(&self) -> bool {
        matches!(self, ProxyError::Configuration { .. })
    }

    /// Check if this error came from a conversion or build validity check.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, ProxyError::InvalidArgument { .. })
    }

    /// Check if this error came from the underlying serde_json engine.
    pub fn is_engine_error(&self) -> bool {
        matches!(
            self,
            ProxyError::Encoding { .. } | ProxyError::Decoding { .. }
        )
    }

    /// Get the type name this error refers to.
    pub fn type_name(&self) -> &'static str {
        match self {
            ProxyError::Configuration { type_name, .. }
            | ProxyError::InvalidArgument { type_name, .. }
            | ProxyError::Encoding { type_name, .. }
            | ProxyError::Decoding { type_name, .. } => type_name,
        }
    }
}

impl From<ProxyError> for crate::Error {
    fn from(err: ProxyError) -> Self {
        crate::Error::Proxy(err)
    }
}
