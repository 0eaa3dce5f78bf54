//! Error types for connector model validation.

use thiserror::Error;

use crate::proxy::ProxyError;

/// Errors raised while building an [`Acl`](super::Acl).
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum AclError {
    /// A user or group name is not usable as a principal
    #[error("Invalid principal '{principal}': {reason}")]
    InvalidPrincipal { principal: String, reason: String },

    /// Inheritance type name not recognized
    #[error("Unknown inheritance type '{name}'")]
    UnknownInheritanceType { name: String },
}

impl AclError {
    /// Check if this error concerns a principal name.
    pub fn is_invalid_principal(&self) -> bool {
        matches!(self, AclError::InvalidPrincipal { .. })
    }
}

// Raised inside `AclProxy::build`, where failures surface as invalid arguments.
impl From<AclError> for ProxyError {
    fn from(err: AclError) -> Self {
        ProxyError::invalid_argument("Acl", err.to_string())
    }
}

impl From<AclError> for crate::Error {
    fn from(err: AclError) -> Self {
        crate::Error::Acl(err)
    }
}
