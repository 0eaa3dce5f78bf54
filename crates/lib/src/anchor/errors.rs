//! Error types for anchor recording.

use thiserror::Error;

/// Errors raised while recording anchors.
///
/// Reads from an [`AnchorMap`](super::AnchorMap) never fail; only the
/// `add_anchor*` family can return these, and they do so before touching the
/// map.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum AnchorError {
    /// A required argument was absent
    #[error("Required argument '{argument}' was not provided")]
    NullArgument {
        /// Name of the missing argument
        argument: &'static str,
    },

    /// The anchor target could not be parsed as a URI
    #[error("Invalid anchor URI '{value}'")]
    InvalidUri {
        /// The rejected input
        value: String,
        #[source]
        source: url::ParseError,
    },
}

impl AnchorError {
    /// Check if this error reports a missing argument.
    pub fn is_null_argument(&self) -> bool {
        matches!(self, AnchorError::NullArgument { .. })
    }

    /// Check if this error reports an unparsable URI.
    pub fn is_invalid_uri(&self) -> bool {
        matches!(self, AnchorError::InvalidUri { .. })
    }
}

impl From<AnchorError> for crate::Error {
    fn from(err: AnchorError) -> Self {
        crate::Error::Anchor(err)
    }
}
