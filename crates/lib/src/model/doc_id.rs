//! Unique document identifier.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::proxy::{ProxyError, TypeProxy};

/// Identifier of a document in the connector's repository.
///
/// Opaque and never empty. Carries no serde derives; its wire form is
/// [`DocIdProxy`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocId(String);

impl DocId {
    /// Creates an identifier, rejecting the empty string.
    pub fn new(unique_id: impl Into<String>) -> Result<Self, ProxyError> {
        let unique_id = unique_id.into();
        if unique_id.is_empty() {
            return Err(ProxyError::invalid_argument(
                "DocId",
                "unique id must not be empty",
            ));
        }
        Ok(DocId(unique_id))
    }

    /// Returns the identifier as a string slice.
    pub fn unique_id(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for DocId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0)
    }
}

/// Wire form of [`DocId`]: `{"uniqueId": "..."}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocIdProxy {
    #[serde(default)]
    pub unique_id: Option<String>,
}

impl TypeProxy<DocId> for DocIdProxy {
    fn from_domain(value: &DocId) -> Result<Self, ProxyError> {
        Ok(DocIdProxy {
            unique_id: Some(value.0.clone()),
        })
    }

    fn build(self) -> Result<DocId, ProxyError> {
        let unique_id = self
            .unique_id
            .ok_or_else(|| ProxyError::invalid_argument("DocId", "uniqueId is required"))?;
        DocId::new(unique_id)
    }
}
