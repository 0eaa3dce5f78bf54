//!
//! Connector domain types that travel over the wire only through proxies.
//!
//! None of these types derive serde traits. Each has a companion proxy type,
//! and [`registry`] binds them all into a [`ProxyRegistry`].

mod errors;
pub use errors::AclError;

mod doc_id;
pub use doc_id::{DocId, DocIdProxy};

mod acl;
pub use acl::{Acl, AclBuilder, AclProxy, InheritanceType};

use crate::{
    anchor::{AnchorMap, AnchorMapProxy},
    proxy::{ProxyError, ProxyRegistry},
};

/// Builds a registry with adapters for every connector wire type.
pub fn registry() -> Result<ProxyRegistry, ProxyError> {
    let mut registry = ProxyRegistry::new();
    registry.register::<DocId, DocIdProxy>()?;
    registry.register::<Acl, AclProxy>()?;
    registry.register::<AnchorMap, AnchorMapProxy>()?;
    Ok(registry)
}
