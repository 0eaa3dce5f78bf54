//! Access control lists attached to documents.
//!
//! An [`Acl`] is immutable once built. Its only constructor is
//! [`AclBuilder::build`], which validates every principal; the wire form
//! [`AclProxy`] goes back through the same builder so that invalid wire data
//! never produces an `Acl`.

use std::{collections::BTreeSet, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::{
    AclError,
    doc_id::{DocId, DocIdProxy},
};
use crate::proxy::{ProxyError, TypeProxy};

/// How an ACL combines with the ACL it inherits from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InheritanceType {
    /// The child's decision wins when both have one
    #[default]
    ChildOverrides,
    /// The parent's decision wins when both have one
    ParentOverrides,
    /// Access requires both parent and child to permit
    AndBothPermit,
    /// Nothing may inherit from this ACL
    LeafNode,
}

impl InheritanceType {
    /// Wire name of the inheritance type.
    pub fn as_str(&self) -> &'static str {
        match self {
            InheritanceType::ChildOverrides => "CHILD_OVERRIDES",
            InheritanceType::ParentOverrides => "PARENT_OVERRIDES",
            InheritanceType::AndBothPermit => "AND_BOTH_PERMIT",
            InheritanceType::LeafNode => "LEAF_NODE",
        }
    }
}

impl fmt::Display for InheritanceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InheritanceType {
    type Err = AclError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CHILD_OVERRIDES" => Ok(InheritanceType::ChildOverrides),
            "PARENT_OVERRIDES" => Ok(InheritanceType::ParentOverrides),
            "AND_BOTH_PERMIT" => Ok(InheritanceType::AndBothPermit),
            "LEAF_NODE" => Ok(InheritanceType::LeafNode),
            other => Err(AclError::UnknownInheritanceType {
                name: other.to_string(),
            }),
        }
    }
}

/// Permit and deny lists for users and groups, with optional inheritance.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Acl {
    permit_users: BTreeSet<String>,
    deny_users: BTreeSet<String>,
    permit_groups: BTreeSet<String>,
    deny_groups: BTreeSet<String>,
    inherit_from: Option<DocId>,
    inheritance_type: InheritanceType,
}

impl Acl {
    /// Starts building an ACL.
    pub fn builder() -> AclBuilder {
        AclBuilder::default()
    }

    pub fn permit_users(&self) -> &BTreeSet<String> {
        &self.permit_users
    }

    pub fn deny_users(&self) -> &BTreeSet<String> {
        &self.deny_users
    }

    pub fn permit_groups(&self) -> &BTreeSet<String> {
        &self.permit_groups
    }

    pub fn deny_groups(&self) -> &BTreeSet<String> {
        &self.deny_groups
    }

    pub fn inherit_from(&self) -> Option<&DocId> {
        self.inherit_from.as_ref()
    }

    pub fn inheritance_type(&self) -> InheritanceType {
        self.inheritance_type
    }

    /// Returns true if the ACL names no principals and inherits nothing.
    pub fn is_empty(&self) -> bool {
        self.permit_users.is_empty()
            && self.deny_users.is_empty()
            && self.permit_groups.is_empty()
            && self.deny_groups.is_empty()
            && self.inherit_from.is_none()
    }
}

/// Collects ACL fields; validation happens in [`build`](Self::build).
#[derive(Debug, Clone, Default)]
pub struct AclBuilder {
    permit_users: Vec<String>,
    deny_users: Vec<String>,
    permit_groups: Vec<String>,
    deny_groups: Vec<String>,
    inherit_from: Option<DocId>,
    inheritance_type: InheritanceType,
}

impl AclBuilder {
    pub fn permit_users<I, S>(mut self, users: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.permit_users.extend(users.into_iter().map(Into::into));
        self
    }

    pub fn deny_users<I, S>(mut self, users: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.deny_users.extend(users.into_iter().map(Into::into));
        self
    }

    pub fn permit_groups<I, S>(mut self, groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.permit_groups.extend(groups.into_iter().map(Into::into));
        self
    }

    pub fn deny_groups<I, S>(mut self, groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.deny_groups.extend(groups.into_iter().map(Into::into));
        self
    }

    pub fn inherit_from(mut self, parent: DocId) -> Self {
        self.inherit_from = Some(parent);
        self
    }

    pub fn inheritance_type(mut self, inheritance_type: InheritanceType) -> Self {
        self.inheritance_type = inheritance_type;
        self
    }

    /// Validates all principals and produces the ACL.
    pub fn build(self) -> Result<Acl, AclError> {
        Ok(Acl {
            permit_users: validate_principals(self.permit_users)?,
            deny_users: validate_principals(self.deny_users)?,
            permit_groups: validate_principals(self.permit_groups)?,
            deny_groups: validate_principals(self.deny_groups)?,
            inherit_from: self.inherit_from,
            inheritance_type: self.inheritance_type,
        })
    }
}

fn validate_principals(names: Vec<String>) -> Result<BTreeSet<String>, AclError> {
    names
        .into_iter()
        .map(|name| {
            if name.is_empty() {
                Err(AclError::InvalidPrincipal {
                    principal: name,
                    reason: "name is empty".to_string(),
                })
            } else if name.trim() != name {
                Err(AclError::InvalidPrincipal {
                    principal: name,
                    reason: "name has surrounding whitespace".to_string(),
                })
            } else {
                Ok(name)
            }
        })
        .collect()
}

/// Wire form of [`Acl`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AclProxy {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub permit_users: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub deny_users: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub permit_groups: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub deny_groups: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inherit_from: Option<DocIdProxy>,
    /// Defaults to `CHILD_OVERRIDES` when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inheritance_type: Option<String>,
}

impl TypeProxy<Acl> for AclProxy {
    fn from_domain(value: &Acl) -> Result<Self, ProxyError> {
        let inherit_from = value
            .inherit_from
            .as_ref()
            .map(DocIdProxy::from_domain)
            .transpose()?;
        Ok(AclProxy {
            permit_users: value.permit_users.iter().cloned().collect(),
            deny_users: value.deny_users.iter().cloned().collect(),
            permit_groups: value.permit_groups.iter().cloned().collect(),
            deny_groups: value.deny_groups.iter().cloned().collect(),
            inherit_from,
            inheritance_type: Some(value.inheritance_type.as_str().to_string()),
        })
    }

    fn build(self) -> Result<Acl, ProxyError> {
        let mut builder = Acl::builder()
            .permit_users(self.permit_users)
            .deny_users(self.deny_users)
            .permit_groups(self.permit_groups)
            .deny_groups(self.deny_groups);
        if let Some(parent) = self.inherit_from {
            builder = builder.inherit_from(parent.build()?);
        }
        if let Some(name) = self.inheritance_type {
            builder = builder.inheritance_type(name.parse()?);
        }
        Ok(builder.build()?)
    }
}
