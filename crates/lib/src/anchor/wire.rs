//! Wire form of an [`AnchorMap`].
//!
//! The map itself carries no serde derives. It is encoded through
//! [`AnchorMapProxy`], a flat list of records in insertion order:
//!
//! ```json
//! { "anchors": [ { "uri": "http://a.test/", "text": "home" }, { "uri": "http://b.test/" } ] }
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use url::Url;

use super::AnchorMap;
use crate::proxy::{ProxyAdapter, ProxyError, TypeProxy};

/// One anchor as it appears on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnchorRecord {
    /// Link target; required on decode
    #[serde(default)]
    pub uri: Option<String>,
    /// Anchor text, omitted when the link had none
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Serializable stand-in for [`AnchorMap`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnchorMapProxy {
    #[serde(default)]
    pub anchors: Vec<AnchorRecord>,
}

impl TypeProxy<AnchorMap> for AnchorMapProxy {
    fn from_domain(value: &AnchorMap) -> Result<Self, ProxyError> {
        let anchors = value
            .iter()
            .map(|anchor| AnchorRecord {
                uri: Some(anchor.uri().to_string()),
                text: anchor.text().map(str::to_owned),
            })
            .collect();
        Ok(AnchorMapProxy { anchors })
    }

    fn build(self) -> Result<AnchorMap, ProxyError> {
        let mut map = AnchorMap::new();
        for (index, record) in self.anchors.into_iter().enumerate() {
            let raw = record.uri.ok_or_else(|| {
                ProxyError::invalid_argument("AnchorMap", format!("anchor {index} has no uri"))
            })?;
            let uri = Url::parse(&raw).map_err(|e| {
                ProxyError::invalid_argument(
                    "AnchorMap",
                    format!("anchor {index} has invalid uri '{raw}': {e}"),
                )
            })?;
            map.push(uri, record.text);
        }
        Ok(map)
    }
}

impl Serialize for AnchorMap {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        ProxyAdapter::<AnchorMap, AnchorMapProxy>::new().serialize_with(self, serializer)
    }
}

impl<'de> Deserialize<'de> for AnchorMap {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        ProxyAdapter::<AnchorMap, AnchorMapProxy>::new().deserialize_with(deserializer)
    }
}
