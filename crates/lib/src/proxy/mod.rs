//!
//! Proxy-based serialization for domain types that should not carry serde
//! derives of their own.
//!
//! A domain type `T` is paired with a proxy type `P`: a plain, serde-friendly
//! field bag that can be produced from a `&T` and turned back into a `T`. The
//! [`ProxyAdapter`] routes every wire operation through `P`, so `T` can stay
//! immutable and keep its invariants in its own constructors.
//!
//! ```
//! use docfeed::proxy::{ProxyAdapter, ProxyError, TypeProxy};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, PartialEq)]
//! struct Port(u16);
//!
//! #[derive(Serialize, Deserialize)]
//! struct PortProxy {
//!     port: Option<u16>,
//! }
//!
//! impl TypeProxy<Port> for PortProxy {
//!     fn from_domain(value: &Port) -> Result<Self, ProxyError> {
//!         Ok(PortProxy { port: Some(value.0) })
//!     }
//!
//!     fn build(self) -> Result<Port, ProxyError> {
//!         self.port
//!             .map(Port)
//!             .ok_or_else(|| ProxyError::invalid_argument("Port", "missing port"))
//!     }
//! }
//!
//! let adapter = ProxyAdapter::<Port, PortProxy>::new();
//! let wire = adapter.serialize(&Port(8080)).unwrap();
//! assert_eq!(wire, serde_json::json!({ "port": 8080 }));
//! assert_eq!(adapter.deserialize(wire).unwrap(), Port(8080));
//! ```

use std::fmt;

use serde::{Deserializer, Serialize, Serializer, de::DeserializeOwned};
use serde_json::Value;

mod errors;
pub use errors::ProxyError;

mod registry;
pub use registry::{ProxyCodec, ProxyRegistry};

/// A serialization stand-in for a domain type `T`.
///
/// Implementors are plain field bags; all wire-format knowledge about `T`
/// lives here rather than on `T` itself.
pub trait TypeProxy<T>: Serialize + DeserializeOwned {
    /// Builds the proxy from a domain value.
    ///
    /// May reject values that violate the proxy's preconditions with
    /// [`ProxyError::InvalidArgument`].
    fn from_domain(value: &T) -> Result<Self, ProxyError>;

    /// Reconstructs the domain value.
    ///
    /// This is the only place a `T` is fabricated during deserialization.
    /// Fails with [`ProxyError::InvalidArgument`] when the proxy's fields do
    /// not form a valid `T`.
    fn build(self) -> Result<T, ProxyError>;
}

/// Conversion from a domain value to its proxy.
pub type ToProxyFn<T, P> = fn(&T) -> Result<P, ProxyError>;

/// Reconstruction of a domain value from its proxy.
pub type BuildFn<T, P> = fn(P) -> Result<T, ProxyError>;

/// Serializer/deserializer pair for `T` that routes all wire work through `P`.
///
/// The adapter only holds the two bound conversion functions, so it is cheap
/// to copy and safe to share across threads.
pub struct ProxyAdapter<T, P> {
    to_proxy: ToProxyFn<T, P>,
    build: BuildFn<T, P>,
    type_name: &'static str,
    proxy_name: &'static str,
}

impl<T, P> ProxyAdapter<T, P>
where
    P: TypeProxy<T>,
{
    /// Binds the adapter to `P`'s [`TypeProxy`] implementation.
    pub fn new() -> Self {
        Self::from_fns(P::from_domain, P::build)
    }
}

impl<T, P> Default for ProxyAdapter<T, P>
where
    P: TypeProxy<T>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P> ProxyAdapter<T, P>
where
    P: Serialize + DeserializeOwned,
{
    /// Binds the adapter to caller-supplied conversion functions.
    ///
    /// Useful when the proxy is a foreign type that cannot implement
    /// [`TypeProxy`], or when one proxy serves several domain types.
    pub fn from_fns(to_proxy: ToProxyFn<T, P>, build: BuildFn<T, P>) -> Self {
        Self {
            to_proxy,
            build,
            type_name: short_type_name::<T>(),
            proxy_name: short_type_name::<P>(),
        }
    }

    /// Name of the domain type, used in errors and logs.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Name of the proxy type, used in errors and logs.
    pub fn proxy_name(&self) -> &'static str {
        self.proxy_name
    }

    /// Runs the bound conversion on a domain value.
    pub fn to_proxy(&self, value: &T) -> Result<P, ProxyError> {
        (self.to_proxy)(value).inspect_err(|err| {
            tracing::debug!(
                domain = self.type_name,
                proxy = self.proxy_name,
                error = %err,
                "Proxy conversion rejected domain value"
            );
        })
    }

    /// Runs the bound build on a proxy value.
    pub fn build(&self, proxy: P) -> Result<T, ProxyError> {
        (self.build)(proxy).inspect_err(|err| {
            tracing::debug!(
                domain = self.type_name,
                proxy = self.proxy_name,
                error = %err,
                "Proxy build rejected wire value"
            );
        })
    }

    /// Encodes a domain value as a JSON value via its proxy.
    pub fn serialize(&self, value: &T) -> Result<Value, ProxyError> {
        tracing::trace!(domain = self.type_name, "Serializing through proxy");
        let proxy = self.to_proxy(value)?;
        serde_json::to_value(&proxy).map_err(|source| ProxyError::Encoding {
            type_name: self.type_name,
            source,
        })
    }

    /// Decodes a JSON value as the proxy and builds the domain value from it.
    pub fn deserialize(&self, wire: Value) -> Result<T, ProxyError> {
        tracing::trace!(domain = self.type_name, "Deserializing through proxy");
        let proxy: P = serde_json::from_value(wire).map_err(|source| ProxyError::Decoding {
            type_name: self.type_name,
            source,
        })?;
        self.build(proxy)
    }

    /// Encodes a domain value as a compact JSON string.
    pub fn to_json_string(&self, value: &T) -> Result<String, ProxyError> {
        let proxy = self.to_proxy(value)?;
        serde_json::to_string(&proxy).map_err(|source| ProxyError::Encoding {
            type_name: self.type_name,
            source,
        })
    }

    /// Encodes a domain value as an indented JSON string.
    pub fn to_json_string_pretty(&self, value: &T) -> Result<String, ProxyError> {
        let proxy = self.to_proxy(value)?;
        serde_json::to_string_pretty(&proxy).map_err(|source| ProxyError::Encoding {
            type_name: self.type_name,
            source,
        })
    }

    /// Decodes a domain value from a JSON string.
    pub fn from_json_str(&self, json: &str) -> Result<T, ProxyError> {
        let proxy: P = serde_json::from_str(json).map_err(|source| ProxyError::Decoding {
            type_name: self.type_name,
            source,
        })?;
        self.build(proxy)
    }

    /// Serializes a domain value with any serde serializer.
    ///
    /// Intended for hand-written `Serialize` impls that delegate to an adapter.
    pub fn serialize_with<S>(&self, value: &T, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let proxy = self.to_proxy(value).map_err(serde::ser::Error::custom)?;
        proxy.serialize(serializer)
    }

    /// Deserializes a domain value from any serde deserializer.
    ///
    /// Intended for hand-written `Deserialize` impls that delegate to an adapter.
    pub fn deserialize_with<'de, D>(&self, deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
    {
        let proxy = P::deserialize(deserializer)?;
        self.build(proxy).map_err(serde::de::Error::custom)
    }
}

impl<T, P> Clone for ProxyAdapter<T, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, P> Copy for ProxyAdapter<T, P> {}

impl<T, P> fmt::Debug for ProxyAdapter<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProxyAdapter")
            .field("type_name", &self.type_name)
            .field("proxy_name", &self.proxy_name)
            .finish()
    }
}

/// Last path segment of a type name, without generic arguments.
fn short_type_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}
