//! Registry binding domain types to their proxy adapters.
//!
//! The registry is where binding problems surface: looking up a type that was
//! never registered, or registering a second proxy for the same type, fails
//! with [`ProxyError::Configuration`] during setup rather than on a later
//! serialize call.

use std::{
    any::{Any, TypeId},
    collections::HashMap,
    fmt,
    sync::Arc,
};

use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

use super::{ProxyAdapter, ProxyError, TypeProxy, short_type_name};

/// Object-safe view of an adapter for `T`, with the proxy type erased.
pub trait ProxyCodec<T>: Send + Sync {
    /// Encodes a domain value as a JSON value.
    fn serialize(&self, value: &T) -> Result<Value, ProxyError>;

    /// Decodes a domain value from a JSON value.
    fn deserialize(&self, wire: Value) -> Result<T, ProxyError>;

    /// Name of the proxy type doing the wire work.
    fn proxy_name(&self) -> &'static str;
}

impl<T, P> ProxyCodec<T> for ProxyAdapter<T, P>
where
    P: Serialize + DeserializeOwned,
{
    fn serialize(&self, value: &T) -> Result<Value, ProxyError> {
        ProxyAdapter::serialize(self, value)
    }

    fn deserialize(&self, wire: Value) -> Result<T, ProxyError> {
        ProxyAdapter::deserialize(self, wire)
    }

    fn proxy_name(&self) -> &'static str {
        ProxyAdapter::proxy_name(self)
    }
}

struct Binding {
    type_name: &'static str,
    proxy_name: &'static str,
    /// Always an `Arc<dyn ProxyCodec<T>>` for the `T` this binding is keyed by.
    codec: Box<dyn Any + Send + Sync>,
}

/// Set of proxy adapters keyed by domain type.
///
/// Immutable once populated; share it behind an `Arc` or by reference.
#[derive(Default)]
pub struct ProxyRegistry {
    bindings: HashMap<TypeId, Binding>,
}

impl ProxyRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `P` as the proxy for `T` using its [`TypeProxy`] implementation.
    pub fn register<T, P>(&mut self) -> Result<(), ProxyError>
    where
        T: 'static,
        P: TypeProxy<T> + 'static,
    {
        self.register_adapter(ProxyAdapter::<T, P>::new())
    }

    /// Registers an already-bound adapter for `T`.
    ///
    /// Fails with [`ProxyError::Configuration`] if `T` already has an adapter,
    /// since two proxies for one type make the binding ambiguous.
    pub fn register_adapter<T, P>(&mut self, adapter: ProxyAdapter<T, P>) -> Result<(), ProxyError>
    where
        T: 'static,
        P: Serialize + DeserializeOwned + 'static,
    {
        let key = TypeId::of::<T>();
        if let Some(existing) = self.bindings.get(&key) {
            return Err(ProxyError::Configuration {
                type_name: existing.type_name,
                reason: format!(
                    "ambiguous binding: already bound to proxy '{}', cannot also bind '{}'",
                    existing.proxy_name,
                    adapter.proxy_name()
                ),
            });
        }

        tracing::debug!(
            domain = adapter.type_name(),
            proxy = adapter.proxy_name(),
            "Registered proxy adapter"
        );

        let codec: Arc<dyn ProxyCodec<T>> = Arc::new(adapter);
        self.bindings.insert(
            key,
            Binding {
                type_name: adapter.type_name(),
                proxy_name: adapter.proxy_name(),
                codec: Box::new(codec),
            },
        );
        Ok(())
    }

    /// Looks up the adapter bound for `T`.
    ///
    /// Fails with [`ProxyError::Configuration`] if nothing was registered for
    /// `T`. Callers are expected to resolve adapters once during setup and
    /// keep the returned handle.
    pub fn adapter<T: 'static>(&self) -> Result<Arc<dyn ProxyCodec<T>>, ProxyError> {
        let type_name = short_type_name::<T>();
        let binding = self
            .bindings
            .get(&TypeId::of::<T>())
            .ok_or_else(|| ProxyError::Configuration {
                type_name,
                reason: "no proxy adapter registered".to_string(),
            })?;

        tracing::debug!(
            domain = binding.type_name,
            proxy = binding.proxy_name,
            "Resolved proxy adapter"
        );

        binding
            .codec
            .downcast_ref::<Arc<dyn ProxyCodec<T>>>()
            .cloned()
            .ok_or_else(|| ProxyError::Configuration {
                type_name,
                reason: "registered adapter has a mismatched domain type".to_string(),
            })
    }

    /// Returns true if an adapter is bound for `T`.
    pub fn contains<T: 'static>(&self) -> bool {
        self.bindings.contains_key(&TypeId::of::<T>())
    }

    /// Number of bound domain types.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Returns true if nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Serializes `value` with the adapter bound for `T`.
    pub fn serialize<T: 'static>(&self, value: &T) -> Result<Value, ProxyError> {
        self.adapter::<T>()?.serialize(value)
    }

    /// Deserializes a `T` with the adapter bound for it.
    pub fn deserialize<T: 'static>(&self, wire: Value) -> Result<T, ProxyError> {
        self.adapter::<T>()?.deserialize(wire)
    }
}

impl fmt::Debug for ProxyRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self
            .bindings
            .values()
            .map(|b| (b.type_name, b.proxy_name))
            .collect();
        names.sort_unstable();
        f.debug_struct("ProxyRegistry")
            .field("bindings", &names)
            .finish()
    }
}
