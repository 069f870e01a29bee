//! JSON interop
//!
//! [`AsJson`] is the capability a type declares when it can render itself
//! as a `serde_json::Value`. Serializing code dispatches through it instead
//! of probing values at runtime. Every `Serialize` type has it; types
//! without serde support (record entities, for one) implement it by hand.
//!
//! Absent optionals always render as `null`, never as a missing key. A
//! present value that cannot be rendered is an error, not `null`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::{AsyncOptional, Optional, OptionalResult};

/// Capability: render `self` as JSON.
pub trait AsJson {
    fn as_json(&self) -> OptionalResult<Value>;

    /// Render `self` as the value stored under `key` of an enclosing object.
    /// The key is informational; the default ignores it.
    fn to_json(&self, _key: &str) -> OptionalResult<Value> {
        self.as_json()
    }
}

impl<T: Serialize + ?Sized> AsJson for T {
    fn as_json(&self) -> OptionalResult<Value> {
        serde_json::to_value(self).map_err(|e| {
            tracing::warn!("value failed to render as JSON: {}", e);
            e.into()
        })
    }
}

impl<'a, T: Serialize + Send + 'a> AsyncOptional<'a, T> {
    /// Settle, then render as JSON (`null` when absent)
    pub async fn as_json(self) -> OptionalResult<Value> {
        self.await.as_json()
    }

    /// Settle, then render as the value stored under `key`
    pub async fn to_json(self, key: &str) -> OptionalResult<Value> {
        self.await.to_json(key)
    }
}

impl<T: Serialize> Serialize for Optional<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Optional::Present(value) => serializer.serialize_some(value),
            Optional::Absent => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Optional<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Optional::from)
    }
}
