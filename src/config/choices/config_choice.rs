use anyhow::Result;
use schemars::{JsonSchema, Schema};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use strum::{EnumMessage, IntoEnumIterator};

/// Contract for any "choice enum": a serde tagged enum whose variants each
/// carry a parameter struct.
pub trait ConfigChoice: Sized + Serialize + DeserializeOwned + JsonSchema {
    type Kind: Copy + Into<&'static str> + EnumMessage + IntoEnumIterator;

    /// JSON Schema for the whole tagged enum.
    fn schema() -> Schema;

    /// Default `params` JSON for a given kind (usually from `*Parameters::default()`).
    fn default_params(kind: Self::Kind) -> Value;

    /// Build the typed enum from kind + params.
    fn from_parts(kind: Self::Kind, params: Value) -> Result<Self> {
        let key: &'static str = kind.into();
        let v = json!({ "type": key, "params": params });
        Ok(serde_json::from_value(v)?)
    }

    fn with_defaults(kind: Self::Kind) -> Result<Self> {
        Self::from_parts(kind, Self::default_params(kind))
    }

    /// `(key, message)` for every kind, in declaration order.
    fn catalog() -> Vec<(&'static str, &'static str)> {
        Self::Kind::iter()
            .map(|k| {
                let key: &'static str = k.into();
                (key, k.get_message().unwrap_or(key))
            })
            .collect()
    }
}
