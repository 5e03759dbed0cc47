//! Serde adapters for the API's loose encodings.

use serde::de::{self, Deserializer};
use serde::Deserialize;
use serde_json::{Map, Value};

/// Free-form key/value data attached to an entity.
pub type Metadata = Map<String, Value>;

#[derive(Deserialize)]
#[serde(untagged)]
enum RawFlag {
    Bool(bool),
    Int(i64),
    Text(String),
}

/// Booleans the API sends as `0`/`1`.
///
/// Reads `0`, `1`, `true`, `false` and their string forms; always writes
/// `0`/`1` back.
pub mod int_bool {
    use super::*;
    use serde::Serializer;

    pub fn serialize<S>(value: &bool, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(u8::from(*value))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        match RawFlag::deserialize(deserializer)? {
            RawFlag::Bool(flag) => Ok(flag),
            RawFlag::Int(0) => Ok(false),
            RawFlag::Int(1) => Ok(true),
            RawFlag::Int(other) => Err(de::Error::custom(format!(
                "expected 0 or 1, found {}",
                other
            ))),
            RawFlag::Text(text) => match text.as_str() {
                "0" | "false" => Ok(false),
                "1" | "true" => Ok(true),
                _ => Err(de::Error::custom(format!(
                    "expected 0 or 1, found {:?}",
                    text
                ))),
            },
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawMetadata {
    Map(Metadata),
    List(Vec<Value>),
}

fn from_raw<E: de::Error>(raw: RawMetadata) -> Result<Metadata, E> {
    match raw {
        RawMetadata::Map(map) => Ok(map),
        // empty PHP arrays come through as `[]`
        RawMetadata::List(items) if items.is_empty() => Ok(Metadata::new()),
        RawMetadata::List(_) => Err(E::custom("expected metadata object, found non-empty array")),
    }
}

/// Metadata that is always present; `null` and `[]` read as an empty map.
pub mod metadata {
    use super::*;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Metadata, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<RawMetadata>::deserialize(deserializer)? {
            Some(raw) => from_raw(raw),
            None => Ok(Metadata::new()),
        }
    }
}

/// Metadata the API may send as `null`; `[]` reads as an empty map.
pub mod nullable_metadata {
    use super::*;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Metadata>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<RawMetadata>::deserialize(deserializer)?
            .map(from_raw::<D::Error>)
            .transpose()
    }
}
