use std::collections::BTreeMap;
use std::iter::FromIterator;

use lfs_core::errors::{ErrorInfo, LfsError};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};

fn serde_error(code: &str, err: impl ToString) -> LfsError {
    LfsError::Serde(ErrorInfo::new(code, err.to_string()))
}

fn canonicalize(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let ordered = map
                .into_iter()
                .map(|(key, value)| (key, canonicalize(value)))
                .collect::<BTreeMap<_, _>>();
            Value::Object(Map::from_iter(ordered))
        }
        Value::Array(values) => Value::Array(values.into_iter().map(canonicalize).collect()),
        other => other,
    }
}

/// Serializes a value into JSON bytes with object keys in sorted order.
pub fn to_canonical_json_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>, LfsError> {
    let value = serde_json::to_value(value).map_err(|err| serde_error("json-serialize", err))?;
    let canonical = canonicalize(value);
    let mut bytes = Vec::new();
    serde_json::to_writer_pretty(&mut bytes, &canonical)
        .map_err(|err| serde_error("json-write", err))?;
    Ok(bytes)
}

/// Deserializes a value from JSON bytes.
pub fn from_json_slice<T: DeserializeOwned>(data: &[u8]) -> Result<T, LfsError> {
    serde_json::from_slice(data).map_err(|err| serde_error("json-deserialize", err))
}

/// Serializes a value into YAML.
pub fn to_yaml_string<T: Serialize>(value: &T) -> Result<String, LfsError> {
    serde_yaml::to_string(value).map_err(|err| serde_error("yaml-serialize", err))
}
