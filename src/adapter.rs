//! serde interop: bridges the document model to `serde_json::Value`
//! and lets a [`Value`] serialize into any serde sink.
//!
//! Type mapping:
//!   serde null    ↔ `Null`
//!   serde bool    ↔ `Boolean`
//!   serde number  → `Integer` when i64 holds it, else `Unsigned` when
//!                   u64 does, else `Float` (serde numbers are finite,
//!                   so the float invariant is preserved)
//!   serde string  ↔ `String`
//!   serde array   ↔ `Array`
//!   serde object  ↔ `Object` (insertion order on the way in; duplicate
//!                   keys cannot occur on either side of this bridge)
//!   `Raw`         → decoded first; an ill-formed fragment is the one
//!                   failure this module can produce.

use serde::ser::{Error as _, Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::errors::JsonError;
use crate::value::Value;

/// Convert a `serde_json` tree into the document model.
pub fn from_serde(value: &serde_json::Value) -> Value {
    match value {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Boolean(*b),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::Integer(i)
            } else if let Some(u) = n.as_u64() {
                Value::Unsigned(u)
            } else {
                n.as_f64().map_or(Value::Null, Value::float)
            }
        }
        serde_json::Value::String(s) => Value::String(s.clone()),
        serde_json::Value::Array(items) => Value::Array(items.iter().map(from_serde).collect()),
        serde_json::Value::Object(map) => Value::Object(
            map.iter()
                .map(|(k, v)| (k.clone(), from_serde(v)))
                .collect(),
        ),
    }
}

/// Convert a document-model tree into a `serde_json` tree.
///
/// `Raw` fragments are decoded and converted; a fragment that does not
/// decode is the only error.  Duplicate keys (decoder-produced only)
/// collapse to the last occurrence, matching the indexed view.
pub fn to_serde(value: &Value) -> Result<serde_json::Value, JsonError> {
    match value {
        Value::Null => Ok(serde_json::Value::Null),
        Value::Boolean(b) => Ok(serde_json::Value::Bool(*b)),
        Value::Integer(i) => Ok(serde_json::Value::Number((*i).into())),
        Value::Unsigned(u) => Ok(serde_json::Value::Number((*u).into())),
        Value::Float(f) => match serde_json::Number::from_f64(*f) {
            Some(n) => Ok(serde_json::Value::Number(n)),
            // Unreachable while the finite-float invariant holds.
            None => Err(JsonError::syntax(0, "non-finite float")),
        },
        Value::String(s) => Ok(serde_json::Value::String(s.clone())),
        Value::Array(array) => {
            let mut items = Vec::with_capacity(array.len());
            for child in array {
                items.push(to_serde(child)?);
            }
            Ok(serde_json::Value::Array(items))
        }
        Value::Object(object) => {
            let mut map = serde_json::Map::with_capacity(object.len());
            for (key, child) in object {
                map.insert(key.to_owned(), to_serde(child)?);
            }
            Ok(serde_json::Value::Object(map))
        }
        Value::Raw(fragment) => {
            let decoded = crate::decode::decode(fragment.as_bytes())?;
            to_serde(&decoded)
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Boolean(b) => serializer.serialize_bool(*b),
            Value::Integer(i) => serializer.serialize_i64(*i),
            Value::Unsigned(u) => serializer.serialize_u64(*u),
            Value::Float(f) => serializer.serialize_f64(*f),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(array) => {
                let mut seq = serializer.serialize_seq(Some(array.len()))?;
                for child in array {
                    seq.serialize_element(child)?;
                }
                seq.end()
            }
            Value::Object(object) => {
                let mut map = serializer.serialize_map(Some(object.len()))?;
                for (key, child) in object {
                    map.serialize_entry(key, child)?;
                }
                map.end()
            }
            Value::Raw(fragment) => match crate::decode::decode(fragment.as_bytes()) {
                Ok(decoded) => decoded.serialize(serializer),
                Err(_) => Err(S::Error::custom("ill-formed raw JSON fragment")),
            },
        }
    }
}
