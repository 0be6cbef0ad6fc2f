//! Typed accessors, numeric casts with loss detection, and nested
//! navigation.
//!
//! Kind mismatches are failed lookups, not errors: every accessor
//! returns `Option`.  The numeric casts accept a float only when the
//! target integer holds it exactly; magnitude or precision loss means
//! `None`.  Widening to f64 always succeeds for numeric kinds.

use crate::number;
use crate::value::{Array, Object, Value};

impl Value {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// The value as a signed 64-bit integer, when exactly representable.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            Value::Unsigned(u) => (*u <= i64::MAX as u64).then_some(*u as i64),
            Value::Float(f) => number::exact_i64(*f),
            _ => None,
        }
    }

    /// The value as an unsigned 64-bit integer, when exactly
    /// representable.
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Value::Unsigned(u) => Some(*u),
            Value::Integer(i) => (*i >= 0).then_some(*i as u64),
            Value::Float(f) => number::exact_u64(*f),
            _ => None,
        }
    }

    /// The value as a double.  Succeeds for every numeric kind; loss of
    /// magnitude or precision is accepted on this path.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Integer(i) => Some(*i as f64),
            Value::Unsigned(u) => Some(*u as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_array_mut(&mut self) -> Option<&mut Array> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }

    pub fn as_object_mut(&mut self) -> Option<&mut Object> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Descend through nested objects.  `None` the first time a key is
    /// missing or a non-object is encountered; the empty path is the
    /// value itself.  The variadic spelling is [`fetch!`](crate::fetch).
    pub fn dig(&self, path: &[&str]) -> Option<&Value> {
        let mut current = self;
        for key in path {
            current = current.as_object()?.get(key)?;
        }
        Some(current)
    }
}

/// Variadic nested-object lookup: `fetch!(doc, "server", "port")` is
/// `doc.dig(&["server", "port"])`.
#[macro_export]
macro_rules! fetch {
    ($value:expr $(, $key:expr)+ $(,)?) => {
        $value.dig(&[$($key),+])
    };
}

// ── Typed object getters ─────────────────────────────────────
// Presence means "field exists AND has the requested representation";
// a field of the wrong kind reads as absent.

impl Object {
    pub fn get_integer(&self, key: &str) -> Option<i64> {
        self.get(key)?.as_i64()
    }

    pub fn get_unsigned(&self, key: &str) -> Option<u64> {
        self.get(key)?.as_u64()
    }

    pub fn get_float(&self, key: &str) -> Option<f64> {
        self.get(key)?.as_f64()
    }

    pub fn get_string(&self, key: &str) -> Option<&str> {
        self.get(key)?.as_str()
    }

    pub fn get_boolean(&self, key: &str) -> Option<bool> {
        self.get(key)?.as_bool()
    }

    pub fn get_array(&self, key: &str) -> Option<&Array> {
        self.get(key)?.as_array()
    }

    pub fn get_object(&self, key: &str) -> Option<&Object> {
        self.get(key)?.as_object()
    }
}
