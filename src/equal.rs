//! Structural equality with numeric tolerance.
//!
//! Non-numeric kinds only ever equal the same kind.  The three numeric
//! kinds compare across representations: two exact integers are equal
//! when they denote the same mathematical integer, and any pair
//! involving a float promotes the other operand to f64 and applies the
//! relative-tolerance rule.  A `Raw` operand is decoded and the
//! comparison retried; a fragment that fails to decode equals nothing.
//!
//! Object comparison looks fields of `a` up in `b`, so a large `b` will
//! transparently build its key overlay on the way; the lookup cost is
//! the same adaptive story as any other access.

use crate::number::float_eq;
use crate::value::Value;

/// Recursive structural equality.
///
/// `tolerance` is a non-negative relative tolerance for float
/// comparison; zero recovers strict equality.  Never fails: ill-formed
/// `Raw` bytes yield `false`.
pub fn equal(a: &Value, b: &Value, tolerance: f64) -> bool {
    match (a, b) {
        (Value::Raw(fragment), _) => match crate::decode::decode(fragment.as_bytes()) {
            Ok(decoded) => equal(&decoded, b, tolerance),
            Err(_) => false,
        },
        (_, Value::Raw(fragment)) => match crate::decode::decode(fragment.as_bytes()) {
            Ok(decoded) => equal(a, &decoded, tolerance),
            Err(_) => false,
        },

        (Value::Null, Value::Null) => true,
        (Value::Boolean(x), Value::Boolean(y)) => x == y,
        (Value::String(x), Value::String(y)) => x == y,

        (Value::Array(x), Value::Array(y)) => {
            x.len() == y.len()
                && x.iter()
                    .zip(y.iter())
                    .all(|(u, v)| equal(u, v, tolerance))
        }

        // Same cardinality, and every field of `a` matched by key in
        // `b`.  Field order is irrelevant.  Duplicate-keyed objects are
        // outside the contract here.
        (Value::Object(x), Value::Object(y)) => {
            x.len() == y.len()
                && x.iter()
                    .all(|(key, va)| y.get(key).is_some_and(|vb| equal(va, vb, tolerance)))
        }

        (Value::Integer(x), Value::Integer(y)) => x == y,
        (Value::Unsigned(x), Value::Unsigned(y)) => x == y,
        // A negative Integer never equals any Unsigned.
        (Value::Integer(x), Value::Unsigned(y)) | (Value::Unsigned(y), Value::Integer(x)) => {
            *x >= 0 && *x as u64 == *y
        }

        (Value::Float(x), Value::Float(y)) => float_eq(*x, *y, tolerance),
        (Value::Float(x), Value::Integer(y)) | (Value::Integer(y), Value::Float(x)) => {
            float_eq(*x, *y as f64, tolerance)
        }
        (Value::Float(x), Value::Unsigned(y)) | (Value::Unsigned(y), Value::Float(x)) => {
            float_eq(*x, *y as f64, tolerance)
        }

        _ => false,
    }
}
