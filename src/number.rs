//! Numeric classification and exact conversions.
//!
//! JSON's generic number type is split three ways (`Integer` i64,
//! `Unsigned` u64, `Float` f64) to keep every 64-bit integer exact
//! through a round trip.  This module owns the classification rules the
//! decoder applies to number tokens and the loss-detecting casts the
//! accessor layer uses.
//!
//! Classification of a token:
//!   1. Pure-digit tokens (no `.`, no exponent) classify by magnitude:
//!      `Integer` when the value fits in signed 64-bit, `Unsigned` when
//!      only unsigned 64-bit holds it.  A negated magnitude of exactly
//!      2^63 is `i64::MIN`.  A magnitude past u64 falls back to `Float`
//!      with no second look.
//!   2. Tokens with a fraction or exponent parse as f64 (Rust's parser
//!      is locale-independent; the decimal point is always `.`).  A
//!      finite, integral result that lands in 64-bit range is promoted
//!      back to `Integer`/`Unsigned`; saturating float→int conversion
//!      pins the open boundaries (a parsed double of exactly 2^63 yields
//!      `i64::MAX`, exactly 2^64 yields `u64::MAX`).  Zero and
//!      subnormals collapse to `Float(0.0)`.  NaN and infinity fail.

use crate::value::Value;

/// Classify a lexically valid number token.
///
/// `fractional` is true when the token carries a `.` or an exponent.
/// Errors are static reasons; the decoder attaches the byte offset.
pub(crate) fn classify(token: &str, fractional: bool) -> Result<Value, &'static str> {
    if !fractional {
        let (negative, digits) = match token.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, token),
        };
        if let Ok(magnitude) = digits.parse::<u64>() {
            return Ok(classify_magnitude(magnitude, negative));
        }
        // Magnitude past u64: final fallback to float, no re-promotion.
    }

    let d: f64 = token.parse().map_err(|_| "malformed number")?;
    if !d.is_finite() {
        return Err("number out of range");
    }
    if fractional {
        Ok(promote_float(d))
    } else {
        Ok(Value::Float(d))
    }
}

fn classify_magnitude(magnitude: u64, negative: bool) -> Value {
    if !negative {
        if magnitude <= i64::MAX as u64 {
            return Value::Integer(magnitude as i64);
        }
        return Value::Unsigned(magnitude);
    }
    if magnitude <= 1u64 << 63 {
        // -(2^63) is exactly i64::MIN.
        Value::Integer((-(magnitude as i128)) as i64)
    } else {
        Value::Float(-(magnitude as f64))
    }
}

/// Re-classify a parsed double: integral values in 64-bit range become
/// exact integers.  Saturating casts make the boundaries come out right:
/// `i64::MAX as f64` is 2^63, so a double of exactly 2^63 passes the
/// signed check and saturates to `i64::MAX`; likewise 2^64 → `u64::MAX`.
fn promote_float(d: f64) -> Value {
    if d == 0.0 || d.is_subnormal() {
        return Value::Float(0.0);
    }
    if d.trunc() == d {
        if d >= i64::MIN as f64 && d <= i64::MAX as f64 {
            return Value::Integer(d as i64);
        }
        if d > 0.0 && d <= u64::MAX as f64 {
            return Value::Unsigned(d as u64);
        }
    }
    Value::Float(d)
}

// ── Exact casts ──────────────────────────────────────────────
// The accessor layer refuses lossy float→int conversion.  An f64 holds
// an i64/u64 exactly iff it is integral and inside the half-open range
// below; the upper bounds are exclusive because 2^63 (resp. 2^64) is
// representable as a double but not as the target integer.

/// The i64 a float represents exactly, if any.
pub(crate) fn exact_i64(f: f64) -> Option<i64> {
    if f.trunc() == f && f >= i64::MIN as f64 && f < -(i64::MIN as f64) {
        Some(f as i64)
    } else {
        None
    }
}

/// The u64 a float represents exactly, if any.
pub(crate) fn exact_u64(f: f64) -> Option<u64> {
    if f.trunc() == f && f >= 0.0 && f < u64::MAX as f64 {
        Some(f as u64)
    } else {
        None
    }
}

/// Relative-tolerance float comparison: equal when identical or when the
/// difference relative to the larger magnitude is under `tolerance`.
/// Zero tolerance degenerates to exact `==`.
pub(crate) fn float_eq(x: f64, y: f64, tolerance: f64) -> bool {
    x == y || (x - y).abs() / x.abs().max(y.abs()) < tolerance
}
