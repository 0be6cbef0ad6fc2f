//! Hooks for host tracing systems: capped value previews and kind
//! names.
//!
//! A trace line wants a short, human-readable rendition of a value, not
//! a multi-kilobyte document.  [`preview`] compact-encodes up to a
//! sticky byte limit (the only process-wide mutable state in the
//! crate) and marks truncation with an ellipsis, cutting on a UTF-8 boundary
//! so the result is always printable.  Previews are owned strings, so
//! any number of them can coexist in a single log call.
//!
//! The kind-name callback is [`crate::Kind::as_str`], reachable through
//! [`kind_name`] for hosts that bind plain functions.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::constants::TRACE_PREVIEW_LIMIT;
use crate::value::Value;

static PREVIEW_LIMIT: AtomicUsize = AtomicUsize::new(TRACE_PREVIEW_LIMIT);

/// Set the preview byte limit.  Sticky: applies to every subsequent
/// [`preview`] call process-wide.
pub fn set_limit(bytes: usize) {
    PREVIEW_LIMIT.store(bytes, Ordering::Relaxed);
}

/// The current preview byte limit.
pub fn limit() -> usize {
    PREVIEW_LIMIT.load(Ordering::Relaxed)
}

/// Compact encoding of `value`, truncated to the sticky limit.
///
/// The size-probing encoder writes straight into a limit-sized buffer,
/// so an over-long value costs one bounded fill, not a full encoding.
pub fn preview(value: &Value) -> String {
    let cap = limit();
    let mut buf = vec![0u8; cap];
    let total = value.encode_into(&mut buf);
    if total <= cap {
        buf.truncate(total);
        return String::from_utf8(buf).expect("encoder emits UTF-8");
    }
    // Truncated: back up to a character boundary and mark the cut.
    let valid = match std::str::from_utf8(&buf) {
        Ok(_) => buf.len(),
        Err(e) => e.valid_up_to(),
    };
    buf.truncate(valid);
    let mut text = String::from_utf8(buf).expect("encoder emits UTF-8");
    text.push('…');
    text
}

/// Stable name of the value's kind.
pub fn kind_name(value: &Value) -> &'static str {
    value.kind().as_str()
}
