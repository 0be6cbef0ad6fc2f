//! Error type for decoding and file IO.
//!
//! The taxonomy is small and deliberate:
//!   `Syntax`   is malformed input at any decoding stage.  Carries the byte
//!                offset where decoding stopped and a static reason.
//!   `Capacity` means the input exceeds a caller-supplied byte cap.
//!   `Io`       is a failed read while slurping a file.  An interrupted
//!                read is discriminable via `std::io::ErrorKind`.
//!
//! Encoding and equality never fail; decoding short-circuits on the
//! first error and produces no partial value.

use thiserror::Error;

/// Failure while decoding JSON text or reading it from a file.
#[derive(Debug, Error)]
pub enum JsonError {
    /// The input is not a single well-formed RFC 8259 value.
    ///
    /// `offset` is the byte position where decoding stopped.  All syntax
    /// failures (bad UTF-8, lone surrogates, non-finite numbers,
    /// unterminated strings, trailing garbage, nesting overflow) report
    /// through this one variant.
    #[error("syntax error at byte {offset}: {reason}")]
    Syntax {
        offset: usize,
        reason: &'static str,
    },

    /// The input exceeds the caller's byte cap.
    #[error("input exceeds the {limit}-byte cap")]
    Capacity { limit: usize },

    /// A read failed while slurping a file.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl JsonError {
    pub(crate) fn syntax(offset: usize, reason: &'static str) -> Self {
        JsonError::Syntax { offset, reason }
    }

    /// True when the failure was an interrupted read (`EINTR`).
    pub fn is_interrupted(&self) -> bool {
        matches!(self, JsonError::Io(e) if e.kind() == std::io::ErrorKind::Interrupted)
    }
}
