//! File convenience: slurp-and-decode with a byte cap, and pretty dump.
//!
//! These are thin wrappers; all the real work happens in the codec.
//! Reading is the only blocking operation in the crate.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::decode::decode;
use crate::encode::Pretty;
use crate::errors::JsonError;
use crate::value::Value;

/// Read at most `max_bytes` from `reader` and decode the result.
///
/// Inputs past the cap fail with [`JsonError::Capacity`] without being
/// decoded; read failures surface as [`JsonError::Io`]; an empty input
/// is a syntax error like any other non-value.
pub fn decode_reader<R: Read>(reader: R, max_bytes: usize) -> Result<Value, JsonError> {
    let mut buf = Vec::new();
    // Read one byte past the cap so overflow is distinguishable from an
    // exactly-full input.
    let mut limited = reader.take((max_bytes as u64).saturating_add(1));
    limited.read_to_end(&mut buf)?;
    if buf.len() > max_bytes {
        return Err(JsonError::Capacity { limit: max_bytes });
    }
    decode(&buf)
}

/// Open `path` and decode its contents, capped at `max_bytes`.
pub fn decode_file(path: impl AsRef<Path>, max_bytes: usize) -> Result<Value, JsonError> {
    let file = File::open(path)?;
    decode_reader(file, max_bytes)
}

/// Pretty-print `value` to `path` with default indentation and a
/// trailing newline.
pub fn dump_file(value: &Value, path: impl AsRef<Path>) -> Result<(), JsonError> {
    let mut text = value.encode_pretty(&Pretty::default());
    text.push('\n');
    std::fs::write(path, text)?;
    Ok(())
}
