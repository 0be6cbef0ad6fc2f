//! # jitjson: JSON document model with an adaptive key index
//!
//! An owned in-memory JSON tree, an RFC 8259 decoder, compact and
//! pretty UTF-8 encoders with a size-probing contract, and structural
//! equality with numeric tolerance.  Numbers split into signed,
//! unsigned, and float so that every 64-bit integer round-trips
//! exactly.  Large objects transparently upgrade keyed lookup from a
//! linear scan to a hash table once the observed scan cost justifies
//! the build; small and write-only containers never pay for it.
//!
//! ```
//! use jitjson::{decode, Value};
//!
//! let doc = decode(br#"{"year":2017,"months":[1,3,5,7,8,10,12]}"#).unwrap();
//! assert_eq!(doc.dig(&["year"]).and_then(Value::as_i64), Some(2017));
//! assert_eq!(doc.encode(), r#"{"year":2017,"months":[1,3,5,7,8,10,12]}"#);
//! ```
//!
//! A tree is single-owner: moving a value into a container transfers
//! ownership, and `Clone` is the deep-copy primitive.  One tree, one
//! accessor at a time; distinct trees are independent.

mod access;
pub mod adapter;
pub mod constants;
pub mod decode;
pub mod encode;
pub mod equal;
pub mod errors;
mod index;
pub mod io;
mod number;
pub mod trace;
pub mod value;

pub use decode::{decode, decode_str};
pub use encode::Pretty;
pub use equal::equal;
pub use errors::JsonError;
pub use io::{decode_file, decode_reader, dump_file};
pub use value::{Array, Fields, Kind, Object, Value};
