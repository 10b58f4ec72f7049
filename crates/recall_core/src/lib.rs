//! RECALL core types
//!
//! Value keys, operation names, cacheable values, and typed decoding of raw
//! stored bytes. This crate has no store dependency; everything here is pure.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod decode;
pub mod error;
pub mod key;
pub mod op;
pub mod value;

pub use decode::{Decoded, Decoder, decode_integer, decode_string};
pub use error::{CacheError, CacheResult, RecordingStage};
pub use key::ValueKey;
pub use op::OperationName;
pub use value::CacheValue;
