//! Typed decoding of raw stored bytes.
//!
//! The store holds opaque byte strings; callers pick a decoder when fetching.
//! Both decoders are pure functions with no side effects.

use crate::error::{CacheError, CacheResult};
use serde::{Deserialize, Serialize};

/// Interpret bytes as strict UTF-8.
///
/// # Errors
///
/// Returns `CacheError::Decode` if the bytes are not valid UTF-8.
pub fn decode_string(raw: &[u8]) -> CacheResult<String> {
    String::from_utf8(raw.to_vec()).map_err(|e| CacheError::Decode {
        reason: e.to_string(),
    })
}

/// Interpret bytes as a big-endian unsigned integer.
///
/// The empty byte string decodes to 0.
///
/// # Errors
///
/// Returns `CacheError::Decode` if the input is wider than 8 bytes.
pub fn decode_integer(raw: &[u8]) -> CacheResult<u64> {
    if raw.len() > 8 {
        return Err(CacheError::Decode {
            reason: format!("integer wider than 8 bytes: {}", raw.len()),
        });
    }
    let mut buf = [0u8; 8];
    buf[8 - raw.len()..].copy_from_slice(raw);
    Ok(u64::from_be_bytes(buf))
}

/// Caller-selectable post-processing of raw fetch results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decoder {
    /// Strict UTF-8 text
    Utf8,
    /// Big-endian unsigned integer
    BigEndian,
    /// No transformation; raw bytes pass through
    Raw,
}

impl Decoder {
    /// Apply this decoder to raw bytes.
    ///
    /// # Errors
    ///
    /// Returns `CacheError::Decode` if the bytes cannot be interpreted.
    pub fn apply(&self, raw: &[u8]) -> CacheResult<Decoded> {
        match self {
            Self::Utf8 => decode_string(raw).map(Decoded::Text),
            Self::BigEndian => decode_integer(raw).map(Decoded::Integer),
            Self::Raw => Ok(Decoded::Bytes(raw.to_vec())),
        }
    }
}

/// A decoded fetch result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decoded {
    /// UTF-8 text
    Text(String),
    /// Big-endian integer
    Integer(u64),
    /// Raw bytes
    Bytes(Vec<u8>),
}

impl Decoded {
    /// Extract text, if this is a text result
    #[must_use]
    pub fn into_text(self) -> Option<String> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Extract the integer, if this is an integer result
    #[must_use]
    pub fn as_integer(&self) -> Option<u64> {
        match self {
            Self::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Extract the bytes, if this is a raw result
    #[must_use]
    pub fn into_bytes(self) -> Option<Vec<u8>> {
        match self {
            Self::Bytes(b) => Some(b),
            _ => None,
        }
    }
}
