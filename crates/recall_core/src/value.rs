//! Values accepted by the cache and their stored byte encodings.

use serde::{Deserialize, Serialize};

/// A value accepted by `store`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CacheValue {
    /// UTF-8 text, stored as its bytes
    Str(String),
    /// Raw bytes, stored as-is
    Bytes(Vec<u8>),
    /// Unsigned integer, stored as minimal big-endian bytes
    Int(u64),
    /// Float, stored as its decimal text form
    Float(f64),
}

impl CacheValue {
    /// Encode to the byte representation written to the store.
    ///
    /// Integers use the minimal big-endian form with no leading zero bytes,
    /// so `0` encodes to the empty byte string and `decode_integer` is the
    /// exact inverse.
    #[must_use]
    pub fn encode(&self) -> Vec<u8> {
        match self {
            Self::Str(s) => s.as_bytes().to_vec(),
            Self::Bytes(b) => b.clone(),
            Self::Int(n) => {
                let bytes = n.to_be_bytes();
                let skip = bytes.iter().take_while(|b| **b == 0).count();
                bytes[skip..].to_vec()
            }
            Self::Float(x) => x.to_string().into_bytes(),
        }
    }

    /// Render for the inputs log: strings quoted, bytes as hex, numbers bare.
    #[must_use]
    pub fn display_arg(&self) -> String {
        match self {
            Self::Str(s) => format!("{:?}", s),
            Self::Bytes(b) => format!("0x{}", hex::encode(b)),
            Self::Int(n) => n.to_string(),
            Self::Float(x) => x.to_string(),
        }
    }
}

impl From<&str> for CacheValue {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for CacheValue {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<Vec<u8>> for CacheValue {
    fn from(b: Vec<u8>) -> Self {
        Self::Bytes(b)
    }
}

impl From<&[u8]> for CacheValue {
    fn from(b: &[u8]) -> Self {
        Self::Bytes(b.to_vec())
    }
}

impl From<u64> for CacheValue {
    fn from(n: u64) -> Self {
        Self::Int(n)
    }
}

impl From<f64> for CacheValue {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::decode_integer;
    use proptest::prelude::*;

    #[test]
    fn test_encode_str() {
        let v = CacheValue::from("foo");
        assert_eq!(v.encode(), b"foo".to_vec());
    }

    #[test]
    fn test_encode_bytes_identity() {
        let raw = vec![0u8, 255, 1, 2];
        let v = CacheValue::from(raw.clone());
        assert_eq!(v.encode(), raw);
    }

    #[test]
    fn test_encode_int_minimal_big_endian() {
        assert_eq!(CacheValue::Int(0).encode(), Vec::<u8>::new());
        assert_eq!(CacheValue::Int(1).encode(), vec![1]);
        assert_eq!(CacheValue::Int(256).encode(), vec![1, 0]);
        assert_eq!(CacheValue::Int(123).encode(), vec![123]);
    }

    #[test]
    fn test_encode_float_text() {
        let v = CacheValue::Float(1.5);
        assert_eq!(v.encode(), b"1.5".to_vec());
    }

    #[test]
    fn test_display_arg() {
        assert_eq!(CacheValue::from("a").display_arg(), "\"a\"");
        assert_eq!(CacheValue::from(vec![0xabu8, 0xcd]).display_arg(), "0xabcd");
        assert_eq!(CacheValue::Int(7).display_arg(), "7");
        assert_eq!(CacheValue::Float(2.5).display_arg(), "2.5");
    }

    proptest::proptest! {
        #[test]
        fn prop_int_encode_decodes_back(n: u64) {
            let encoded = CacheValue::Int(n).encode();
            prop_assert!(encoded.len() <= 8);
            prop_assert_eq!(decode_integer(&encoded).unwrap(), n);
        }
    }
}
