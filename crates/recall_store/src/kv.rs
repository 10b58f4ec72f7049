//! The key-value primitives consumed by the cache.

/// Store result type
pub type StoreResult<T> = Result<T, StoreError>;

/// Store errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The store could not be reached or the command timed out
    #[error("store unavailable: {reason}")]
    Unavailable {
        /// Underlying failure description
        reason: String,
    },

    /// A counter command hit a value that does not parse as an integer
    #[error("value at {key} is not an integer")]
    NotAnInteger {
        /// The offending key
        key: String,
    },

    /// A list command hit a scalar key, or a scalar command hit a list
    #[error("wrong entry type at {key}")]
    WrongType {
        /// The offending key
        key: String,
    },
}

/// The primitive command set the cache is written against.
///
/// Implementations must serialize `incr` and `rpush` per key; the layers
/// above rely on that instead of taking their own locks. All methods block.
pub trait KvStore: Send + Sync {
    /// Write a value under a key, overwriting any previous entry.
    ///
    /// # Errors
    ///
    /// Returns error if the store is unreachable.
    fn put(&self, key: &str, value: &[u8]) -> StoreResult<()>;

    /// Read the value under a key; `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns error if the store is unreachable or the key holds a list.
    fn get(&self, key: &str) -> StoreResult<Option<Vec<u8>>>;

    /// Atomically increment the decimal counter under a key, treating an
    /// absent key as 0, and return the new count.
    ///
    /// # Errors
    ///
    /// Returns error if the current value is not a decimal integer.
    fn incr(&self, key: &str) -> StoreResult<u64>;

    /// Append an item to the list under a key, creating the list if absent,
    /// and return the new length.
    ///
    /// # Errors
    ///
    /// Returns error if the key holds a scalar.
    fn rpush(&self, key: &str, item: &[u8]) -> StoreResult<u64>;

    /// Read a range of the list under a key. Bounds are inclusive; negative
    /// indices count from the tail, so `(0, -1)` is the whole list. An
    /// absent key yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns error if the key holds a scalar.
    fn lrange(&self, key: &str, start: i64, stop: i64) -> StoreResult<Vec<Vec<u8>>>;

    /// Drop every entry in the namespace.
    ///
    /// # Errors
    ///
    /// Returns error if the store is unreachable.
    fn flushdb(&self) -> StoreResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_display() {
        let err = StoreError::Unavailable {
            reason: "connection refused".to_string(),
        };
        assert_eq!(err.to_string(), "store unavailable: connection refused");

        let err = StoreError::WrongType {
            key: "k".to_string(),
        };
        assert!(err.to_string().contains("k"));
    }

    #[test]
    fn test_kv_store_object_safe() {
        fn _takes_dyn(_store: &dyn KvStore) {}
    }
}
