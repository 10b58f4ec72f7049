//! ID-addressed cache over the store primitives.

use crate::config::CacheConfig;
use crate::recorder::CallRecorder;
use recall_core::{
    CacheError, CacheResult, CacheValue, Decoded, Decoder, OperationName, ValueKey,
};
use recall_store::KvStore;
use std::sync::Arc;

/// ID-addressed cache with instrumented writes.
///
/// Holds one store handle and no other mutable state; counters, history, and
/// values all live in the store, so one `Cache` is safe to share across
/// threads by cloning.
#[derive(Clone)]
pub struct Cache {
    store: Arc<dyn KvStore>,
    config: CacheConfig,
}

impl Cache {
    /// Create a cache over a store handle with default configuration
    #[must_use]
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self {
            store,
            config: CacheConfig::default(),
        }
    }

    /// Create with custom configuration.
    ///
    /// # Errors
    ///
    /// Returns `StoreUnavailable` if `flush_on_init` is set and the flush
    /// fails.
    pub fn with_config(store: Arc<dyn KvStore>, config: CacheConfig) -> CacheResult<Self> {
        if config.flush_on_init {
            store
                .flushdb()
                .map_err(|e| CacheError::store_failure("flushdb", e))?;
        }
        Ok(Self { store, config })
    }

    /// The operation name under which `store` calls are instrumented
    #[must_use]
    pub fn store_operation() -> OperationName {
        OperationName::new("Cache.store")
    }

    /// Store a value under a freshly generated key and return the key.
    ///
    /// Instrumented: increments the `Cache.store` call counter and appends
    /// the rendered argument and the returned key to the history logs.
    ///
    /// # Errors
    ///
    /// Returns `StoreUnavailable` if the value write fails and
    /// `PartialRecording` if an instrumentation write fails.
    pub fn store(&self, value: impl Into<CacheValue>) -> CacheResult<ValueKey> {
        let value = value.into();
        let recorder = CallRecorder::new(
            Arc::clone(&self.store),
            self.scoped_operation(&Self::store_operation()),
        );

        recorder.record(value.display_arg(), || {
            let key = ValueKey::generate();
            tracing::debug!(%key, "storing value");
            self.store
                .put(&self.scoped(&key.to_string()), &value.encode())
                .map_err(|e| CacheError::store_failure("put", e))?;
            Ok(key)
        })
    }

    /// Fetch the raw value for a key, optionally decoded.
    ///
    /// Absent key without a decoder is `Ok(None)`; absent key with a decoder
    /// is `DecodeAbsent`, since decoding nothing is meaningless. Not
    /// instrumented: replay audits writes, not reads.
    ///
    /// # Errors
    ///
    /// Returns `StoreUnavailable` if the read fails, `DecodeAbsent` or
    /// `Decode` per the decoder rules above.
    pub fn fetch(&self, key: &ValueKey, decoder: Option<Decoder>) -> CacheResult<Option<Decoded>> {
        let raw = self
            .store
            .get(&self.scoped(&key.to_string()))
            .map_err(|e| CacheError::store_failure("get", e))?;

        match (raw, decoder) {
            (None, None) => Ok(None),
            (None, Some(_)) => Err(CacheError::DecodeAbsent {
                key: key.to_string(),
            }),
            (Some(bytes), None) => Ok(Some(Decoded::Bytes(bytes))),
            (Some(bytes), Some(decoder)) => decoder.apply(&bytes).map(Some),
        }
    }

    /// Fetch and decode as UTF-8 text.
    ///
    /// # Errors
    ///
    /// Same as [`Cache::fetch`] with [`Decoder::Utf8`].
    pub fn fetch_string(&self, key: &ValueKey) -> CacheResult<String> {
        self.fetch(key, Some(Decoder::Utf8))?
            .and_then(Decoded::into_text)
            .ok_or_else(|| CacheError::DecodeAbsent {
                key: key.to_string(),
            })
    }

    /// Fetch and decode as a big-endian integer.
    ///
    /// # Errors
    ///
    /// Same as [`Cache::fetch`] with [`Decoder::BigEndian`].
    pub fn fetch_integer(&self, key: &ValueKey) -> CacheResult<u64> {
        self.fetch(key, Some(Decoder::BigEndian))?
            .as_ref()
            .and_then(Decoded::as_integer)
            .ok_or_else(|| CacheError::DecodeAbsent {
                key: key.to_string(),
            })
    }

    /// Read the call counter for an operation; absent counter is 0.
    ///
    /// # Errors
    ///
    /// Returns `StoreUnavailable` if the read fails and `Decode` if the
    /// counter value is not a decimal integer.
    pub fn call_count(&self, operation: &OperationName) -> CacheResult<u64> {
        let op = self.scoped_operation(operation);
        let raw = self
            .store
            .get(op.counter_key())
            .map_err(|e| CacheError::store_failure("get", e))?;

        match raw {
            None => Ok(0),
            Some(bytes) => std::str::from_utf8(&bytes)
                .ok()
                .and_then(|s| s.parse::<u64>().ok())
                .ok_or_else(|| CacheError::Decode {
                    reason: format!("counter at {} is not a decimal integer", op.counter_key()),
                }),
        }
    }

    fn scoped(&self, key: &str) -> String {
        match &self.config.namespace {
            Some(ns) => format!("{ns}:{key}"),
            None => key.to_string(),
        }
    }

    fn scoped_operation(&self, operation: &OperationName) -> OperationName {
        match &self.config.namespace {
            Some(ns) => operation.namespaced(ns),
            None => operation.clone(),
        }
    }
}
