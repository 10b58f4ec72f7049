//! Replay engine: reconstruct recorded calls from the store.

use crate::report::{ReplayCall, ReplayReport};
use recall_core::{CacheError, CacheResult, OperationName};
use recall_store::KvStore;
use std::sync::Arc;

/// Reconstructs an operation's call history from its counter and logs.
///
/// Must be pointed at the same store, and configured with the same namespace,
/// as the cache whose writes it audits.
pub struct ReplayEngine {
    store: Arc<dyn KvStore>,
    namespace: Option<String>,
}

impl ReplayEngine {
    /// Create a replay engine over a store handle
    #[must_use]
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self {
            store,
            namespace: None,
        }
    }

    /// Scope reads to the given key namespace
    #[must_use]
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Reconstruct the call history of an operation.
    ///
    /// An absent counter or missing logs yield an empty report, not an error.
    /// Inputs and outputs are zipped to the shorter log, so a call whose body
    /// or output record failed shows up in `dropped_inputs`, never as a
    /// misaligned pair.
    ///
    /// # Errors
    ///
    /// Returns `StoreUnavailable` if any store read fails and `Decode` if the
    /// counter value is not a decimal integer.
    pub fn replay(&self, operation: &OperationName) -> CacheResult<ReplayReport> {
        let op = self.scoped_operation(operation);
        tracing::debug!(operation = %op, "replaying call history");

        let call_count = self.read_counter(&op)?;
        let inputs = self
            .store
            .lrange(&op.inputs_key(), 0, -1)
            .map_err(|e| CacheError::store_failure("lrange", e))?;
        let outputs = self
            .store
            .lrange(&op.outputs_key(), 0, -1)
            .map_err(|e| CacheError::store_failure("lrange", e))?;

        let recorded_inputs = inputs.len();
        let calls = inputs
            .iter()
            .zip(outputs.iter())
            .map(|(input, output)| ReplayCall {
                // History entries are written as display strings; lossy
                // conversion is the identity unless the log was corrupted.
                input: String::from_utf8_lossy(input).into_owned(),
                output: String::from_utf8_lossy(output).into_owned(),
            })
            .collect();

        Ok(ReplayReport {
            operation: operation.clone(),
            call_count,
            recorded_inputs,
            calls,
        })
    }

    fn read_counter(&self, op: &OperationName) -> CacheResult<u64> {
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

    fn scoped_operation(&self, operation: &OperationName) -> OperationName {
        match &self.namespace {
            Some(ns) => operation.namespaced(ns),
            None => operation.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use recall_store::MemoryStore;

    fn op() -> OperationName {
        OperationName::new("op.test")
    }

    #[test]
    fn test_replay_missing_counter_is_empty() {
        let engine = ReplayEngine::new(Arc::new(MemoryStore::new()));
        let report = engine.replay(&op()).unwrap();
        assert_eq!(report.call_count, 0);
        assert!(report.calls.is_empty());
        assert_eq!(report.dropped_inputs(), 0);
    }

    #[test]
    fn test_replay_pairs_in_order() {
        let store = Arc::new(MemoryStore::new());
        store.incr("op.test").unwrap();
        store.incr("op.test").unwrap();
        store.rpush("op.test:inputs", b"\"a\"").unwrap();
        store.rpush("op.test:inputs", b"\"b\"").unwrap();
        store.rpush("op.test:outputs", b"key-a").unwrap();
        store.rpush("op.test:outputs", b"key-b").unwrap();

        let engine = ReplayEngine::new(store);
        let report = engine.replay(&op()).unwrap();
        assert_eq!(report.call_count, 2);
        assert_eq!(
            report.calls,
            vec![
                ReplayCall {
                    input: "\"a\"".to_string(),
                    output: "key-a".to_string()
                },
                ReplayCall {
                    input: "\"b\"".to_string(),
                    output: "key-b".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_replay_zips_to_shorter_log() {
        let store = Arc::new(MemoryStore::new());
        store.incr("op.test").unwrap();
        store.incr("op.test").unwrap();
        store.rpush("op.test:inputs", b"\"a\"").unwrap();
        store.rpush("op.test:inputs", b"\"b\"").unwrap();
        store.rpush("op.test:outputs", b"key-a").unwrap();

        let engine = ReplayEngine::new(store);
        let report = engine.replay(&op()).unwrap();
        assert_eq!(report.calls.len(), 1);
        assert_eq!(report.recorded_inputs, 2);
        assert_eq!(report.dropped_inputs(), 1);
    }

    #[test]
    fn test_replay_corrupt_counter() {
        let store = Arc::new(MemoryStore::new());
        store.put("op.test", b"not a number").unwrap();

        let engine = ReplayEngine::new(store);
        let result = engine.replay(&op());
        assert!(matches!(result, Err(CacheError::Decode { .. })));
    }

    #[test]
    fn test_replay_is_read_only() {
        let store = Arc::new(MemoryStore::new());
        store.incr("op.test").unwrap();
        store.rpush("op.test:inputs", b"\"a\"").unwrap();
        store.rpush("op.test:outputs", b"key-a").unwrap();

        let engine = ReplayEngine::new(store.clone());
        engine.replay(&op()).unwrap();
        engine.replay(&op()).unwrap();

        assert_eq!(store.get("op.test").unwrap(), Some(b"1".to_vec()));
        assert_eq!(store.lrange("op.test:inputs", 0, -1).unwrap().len(), 1);
    }

    #[test]
    fn test_replay_namespaced() {
        let store = Arc::new(MemoryStore::new());
        store.incr("audit:op.test").unwrap();
        store.rpush("audit:op.test:inputs", b"\"a\"").unwrap();
        store.rpush("audit:op.test:outputs", b"key-a").unwrap();

        let engine = ReplayEngine::new(store).with_namespace("audit");
        let report = engine.replay(&op()).unwrap();
        assert_eq!(report.call_count, 1);
        assert_eq!(report.calls.len(), 1);
        // The report names the operation without the namespace prefix.
        assert_eq!(report.operation, op());
    }
}
