//! Cross-cutting call instrumentation.
//!
//! `CallRecorder` attaches counting and history recording to a named
//! operation without touching its body: an explicit delegating object taking
//! the body as a closure, rather than macro or reflection tricks.
//!
//! Commit order per call: counter increment, then input append, then the
//! body, then output append on success. Earlier writes are never rolled back,
//! so a failed body leaves the inputs log one entry ahead of the outputs log
//! and the replay view tolerates that skew.

use recall_core::{CacheError, CacheResult, OperationName, RecordingStage, ValueKey};
use recall_store::KvStore;
use std::sync::Arc;

/// Rendering of an operation's return value for the outputs log
pub trait RecordedOutput {
    /// The outputs-log entry for this value
    fn record_entry(&self) -> String;
}

impl RecordedOutput for ValueKey {
    fn record_entry(&self) -> String {
        self.to_string()
    }
}

impl RecordedOutput for String {
    fn record_entry(&self) -> String {
        self.clone()
    }
}

/// Counting and history recording around one named operation
pub struct CallRecorder {
    store: Arc<dyn KvStore>,
    operation: OperationName,
}

impl CallRecorder {
    /// Create a recorder for the given operation name
    #[must_use]
    pub fn new(store: Arc<dyn KvStore>, operation: OperationName) -> Self {
        Self { store, operation }
    }

    /// The operation this recorder namespaces its state under
    #[must_use]
    pub fn operation(&self) -> &OperationName {
        &self.operation
    }

    /// Run one instrumented call.
    ///
    /// # Errors
    ///
    /// Returns `CacheError::PartialRecording` if a counter or history write
    /// fails, naming the stage reached; body failures propagate unchanged.
    /// A stage-`Output` failure means the body's effect already stands.
    pub fn record<T, F>(&self, input: String, body: F) -> CacheResult<T>
    where
        T: RecordedOutput,
        F: FnOnce() -> CacheResult<T>,
    {
        tracing::debug!(operation = %self.operation, "recording instrumented call");

        self.store
            .incr(self.operation.counter_key())
            .map_err(|e| self.partial(RecordingStage::Count, e))?;

        self.store
            .rpush(&self.operation.inputs_key(), input.as_bytes())
            .map_err(|e| self.partial(RecordingStage::Input, e))?;

        let output = body()?;

        self.store
            .rpush(&self.operation.outputs_key(), output.record_entry().as_bytes())
            .map_err(|e| self.partial(RecordingStage::Output, e))?;

        Ok(output)
    }

    fn partial(&self, stage: RecordingStage, err: impl std::fmt::Display) -> CacheError {
        tracing::warn!(
            operation = %self.operation,
            %stage,
            "instrumentation write failed, earlier writes not rolled back"
        );
        CacheError::PartialRecording {
            operation: self.operation.to_string(),
            stage,
            reason: err.to_string(),
        }
    }
}
