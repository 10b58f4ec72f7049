//! Core error types for RECALL.

use std::fmt;

/// Core result type
pub type CacheResult<T> = Result<T, CacheError>;

/// Stage of an instrumented call at which a recording write failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordingStage {
    /// The call-counter increment failed; the operation body never ran.
    Count,
    /// The inputs-log append failed; the counter was already incremented.
    Input,
    /// The outputs-log append failed; the operation body already took effect.
    Output,
}

impl fmt::Display for RecordingStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Count => write!(f, "count"),
            Self::Input => write!(f, "input"),
            Self::Output => write!(f, "output"),
        }
    }
}

/// Core error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// A store primitive failed due to connectivity or timeout
    StoreUnavailable {
        /// The primitive that failed (put, get, incr, rpush, lrange, flushdb)
        command: String,
        /// Underlying failure description
        reason: String,
    },

    /// A decoder could not interpret the raw bytes
    Decode {
        /// What made the bytes undecodable
        reason: String,
    },

    /// A decoder was supplied but the key was absent; decoding nothing is
    /// meaningless and fails fast rather than passing absence through
    DecodeAbsent {
        /// The key that was not found
        key: String,
    },

    /// A value key string did not parse
    InvalidKey {
        /// Parse failure description
        reason: String,
    },

    /// A counter or history write failed around an instrumented call; earlier
    /// writes in the sequence are not rolled back
    PartialRecording {
        /// Name of the instrumented operation
        operation: String,
        /// Which instrumentation write failed
        stage: RecordingStage,
        /// Underlying store failure
        reason: String,
    },
}

impl CacheError {
    /// Map a store primitive failure into `StoreUnavailable`, naming the
    /// primitive so callers can tell which write or read broke.
    pub fn store_failure(command: &str, reason: impl fmt::Display) -> Self {
        Self::StoreUnavailable {
            command: command.to_string(),
            reason: reason.to_string(),
        }
    }
}

impl fmt::Display for CacheError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StoreUnavailable { command, reason } => {
                write!(f, "Store unavailable during {}: {}", command, reason)
            }
            Self::Decode { reason } => write!(f, "Decode failed: {}", reason),
            Self::DecodeAbsent { key } => {
                write!(f, "Cannot decode absent value for key {}", key)
            }
            Self::InvalidKey { reason } => write!(f, "Invalid key: {}", reason),
            Self::PartialRecording {
                operation,
                stage,
                reason,
            } => {
                write!(
                    f,
                    "Partial recording for {} at {} stage: {}",
                    operation, stage, reason
                )
            }
        }
    }
}

impl std::error::Error for CacheError {}
