//! Operation identity for instrumentation.
//!
//! An `OperationName` namespaces one instrumented operation's counter and
//! history lists inside the store. The counter lives directly under the name;
//! the input and output logs hang off `:inputs` / `:outputs` suffixes.

use serde::{Deserialize, Serialize};

/// Stable identity string for an instrumented operation
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OperationName(String);

impl OperationName {
    /// Create an operation name
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get as string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Store key holding the call counter
    #[must_use]
    pub fn counter_key(&self) -> &str {
        &self.0
    }

    /// Store key holding the ordered inputs log
    #[must_use]
    pub fn inputs_key(&self) -> String {
        format!("{}:inputs", self.0)
    }

    /// Store key holding the ordered outputs log
    #[must_use]
    pub fn outputs_key(&self) -> String {
        format!("{}:outputs", self.0)
    }

    /// Prefix this operation's keys with a namespace
    #[must_use]
    pub fn namespaced(&self, namespace: &str) -> Self {
        Self(format!("{}:{}", namespace, self.0))
    }
}

impl std::fmt::Display for OperationName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
