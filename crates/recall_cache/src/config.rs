//! Cache configuration.

use serde::{Deserialize, Serialize};

/// Cache configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Prefix applied to every store key, isolating this cache's keys from
    /// other users of the same store (None = no prefix)
    pub namespace: Option<String>,
    /// Issue `flushdb` when the cache is constructed
    pub flush_on_init: bool,
}

impl CacheConfig {
    /// Set the key namespace
    #[must_use]
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Flush the store namespace at construction time
    #[must_use]
    pub fn with_flush_on_init(mut self, flush: bool) -> Self {
        self.flush_on_init = flush;
        self
    }
}
