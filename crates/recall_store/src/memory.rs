//! In-process key-value store.
//!
//! One lock over the whole namespace gives every primitive the per-key
//! atomicity the trait promises. This is both the test double and a usable
//! embedded backend; nothing here persists.

use crate::kv::{KvStore, StoreError, StoreResult};
use std::collections::HashMap;
use std::sync::RwLock;

/// A namespace entry: scalar value or list
#[derive(Debug, Clone, PartialEq, Eq)]
enum Entry {
    Scalar(Vec<u8>),
    List(Vec<Vec<u8>>),
}

/// In-memory store implementing the primitive command set
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, Entry>>,
}

impl MemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live entries (scalars and lists)
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().unwrap().len()
    }

    /// Whether the namespace is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.read().unwrap().is_empty()
    }
}

impl KvStore for MemoryStore {
    fn put(&self, key: &str, value: &[u8]) -> StoreResult<()> {
        let mut entries = self.entries.write().unwrap();
        entries.insert(key.to_string(), Entry::Scalar(value.to_vec()));
        Ok(())
    }

    fn get(&self, key: &str) -> StoreResult<Option<Vec<u8>>> {
        let entries = self.entries.read().unwrap();
        match entries.get(key) {
            None => Ok(None),
            Some(Entry::Scalar(raw)) => Ok(Some(raw.clone())),
            Some(Entry::List(_)) => Err(StoreError::WrongType {
                key: key.to_string(),
            }),
        }
    }

    fn incr(&self, key: &str) -> StoreResult<u64> {
        let mut entries = self.entries.write().unwrap();
        let current = match entries.get(key) {
            None => 0,
            Some(Entry::Scalar(raw)) => std::str::from_utf8(raw)
                .ok()
                .and_then(|s| s.parse::<u64>().ok())
                .ok_or_else(|| StoreError::NotAnInteger {
                    key: key.to_string(),
                })?,
            Some(Entry::List(_)) => {
                return Err(StoreError::WrongType {
                    key: key.to_string(),
                });
            }
        };
        let next = current + 1;
        entries.insert(key.to_string(), Entry::Scalar(next.to_string().into_bytes()));
        Ok(next)
    }

    fn rpush(&self, key: &str, item: &[u8]) -> StoreResult<u64> {
        let mut entries = self.entries.write().unwrap();
        match entries
            .entry(key.to_string())
            .or_insert_with(|| Entry::List(Vec::new()))
        {
            Entry::List(items) => {
                items.push(item.to_vec());
                Ok(items.len() as u64)
            }
            Entry::Scalar(_) => Err(StoreError::WrongType {
                key: key.to_string(),
            }),
        }
    }

    fn lrange(&self, key: &str, start: i64, stop: i64) -> StoreResult<Vec<Vec<u8>>> {
        let entries = self.entries.read().unwrap();
        match entries.get(key) {
            None => Ok(Vec::new()),
            Some(Entry::Scalar(_)) => Err(StoreError::WrongType {
                key: key.to_string(),
            }),
            Some(Entry::List(items)) => {
                let len = items.len() as i64;
                let mut from = if start < 0 { len + start } else { start };
                let mut to = if stop < 0 { len + stop } else { stop };
                if from < 0 {
                    from = 0;
                }
                if to >= len {
                    to = len - 1;
                }
                if from >= len || to < 0 || from > to {
                    return Ok(Vec::new());
                }
                Ok(items[from as usize..=to as usize].to_vec())
            }
        }
    }

    fn flushdb(&self) -> StoreResult<()> {
        let mut entries = self.entries.write().unwrap();
        let dropped = entries.len();
        entries.clear();
        tracing::debug!(dropped, "memory store flushed");
        Ok(())
    }
}
