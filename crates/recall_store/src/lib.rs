//! RECALL store seam
//!
//! The six key-value primitives the cache consumes, as an object-safe trait,
//! plus an in-process implementation with the same per-key atomicity a real
//! store server provides. Durability, eviction, and transport live behind
//! this seam, never in front of it.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod kv;
pub mod memory;

pub use kv::{KvStore, StoreError, StoreResult};
pub use memory::MemoryStore;
