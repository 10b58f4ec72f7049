//! RECALL instrumented cache
//!
//! `Cache` stores values under generated keys and fetches them back with
//! optional typed decoding. Writes are wrapped by `CallRecorder`, which keeps
//! a durable call counter and paired input/output history in the store itself;
//! reads are deliberately not instrumented, since replay audits writes.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cache;
pub mod config;
pub mod recorder;

pub use cache::Cache;
pub use config::CacheConfig;
pub use recorder::{CallRecorder, RecordedOutput};
