//! RECALL replay engine
//!
//! Reconstructs the historical invocations of an instrumented operation from
//! its durable call counter and paired input/output logs, and renders them in
//! original call order. Read-only: replay never mutates the store.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod engine;
pub mod report;

pub use engine::ReplayEngine;
pub use report::{ReplayCall, ReplayReport};
