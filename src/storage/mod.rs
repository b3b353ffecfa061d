//! Storage layer for the insights pipeline
//!
//! SQLite-backed, split into:
//! - `models`: raw records and table rows
//! - `schema`: connection and schema management
//! - `source`: the `StatSource` read side
//! - `sink`: the `ResultSink` write side
//! - `queries`: loading source tables and reading results back
//! - `lock`: single-writer run lock

pub mod lock;
pub mod models;
pub mod queries;
pub mod schema;
pub mod sink;
pub mod source;


pub use lock::{lock_path_for, RunLock};
pub use models::*;
pub use schema::InsightsDatabase;
pub use sink::ResultSink;
pub use source::{SourceRow, StatSource};
