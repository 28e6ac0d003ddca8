//! Key-value store
//!
//! Persisted settings live behind a small get/set contract with JSON values.
//! The SQLite store is used by the server; the memory store backs tests and
//! ephemeral sessions.

mod memory;
mod sqlite;

use serde_json::Value;
use thiserror::Error;

use crate::db::DbError;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// Key-value store error types
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] DbError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Store lock poisoned")]
    Poisoned,
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Get/set of JSON values by string key, last write wins
pub trait KeyValueStore {
    /// Read a value, `None` when the key was never written
    fn get(&self, key: &str) -> StoreResult<Option<Value>>;

    /// Write a value, replacing any previous one
    fn set(&self, key: &str, value: &Value) -> StoreResult<()>;
}
