//! Database module
//!
//! Handles SQLite connection and migrations.

pub mod connection;
pub mod migrations;

pub use connection::{default_path, Database, DbError, DbResult, DATABASE_PATH_ENV};
