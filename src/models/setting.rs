//! Stored setting model
//!
//! One row of the key-value table. Values are JSON text.

use rusqlite::{params, Connection, Row};
use serde::{Deserialize, Serialize};

use crate::db::DbResult;

/// A persisted key-value entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredSetting {
    pub key: String,
    pub value: String,
    pub updated_at: String,
}

impl StoredSetting {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            key: row.get("key")?,
            value: row.get("value")?,
            updated_at: row.get("updated_at")?,
        })
    }

    /// Get an entry by key
    pub fn get(conn: &Connection, key: &str) -> DbResult<Option<Self>> {
        let mut stmt = conn.prepare("SELECT * FROM key_value_store WHERE key = ?1")?;

        let result = stmt.query_row([key], Self::from_row);
        match result {
            Ok(setting) => Ok(Some(setting)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Set or replace an entry (upsert, last write wins)
    pub fn set(conn: &Connection, key: &str, value: &str) -> DbResult<Self> {
        conn.execute(
            r#"
            INSERT INTO key_value_store (key, value)
            VALUES (?1, ?2)
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = datetime('now')
            "#,
            params![key, value],
        )?;

        Self::get(conn, key)?.ok_or_else(|| {
            crate::db::DbError::Sqlite(rusqlite::Error::QueryReturnedNoRows)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Database;

    fn test_db() -> Database {
        let db = Database::in_memory().unwrap();
        db.with_conn(|conn| crate::db::migrations::run_migrations(conn))
            .unwrap();
        db
    }

    #[test]
    fn test_set_and_get() {
        let db = test_db();
        db.with_conn(|conn| {
            assert!(StoredSetting::get(conn, "height")?.is_none());

            let stored = StoredSetting::set(conn, "height", "\"180\"")?;
            assert_eq!(stored.key, "height");
            assert_eq!(stored.value, "\"180\"");

            let fetched = StoredSetting::get(conn, "height")?.unwrap();
            assert_eq!(fetched.value, "\"180\"");
            Ok(())
        })
        .unwrap();
    }

    #[test]
    fn test_last_write_wins() {
        let db = test_db();
        db.with_conn(|conn| {
            StoredSetting::set(conn, "selectedUnit", "\"metric\"")?;
            StoredSetting::set(conn, "selectedUnit", "\"imperial\"")?;

            let fetched = StoredSetting::get(conn, "selectedUnit")?.unwrap();
            assert_eq!(fetched.value, "\"imperial\"");
            let rows: i64 =
                conn.query_row("SELECT COUNT(*) FROM key_value_store", [], |row| row.get(0))?;
            assert_eq!(rows, 1);
            Ok(())
        })
        .unwrap();
    }
}
