use serde_json::Value;

use super::{KeyValueStore, StoreResult};
use crate::db::Database;
use crate::models::StoredSetting;

/// Store backed by the `key_value_store` table
#[derive(Clone)]
pub struct SqliteStore {
    database: Database,
}

impl SqliteStore {
    /// Wrap a database whose migrations have already run
    pub fn new(database: Database) -> Self {
        Self { database }
    }

    pub fn database(&self) -> &Database {
        &self.database
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> StoreResult<Option<Value>> {
        let stored = self.database.with_conn(|conn| StoredSetting::get(conn, key))?;
        match stored {
            Some(setting) => Ok(Some(serde_json::from_str(&setting.value)?)),
            None => Ok(None),
        }
    }

    fn set(&self, key: &str, value: &Value) -> StoreResult<()> {
        let encoded = serde_json::to_string(value)?;
        self.database
            .with_conn(|conn| StoredSetting::set(conn, key, &encoded))?;
        tracing::debug!(key, value = %encoded, "Persisted setting");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StoreError;
    use serde_json::json;

    fn test_store() -> SqliteStore {
        let db = Database::in_memory().unwrap();
        db.with_conn(|conn| crate::db::migrations::run_migrations(conn))
            .unwrap();
        SqliteStore::new(db)
    }

    #[test]
    fn test_round_trip_json_values() {
        let store = test_store();
        store.set("hydrationGoal", &json!(2810)).unwrap();
        store.set("selectedUnit", &json!("imperial")).unwrap();

        assert_eq!(store.get("hydrationGoal").unwrap(), Some(json!(2810)));
        assert_eq!(store.get("selectedUnit").unwrap(), Some(json!("imperial")));
        assert_eq!(store.get("height").unwrap(), None);
    }

    #[test]
    fn test_corrupt_value_is_json_error() {
        let store = test_store();
        store
            .database()
            .with_conn(|conn| StoredSetting::set(conn, "weight", "not json"))
            .unwrap();

        assert!(matches!(store.get("weight"), Err(StoreError::Json(_))));
    }
}
