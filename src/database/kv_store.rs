//! Key-value slots on top of the `kv_store` table.
//!
//! This is the local equivalent of browser storage: every persisted value is a
//! string under a well-known key, and every write replaces the whole value.

use rusqlite::{params, Connection, OptionalExtension};

use crate::types::errors::StoreError;

/// Key holding the JSON-encoded link list.
pub const LINKS_KEY: &str = "links";

/// Key holding the dark-mode preference (`"true"` / `"false"`).
pub const DARK_MODE_KEY: &str = "darkMode";

/// String key-value storage backed by a SQLite connection.
pub struct KeyValueStore<'a> {
    conn: &'a Connection,
}

impl<'a> KeyValueStore<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Returns the stored value for `key`, or `None` if the slot is empty.
    pub fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| StoreError::Database(e.to_string()))
    }

    /// Writes `value` under `key`, overwriting any previous value.
    pub fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let now = chrono::Utc::now().timestamp();
        self.conn
            .execute(
                "INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
                params![key, value, now],
            )
            .map_err(|e| StoreError::Database(e.to_string()))?;
        Ok(())
    }

    /// Removes the slot entirely. Removing a missing key is not an error.
    pub fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.conn
            .execute("DELETE FROM kv_store WHERE key = ?1", params![key])
            .map_err(|e| StoreError::Database(e.to_string()))?;
        Ok(())
    }
}
