use catalog_core::error::{CatalogError, Result};
use catalog_core::ports::KeyValueStore;
use rusqlite::{Connection, OptionalExtension};

/// SQLite implementation of the KeyValueStore trait.
///
/// A single `kv` table maps string keys to string values, which is all the
/// snapshot store needs. The connection is opened per operation so the
/// store stays usable through `&self` without locking state.
pub struct SqliteKeyValueStore {
    db_path: String,
}

impl SqliteKeyValueStore {
    /// Creates a new SqliteKeyValueStore backed by the given database path.
    /// The database file and the `kv` table are created on first use.
    pub fn new(db_path: String) -> Self {
        Self { db_path }
    }

    fn open(&self) -> Result<Connection> {
        let conn = Connection::open(&self.db_path)
            .map_err(|e| CatalogError::Storage(e.to_string()))?;
        conn.execute(
            "CREATE TABLE IF NOT EXISTS kv (key TEXT PRIMARY KEY, value TEXT NOT NULL)",
            [],
        )
        .map_err(|e| CatalogError::Storage(e.to_string()))?;
        Ok(conn)
    }
}

impl KeyValueStore for SqliteKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let conn = self.open()?;
        conn.query_row("SELECT value FROM kv WHERE key = ?1", [key], |row| {
            row.get(0)
        })
        .optional()
        .map_err(|e| CatalogError::Storage(e.to_string()))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let conn = self.open()?;
        conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            [key, value],
        )
        .map_err(|e| CatalogError::Storage(e.to_string()))?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let conn = self.open()?;
        conn.execute("DELETE FROM kv WHERE key = ?1", [key])
            .map_err(|e| CatalogError::Storage(e.to_string()))?;
        Ok(())
    }
}
