use crate::db::db::Db;
use crate::libs::error::Result;
use crate::libs::store::StatsStore;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

const SCHEMA_PREFERENCES: &str = "CREATE TABLE IF NOT EXISTS preferences (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL
);";
const SELECT_VALUE: &str = "SELECT value FROM preferences WHERE key = ?1";
const SELECT_KEYS: &str = "SELECT key FROM preferences ORDER BY key";
const UPSERT_VALUE: &str = "INSERT INTO preferences (key, value) VALUES (?1, ?2)
    ON CONFLICT(key) DO UPDATE SET value = excluded.value";
const DELETE_KEY: &str = "DELETE FROM preferences WHERE key = ?1";
const DELETE_ALL: &str = "DELETE FROM preferences";

/// [`StatsStore`] backed by a single SQLite table.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Opens the store in the platform data directory.
    pub fn new() -> Result<Self> {
        Self::from_db(Db::new()?)
    }

    pub fn open(path: &Path) -> Result<Self> {
        Self::from_db(Db::open(path)?)
    }

    pub fn in_memory() -> Result<Self> {
        Self::from_db(Db::in_memory()?)
    }

    fn from_db(db: Db) -> Result<Self> {
        db.conn.execute(SCHEMA_PREFERENCES, [])?;
        Ok(SqliteStore { conn: db.conn })
    }
}

impl StatsStore for SqliteStore {
    fn get(&self, key: &str, default: &str) -> Result<String> {
        let value = self
            .conn
            .query_row(SELECT_VALUE, [key], |row| row.get::<_, String>(0))
            .optional()?;
        Ok(value.unwrap_or_else(|| default.to_string()))
    }

    fn put(&mut self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(UPSERT_VALUE, params![key, value])?;
        Ok(())
    }

    fn has(&self, key: &str) -> Result<bool> {
        let found = self
            .conn
            .query_row(SELECT_VALUE, [key], |_| Ok(()))
            .optional()?;
        Ok(found.is_some())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.conn.execute(DELETE_KEY, [key])?;
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>> {
        let mut stmt = self.conn.prepare(SELECT_KEYS)?;
        let key_iter = stmt.query_map([], |row| row.get::<_, String>(0))?;
        let mut keys = Vec::new();
        for key in key_iter {
            keys.push(key?);
        }
        Ok(keys)
    }

    fn clear_all(&mut self) -> Result<()> {
        self.conn.execute(DELETE_ALL, [])?;
        Ok(())
    }

    fn put_all(&mut self, entries: &[(String, String)]) -> Result<()> {
        let tx = self.conn.transaction()?;
        for (key, value) in entries {
            tx.execute(UPSERT_VALUE, params![key, value])?;
        }
        tx.commit()?;
        Ok(())
    }

    fn replace_all(&mut self, entries: &[(String, String)]) -> Result<()> {
        let tx = self.conn.transaction()?;
        tx.execute(DELETE_ALL, [])?;
        for (key, value) in entries {
            tx.execute(UPSERT_VALUE, params![key, value])?;
        }
        tx.commit()?;
        Ok(())
    }
}
