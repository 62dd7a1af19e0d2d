use crate::libs::data_storage::DataStorage;
use crate::libs::error::{Result, StudyError};
use rusqlite::Connection;
use std::path::Path;

pub const DB_FILE_NAME: &str = "studylog.db";

pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the database in the platform data directory.
    pub fn new() -> Result<Db> {
        let storage = DataStorage::new();
        let db_file_path = storage
            .get_path(DB_FILE_NAME)
            .map_err(|e| StudyError::io(storage.base_path(), e))?;
        Self::open(&db_file_path)
    }

    pub fn open(path: &Path) -> Result<Db> {
        let conn: Connection = Connection::open(path)?;
        Ok(Db { conn })
    }

    pub fn in_memory() -> Result<Db> {
        let conn: Connection = Connection::open_in_memory()?;
        Ok(Db { conn })
    }
}
