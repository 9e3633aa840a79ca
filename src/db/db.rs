use super::local_storage::StorageError;
use crate::libs::data_storage::DataStorage;
use rusqlite::Connection;
use std::path::Path;

pub const DB_FILE_NAME: &str = "cboard.db";

pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the database in the application data directory.
    pub fn new() -> Result<Db, StorageError> {
        let db_file_path = DataStorage::new().get_path(DB_FILE_NAME)?;
        Self::open(db_file_path)
    }

    pub fn open(path: impl AsRef<Path>) -> Result<Db, StorageError> {
        let conn = Connection::open(path)?;
        Ok(Db { conn })
    }

    /// A throwaway database that lives as long as the connection.
    pub fn in_memory() -> Result<Db, StorageError> {
        let conn = Connection::open_in_memory()?;
        Ok(Db { conn })
    }
}
