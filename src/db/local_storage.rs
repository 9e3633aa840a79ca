//! Browser-style local storage backed by SQLite.
//!
//! [`KeyValueStore`] is the seam between the board and its storage medium.
//! [`LocalStorage`] is the production implementation: one `local_storage`
//! table with a text primary key. Handles are cheap to clone and share one
//! connection behind a mutex, so the task store and the reward ledger can
//! write to the same medium.

use super::db::Db;
use parking_lot::Mutex;
use rusqlite::{params, OptionalExtension};
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

/// Storage keys used by the application.
pub mod keys {
    /// JSON array of tasks.
    pub const TASKS: &str = "kanban-tasks";
    /// Decimal string of the gem counter.
    pub const GEMS: &str = "userGems";
    /// JSON array of task ids that already earned gems.
    pub const REWARDED_TASKS: &str = "rewarded-tasks";
    /// Name of the active sound theme.
    pub const SOUND_THEME: &str = "sound-theme";
}

const SCHEMA_LOCAL_STORAGE: &str = "CREATE TABLE IF NOT EXISTS local_storage (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL
)";

const SELECT_ITEM: &str = "SELECT value FROM local_storage WHERE key = ?1";
const UPSERT_ITEM: &str = "INSERT INTO local_storage (key, value) VALUES (?1, ?2)
    ON CONFLICT(key) DO UPDATE SET value = excluded.value";
const DELETE_ITEM: &str = "DELETE FROM local_storage WHERE key = ?1";
const SELECT_KEYS: &str = "SELECT key FROM local_storage ORDER BY key";

#[derive(Error, Debug)]
pub enum StorageError {
    /// The data directory could not be created or read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),
}

/// String-to-string storage with local storage semantics.
pub trait KeyValueStore {
    /// Returns the value stored under `key`, or `None` when the key is absent.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removes `key`. Removing an absent key is not an error.
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

#[derive(Clone)]
pub struct LocalStorage {
    db: Arc<Mutex<Db>>,
}

impl LocalStorage {
    /// Opens the storage in the application data directory.
    pub fn new() -> Result<Self, StorageError> {
        Self::from_db(Db::new()?)
    }

    pub fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        Self::from_db(Db::open(path)?)
    }

    pub fn in_memory() -> Result<Self, StorageError> {
        Self::from_db(Db::in_memory()?)
    }

    fn from_db(db: Db) -> Result<Self, StorageError> {
        db.conn.execute(SCHEMA_LOCAL_STORAGE, [])?;
        Ok(Self { db: Arc::new(Mutex::new(db)) })
    }

    /// All keys currently stored, in lexical order.
    pub fn keys(&self) -> Result<Vec<String>, StorageError> {
        let db = self.db.lock();
        let mut stmt = db.conn.prepare(SELECT_KEYS)?;
        let keys = stmt.query_map([], |row| row.get(0))?.collect::<Result<Vec<String>, _>>()?;
        Ok(keys)
    }
}

impl KeyValueStore for LocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let db = self.db.lock();
        let value = db.conn.query_row(SELECT_ITEM, params![key], |row| row.get(0)).optional()?;
        Ok(value)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let db = self.db.lock();
        db.conn.execute(UPSERT_ITEM, params![key, value])?;
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        let db = self.db.lock();
        db.conn.execute(DELETE_ITEM, params![key])?;
        Ok(())
    }
}
