//! Persistence layer for the cboard application.
//!
//! Board state is kept in a single SQLite table that behaves like a browser's
//! local storage: string keys mapped to string values. The task collection,
//! the gem counter and the sound theme each occupy one key.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use cboard::db::local_storage::{KeyValueStore, LocalStorage};
//!
//! let storage = LocalStorage::new()?;
//! storage.set_item("userGems", "25")?;
//! assert_eq!(storage.get_item("userGems")?.as_deref(), Some("25"));
//! # Ok::<(), cboard::db::local_storage::StorageError>(())
//! ```

/// SQLite connection management.
pub mod db;

/// Key-value storage on top of the database.
pub mod local_storage;
