//! Core library modules for the cboard application.
//!
//! ## Features
//!
//! - **Board State**: Tasks, the column workflow and the task store
//! - **Rewards**: Challenge catalog and the gem ledger
//! - **Presentation**: Swipe mapping, sound themes, terminal tables and messages
//! - **Infrastructure**: Configuration and data directory resolution
//!
//! ## Usage
//!
//! ```rust
//! use cboard::db::local_storage::LocalStorage;
//! use cboard::libs::board::Board;
//! use cboard::libs::challenge::get_random_challenge;
//! use cboard::libs::config::BoardConfig;
//!
//! let mut board = Board::open(LocalStorage::in_memory()?, &BoardConfig::default());
//! board.add_task(get_random_challenge().to_task());
//! assert_eq!(board.tasks().len(), 1);
//! # Ok::<(), cboard::db::local_storage::StorageError>(())
//! ```

pub mod board;
pub mod challenge;
pub mod config;
pub mod data_storage;
pub mod error;
pub mod ledger;
pub mod messages;
pub mod sound;
pub mod store;
pub mod swipe;
pub mod task;
pub mod view;
