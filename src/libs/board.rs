//! The board: task store and reward ledger over one storage medium.
//!
//! A [`Board`] is opened at the start of a command, handed to the code that
//! handles it and closed when the command is done. It is the only owner of
//! board state; nothing lives in globals.
//!
//! ```rust
//! use cboard::db::local_storage::LocalStorage;
//! use cboard::libs::board::Board;
//! use cboard::libs::config::BoardConfig;
//! use cboard::libs::task::{Column, Task};
//!
//! let storage = LocalStorage::in_memory()?;
//! let mut board = Board::open(storage, &BoardConfig::default());
//! board.add_task(Task::new("Read a book")?.with_id("t1"));
//! let outcome = board.move_task("t1", Column::InProgress);
//! assert!(outcome.transition.is_some());
//! board.close();
//! # Ok::<(), cboard::libs::error::BoardError>(())
//! ```

use super::config::BoardConfig;
use super::ledger::RewardLedger;
use super::store::{IdMatch, TaskStore, Transition};
use super::swipe::{SwipeAction, SwipeDirection};
use super::task::{Column, Task};
use crate::db::local_storage::KeyValueStore;
use tracing::debug;

/// What happened when a task was moved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveOutcome {
    /// `None` when the id was unknown.
    pub transition: Option<Transition>,
    /// Gems paid out for starting a challenge.
    pub awarded: Option<u32>,
}

pub struct Board<S: KeyValueStore + Clone> {
    store: TaskStore<S>,
    ledger: RewardLedger<S>,
}

impl<S: KeyValueStore + Clone> Board<S> {
    pub fn open(storage: S, settings: &BoardConfig) -> Self {
        Self {
            ledger: RewardLedger::open(storage.clone(), settings.default_xp),
            store: TaskStore::open(storage),
        }
    }

    pub fn tasks(&self) -> &[Task] {
        self.store.tasks()
    }

    pub fn tasks_in(&self, column: Column) -> impl Iterator<Item = &Task> {
        self.store.tasks_in(column)
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.store.get(id)
    }

    pub fn resolve_id(&self, query: &str) -> IdMatch {
        self.store.resolve_id(query)
    }

    pub fn gems(&self) -> u64 {
        self.ledger.gems()
    }

    pub fn update_gems(&mut self, amount: u64) {
        self.ledger.update_gems(amount);
    }

    pub fn add_task(&mut self, task: Task) -> bool {
        self.store.add_task(task)
    }

    /// Moves task `id` and lets the ledger pay out if a challenge was started.
    pub fn move_task(&mut self, id: &str, column: Column) -> MoveOutcome {
        let transition = self.store.move_task(id, column);
        let awarded = transition.as_ref().and_then(|t| self.ledger.observe(t));
        MoveOutcome { transition, awarded }
    }

    pub fn delete_task(&mut self, id: &str) -> Option<Task> {
        let removed = self.store.delete_task(id);
        if removed.is_some() {
            self.ledger.forget(id);
        }
        removed
    }

    /// The action a swipe on task `id` asks for, or `None` for an unknown id.
    pub fn swipe_action(&self, id: &str, direction: SwipeDirection) -> Option<SwipeAction> {
        self.store.get(id).map(|task| direction.action_for(task.column))
    }

    /// Flushes pending writes and releases the storage handle.
    pub fn close(mut self) {
        self.store.flush();
        debug!("board closed");
    }
}
