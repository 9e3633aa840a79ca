//! In-memory task collection mirrored to local storage.
//!
//! [`TaskStore`] owns the ordered task list and the synchronization with the
//! `kanban-tasks` key. Every mutating operation ends with a persist step that
//! writes only when the serialized collection differs from what was last
//! written, so unrelated calls never touch storage.
//!
//! None of the operations fail: unknown ids are no-ops, a malformed stored
//! collection loads as an empty board and write failures are logged while the
//! in-memory state carries on.

use super::task::{Column, Task};
use crate::db::local_storage::{keys, KeyValueStore};
use std::collections::HashSet;
use tracing::{debug, warn};

/// A column change observed by [`TaskStore::move_task`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub task_id: String,
    pub from: Column,
    pub to: Column,
    pub is_challenge: bool,
    pub xp: Option<u32>,
}

impl Transition {
    /// `todo → in-progress`, the edge that starts work on a task.
    pub fn is_start(&self) -> bool {
        self.from == Column::Todo && self.to == Column::InProgress
    }
}

/// Result of looking a task up by a possibly shortened id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdMatch {
    Found(String),
    Ambiguous(Vec<String>),
    NotFound,
}

pub struct TaskStore<S: KeyValueStore> {
    storage: S,
    tasks: Vec<Task>,
    last_persisted: String,
}

impl<S: KeyValueStore> TaskStore<S> {
    /// Loads the stored collection, starting empty when it is absent or unreadable.
    pub fn open(storage: S) -> Self {
        let tasks = load_tasks(&storage);
        // What we consider persisted is our own rendering of the loaded state,
        // so opening and closing an untouched board never rewrites it.
        let last_persisted = serde_json::to_string(&tasks).unwrap_or_default();
        debug!(count = tasks.len(), "task store opened");

        Self {
            storage,
            tasks,
            last_persisted,
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Tasks in `column`, in insertion order.
    pub fn tasks_in(&self, column: Column) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(move |task| task.column == column)
    }

    /// Finds the task whose id equals `query` or, failing that, starts with it.
    pub fn resolve_id(&self, query: &str) -> IdMatch {
        if query.is_empty() {
            return IdMatch::NotFound;
        }
        if self.contains(query) {
            return IdMatch::Found(query.to_string());
        }

        let mut matches: Vec<String> = self
            .tasks
            .iter()
            .filter(|task| task.id.starts_with(query))
            .map(|task| task.id.clone())
            .collect();

        match matches.len() {
            0 => IdMatch::NotFound,
            1 => IdMatch::Found(matches.remove(0)),
            _ => IdMatch::Ambiguous(matches),
        }
    }

    /// Appends `task` unless its id is already present. Returns whether it was added.
    pub fn add_task(&mut self, task: Task) -> bool {
        let added = if self.contains(&task.id) {
            debug!(id = %task.id, "task already present, ignoring add");
            false
        } else {
            debug!(id = %task.id, column = %task.column, "task added");
            self.tasks.push(task);
            true
        };
        self.persist();
        added
    }

    /// Reassigns the column of task `id`. Unknown ids are ignored.
    pub fn move_task(&mut self, id: &str, column: Column) -> Option<Transition> {
        let transition = self.tasks.iter_mut().find(|task| task.id == id).map(|task| {
            let from = task.column;
            task.column = column;
            Transition {
                task_id: task.id.clone(),
                from,
                to: column,
                is_challenge: task.is_challenge,
                xp: task.xp,
            }
        });

        match &transition {
            Some(t) => debug!(id, from = %t.from, to = %t.to, "task moved"),
            None => debug!(id, "move ignored, unknown task"),
        }
        self.persist();
        transition
    }

    /// Removes task `id` if present, keeping the order of the others.
    pub fn delete_task(&mut self, id: &str) -> Option<Task> {
        let removed = self
            .tasks
            .iter()
            .position(|task| task.id == id)
            .map(|index| self.tasks.remove(index));

        if removed.is_none() {
            debug!(id, "delete ignored, unknown task");
        }
        self.persist();
        removed
    }

    /// Writes any change not yet in storage. Returns whether a write happened.
    pub fn flush(&mut self) -> bool {
        self.persist()
    }

    fn persist(&mut self) -> bool {
        let serialized = match serde_json::to_string(&self.tasks) {
            Ok(serialized) => serialized,
            Err(error) => {
                warn!(%error, "failed to serialize tasks");
                return false;
            }
        };

        if serialized == self.last_persisted {
            return false;
        }

        match self.storage.set_item(keys::TASKS, &serialized) {
            Ok(()) => {
                debug!(count = self.tasks.len(), "tasks persisted");
                self.last_persisted = serialized;
                true
            }
            Err(error) => {
                // Left as not persisted so the next operation retries.
                warn!(%error, "failed to persist tasks");
                false
            }
        }
    }
}

fn load_tasks<S: KeyValueStore>(storage: &S) -> Vec<Task> {
    let stored = match storage.get_item(keys::TASKS) {
        Ok(Some(stored)) => stored,
        Ok(None) => return Vec::new(),
        Err(error) => {
            warn!(%error, "failed to read stored tasks, starting empty");
            return Vec::new();
        }
    };

    let tasks: Vec<Task> = match serde_json::from_str(&stored) {
        Ok(tasks) => tasks,
        Err(error) => {
            warn!(%error, "stored tasks are malformed, starting empty");
            return Vec::new();
        }
    };

    let mut seen = HashSet::new();
    let total = tasks.len();
    let unique: Vec<Task> = tasks.into_iter().filter(|task| seen.insert(task.id.clone())).collect();
    if unique.len() != total {
        warn!(dropped = total - unique.len(), "stored tasks contained duplicate ids");
    }
    unique
}
