#[cfg(test)]
mod tests {
    use cboard::db::local_storage::{keys, KeyValueStore, LocalStorage, StorageError};
    use cboard::libs::store::{IdMatch, TaskStore};
    use cboard::libs::task::{Column, Task};
    use parking_lot::Mutex;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// In-memory store that counts writes and can be told to fail them.
    #[derive(Clone, Default)]
    struct RecordingStore {
        items: Arc<Mutex<HashMap<String, String>>>,
        writes: Arc<AtomicUsize>,
        fail_writes: bool,
    }

    impl RecordingStore {
        fn failing() -> Self {
            Self {
                fail_writes: true,
                ..Self::default()
            }
        }

        fn writes(&self) -> usize {
            self.writes.load(Ordering::SeqCst)
        }
    }

    impl KeyValueStore for RecordingStore {
        fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
            Ok(self.items.lock().get(key).cloned())
        }

        fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
            if self.fail_writes {
                return Err(StorageError::Io(std::io::Error::other("disk full")));
            }
            self.writes.fetch_add(1, Ordering::SeqCst);
            self.items.lock().insert(key.to_string(), value.to_string());
            Ok(())
        }

        fn remove_item(&self, key: &str) -> Result<(), StorageError> {
            self.items.lock().remove(key);
            Ok(())
        }
    }

    struct StoreTestContext {
        temp_dir: TempDir,
    }

    impl StoreTestContext {
        fn storage(&self) -> LocalStorage {
            LocalStorage::open(self.temp_dir.path().join("cboard.db")).unwrap()
        }
    }

    impl TestContext for StoreTestContext {
        fn setup() -> Self {
            StoreTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    fn task(id: &str, text: &str) -> Task {
        Task::new(text).unwrap().with_id(id)
    }

    #[test]
    fn test_duplicate_ids_are_added_once() {
        let mut store = TaskStore::open(LocalStorage::in_memory().unwrap());

        assert!(store.add_task(task("a", "First")));
        assert!(store.add_task(task("b", "Second")));
        assert!(!store.add_task(task("a", "First again")));
        assert!(!store.add_task(task("b", "Second again")));

        let ids: Vec<&str> = store.tasks().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(store.get("a").unwrap().text, "First");
    }

    #[test]
    fn test_move_is_idempotent() {
        let mut store = TaskStore::open(LocalStorage::in_memory().unwrap());
        store.add_task(task("t1", "Read a book"));
        let before = store.get("t1").unwrap().clone();

        store.move_task("t1", Column::Done);
        let once = store.get("t1").unwrap().clone();
        store.move_task("t1", Column::Done);
        let twice = store.get("t1").unwrap().clone();

        assert_eq!(once, twice);
        assert_eq!(twice.column, Column::Done);
        assert_eq!(twice.text, before.text);
        assert_eq!(twice.created_at, before.created_at);
    }

    #[test]
    fn test_move_reports_transition() {
        let mut store = TaskStore::open(LocalStorage::in_memory().unwrap());
        store.add_task(task("t1", "Read a book"));

        let transition = store.move_task("t1", Column::InProgress).unwrap();
        assert_eq!(transition.from, Column::Todo);
        assert_eq!(transition.to, Column::InProgress);
        assert!(transition.is_start());
        assert!(!transition.is_challenge);
    }

    #[test]
    fn test_unknown_ids_are_noops() {
        let store_backend = RecordingStore::default();
        let mut store = TaskStore::open(store_backend.clone());
        store.add_task(task("a", "Only task"));
        let writes = store_backend.writes();

        assert!(store.move_task("missing", Column::Done).is_none());
        assert!(store.delete_task("missing").is_none());

        assert_eq!(store.tasks().len(), 1);
        assert_eq!(store.get("a").unwrap().column, Column::Todo);
        assert_eq!(store_backend.writes(), writes);
    }

    #[test]
    fn test_delete_keeps_order_of_others() {
        let mut store = TaskStore::open(LocalStorage::in_memory().unwrap());
        for id in ["a", "b", "c", "d"] {
            store.add_task(task(id, id));
        }

        let removed = store.delete_task("b").unwrap();
        assert_eq!(removed.id, "b");

        let ids: Vec<&str> = store.tasks().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c", "d"]);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_reload_round_trip(ctx: &mut StoreTestContext) {
        let mut store = TaskStore::open(ctx.storage());
        store.add_task(task("plain", "Plain task"));
        store.add_task(cboard::libs::challenge::CHALLENGES[0].to_task().with_id("challenge"));
        store.move_task("challenge", Column::InProgress);
        let expected = store.tasks().to_vec();
        drop(store);

        let reloaded = TaskStore::open(ctx.storage());
        assert_eq!(reloaded.tasks(), expected.as_slice());
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_add_then_move_scenario(ctx: &mut StoreTestContext) {
        let storage = ctx.storage();
        let mut store = TaskStore::open(storage.clone());
        store.add_task(task("t1", "Read a book"));
        store.move_task("t1", Column::InProgress);

        assert_eq!(store.tasks().len(), 1);
        assert_eq!(store.tasks()[0].id, "t1");
        assert_eq!(store.tasks()[0].column, Column::InProgress);

        let persisted = storage.get_item(keys::TASKS).unwrap().unwrap();
        let json: serde_json::Value = serde_json::from_str(&persisted).unwrap();
        assert_eq!(json[0]["id"], "t1");
        assert_eq!(json[0]["text"], "Read a book");
        assert_eq!(json[0]["column"], "in-progress");
        assert!(json[0]["createdAt"].is_i64());
    }

    #[test]
    fn test_malformed_storage_starts_empty() {
        let storage = LocalStorage::in_memory().unwrap();
        storage.set_item(keys::TASKS, "{not json").unwrap();
        assert!(TaskStore::open(storage.clone()).tasks().is_empty());

        storage
            .set_item(keys::TASKS, r#"[{"id":"x","text":"Bad","column":"backlog","createdAt":1}]"#)
            .unwrap();
        assert!(TaskStore::open(storage).tasks().is_empty());
    }

    #[test]
    fn test_stored_duplicates_are_dropped_on_load() {
        let storage = LocalStorage::in_memory().unwrap();
        storage
            .set_item(
                keys::TASKS,
                r#"[{"id":"x","text":"One","column":"todo","createdAt":1},
                    {"id":"x","text":"Two","column":"done","createdAt":2}]"#,
            )
            .unwrap();

        let store = TaskStore::open(storage);
        assert_eq!(store.tasks().len(), 1);
        assert_eq!(store.tasks()[0].text, "One");
    }

    #[test]
    fn test_writes_only_when_collection_changes() {
        let backend = RecordingStore::default();
        let mut store = TaskStore::open(backend.clone());
        assert_eq!(backend.writes(), 0);

        store.add_task(task("a", "Task"));
        assert_eq!(backend.writes(), 1);

        store.add_task(task("a", "Duplicate"));
        store.move_task("a", Column::Todo);
        assert!(!store.flush());
        assert_eq!(backend.writes(), 1);

        store.move_task("a", Column::Done);
        assert_eq!(backend.writes(), 2);
    }

    #[test]
    fn test_opening_untouched_board_does_not_write() {
        let backend = RecordingStore::default();
        backend
            .items
            .lock()
            .insert(keys::TASKS.to_string(), r#"[{"id":"a","text":"Task","column":"todo","createdAt":1}]"#.to_string());

        let mut store = TaskStore::open(backend.clone());
        assert!(!store.flush());
        assert_eq!(backend.writes(), 0);
    }

    #[test]
    fn test_write_failures_do_not_interrupt() {
        let mut store = TaskStore::open(RecordingStore::failing());

        assert!(store.add_task(task("a", "Still works")));
        store.move_task("a", Column::InProgress);

        assert_eq!(store.get("a").unwrap().column, Column::InProgress);
        assert!(!store.flush());
    }

    #[test]
    fn test_resolve_id_by_prefix() {
        let mut store = TaskStore::open(LocalStorage::in_memory().unwrap());
        store.add_task(task("abc123", "One"));
        store.add_task(task("abd456", "Two"));

        assert_eq!(store.resolve_id("abc"), IdMatch::Found("abc123".to_string()));
        assert_eq!(store.resolve_id("abd456"), IdMatch::Found("abd456".to_string()));
        assert_eq!(
            store.resolve_id("ab"),
            IdMatch::Ambiguous(vec!["abc123".to_string(), "abd456".to_string()])
        );
        assert_eq!(store.resolve_id("zz"), IdMatch::NotFound);
        assert_eq!(store.resolve_id(""), IdMatch::NotFound);
    }

    #[test]
    fn test_tasks_in_column_keep_insertion_order() {
        let mut store = TaskStore::open(LocalStorage::in_memory().unwrap());
        for id in ["a", "b", "c"] {
            store.add_task(task(id, id));
        }
        store.move_task("b", Column::Done);

        let todo: Vec<&str> = store.tasks_in(Column::Todo).map(|t| t.id.as_str()).collect();
        let done: Vec<&str> = store.tasks_in(Column::Done).map(|t| t.id.as_str()).collect();
        assert_eq!(todo, vec!["a", "c"]);
        assert_eq!(done, vec!["b"]);
    }
}
