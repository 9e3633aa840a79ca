#[cfg(test)]
mod tests {
    use cboard::libs::data_storage::{DataStorage, APP_NAME, VENDOR_NAME};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct DataStorageTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for DataStorageTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            DataStorageTestContext { temp_dir }
        }
    }

    #[test_context(DataStorageTestContext)]
    #[test]
    fn test_get_path_creates_app_directory(ctx: &mut DataStorageTestContext) {
        let storage = DataStorage::new();
        let path = storage.get_path("cboard.db").unwrap();

        assert!(path.starts_with(ctx.temp_dir.path()));
        assert!(path.parent().unwrap().ends_with(format!("{}/{}", VENDOR_NAME, APP_NAME)));
        assert!(storage.base_path().exists());
    }
}
