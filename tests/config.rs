#[cfg(test)]
mod tests {
    use cboard::libs::config::{BoardConfig, Config, CONFIG_FILE_NAME};
    use cboard::libs::ledger::DEFAULT_XP;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// Gives each test its own directory to hold the configuration file.
    struct ConfigTestContext {
        temp_dir: TempDir,
        default_xp: u32,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            ConfigTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
                default_xp: 40,
            }
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.board.is_none());

        let settings = config.board_settings();
        assert_eq!(settings.default_xp, DEFAULT_XP);
        assert!(settings.confirm_delete);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_nonexistent_config(ctx: &mut ConfigTestContext) {
        let config = Config::read_from(&ctx.temp_dir.path().join(CONFIG_FILE_NAME)).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_config(ctx: &mut ConfigTestContext) {
        let path = ctx.temp_dir.path().join("nested").join(CONFIG_FILE_NAME);
        let config = Config {
            board: Some(BoardConfig {
                default_xp: ctx.default_xp,
                confirm_delete: false,
            }),
        };
        config.save_to(&path).unwrap();

        let read_config = Config::read_from(&path).unwrap();
        assert_eq!(read_config, config);
        assert_eq!(read_config.board_settings().default_xp, ctx.default_xp);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_corrupted_config_is_an_error(ctx: &mut ConfigTestContext) {
        let path = ctx.temp_dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "{ board: ").unwrap();
        assert!(Config::read_from(&path).is_err());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_empty_object_means_defaults(ctx: &mut ConfigTestContext) {
        let path = ctx.temp_dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "{}").unwrap();
        assert_eq!(Config::read_from(&path).unwrap(), Config::default());
    }
}
