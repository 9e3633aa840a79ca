//! Configuration management for the cboard application.
//!
//! Settings are stored as pretty-printed JSON in `config.json` inside the
//! platform-specific application data directory, next to the database.
//! Every section is optional; a missing file or section means defaults.
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use cboard::libs::config::Config;
//!
//! // Load existing configuration or fall back to defaults
//! let config = Config::read()?;
//! println!("Default challenge reward: {}", config.board_settings().default_xp);
//!
//! // Run the interactive setup and persist the result
//! Config::init()?.save()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use super::ledger::DEFAULT_XP;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Configuration file name in the application data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// A section offered by the interactive setup.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    /// Identifier used to route the selection
    pub key: String,
    /// Display name shown to the user
    pub name: String,
}

/// Board behavior settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct BoardConfig {
    /// Gems paid for starting a challenge that carries no reward of its own.
    pub default_xp: u32,

    /// Whether `delete` and left swipes ask before removing a task.
    pub confirm_delete: bool,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            default_xp: DEFAULT_XP,
            confirm_delete: true,
        }
    }
}

/// Root configuration object.
///
/// Unconfigured sections are omitted from the JSON output.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub board: Option<BoardConfig>,
}

impl Config {
    /// Reads configuration from the application data directory.
    ///
    /// A missing file yields [`Config::default`].
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        Self::read_from(&config_file_path)
    }

    /// Reads configuration from an explicit path, with the same fallback as [`Config::read`].
    pub fn read_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Saves configuration to the application data directory.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        self.save_to(&config_file_path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Effective board settings, defaults filled in.
    pub fn board_settings(&self) -> BoardConfig {
        self.board.clone().unwrap_or_default()
    }

    /// Interactive configuration setup.
    ///
    /// Starts from the current configuration (or defaults when it cannot be
    /// read), lets the user pick sections and prompts for each value with the
    /// current one pre-filled.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal prompts fail.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = vec![ConfigModule {
            key: "board".to_string(),
            name: "Board".to_string(),
        }];

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected {
            match modules[selection].key.as_str() {
                "board" => {
                    let default = config.board_settings();
                    msg_print!(Message::ConfigModuleBoard);
                    config.board = Some(BoardConfig {
                        default_xp: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptDefaultXp.to_string())
                            .default(default.default_xp)
                            .interact_text()?,
                        confirm_delete: Confirm::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptConfirmDelete.to_string())
                            .default(default.confirm_delete)
                            .interact()?,
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
