//! Display implementation for cboard application messages.
//!
//! All user-facing text lives here, in one `match`, so wording stays
//! consistent and every new [`Message`] variant needs an explicit sentence.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(text) => format!("Task '{}' added to Challenges", text),
            Message::TaskAlreadyExists(id) => format!("Task {} is already on the board", id),
            Message::TaskTextEmpty => "Task text must not be empty".to_string(),
            Message::TaskMoved(text, from, to) => format!("'{}' moved: {} → {}", text, from.title(), to.title()),
            Message::TaskAlreadyInColumn(text, column) => format!("'{}' is already in {}", text, column.title()),
            Message::TaskDeleted(text) => format!("Task '{}' deleted", text),
            Message::TaskNotFound(id) => format!("No task matches '{}'", id),
            Message::TaskIdAmbiguous(id, matches) => format!("'{}' matches several tasks: {}", id, matches.join(", ")),
            Message::ConfirmDeleteTask(text) => format!("Delete '{}'? This cannot be undone.", text),
            Message::DeleteCancelled => "Deletion cancelled".to_string(),

            // === BOARD MESSAGES ===
            Message::BoardHeader => "📋 ChallengeBoard: track your personal challenges and conquer them one by one".to_string(),
            Message::BoardEmpty => "The board is empty. Add a task or generate a challenge to get started.".to_string(),
            Message::ColumnEmpty(column) => format!("{} is empty", column.title()),
            Message::ColumnCountsTodo(challenges, total) => format!("{} challenges, {} total", challenges, total),
            Message::ColumnCount(count) => format!("{} tasks", count),

            // === CHALLENGE MESSAGES ===
            Message::ChallengeAdded(title, xp) => format!("New challenge: '{}' (+{} 💎 when started)", title, xp),
            Message::ChallengeCatalogHeader => "Challenge catalog".to_string(),

            // === SWIPE MESSAGES ===
            Message::SwipeIgnored(text, column) => format!("'{}' stays in {}", text, column.title()),

            // === GEM MESSAGES ===
            Message::GemsAwarded(award, total) => format!("+{} 💎 earned! You now have {} gems", award, total),
            Message::GemsBalance(total) => format!("💎 {} gems", total),
            Message::GemsUpdated(total) => format!("Gem balance set to {}", total),

            // === SOUND THEME MESSAGES ===
            Message::ThemeListHeader => "Sound themes".to_string(),
            Message::ThemeCurrent(name) => format!("Current sound theme: {}", name),
            Message::ThemeSet(name) => format!("Sound theme set to {}", name),
            Message::ThemePreviewHeader(theme, cue) => format!("{} theme, {} cue", theme, cue),
            Message::ThemeSaveFailed(error) => format!("Failed to save sound theme: {}", error),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigReset => "Configuration removed, defaults restored".to_string(),
            Message::ConfigModuleBoard => "Board settings".to_string(),
            Message::PromptSelectModules => "Select sections to configure".to_string(),
            Message::PromptDefaultXp => "Gems for a challenge without its own reward".to_string(),
            Message::PromptConfirmDelete => "Ask for confirmation before deleting tasks?".to_string(),

            // === ERROR MESSAGES ===
            Message::StorageOpenFailed(error) => format!("Failed to open board storage: {}", error),
            Message::ConfigReadFailed(error) => format!("Failed to read configuration, using defaults: {}", error),
        };
        write!(f, "{}", text)
    }
}
