//! The board's only persisted entity and its workflow column.

use super::error::BoardError;
use chrono::Utc;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Workflow state of a task. There is no fourth column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Column {
    Todo,
    InProgress,
    Done,
}

impl Column {
    /// Columns in board order.
    pub const ALL: [Column; 3] = [Column::Todo, Column::InProgress, Column::Done];

    pub fn as_str(&self) -> &'static str {
        match self {
            Column::Todo => "todo",
            Column::InProgress => "in-progress",
            Column::Done => "done",
        }
    }

    /// Heading shown above the column.
    pub fn title(&self) -> &'static str {
        match self {
            Column::Todo => "Challenges",
            Column::InProgress => "In Progress",
            Column::Done => "Completed",
        }
    }

    /// The column a task advances to.
    pub fn next(&self) -> Option<Column> {
        match self {
            Column::Todo => Some(Column::InProgress),
            Column::InProgress => Some(Column::Done),
            Column::Done => None,
        }
    }

    /// The column a task falls back to.
    pub fn previous(&self) -> Option<Column> {
        match self {
            Column::Todo => None,
            Column::InProgress => Some(Column::Todo),
            Column::Done => Some(Column::InProgress),
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Column {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Column::ALL
            .into_iter()
            .find(|column| column.as_str() == s)
            .ok_or_else(|| BoardError::UnknownColumn(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(BoardError::UnknownDifficulty(other.to_string())),
        }
    }
}

/// A card on the board.
///
/// Serialized with camelCase keys so the stored JSON reads
/// `{"id":..,"text":..,"column":"todo","createdAt":..}`. Challenge fields are
/// omitted when absent. Only `column` changes after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub text: String,
    pub column: Column,
    /// Epoch milliseconds.
    pub created_at: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Free-text time estimate, e.g. "30 min".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    /// Gems awarded when the challenge is started.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xp: Option<u32>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_challenge: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl Task {
    /// Creates a free-form task in `todo` with a fresh id.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::EmptyTaskText`] when `text` is blank. Text that
    /// passes is stored as typed.
    pub fn new(text: &str) -> Result<Self, BoardError> {
        if text.trim().is_empty() {
            return Err(BoardError::EmptyTaskText);
        }

        Ok(Task {
            id: generate_id(),
            text: text.to_string(),
            column: Column::Todo,
            created_at: Utc::now().timestamp_millis(),
            description: None,
            difficulty: None,
            category: None,
            time: None,
            xp: None,
            is_challenge: false,
        })
    }

    /// Replaces the generated id. Only meaningful before the task joins a board.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Whether the task passes a difficulty filter. `None` lets every task through.
    pub fn matches_difficulty(&self, difficulty: Option<Difficulty>) -> bool {
        difficulty.is_none() || self.difficulty == difficulty
    }
}

const ID_ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

fn to_base36(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while value > 0 {
        digits.push(ID_ALPHABET[(value % 36) as usize]);
        value /= 36;
    }
    digits.reverse();
    String::from_utf8_lossy(&digits).into_owned()
}

/// Opaque task id: base-36 creation time followed by a random base-36 suffix.
pub fn generate_id() -> String {
    let millis = u64::try_from(Utc::now().timestamp_millis()).unwrap_or_default();
    let suffix: u64 = rand::thread_rng().gen();
    format!("{}{}", to_base36(millis), to_base36(suffix))
}

