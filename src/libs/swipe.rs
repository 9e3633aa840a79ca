//! Horizontal swipe gestures on a card.
//!
//! Right advances a card, left steps it back. A left swipe on a fresh
//! challenge asks to delete it instead, and finished cards ignore swipes.

use super::error::BoardError;
use super::task::Column;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Left,
    Right,
}

/// What a swipe asks the board to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeAction {
    Move(Column),
    /// Delete, after the user confirms.
    Delete,
    Nothing,
}

impl SwipeDirection {
    pub fn action_for(&self, column: Column) -> SwipeAction {
        match (self, column) {
            (SwipeDirection::Right, Column::Todo) => SwipeAction::Move(Column::InProgress),
            (SwipeDirection::Right, Column::InProgress) => SwipeAction::Move(Column::Done),
            (SwipeDirection::Right, Column::Done) => SwipeAction::Nothing,
            (SwipeDirection::Left, Column::Todo) => SwipeAction::Delete,
            (SwipeDirection::Left, Column::InProgress) => SwipeAction::Move(Column::Todo),
            (SwipeDirection::Left, Column::Done) => SwipeAction::Nothing,
        }
    }

    /// Hint shown under a column heading.
    pub fn hint(column: Column) -> &'static str {
        match column {
            Column::Todo => "Swipe → to progress, ← to delete",
            Column::InProgress => "Swipe → to complete, ← to return",
            Column::Done => "Completed challenges",
        }
    }
}

impl fmt::Display for SwipeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SwipeDirection::Left => f.write_str("left"),
            SwipeDirection::Right => f.write_str("right"),
        }
    }
}

impl FromStr for SwipeDirection {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" | "l" | "<" => Ok(SwipeDirection::Left),
            "right" | "r" | ">" => Ok(SwipeDirection::Right),
            other => Err(BoardError::UnknownDirection(other.to_string())),
        }
    }
}
