//! # cboard - Challenge Board
//!
//! A command-line kanban board for personal challenges.
//!
//! ## Features
//!
//! - **Three Columns**: Challenges (`todo`), In Progress and Completed
//! - **Challenge Generator**: Draw a ready-made challenge from a fixed catalog
//! - **Gems**: Starting a challenge pays its reward, once per challenge
//! - **Local Persistence**: Board state lives in a SQLite-backed key-value store
//! - **Sound Themes**: Four tone presets, selectable and previewable
//!
//! ## Usage
//!
//! ```rust,no_run
//! use cboard::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
