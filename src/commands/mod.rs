//! Command-line surface of cboard.
//!
//! Each subcommand is one board event: it opens the board, applies a single
//! operation, lets the store mirror the result to storage and prints the
//! outcome.

pub mod add;
pub mod board;
pub mod challenge;
pub mod delete;
pub mod gems;
pub mod init;
pub mod move_task;
pub mod swipe;
pub mod theme;

use crate::{
    db::local_storage::{KeyValueStore, LocalStorage},
    libs::{
        board::{Board, MoveOutcome},
        config::{BoardConfig, Config},
        messages::Message,
        store::IdMatch,
    },
    msg_error_anyhow, msg_info, msg_success, msg_warning,
};
use anyhow::Result;
use clap::{Parser, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Add a task to the Challenges column")]
    Add(add::AddArgs),
    #[command(about = "Add a random challenge or list the catalog")]
    Challenge(challenge::ChallengeArgs),
    #[command(about = "Move a task to another column", visible_alias = "mv", arg_required_else_help = true)]
    Move(move_task::MoveArgs),
    #[command(about = "Swipe a task left or right", arg_required_else_help = true)]
    Swipe(swipe::SwipeArgs),
    #[command(about = "Delete a task", visible_alias = "rm", arg_required_else_help = true)]
    Delete(delete::DeleteArgs),
    #[command(about = "Show the board", visible_alias = "ls")]
    Board(board::BoardArgs),
    #[command(about = "Show or set the gem balance")]
    Gems(gems::GemsArgs),
    #[command(about = "Choose and preview sound themes")]
    Theme(theme::ThemeArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Add(args) => add::cmd(args),
            Commands::Challenge(args) => challenge::cmd(args),
            Commands::Move(args) => move_task::cmd(args),
            Commands::Swipe(args) => swipe::cmd(args),
            Commands::Delete(args) => delete::cmd(args),
            Commands::Board(args) => board::cmd(args),
            Commands::Gems(args) => gems::cmd(args),
            Commands::Theme(args) => theme::cmd(args),
        }
    }
}

/// Opens the board in the application data directory along with its settings.
///
/// An unreadable configuration is reported and replaced by defaults.
fn open_board() -> Result<(Board<LocalStorage>, BoardConfig)> {
    let settings = match Config::read() {
        Ok(config) => config.board_settings(),
        Err(error) => {
            msg_warning!(Message::ConfigReadFailed(error.to_string()));
            BoardConfig::default()
        }
    };
    let storage = LocalStorage::new().map_err(|e| msg_error_anyhow!(Message::StorageOpenFailed(e.to_string())))?;
    Ok((Board::open(storage, &settings), settings))
}

/// Maps a command-line id to a task id, telling the user when it matches none or several.
fn resolve_task<S: KeyValueStore + Clone>(board: &Board<S>, query: &str) -> Option<String> {
    match board.resolve_id(query) {
        IdMatch::Found(id) => Some(id),
        IdMatch::Ambiguous(matches) => {
            msg_info!(Message::TaskIdAmbiguous(query.to_string(), matches));
            None
        }
        IdMatch::NotFound => {
            msg_info!(Message::TaskNotFound(query.to_string()));
            None
        }
    }
}

fn report_move<S: KeyValueStore + Clone>(board: &Board<S>, outcome: &MoveOutcome) {
    let Some(transition) = &outcome.transition else {
        return;
    };
    let text = board
        .get(&transition.task_id)
        .map(|task| task.text.clone())
        .unwrap_or_default();

    if transition.from == transition.to {
        msg_info!(Message::TaskAlreadyInColumn(text, transition.to));
    } else {
        msg_success!(Message::TaskMoved(text, transition.from, transition.to));
    }
    if let Some(award) = outcome.awarded {
        msg_success!(Message::GemsAwarded(award, board.gems()));
    }
}

fn confirm_delete(settings: &BoardConfig, text: &str, assume_yes: bool) -> Result<bool> {
    if assume_yes || !settings.confirm_delete {
        return Ok(true);
    }

    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::ConfirmDeleteTask(text.to_string()).to_string())
        .default(false)
        .interact()?;
    if !confirmed {
        msg_info!(Message::DeleteCancelled);
    }
    Ok(confirmed)
}
