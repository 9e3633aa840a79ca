use super::open_board;
use crate::{
    libs::{messages::Message, task::Task},
    msg_bail_anyhow, msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task text; several words are joined with spaces
    #[arg(required = true, num_args = 1..)]
    text: Vec<String>,
}

pub fn cmd(args: AddArgs) -> Result<()> {
    let text = args.text.join(" ");
    let Ok(task) = Task::new(&text) else {
        msg_bail_anyhow!(Message::TaskTextEmpty);
    };

    let (mut board, _) = open_board()?;
    let text = task.text.clone();
    let id = task.id.clone();
    if board.add_task(task) {
        msg_success!(Message::TaskCreated(text));
    } else {
        msg_info!(Message::TaskAlreadyExists(id));
    }
    board.close();
    Ok(())
}
