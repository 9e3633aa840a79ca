use super::{confirm_delete, open_board, resolve_task};
use crate::{libs::messages::Message, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Task id or a unique prefix of it
    id: String,
    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

pub fn cmd(args: DeleteArgs) -> Result<()> {
    let (mut board, settings) = open_board()?;
    if let Some(id) = resolve_task(&board, &args.id) {
        let text = board.get(&id).map(|task| task.text.clone()).unwrap_or_default();
        if confirm_delete(&settings, &text, args.yes)? {
            if let Some(task) = board.delete_task(&id) {
                msg_success!(Message::TaskDeleted(task.text));
            }
        }
    }
    board.close();
    Ok(())
}
