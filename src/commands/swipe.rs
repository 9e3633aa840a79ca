use super::{confirm_delete, open_board, report_move, resolve_task};
use crate::{
    libs::{
        messages::Message,
        swipe::{SwipeAction, SwipeDirection},
    },
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct SwipeArgs {
    /// Task id or a unique prefix of it
    id: String,
    /// left or right
    direction: SwipeDirection,
    /// Skip the confirmation prompt when the swipe deletes
    #[arg(short, long)]
    yes: bool,
}

pub fn cmd(args: SwipeArgs) -> Result<()> {
    let (mut board, settings) = open_board()?;
    let Some(id) = resolve_task(&board, &args.id) else {
        board.close();
        return Ok(());
    };
    let (text, column) = match board.get(&id) {
        Some(task) => (task.text.clone(), task.column),
        None => {
            board.close();
            return Ok(());
        }
    };

    match args.direction.action_for(column) {
        SwipeAction::Move(target) => {
            let outcome = board.move_task(&id, target);
            report_move(&board, &outcome);
        }
        SwipeAction::Delete => {
            if confirm_delete(&settings, &text, args.yes)? {
                if let Some(task) = board.delete_task(&id) {
                    msg_success!(Message::TaskDeleted(task.text));
                }
            }
        }
        SwipeAction::Nothing => msg_info!(Message::SwipeIgnored(text, column)),
    }
    board.close();
    Ok(())
}
