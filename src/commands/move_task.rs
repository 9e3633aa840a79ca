use super::{open_board, report_move, resolve_task};
use crate::libs::task::Column;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct MoveArgs {
    /// Task id or a unique prefix of it
    id: String,
    /// Target column: todo, in-progress or done
    column: Column,
}

pub fn cmd(args: MoveArgs) -> Result<()> {
    let (mut board, _) = open_board()?;
    if let Some(id) = resolve_task(&board, &args.id) {
        let outcome = board.move_task(&id, args.column);
        report_move(&board, &outcome);
    }
    board.close();
    Ok(())
}
