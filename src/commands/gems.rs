use super::open_board;
use crate::{libs::messages::Message, msg_print, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct GemsArgs {
    /// Overwrite the balance
    #[arg(long)]
    set: Option<u64>,
}

pub fn cmd(args: GemsArgs) -> Result<()> {
    let (mut board, _) = open_board()?;
    match args.set {
        Some(amount) => {
            board.update_gems(amount);
            msg_success!(Message::GemsUpdated(board.gems()));
        }
        None => msg_print!(Message::GemsBalance(board.gems())),
    }
    board.close();
    Ok(())
}
