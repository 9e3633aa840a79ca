use super::open_board;
use crate::{
    libs::{
        challenge::{get_random_challenge, CHALLENGES},
        messages::Message,
        view::View,
    },
    msg_print, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ChallengeArgs {
    /// Show the catalog instead of drawing a challenge
    #[arg(short, long)]
    list: bool,
}

pub fn cmd(args: ChallengeArgs) -> Result<()> {
    if args.list {
        msg_print!(Message::ChallengeCatalogHeader, true);
        View::challenges(CHALLENGES);
        return Ok(());
    }

    let (mut board, settings) = open_board()?;
    let challenge = get_random_challenge();
    let task = challenge.to_task();
    let xp = task.xp.unwrap_or(settings.default_xp);
    if board.add_task(task) {
        msg_success!(Message::ChallengeAdded(challenge.title.to_string(), xp));
    }
    board.close();
    Ok(())
}
