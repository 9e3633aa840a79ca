use super::open_board;
use crate::{
    libs::{
        messages::Message,
        swipe::SwipeDirection,
        task::{Column, Difficulty, Task},
        view::View,
    },
    msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct BoardArgs {
    /// Show only one column
    #[arg(short, long)]
    column: Option<Column>,
    /// Show only challenges of one difficulty: easy, medium or hard
    #[arg(short, long)]
    difficulty: Option<Difficulty>,
}

pub fn cmd(args: BoardArgs) -> Result<()> {
    let (board, _) = open_board()?;
    msg_print!(Message::BoardHeader, true);

    if board.tasks().is_empty() {
        msg_info!(Message::BoardEmpty);
    } else {
        let columns: Vec<Column> = match args.column {
            Some(column) => vec![column],
            None => Column::ALL.to_vec(),
        };

        for column in columns {
            let tasks: Vec<&Task> = board
                .tasks_in(column)
                .filter(|task| task.matches_difficulty(args.difficulty))
                .collect();
            let counts = match column {
                Column::Todo => {
                    let challenges = tasks.iter().filter(|task| task.is_challenge).count();
                    Message::ColumnCountsTodo(challenges, tasks.len())
                }
                Column::InProgress | Column::Done => Message::ColumnCount(tasks.len()),
            };

            msg_print!(format!("{} · {}", column.title(), counts));
            msg_print!(SwipeDirection::hint(column));
            if tasks.is_empty() {
                msg_info!(Message::ColumnEmpty(column));
            } else {
                View::tasks(&tasks);
            }
            msg_print!("");
        }
    }

    msg_print!(Message::GemsBalance(board.gems()));
    board.close();
    Ok(())
}
