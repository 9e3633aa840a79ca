use crate::{
    db::local_storage::LocalStorage,
    libs::{
        messages::Message,
        sound::{load_theme, save_theme, SoundCue, SoundTheme},
        view::View,
    },
    msg_error_anyhow, msg_print, msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct ThemeArgs {
    #[command(subcommand)]
    command: Option<ThemeCommand>,
}

#[derive(Debug, Subcommand)]
enum ThemeCommand {
    /// List available sound themes
    List,
    /// Select the active sound theme
    Set {
        /// classic, nature, electronic or minimalist
        theme: SoundTheme,
    },
    /// Show the tones a theme plays for a cue
    Preview {
        /// Cue to preview; defaults to notification
        cue: Option<SoundCue>,
        /// Theme to preview; defaults to the active one
        #[arg(short, long)]
        theme: Option<SoundTheme>,
    },
}

pub fn cmd(args: ThemeArgs) -> Result<()> {
    let storage = LocalStorage::new().map_err(|e| msg_error_anyhow!(Message::StorageOpenFailed(e.to_string())))?;
    let current = load_theme(&storage);

    match args.command {
        None => msg_print!(Message::ThemeCurrent(current.name().to_string())),
        Some(ThemeCommand::List) => {
            msg_print!(Message::ThemeListHeader, true);
            View::themes(current);
        }
        Some(ThemeCommand::Set { theme }) => {
            save_theme(&storage, theme).map_err(|e| msg_error_anyhow!(Message::ThemeSaveFailed(e.to_string())))?;
            msg_success!(Message::ThemeSet(theme.name().to_string()));
        }
        Some(ThemeCommand::Preview { cue, theme }) => {
            let theme = theme.unwrap_or(current);
            let cue = cue.unwrap_or(SoundCue::Notification);
            msg_print!(Message::ThemePreviewHeader(theme.name().to_string(), cue.to_string()), true);
            View::tones(theme.tones(cue));
        }
    }
    Ok(())
}
