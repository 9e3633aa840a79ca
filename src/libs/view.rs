use super::challenge::Challenge;
use super::sound::{SoundTheme, Tone};
use super::task::Task;
use chrono::{DateTime, Local};
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn tasks(tasks: &[&Task]) {
        let mut table = Table::new();

        table.add_row(row!["ID", "TASK", "DIFFICULTY", "CATEGORY", "TIME", "XP", "CREATED"]);
        for task in tasks {
            table.add_row(row![
                task.id,
                Self::task_title(task),
                task.difficulty.map(|d| d.to_string()).unwrap_or_default(),
                task.category.clone().unwrap_or_default(),
                task.time.clone().unwrap_or_default(),
                task.xp.map(|xp| xp.to_string()).unwrap_or_default(),
                Self::created_at(task.created_at)
            ]);
        }
        table.printstd();
    }

    pub fn challenges(challenges: &[Challenge]) {
        let mut table = Table::new();

        table.add_row(row!["TITLE", "DIFFICULTY", "CATEGORY", "TIME", "XP"]);
        for challenge in challenges {
            table.add_row(row![
                challenge.title,
                challenge.difficulty,
                challenge.category,
                challenge.time,
                challenge.xp
            ]);
        }
        table.printstd();
    }

    pub fn themes(current: SoundTheme) {
        let mut table = Table::new();

        table.add_row(row!["", "THEME", "NAME", "DESCRIPTION"]);
        for theme in SoundTheme::ALL {
            let marker = if theme == current { "*" } else { "" };
            table.add_row(row![marker, theme.key(), theme.name(), theme.description()]);
        }
        table.printstd();
    }

    pub fn tones(tones: &[Tone]) {
        let mut table = Table::new();

        table.add_row(row!["DELAY (ms)", "FREQUENCY (Hz)", "WAVEFORM", "DURATION (s)", "VOLUME"]);
        for tone in tones {
            table.add_row(row![tone.delay_ms, tone.frequency, tone.waveform, tone.duration, tone.volume]);
        }
        table.printstd();
    }

    fn task_title(task: &Task) -> String {
        match (&task.description, task.is_challenge) {
            (Some(description), true) => format!("🏆 {}\n{}", task.text, description),
            _ => task.text.clone(),
        }
    }

    fn created_at(millis: i64) -> String {
        DateTime::from_timestamp_millis(millis)
            .map(|created| created.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_default()
    }
}
