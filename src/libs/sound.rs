//! Sound themes: tone presets for board events.
//!
//! Each theme describes its cues as short sequences of oscillator tones. The
//! active theme is stored under `sound-theme`; anything missing or unknown
//! falls back to [`SoundTheme::Classic`].

use super::error::BoardError;
use crate::db::local_storage::{keys, KeyValueStore, StorageError};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Square,
    Triangle,
    Sawtooth,
}

impl fmt::Display for Waveform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Waveform::Sine => "sine",
            Waveform::Square => "square",
            Waveform::Triangle => "triangle",
            Waveform::Sawtooth => "sawtooth",
        };
        f.write_str(name)
    }
}

/// One oscillator note.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    /// Hz.
    pub frequency: f32,
    pub waveform: Waveform,
    /// Seconds.
    pub duration: f32,
    /// Peak gain, 0.0 to 1.0.
    pub volume: f32,
    /// Offset from the start of the cue, in milliseconds.
    pub delay_ms: u32,
}

const fn tone(frequency: f32, waveform: Waveform, duration: f32, volume: f32, delay_ms: u32) -> Tone {
    Tone {
        frequency,
        waveform,
        duration,
        volume,
        delay_ms,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    WorkStart,
    WorkEnd,
    BreakStart,
    BreakEnd,
    Tick,
    Notification,
}

impl SoundCue {
    pub const ALL: [SoundCue; 6] = [
        SoundCue::WorkStart,
        SoundCue::WorkEnd,
        SoundCue::BreakStart,
        SoundCue::BreakEnd,
        SoundCue::Tick,
        SoundCue::Notification,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SoundCue::WorkStart => "work-start",
            SoundCue::WorkEnd => "work-end",
            SoundCue::BreakStart => "break-start",
            SoundCue::BreakEnd => "break-end",
            SoundCue::Tick => "tick",
            SoundCue::Notification => "notification",
        }
    }
}

impl fmt::Display for SoundCue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SoundCue {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SoundCue::ALL
            .into_iter()
            .find(|cue| cue.as_str() == s)
            .ok_or_else(|| BoardError::UnknownCue(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SoundTheme {
    #[default]
    Classic,
    Nature,
    Electronic,
    Minimalist,
}

impl SoundTheme {
    pub const ALL: [SoundTheme; 4] = [
        SoundTheme::Classic,
        SoundTheme::Nature,
        SoundTheme::Electronic,
        SoundTheme::Minimalist,
    ];

    /// Value stored under `sound-theme`.
    pub fn key(&self) -> &'static str {
        match self {
            SoundTheme::Classic => "classic",
            SoundTheme::Nature => "nature",
            SoundTheme::Electronic => "electronic",
            SoundTheme::Minimalist => "minimalist",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SoundTheme::Classic => "Classic",
            SoundTheme::Nature => "Nature",
            SoundTheme::Electronic => "Electronic",
            SoundTheme::Minimalist => "Minimalist",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            SoundTheme::Classic => "Traditional productivity sounds",
            SoundTheme::Nature => "Nature sounds for tranquility",
            SoundTheme::Electronic => "Modern digital sounds",
            SoundTheme::Minimalist => "Simple and quiet sounds",
        }
    }

    pub fn tones(&self, cue: SoundCue) -> &'static [Tone] {
        let table = match self {
            SoundTheme::Classic => &CLASSIC,
            SoundTheme::Nature => &NATURE,
            SoundTheme::Electronic => &ELECTRONIC,
            SoundTheme::Minimalist => &MINIMALIST,
        };
        table[cue as usize]
    }
}

impl fmt::Display for SoundTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for SoundTheme {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SoundTheme::ALL
            .into_iter()
            .find(|theme| theme.key() == s)
            .ok_or_else(|| BoardError::UnknownTheme(s.to_string()))
    }
}

use Waveform::{Sawtooth, Sine, Square, Triangle};

/// Tone tables, one entry per cue in [`SoundCue::ALL`] order.
const CLASSIC: [&[Tone]; 6] = [
    &[
        tone(440.0, Sine, 0.3, 0.12, 0),
        tone(554.0, Sine, 0.3, 0.12, 100),
        tone(659.0, Sine, 0.4, 0.12, 200),
    ],
    &[
        tone(659.0, Square, 0.4, 0.15, 0),
        tone(554.0, Square, 0.4, 0.15, 150),
        tone(440.0, Square, 0.6, 0.15, 300),
    ],
    &[tone(523.0, Triangle, 0.5, 0.1, 0), tone(659.0, Triangle, 0.5, 0.1, 200)],
    &[
        tone(784.0, Sawtooth, 0.3, 0.08, 0),
        tone(659.0, Sawtooth, 0.3, 0.08, 100),
        tone(523.0, Sawtooth, 0.5, 0.08, 200),
    ],
    &[tone(1500.0, Sine, 0.08, 0.03, 0)],
    &[
        tone(800.0, Sawtooth, 0.2, 0.1, 0),
        tone(1000.0, Sawtooth, 0.2, 0.1, 100),
        tone(1200.0, Sawtooth, 0.3, 0.1, 200),
    ],
];

const NATURE: [&[Tone]; 6] = [
    &[
        tone(200.0, Sine, 0.4, 0.08, 0),
        tone(300.0, Sine, 0.4, 0.08, 200),
        tone(400.0, Sine, 0.6, 0.08, 400),
    ],
    &[
        tone(400.0, Triangle, 0.5, 0.1, 0),
        tone(300.0, Triangle, 0.5, 0.1, 300),
        tone(200.0, Triangle, 0.7, 0.1, 600),
    ],
    &[tone(150.0, Sine, 0.6, 0.06, 0), tone(200.0, Sine, 0.6, 0.06, 300)],
    &[
        tone(250.0, Triangle, 0.4, 0.08, 0),
        tone(200.0, Triangle, 0.4, 0.08, 200),
        tone(150.0, Triangle, 0.6, 0.08, 400),
    ],
    &[tone(800.0, Sine, 0.1, 0.02, 0)],
    &[tone(300.0, Triangle, 0.3, 0.08, 0), tone(400.0, Triangle, 0.3, 0.08, 200)],
];

const ELECTRONIC: [&[Tone]; 6] = [
    &[
        tone(800.0, Square, 0.2, 0.1, 0),
        tone(1200.0, Square, 0.2, 0.1, 100),
        tone(1600.0, Square, 0.3, 0.1, 200),
    ],
    &[
        tone(1600.0, Sawtooth, 0.3, 0.12, 0),
        tone(1200.0, Sawtooth, 0.3, 0.12, 150),
        tone(800.0, Sawtooth, 0.4, 0.12, 300),
    ],
    &[tone(600.0, Sine, 0.3, 0.08, 0), tone(900.0, Sine, 0.3, 0.08, 150)],
    &[
        tone(1000.0, Sawtooth, 0.2, 0.1, 0),
        tone(800.0, Sawtooth, 0.2, 0.1, 100),
        tone(600.0, Sawtooth, 0.3, 0.1, 200),
    ],
    &[tone(2000.0, Square, 0.05, 0.04, 0)],
    &[
        tone(1000.0, Sawtooth, 0.15, 0.1, 0),
        tone(1500.0, Sawtooth, 0.15, 0.1, 100),
        tone(2000.0, Sawtooth, 0.2, 0.1, 200),
    ],
];

const MINIMALIST: [&[Tone]; 6] = [
    &[tone(600.0, Sine, 0.4, 0.06, 0)],
    &[tone(400.0, Sine, 0.5, 0.08, 0)],
    &[tone(500.0, Sine, 0.3, 0.05, 0)],
    &[tone(300.0, Sine, 0.4, 0.06, 0)],
    &[tone(1000.0, Sine, 0.05, 0.02, 0)],
    &[tone(800.0, Sine, 0.2, 0.06, 0)],
];

/// Reads the stored theme, falling back to classic.
pub fn load_theme<S: KeyValueStore>(storage: &S) -> SoundTheme {
    match storage.get_item(keys::SOUND_THEME) {
        Ok(Some(stored)) => stored.parse().unwrap_or_else(|_| {
            warn!(value = %stored, "unknown stored sound theme, using classic");
            SoundTheme::default()
        }),
        Ok(None) => SoundTheme::default(),
        Err(error) => {
            warn!(%error, "failed to read sound theme");
            SoundTheme::default()
        }
    }
}

pub fn save_theme<S: KeyValueStore>(storage: &S, theme: SoundTheme) -> Result<(), StorageError> {
    storage.set_item(keys::SOUND_THEME, theme.key())
}
