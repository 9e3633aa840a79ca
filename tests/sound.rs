#[cfg(test)]
mod tests {
    use cboard::db::local_storage::{keys, KeyValueStore, LocalStorage};
    use cboard::libs::sound::{load_theme, save_theme, SoundCue, SoundTheme, Waveform};

    #[test]
    fn test_theme_defaults_to_classic() {
        let storage = LocalStorage::in_memory().unwrap();
        assert_eq!(load_theme(&storage), SoundTheme::Classic);

        storage.set_item(keys::SOUND_THEME, "disco").unwrap();
        assert_eq!(load_theme(&storage), SoundTheme::Classic);
    }

    #[test]
    fn test_saved_theme_is_loaded() {
        let storage = LocalStorage::in_memory().unwrap();
        save_theme(&storage, SoundTheme::Electronic).unwrap();

        assert_eq!(storage.get_item(keys::SOUND_THEME).unwrap().as_deref(), Some("electronic"));
        assert_eq!(load_theme(&storage), SoundTheme::Electronic);
    }

    #[test]
    fn test_every_theme_has_every_cue() {
        for theme in SoundTheme::ALL {
            assert_eq!(theme.key().parse::<SoundTheme>().unwrap(), theme);
            for cue in SoundCue::ALL {
                let tones = theme.tones(cue);
                assert!(!tones.is_empty(), "{} {} has no tones", theme, cue);
                assert!(tones.windows(2).all(|pair| pair[0].delay_ms <= pair[1].delay_ms));
                assert!(tones.iter().all(|tone| tone.volume > 0.0 && tone.volume <= 1.0));
            }
        }
    }

    #[test]
    fn test_known_presets() {
        let tick = SoundTheme::Electronic.tones(SoundCue::Tick);
        assert_eq!(tick.len(), 1);
        assert_eq!(tick[0].frequency, 2000.0);
        assert_eq!(tick[0].waveform, Waveform::Square);

        let start = SoundTheme::Classic.tones(SoundCue::WorkStart);
        let frequencies: Vec<f32> = start.iter().map(|tone| tone.frequency).collect();
        assert_eq!(frequencies, vec![440.0, 554.0, 659.0]);
    }

    #[test]
    fn test_cue_names() {
        assert_eq!("break-end".parse::<SoundCue>().unwrap(), SoundCue::BreakEnd);
        assert!("beep".parse::<SoundCue>().is_err());
    }
}
