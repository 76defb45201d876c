//! macroquad audio backend
//!
//! Songs are loaded once at startup. Protected entries stay in the library
//! (so the menu can show them) but have no sound attached.

use super::{check_playable, MediaError, MediaPlayer, Song};
use crate::config::MediaConfig;
use macroquad::audio::{load_sound, play_sound, stop_sound, PlaySoundParams, Sound};
use macroquad::logging::{info, warn};

pub struct MacroquadMedia {
    songs: Vec<Song>,
    sounds: Vec<Option<Sound>>,
    playing: Option<usize>,
    volume: f32,
}

impl MacroquadMedia {
    pub async fn load(config: &MediaConfig) -> Self {
        let mut songs = Vec::new();
        let mut sounds = Vec::new();

        for entry in &config.songs {
            let sound = if entry.protected {
                None
            } else {
                match load_sound(&entry.path).await {
                    Ok(sound) => Some(sound),
                    Err(e) => {
                        warn!("Skipping song '{}' ({}): {}", entry.title, entry.path, e);
                        continue;
                    }
                }
            };
            songs.push(Song {
                title: entry.title.clone(),
                protected: entry.protected,
            });
            sounds.push(sound);
        }

        info!("Media library: {} song(s)", songs.len());
        Self {
            songs,
            sounds,
            playing: None,
            volume: config.volume.clamp(0.0, 1.0),
        }
    }
}

impl MediaPlayer for MacroquadMedia {
    fn songs(&self) -> &[Song] {
        &self.songs
    }

    fn is_playing(&self) -> bool {
        self.playing.is_some()
    }

    fn play(&mut self, index: usize) -> Result<(), MediaError> {
        let title = check_playable(&self.songs, index)?.title.clone();
        let Some(Some(sound)) = self.sounds.get(index) else {
            return Err(MediaError::Protected(title));
        };

        if let Some(current) = self.playing.take() {
            if let Some(Some(previous)) = self.sounds.get(current) {
                stop_sound(previous);
            }
        }
        play_sound(
            sound,
            PlaySoundParams {
                looped: true,
                volume: self.volume,
            },
        );
        self.playing = Some(index);
        Ok(())
    }

    fn stop(&mut self) {
        if let Some(current) = self.playing.take() {
            if let Some(Some(sound)) = self.sounds.get(current) {
                stop_sound(sound);
            }
        }
    }
}
