//! Background music capability
//!
//! The pause menu lets the player pick and play a song. Whether any songs
//! exist is decided by configuration: the `Disabled` backend has an empty
//! library and ignores play/stop, the `Macroquad` backend streams the
//! configured files through `macroquad::audio`.

mod audio;

pub use audio::MacroquadMedia;

use crate::config::{MediaBackend, MediaConfig};
use std::fmt;

/// One entry in the song library
#[derive(Debug, Clone, PartialEq)]
pub struct Song {
    pub title: String,
    /// Listed but not playable (e.g. DRM-locked)
    pub protected: bool,
}

/// Media error types
#[derive(Debug, Clone, PartialEq)]
pub enum MediaError {
    /// Index past the end of the library
    NoSuchSong(usize),
    /// Song is listed but may not be played
    Protected(String),
}

impl fmt::Display for MediaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaError::NoSuchSong(index) => write!(f, "no song at index {}", index),
            MediaError::Protected(title) => write!(f, "song is protected: {}", title),
        }
    }
}

impl std::error::Error for MediaError {}

/// Song library plus a single playback channel
pub trait MediaPlayer {
    fn songs(&self) -> &[Song];

    fn is_playing(&self) -> bool;

    /// Start looping the song at `index`, replacing whatever is playing
    fn play(&mut self, index: usize) -> Result<(), MediaError>;

    fn stop(&mut self);
}

/// Media backend that has no songs
#[derive(Debug, Default)]
pub struct NullMedia;

impl MediaPlayer for NullMedia {
    fn songs(&self) -> &[Song] {
        &[]
    }

    fn is_playing(&self) -> bool {
        false
    }

    fn play(&mut self, index: usize) -> Result<(), MediaError> {
        Err(MediaError::NoSuchSong(index))
    }

    fn stop(&mut self) {}
}

/// Validate that the song at `index` exists and may be played
pub fn check_playable(songs: &[Song], index: usize) -> Result<&Song, MediaError> {
    let song = songs.get(index).ok_or(MediaError::NoSuchSong(index))?;
    if song.protected {
        return Err(MediaError::Protected(song.title.clone()));
    }
    Ok(song)
}

/// Build the media backend selected in the config
pub async fn create_player(config: &MediaConfig) -> Box<dyn MediaPlayer> {
    match config.backend {
        MediaBackend::Disabled => Box::new(NullMedia),
        MediaBackend::Macroquad => Box::new(MacroquadMedia::load(config).await),
    }
}
