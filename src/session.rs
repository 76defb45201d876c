//! Per-session settings
//!
//! State that outlives any single screen but not the process: which song
//! the pause menu has selected and which one is playing. Created once in
//! `main` and handed to screens through the screen context.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSettings {
    /// Song highlighted in the pause menu
    pub selected_song: usize,
    /// Song started from the pause menu, if any
    pub playing_song: Option<usize>,
}

impl SessionSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Step the selection forward, wrapping at `song_count`
    pub fn advance_song(&mut self, song_count: usize) {
        if song_count == 0 {
            return;
        }
        self.selected_song = (self.selected_song + 1) % song_count;
    }

    /// Selection clamped into a library of `song_count` songs
    pub fn selected_in(&self, song_count: usize) -> Option<usize> {
        (song_count > 0).then(|| self.selected_song % song_count)
    }
}
