//! Pause popup over gameplay, also the song picker
//!
//! "SONG:" cycles through the media library, "PLAY" toggles playback of
//! the selected song. Protected songs are listed but cannot be played.

use super::{BackgroundScreen, MainMenuScreen};
use crate::input::InputState;
use crate::media::{MediaPlayer, Song};
use crate::render::Renderer;
use crate::screen::{Menu, MenuEvent, Screen, ScreenContext, Transition};
use crate::session::SessionSettings;
use macroquad::logging::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PauseAction {
    Resume,
    Song,
    Play,
    Quit,
}

pub struct PauseMenuScreen {
    menu: Menu<PauseAction>,
    transition: Transition,
}

impl PauseMenuScreen {
    /// Opens with the playing song selected, if there is one
    pub fn new(session: &mut SessionSettings) -> Self {
        if let Some(playing) = session.playing_song {
            session.selected_song = playing;
        }
        Self {
            menu: Menu::new("Pause")
                .entry("RESUME", PauseAction::Resume)
                .entry("SONG:", PauseAction::Song)
                .entry("PLAY", PauseAction::Play)
                .entry("QUIT", PauseAction::Quit),
            transition: Transition::new(0.5, 0.5).popup(),
        }
    }

    fn refresh_labels(&mut self, media: &dyn MediaPlayer, session: &SessionSettings) {
        let (song, play) = song_labels(media.songs(), session, media.is_playing());
        self.menu.set_text(PauseAction::Song, song);
        self.menu.set_text(PauseAction::Play, play);
    }

    fn toggle_playback(ctx: &mut ScreenContext<'_>) {
        let Some(index) = ctx.session.selected_in(ctx.media.songs().len()) else {
            return;
        };
        if ctx.media.is_playing() {
            ctx.media.stop();
            ctx.session.playing_song = None;
            return;
        }
        match ctx.media.play(index) {
            Ok(()) => {
                info!("Playing song {}", index);
                ctx.session.playing_song = Some(index);
            }
            Err(e) => warn!("Cannot play song: {}", e),
        }
    }
}

/// Text for the song and play entries
fn song_labels(songs: &[Song], session: &SessionSettings, playing: bool) -> (String, String) {
    let Some(song) = session.selected_in(songs.len()).map(|i| &songs[i]) else {
        return ("(NO SONGS)".to_string(), "-".to_string());
    };
    let drm = if song.protected { " (DRM)" } else { "" };
    let play = if playing {
        "STOP"
    } else if song.protected {
        "-"
    } else {
        "PLAY"
    };
    (format!("SONG: {}{}", song.title, drm), play.to_string())
}

impl Screen for PauseMenuScreen {
    fn name(&self) -> &str {
        "pause_menu"
    }

    fn transition(&self) -> &Transition {
        &self.transition
    }

    fn transition_mut(&mut self) -> &mut Transition {
        &mut self.transition
    }

    fn update(&mut self, dt: f32, ctx: &mut ScreenContext<'_>) {
        self.refresh_labels(&*ctx.media, ctx.session);
        self.menu.update(dt, self.transition.is_active());
    }

    fn handle_input(&mut self, input: &InputState, ctx: &mut ScreenContext<'_>) {
        if input.pause_game() {
            self.transition.exit();
            return;
        }

        match self.menu.handle_input(input) {
            Some(MenuEvent::Selected(PauseAction::Song)) => {
                let count = ctx.media.songs().len();
                ctx.session.advance_song(count);
            }
            Some(MenuEvent::Selected(PauseAction::Play)) => Self::toggle_playback(ctx),
            Some(MenuEvent::Selected(PauseAction::Quit)) => {
                ctx.exit_all();
                ctx.add_screen(Box::new(BackgroundScreen::new(ctx.config.background.clone())));
                ctx.add_screen(Box::new(MainMenuScreen::new()));
            }
            Some(MenuEvent::Selected(PauseAction::Resume)) | Some(MenuEvent::Cancelled) => {
                self.transition.exit();
            }
            None => {}
        }
        self.refresh_labels(&*ctx.media, ctx.session);
    }

    fn draw(&self, renderer: &mut dyn Renderer) {
        renderer.fade_to_black(self.transition.alpha() * 2.0 / 3.0);
        self.menu.draw(renderer, &self.transition);
    }
}
