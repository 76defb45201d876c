//! Headless stand-ins for the engine-facing traits, shared by unit tests

use crate::config::GameConfig;
use crate::content::{ContentError, ContentLoader, TextureInfo};
use crate::input::{ActionSet, InputSource, InputState, MenuAction, MAX_INPUTS};
use crate::media::{check_playable, MediaError, MediaPlayer, Song};
use crate::render::{Renderer, SpriteDraw, TextureId};
use crate::screen::{Screen, ScreenContext, ScreenError, Transition};
use crate::session::SessionSettings;
use macroquad::prelude::{Color, Rect, Vec2};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Content loader over an in-memory table of texture sizes
#[derive(Debug, Default)]
pub struct FakeContent {
    textures: HashMap<String, (u32, u32)>,
    ids: HashMap<String, TextureId>,
    /// Every requested asset name, in order
    pub requests: Vec<String>,
}

impl FakeContent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_texture(mut self, asset: &str, width: u32, height: u32) -> Self {
        self.textures.insert(asset.to_string(), (width, height));
        self
    }
}

impl ContentLoader for FakeContent {
    fn load_texture(&mut self, asset: &str) -> Result<TextureInfo, ContentError> {
        self.requests.push(asset.to_string());
        let (width, height) = *self
            .textures
            .get(asset)
            .ok_or_else(|| ContentError::NotFound(asset.to_string()))?;
        let next = TextureId(self.ids.len() as u32);
        let id = *self.ids.entry(asset.to_string()).or_insert(next);
        Ok(TextureInfo { id, width, height })
    }
}

/// One recorded renderer call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Sprite(SpriteDraw),
    Text { text: String, position: Vec2, size: f32, color: Color },
    Fill { rect: Rect, color: Color },
    Flush,
}

/// Renderer that records calls instead of drawing
#[derive(Debug)]
pub struct FakeRenderer {
    pub size: Vec2,
    pub calls: Vec<DrawCall>,
}

impl FakeRenderer {
    pub fn new() -> Self {
        Self {
            size: Vec2::new(800.0, 600.0),
            calls: Vec::new(),
        }
    }

    pub fn flushes(&self) -> usize {
        self.calls.iter().filter(|c| matches!(c, DrawCall::Flush)).count()
    }

    pub fn sprites(&self) -> Vec<SpriteDraw> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Sprite(s) => Some(*s),
                _ => None,
            })
            .collect()
    }

    pub fn texts(&self) -> Vec<String> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Text { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }
}

impl Renderer for FakeRenderer {
    fn screen_size(&self) -> Vec2 {
        self.size
    }

    fn draw_sprite(&mut self, sprite: SpriteDraw) {
        self.calls.push(DrawCall::Sprite(sprite));
    }

    fn draw_text(&mut self, text: &str, position: Vec2, font_size: f32, color: Color) {
        self.calls.push(DrawCall::Text {
            text: text.to_string(),
            position,
            size: font_size,
            color,
        });
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.calls.push(DrawCall::Fill { rect, color });
    }

    fn flush(&mut self) {
        self.calls.push(DrawCall::Flush);
    }
}

/// Media player with a fixed library and no audio
#[derive(Debug, Default)]
pub struct FakeMedia {
    songs: Vec<Song>,
    pub playing: Option<usize>,
}

impl FakeMedia {
    pub fn with_songs(songs: &[(&str, bool)]) -> Self {
        Self {
            songs: songs
                .iter()
                .map(|(title, protected)| Song {
                    title: title.to_string(),
                    protected: *protected,
                })
                .collect(),
            playing: None,
        }
    }
}

impl MediaPlayer for FakeMedia {
    fn songs(&self) -> &[Song] {
        &self.songs
    }

    fn is_playing(&self) -> bool {
        self.playing.is_some()
    }

    fn play(&mut self, index: usize) -> Result<(), MediaError> {
        check_playable(&self.songs, index)?;
        self.playing = Some(index);
        Ok(())
    }

    fn stop(&mut self) {
        self.playing = None;
    }
}

/// Input source driven by the test
#[derive(Debug, Default)]
pub struct ScriptedInput {
    held: [ActionSet; MAX_INPUTS],
    pub polls: usize,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hold(&mut self, player: usize, action: MenuAction) {
        self.held[player].insert(action);
    }

    pub fn release_all(&mut self) {
        self.held = [ActionSet::EMPTY; MAX_INPUTS];
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) {
        self.polls += 1;
    }

    fn held(&mut self, player: usize) -> ActionSet {
        self.held[player]
    }
}

/// Owns everything a `ScreenContext` borrows
pub struct Harness {
    pub content: FakeContent,
    pub media: FakeMedia,
    pub session: SessionSettings,
    pub config: GameConfig,
}

impl Harness {
    pub fn new() -> Self {
        Self {
            content: FakeContent::new(),
            media: FakeMedia::default(),
            session: SessionSettings::new(),
            config: GameConfig::default(),
        }
    }

    pub fn ctx(&mut self) -> ScreenContext<'_> {
        ScreenContext::new(&mut self.content, &mut self.media, &mut self.session, &self.config)
    }
}

pub type CallLog = Rc<RefCell<Vec<String>>>;

pub fn call_log() -> CallLog {
    Rc::new(RefCell::new(Vec::new()))
}

/// Screen that appends "name:event" to a shared log
pub struct RecordingScreen {
    name: String,
    log: CallLog,
    transition: Transition,
    pub exit_on_update: bool,
    /// Add "name-child" on the next update
    pub spawn_on_update: bool,
    pub fail_load: bool,
    /// On input: exit everything, then add "name-child"
    pub restart_on_input: bool,
}

impl RecordingScreen {
    pub fn new(name: impl Into<String>, log: &CallLog) -> Self {
        Self {
            name: name.into(),
            log: Rc::clone(log),
            transition: Transition::new(0.0, 0.0),
            exit_on_update: false,
            spawn_on_update: false,
            fail_load: false,
            restart_on_input: false,
        }
    }

    pub fn timed(mut self, on_time: f32, off_time: f32) -> Self {
        self.transition.on_time = on_time;
        self.transition.off_time = off_time;
        self
    }

    pub fn popup(mut self) -> Self {
        self.transition = self.transition.popup();
        self
    }

    pub fn always_visible(mut self) -> Self {
        self.transition = self.transition.always_visible();
        self
    }

    fn record(&self, event: &str) {
        self.log.borrow_mut().push(format!("{}:{}", self.name, event));
    }

    fn child(&self) -> Box<dyn Screen> {
        Box::new(RecordingScreen::new(format!("{}-child", self.name), &self.log))
    }
}

impl Screen for RecordingScreen {
    fn name(&self) -> &str {
        &self.name
    }

    fn transition(&self) -> &Transition {
        &self.transition
    }

    fn transition_mut(&mut self) -> &mut Transition {
        &mut self.transition
    }

    fn load_content(&mut self, _content: &mut dyn ContentLoader) -> Result<(), ScreenError> {
        self.record("load");
        if self.fail_load {
            return Err(ContentError::NotFound(self.name.clone()).into());
        }
        Ok(())
    }

    fn unload_content(&mut self) {
        self.record("unload");
    }

    fn update(&mut self, _dt: f32, ctx: &mut ScreenContext<'_>) {
        self.record("update");
        if self.exit_on_update {
            self.transition.exit();
        }
        if self.spawn_on_update {
            self.spawn_on_update = false;
            ctx.add_screen(self.child());
        }
    }

    fn handle_input(&mut self, _input: &InputState, ctx: &mut ScreenContext<'_>) {
        self.record("input");
        if self.restart_on_input {
            ctx.exit_all();
            ctx.add_screen(self.child());
        }
    }

    fn draw(&self, _renderer: &mut dyn Renderer) {
        self.record("draw");
    }
}
