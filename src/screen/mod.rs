//! Screen stack
//!
//! A game is a stack of screens: background at the bottom, then menus,
//! gameplay and popups on top. The `ScreenManager` drives every screen's
//! `Transition`, decides who gets input and draws them back to front.
//!
//! Screens never touch the stack directly. They queue requests on the
//! `ScreenContext` (add a screen, exit everything, quit) and the manager
//! applies them once the current pass over the stack is finished, so the
//! stack never changes under an iterator.

// Part of the stack API is only driven from tests
#![allow(dead_code)]

mod manager;
mod menu;
mod transition;

pub use manager::ScreenManager;
pub use menu::{Menu, MenuEvent};
pub use transition::{ScreenState, Transition};

use crate::config::GameConfig;
use crate::content::{ContentError, ContentLoader};
use crate::input::InputState;
use crate::media::MediaPlayer;
use crate::render::Renderer;
use crate::session::SessionSettings;
use crate::sprite::AnimationError;
use std::fmt;

/// Stable handle for a screen on the stack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScreenId(pub u64);

/// Screen error types
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenError {
    /// No screen with this id on the stack
    NotFound(ScreenId),
    Content(ContentError),
    Animation(AnimationError),
}

impl fmt::Display for ScreenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScreenError::NotFound(id) => write!(f, "screen {} is not on the stack", id.0),
            ScreenError::Content(e) => write!(f, "content: {}", e),
            ScreenError::Animation(e) => write!(f, "animation: {}", e),
        }
    }
}

impl std::error::Error for ScreenError {}

impl From<ContentError> for ScreenError {
    fn from(e: ContentError) -> Self {
        ScreenError::Content(e)
    }
}

impl From<AnimationError> for ScreenError {
    fn from(e: AnimationError) -> Self {
        ScreenError::Animation(e)
    }
}

/// One layer of the UI
pub trait Screen {
    /// Short name for logs
    fn name(&self) -> &str;

    fn transition(&self) -> &Transition;

    fn transition_mut(&mut self) -> &mut Transition;

    /// Called once before the screen's first update. An error makes the
    /// manager log it and exit the screen.
    fn load_content(&mut self, _content: &mut dyn ContentLoader) -> Result<(), ScreenError> {
        Ok(())
    }

    /// Called when the screen leaves the stack
    fn unload_content(&mut self) {}

    /// Every tick, for every screen, after its transition has advanced
    fn update(&mut self, _dt: f32, _ctx: &mut ScreenContext<'_>) {}

    /// Only for screens in the focus chain
    fn handle_input(&mut self, _input: &InputState, _ctx: &mut ScreenContext<'_>) {}

    /// Never called while Hidden
    fn draw(&self, _renderer: &mut dyn Renderer) {}
}

/// Snapshot of the stack taken at the start of a pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StackInfo {
    pub len: usize,
    /// Screens currently fading out to be removed
    pub exiting: usize,
}

/// Requests a screen can make of the manager
pub(crate) enum ScreenCommand {
    Add(Box<dyn Screen>),
    ExitAll,
}

/// Services and deferred requests available to screens during a pass
pub struct ScreenContext<'a> {
    pub content: &'a mut dyn ContentLoader,
    pub media: &'a mut dyn MediaPlayer,
    pub session: &'a mut SessionSettings,
    pub config: &'a GameConfig,
    pub(crate) stack: StackInfo,
    commands: Vec<ScreenCommand>,
    quit: bool,
}

impl<'a> ScreenContext<'a> {
    pub fn new(
        content: &'a mut dyn ContentLoader,
        media: &'a mut dyn MediaPlayer,
        session: &'a mut SessionSettings,
        config: &'a GameConfig,
    ) -> Self {
        Self {
            content,
            media,
            session,
            config,
            stack: StackInfo::default(),
            commands: Vec::new(),
            quit: false,
        }
    }

    /// Push a screen once the current pass ends
    pub fn add_screen(&mut self, screen: Box<dyn Screen>) {
        self.commands.push(ScreenCommand::Add(screen));
    }

    /// Exit every screen on the stack once the current pass ends.
    /// Screens added after this call in the same pass are kept.
    pub fn exit_all(&mut self) {
        self.commands.push(ScreenCommand::ExitAll);
    }

    /// Ask the game loop to shut down
    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    pub fn stack(&self) -> StackInfo {
        self.stack
    }

    pub(crate) fn take_commands(&mut self) -> Vec<ScreenCommand> {
        std::mem::take(&mut self.commands)
    }
}
