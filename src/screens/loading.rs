//! Hand-over screen between stacks
//!
//! Waits until every exiting screen has left the stack, preloads textures
//! for whatever comes next, then removes itself and adds the next screens.

use crate::content::ContentLoader;
use crate::render::{with_alpha, Renderer};
use crate::screen::{Screen, ScreenContext, ScreenError, ScreenState, Transition};
use macroquad::logging::warn;
use macroquad::prelude::{Color, Vec2};

const MESSAGE: &str = "Loading...";
const MESSAGE_SIZE: f32 = 32.0;

pub struct LoadingScreen {
    preload: Vec<String>,
    next: Vec<Box<dyn Screen>>,
    show_message: bool,
    transition: Transition,
}

impl LoadingScreen {
    pub fn new(next: Vec<Box<dyn Screen>>) -> Self {
        Self {
            preload: Vec::new(),
            next,
            show_message: false,
            transition: Transition::new(0.5, 0.0),
        }
    }

    /// Textures to load before handing over
    pub fn preload<S: Into<String>>(mut self, assets: impl IntoIterator<Item = S>) -> Self {
        self.preload = assets.into_iter().map(Into::into).collect();
        self
    }

    /// Show "Loading..." while waiting
    pub fn with_message(mut self) -> Self {
        self.show_message = true;
        self
    }
}

impl Screen for LoadingScreen {
    fn name(&self) -> &str {
        "loading"
    }

    fn transition(&self) -> &Transition {
        &self.transition
    }

    fn transition_mut(&mut self) -> &mut Transition {
        &mut self.transition
    }

    /// Loaders cache by name, so the next screens find these already loaded
    fn load_content(&mut self, content: &mut dyn ContentLoader) -> Result<(), ScreenError> {
        for asset in &self.preload {
            if let Err(e) = content.load_texture(asset) {
                warn!("Preload of '{}' failed: {}", asset, e);
            }
        }
        Ok(())
    }

    fn update(&mut self, _dt: f32, ctx: &mut ScreenContext<'_>) {
        if self.transition.is_exiting() {
            return;
        }
        let others_gone = ctx.stack().exiting == 0;
        if self.transition.state() == ScreenState::Active && others_gone {
            self.transition.exit();
            for screen in self.next.drain(..) {
                ctx.add_screen(screen);
            }
        }
    }

    fn draw(&self, renderer: &mut dyn Renderer) {
        if !self.show_message {
            return;
        }
        let screen = renderer.screen_size();
        let size = renderer.measure_text(MESSAGE, MESSAGE_SIZE);
        let position = Vec2::new((screen.x - size.x) * 0.5, (screen.y + size.y) * 0.5);
        let color = with_alpha(Color::new(1.0, 1.0, 1.0, 1.0), self.transition.alpha());
        renderer.draw_text(MESSAGE, position, MESSAGE_SIZE, color);
    }
}
