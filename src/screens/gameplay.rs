//! Gameplay: an animated alien in the middle of the screen
//!
//! The sprite only animates while this screen is the active one, so it
//! freezes under the pause menu and during the fade out.

use super::PauseMenuScreen;
use crate::config::SpriteConfig;
use crate::content::ContentLoader;
use crate::input::InputState;
use crate::render::Renderer;
use crate::screen::{Screen, ScreenContext, ScreenError, Transition};
use crate::sprite::{AnimatedSprite, SpriteTransform};
use macroquad::prelude::{Color, Rect, Vec2};

const CORNFLOWER_BLUE: Color = Color::new(0.392, 0.584, 0.929, 1.0);

pub struct GameplayScreen {
    config: SpriteConfig,
    sprite: AnimatedSprite,
    transition: Transition,
}

impl GameplayScreen {
    pub fn new(config: &SpriteConfig) -> Self {
        Self {
            config: config.clone(),
            sprite: AnimatedSprite::new(SpriteTransform {
                scale: config.scale,
                ..SpriteTransform::default()
            }),
            transition: Transition::new(1.5, 0.5),
        }
    }
}

impl Screen for GameplayScreen {
    fn name(&self) -> &str {
        "gameplay"
    }

    fn transition(&self) -> &Transition {
        &self.transition
    }

    fn transition_mut(&mut self) -> &mut Transition {
        &mut self.transition
    }

    fn load_content(&mut self, content: &mut dyn ContentLoader) -> Result<(), ScreenError> {
        let cfg = &self.config;
        self.sprite.load(content, &cfg.asset, cfg.frame_count, cfg.frames_per_second)?;

        if let (Some(width), Some(height)) = (cfg.frame_width, cfg.frame_height) {
            self.sprite.set_rect(0, 0, width, height);
        }
        let rect = self.sprite.rect();
        self.sprite.transform.origin = Vec2::new(rect.width as f32, rect.height as f32) * 0.5;
        Ok(())
    }

    fn update(&mut self, dt: f32, _ctx: &mut ScreenContext<'_>) {
        if self.transition.is_active() {
            self.sprite.play();
            self.sprite.update_frame(dt);
        } else {
            self.sprite.pause();
        }
    }

    fn handle_input(&mut self, input: &InputState, ctx: &mut ScreenContext<'_>) {
        if input.pause_game() && self.transition.is_active() {
            let pause = PauseMenuScreen::new(ctx.session);
            ctx.add_screen(Box::new(pause));
        }
    }

    fn draw(&self, renderer: &mut dyn Renderer) {
        let size = renderer.screen_size();
        renderer.fill_rect(Rect::new(0.0, 0.0, size.x, size.y), CORNFLOWER_BLUE);
        self.sprite.draw(renderer, size * 0.5);

        let alpha = self.transition.alpha();
        if alpha < 1.0 {
            renderer.fade_to_black(1.0 - alpha);
        }
    }
}
