//! Full-screen backdrop behind the menus

use crate::content::{ContentLoader, TextureInfo};
use crate::render::{with_alpha, Renderer, SpriteDraw};
use crate::screen::{Screen, ScreenError, Transition};
use macroquad::logging::warn;
use macroquad::prelude::{Color, Rect, Vec2};

/// Drawn when the backdrop image is missing
const FALLBACK_COLOR: Color = Color::new(0.05, 0.05, 0.12, 1.0);

pub struct BackgroundScreen {
    asset: String,
    texture: Option<TextureInfo>,
    transition: Transition,
}

impl BackgroundScreen {
    pub fn new(asset: impl Into<String>) -> Self {
        Self {
            asset: asset.into(),
            texture: None,
            transition: Transition::new(0.5, 0.5).always_visible(),
        }
    }
}

impl Screen for BackgroundScreen {
    fn name(&self) -> &str {
        "background"
    }

    fn transition(&self) -> &Transition {
        &self.transition
    }

    fn transition_mut(&mut self) -> &mut Transition {
        &mut self.transition
    }

    /// A missing backdrop is not fatal, the screen falls back to a flat color
    fn load_content(&mut self, content: &mut dyn ContentLoader) -> Result<(), ScreenError> {
        match content.load_texture(&self.asset) {
            Ok(texture) => self.texture = Some(texture),
            Err(e) => warn!("Background '{}' unavailable: {}", self.asset, e),
        }
        Ok(())
    }

    fn unload_content(&mut self) {
        self.texture = None;
    }

    fn draw(&self, renderer: &mut dyn Renderer) {
        let size = renderer.screen_size();
        let alpha = self.transition.alpha();

        match self.texture {
            Some(texture) => renderer.draw_sprite(SpriteDraw {
                dest_size: Some(size),
                tint: with_alpha(Color::new(1.0, 1.0, 1.0, 1.0), alpha),
                depth: 1.0,
                ..SpriteDraw::new(texture.id, Vec2::ZERO)
            }),
            None => renderer.fill_rect(
                Rect::new(0.0, 0.0, size.x, size.y),
                with_alpha(FALLBACK_COLOR, alpha),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{DrawCall, FakeContent, FakeRenderer};

    #[test]
    fn test_stretches_texture_to_screen() {
        let mut content = FakeContent::new().with_texture("sky", 64, 32);
        let mut screen = BackgroundScreen::new("sky");
        screen.load_content(&mut content).unwrap();
        screen.transition_mut().begin(false);

        let mut renderer = FakeRenderer::new();
        screen.draw(&mut renderer);
        let sprites = renderer.sprites();
        assert_eq!(sprites.len(), 1);
        assert_eq!(sprites[0].dest_size, Some(renderer.size));
        assert_eq!(sprites[0].tint.a, 1.0);
    }

    #[test]
    fn test_missing_texture_falls_back_to_fill() {
        let mut content = FakeContent::new();
        let mut screen = BackgroundScreen::new("sky");
        assert!(screen.load_content(&mut content).is_ok());
        screen.transition_mut().begin(false);

        let mut renderer = FakeRenderer::new();
        screen.draw(&mut renderer);
        assert!(matches!(renderer.calls[..], [DrawCall::Fill { .. }]));
    }

    #[test]
    fn test_stays_up_when_covered() {
        let screen = BackgroundScreen::new("sky");
        assert!(!screen.transition().hides_when_covered);
        assert!(!screen.transition().is_popup);
    }
}
