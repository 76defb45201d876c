//! Animated sprite drawn from a frame strip

use super::{AnimationError, FrameAnimator};
use crate::content::{ContentLoader, TextureInfo};
use crate::render::{Renderer, SpriteDraw};
use crate::screen::ScreenError;
use macroquad::prelude::{Color, Rect, Vec2};

/// Placement applied to every frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteTransform {
    /// Pivot in frame pixels
    pub origin: Vec2,
    /// Radians
    pub rotation: f32,
    pub scale: f32,
    /// 0.0 = front, 1.0 = back
    pub depth: f32,
}

impl Default for SpriteTransform {
    fn default() -> Self {
        Self {
            origin: Vec2::ZERO,
            rotation: 0.0,
            scale: 1.0,
            depth: 0.5,
        }
    }
}

/// Frame 0's rectangle within the strip; frame n sits n widths to the right
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameRect {
    pub left: u32,
    pub top: u32,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone)]
pub struct AnimatedSprite {
    pub transform: SpriteTransform,
    texture: Option<TextureInfo>,
    rect: FrameRect,
    animator: FrameAnimator,
}

impl AnimatedSprite {
    pub fn new(transform: SpriteTransform) -> Self {
        Self {
            transform,
            texture: None,
            rect: FrameRect { left: 0, top: 0, width: 0, height: 0 },
            animator: FrameAnimator::default(),
        }
    }

    /// Load a strip of `frame_count` frames. Frames default to an equal
    /// share of the texture width and its full height.
    pub fn load(
        &mut self,
        content: &mut dyn ContentLoader,
        asset: &str,
        frame_count: usize,
        frames_per_second: f32,
    ) -> Result<(), ScreenError> {
        let mut animator = self.animator.clone();
        animator.load(frame_count, frames_per_second)?;
        let texture = content.load_texture(asset)?;
        let width = u32::try_from(frame_count)
            .ok()
            .map(|count| texture.width / count)
            .filter(|&width| width > 0)
            .ok_or(AnimationError::StripTooNarrow {
                frame_count,
                texture_width: texture.width,
            })?;

        self.rect = FrameRect {
            left: 0,
            top: 0,
            width,
            height: texture.height,
        };
        self.texture = Some(texture);
        self.animator = animator;
        Ok(())
    }

    pub fn is_loaded(&self) -> bool {
        self.texture.is_some()
    }

    /// Override the frame rectangle (strips with padding or several rows)
    pub fn set_rect(&mut self, left: u32, top: u32, width: u32, height: u32) {
        self.rect = FrameRect { left, top, width, height };
    }

    pub fn rect(&self) -> FrameRect {
        self.rect
    }

    pub fn set_frames_per_second(&mut self, frames_per_second: f32) -> Result<(), ScreenError> {
        self.animator.set_frames_per_second(frames_per_second)?;
        Ok(())
    }

    pub fn update_frame(&mut self, dt: f32) {
        self.animator.advance(dt);
    }

    pub fn reset(&mut self) {
        self.animator.reset();
    }

    pub fn pause(&mut self) {
        self.animator.pause();
    }

    pub fn play(&mut self) {
        self.animator.play();
    }

    pub fn stop(&mut self) {
        self.animator.stop();
    }

    pub fn frame(&self) -> usize {
        self.animator.frame()
    }

    pub fn frame_count(&self) -> usize {
        self.animator.frame_count()
    }

    pub fn is_paused(&self) -> bool {
        self.animator.is_paused()
    }

    /// Size of one frame after scaling
    pub fn frame_size(&self) -> Vec2 {
        Vec2::new(self.rect.width as f32, self.rect.height as f32) * self.transform.scale
    }

    /// Texture rectangle of frame `frame`. Offsets past `u32::MAX` saturate.
    pub fn source_rect(&self, frame: usize) -> Rect {
        let offset = u32::try_from(frame)
            .unwrap_or(u32::MAX)
            .saturating_mul(self.rect.width);
        Rect::new(
            self.rect.left.saturating_add(offset) as f32,
            self.rect.top as f32,
            self.rect.width as f32,
            self.rect.height as f32,
        )
    }

    /// Draw the current frame
    pub fn draw(&self, renderer: &mut dyn Renderer, position: Vec2) {
        self.draw_frame(renderer, self.animator.frame(), position);
    }

    pub fn draw_frame(&self, renderer: &mut dyn Renderer, frame: usize, position: Vec2) {
        self.draw_tinted(renderer, frame, position, Color::new(1.0, 1.0, 1.0, 1.0));
    }

    pub fn draw_tinted(&self, renderer: &mut dyn Renderer, frame: usize, position: Vec2, tint: Color) {
        let Some(texture) = self.texture else {
            return;
        };
        renderer.draw_sprite(SpriteDraw {
            source: Some(self.source_rect(frame)),
            tint,
            rotation: self.transform.rotation,
            origin: self.transform.origin,
            scale: self.transform.scale,
            depth: self.transform.depth,
            ..SpriteDraw::new(texture.id, position)
        });
    }
}
