//! Rendering abstraction
//!
//! Screens and sprites describe what to draw through the `Renderer` trait;
//! the macroquad backend turns those requests into draw calls. Keeping the
//! trait small lets the screen stack run headless in tests.

mod backend;

pub use backend::MacroquadBackend;

use macroquad::prelude::{Color, Rect, Vec2};

/// Handle to a texture owned by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureId(pub u32);

/// One textured quad
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteDraw {
    pub texture: TextureId,
    /// Where the origin point lands on screen
    pub position: Vec2,
    /// Sub-rectangle of the texture (None = whole texture)
    pub source: Option<Rect>,
    /// Explicit destination size, overrides `scale`
    pub dest_size: Option<Vec2>,
    pub tint: Color,
    /// Radians, around `position`
    pub rotation: f32,
    /// Pivot in source-pixel coordinates
    pub origin: Vec2,
    pub scale: f32,
    /// 0.0 = front, 1.0 = back
    pub depth: f32,
}

impl SpriteDraw {
    pub fn new(texture: TextureId, position: Vec2) -> Self {
        Self {
            texture,
            position,
            source: None,
            dest_size: None,
            tint: Color::new(1.0, 1.0, 1.0, 1.0),
            rotation: 0.0,
            origin: Vec2::ZERO,
            scale: 1.0,
            depth: 0.0,
        }
    }
}

/// Draw target used by screens
pub trait Renderer {
    /// Size of the drawable area in pixels
    fn screen_size(&self) -> Vec2;

    fn draw_sprite(&mut self, sprite: SpriteDraw);

    fn draw_text(&mut self, text: &str, position: Vec2, font_size: f32, color: Color);

    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Width and height of `text` at `font_size`
    fn measure_text(&self, text: &str, font_size: f32) -> Vec2 {
        // Approximation for monospace-ish fonts
        Vec2::new(text.chars().count() as f32 * font_size * 0.55, font_size)
    }

    /// Darken everything drawn so far
    fn fade_to_black(&mut self, alpha: f32) {
        let size = self.screen_size();
        self.fill_rect(
            Rect::new(0.0, 0.0, size.x, size.y),
            Color::new(0.0, 0.0, 0.0, alpha.clamp(0.0, 1.0)),
        );
    }

    /// Submit any batched sprites. Called after each screen draws.
    fn flush(&mut self) {}
}

/// Scale a color's alpha (premultiplied-style fade used by transitions)
pub fn with_alpha(color: Color, alpha: f32) -> Color {
    Color::new(color.r, color.g, color.b, color.a * alpha.clamp(0.0, 1.0))
}

/// Sort key for back-to-front submission: larger depth draws first.
/// Stable, so equal depths keep submission order.
pub fn sort_back_to_front(batch: &mut [SpriteDraw]) {
    batch.sort_by(|a, b| b.depth.total_cmp(&a.depth));
}
