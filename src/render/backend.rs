//! macroquad backend
//!
//! Owns every GPU texture, serves as the content loader (decoding files with
//! the `image` crate) and the renderer. Sprites are batched per screen and
//! submitted back-to-front on flush, like a depth-sorted sprite batch.

use super::{sort_back_to_front, Renderer, SpriteDraw, TextureId};
use crate::content::{read_image, ContentError, ContentLoader, TextureInfo};
use macroquad::logging::{info, warn};
use macroquad::prelude::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub struct MacroquadBackend {
    content_root: PathBuf,
    textures: Vec<Texture2D>,
    by_name: HashMap<String, TextureInfo>,
    batch: Vec<SpriteDraw>,
}

impl MacroquadBackend {
    pub fn new(content_root: impl AsRef<Path>) -> Self {
        Self {
            content_root: content_root.as_ref().to_path_buf(),
            textures: Vec::new(),
            by_name: HashMap::new(),
            batch: Vec::new(),
        }
    }

    fn submit(&self, sprite: &SpriteDraw) {
        let Some(texture) = self.textures.get(sprite.texture.0 as usize) else {
            warn!("Dropping draw for unknown texture {:?}", sprite.texture);
            return;
        };

        let source = sprite
            .source
            .unwrap_or_else(|| Rect::new(0.0, 0.0, texture.width(), texture.height()));
        if source.w <= 0.0 || source.h <= 0.0 {
            return;
        }
        let size = sprite
            .dest_size
            .unwrap_or_else(|| vec2(source.w * sprite.scale, source.h * sprite.scale));
        let stretch = vec2(size.x / source.w, size.y / source.h);
        let top_left = sprite.position - sprite.origin * stretch;

        draw_texture_ex(
            texture,
            top_left.x,
            top_left.y,
            sprite.tint,
            DrawTextureParams {
                dest_size: Some(size),
                source: Some(source),
                rotation: sprite.rotation,
                pivot: Some(sprite.position),
                ..Default::default()
            },
        );
    }
}

impl ContentLoader for MacroquadBackend {
    fn load_texture(&mut self, asset: &str) -> Result<TextureInfo, ContentError> {
        if let Some(info) = self.by_name.get(asset) {
            return Ok(*info);
        }

        let image = read_image(&self.content_root, asset)?;
        let (width, height) = image.dimensions();
        if width > u16::MAX as u32 || height > u16::MAX as u32 {
            return Err(ContentError::Decode {
                asset: asset.to_string(),
                message: format!("{}x{} exceeds texture limits", width, height),
            });
        }

        let texture = Texture2D::from_rgba8(width as u16, height as u16, image.as_raw());
        texture.set_filter(FilterMode::Nearest);

        let info = TextureInfo {
            id: TextureId(self.textures.len() as u32),
            width,
            height,
        };
        self.textures.push(texture);
        self.by_name.insert(asset.to_string(), info);
        info!("Loaded texture '{}' ({}x{})", asset, width, height);
        Ok(info)
    }
}

impl Renderer for MacroquadBackend {
    fn screen_size(&self) -> Vec2 {
        vec2(screen_width(), screen_height())
    }

    fn draw_sprite(&mut self, sprite: SpriteDraw) {
        self.batch.push(sprite);
    }

    fn draw_text(&mut self, text: &str, position: Vec2, font_size: f32, color: Color) {
        self.flush();
        let dims = measure_text(text, None, font_size as u16, 1.0);
        draw_text(text, position.x, position.y + dims.offset_y, font_size, color);
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.flush();
        draw_rectangle(rect.x, rect.y, rect.w, rect.h, color);
    }

    fn measure_text(&self, text: &str, font_size: f32) -> Vec2 {
        let dims = measure_text(text, None, font_size as u16, 1.0);
        vec2(dims.width, dims.height)
    }

    fn flush(&mut self) {
        if self.batch.is_empty() {
            return;
        }
        let mut batch = std::mem::take(&mut self.batch);
        sort_back_to_front(&mut batch);
        for sprite in &batch {
            self.submit(sprite);
        }
        batch.clear();
        self.batch = batch;
    }
}
