//! Content loading
//!
//! Resolves asset names ("background", "alien") to texture handles.
//! Names map to files under the content root; a name without an extension
//! gets `.png`. Loaders cache by name, so asking twice is cheap.

use crate::render::TextureId;
use image::RgbaImage;
use std::fmt;
use std::path::{Path, PathBuf};

/// A loaded texture and its pixel size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureInfo {
    pub id: TextureId,
    pub width: u32,
    pub height: u32,
}

/// Content error types
#[derive(Debug, Clone, PartialEq)]
pub enum ContentError {
    /// No file for this asset name
    NotFound(String),
    /// File exists but is not a readable image
    Decode { asset: String, message: String },
    /// Other I/O error
    IoError(String),
}

impl fmt::Display for ContentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentError::NotFound(asset) => write!(f, "asset not found: {}", asset),
            ContentError::Decode { asset, message } => {
                write!(f, "failed to decode {}: {}", asset, message)
            }
            ContentError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl std::error::Error for ContentError {}

impl From<std::io::Error> for ContentError {
    fn from(e: std::io::Error) -> Self {
        match e.kind() {
            std::io::ErrorKind::NotFound => ContentError::NotFound(e.to_string()),
            _ => ContentError::IoError(e.to_string()),
        }
    }
}

/// Something that can turn an asset name into a texture
pub trait ContentLoader {
    fn load_texture(&mut self, asset: &str) -> Result<TextureInfo, ContentError>;
}

/// File path for an asset name
pub fn asset_path(root: &Path, asset: &str) -> PathBuf {
    let path = root.join(asset);
    if path.extension().is_some() {
        path
    } else {
        path.with_extension("png")
    }
}

/// Read and decode an asset into RGBA pixels
pub fn read_image(root: &Path, asset: &str) -> Result<RgbaImage, ContentError> {
    let path = asset_path(root, asset);
    let bytes = std::fs::read(&path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => ContentError::NotFound(path.display().to_string()),
        _ => ContentError::from(e),
    })?;
    decode_image(asset, &bytes)
}

/// Decode image bytes (PNG, JPEG or BMP) into RGBA pixels
pub fn decode_image(asset: &str, bytes: &[u8]) -> Result<RgbaImage, ContentError> {
    let img = image::load_from_memory(bytes).map_err(|e| ContentError::Decode {
        asset: asset.to_string(),
        message: e.to_string(),
    })?;
    Ok(img.to_rgba8())
}
