//! Game configuration
//!
//! Stored as RON. Every field has a default, so a config file only needs
//! the settings it changes. Lookup order: path given on the command line,
//! `./config.ron`, then `<config dir>/alien-game/config.ron`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// File name searched for in the working directory and the config dir
pub const CONFIG_FILE: &str = "config.ron";

/// Config error types
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    NotFound(String),
    IoError(String),
    /// Malformed RON or wrong field types
    ParseError(String),
    SerializeError(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NotFound(path) => write!(f, "config not found: {}", path),
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
            ConfigError::ParseError(msg) => write!(f, "invalid config: {}", msg),
            ConfigError::SerializeError(msg) => write!(f, "could not serialize config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        match e.kind() {
            std::io::ErrorKind::NotFound => ConfigError::NotFound(e.to_string()),
            _ => ConfigError::IoError(e.to_string()),
        }
    }
}

/// FPS limit setting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FpsLimit {
    Fps30,
    #[default]
    Fps60,
    /// As fast as the display allows
    Unlocked,
}

impl FpsLimit {
    /// Get the target frame time in seconds (None = unlocked)
    pub fn frame_time(&self) -> Option<f64> {
        match self {
            FpsLimit::Fps30 => Some(1.0 / 30.0),
            FpsLimit::Fps60 => Some(1.0 / 60.0),
            FpsLimit::Unlocked => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: i32,
    pub height: i32,
    pub fullscreen: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Alien Game".to_string(),
            width: 480,
            height: 360,
            fullscreen: false,
        }
    }
}

/// The animated sprite shown during gameplay
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpriteConfig {
    /// Frame-strip asset name
    pub asset: String,
    pub frame_count: usize,
    pub frames_per_second: f32,
    /// Frame size in pixels; None = strip width / frame count, full height
    pub frame_width: Option<u32>,
    pub frame_height: Option<u32>,
    pub scale: f32,
}

impl Default for SpriteConfig {
    fn default() -> Self {
        Self {
            asset: "alien".to_string(),
            frame_count: 4,
            frames_per_second: 8.0,
            frame_width: None,
            frame_height: None,
            scale: 2.0,
        }
    }
}

/// Which media implementation to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MediaBackend {
    /// No music library
    #[default]
    Disabled,
    /// Songs played through macroquad audio
    Macroquad,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SongConfig {
    pub title: String,
    pub path: String,
    #[serde(default)]
    pub protected: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaConfig {
    pub backend: MediaBackend,
    pub volume: f32,
    pub songs: Vec<SongConfig>,
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            backend: MediaBackend::Disabled,
            volume: 0.8,
            songs: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    /// Animate screen transitions (off = screens snap on and off)
    pub transitions_enabled: bool,
    pub fps_limit: FpsLimit,
    /// Directory asset names are resolved against
    pub content_root: String,
    /// Asset drawn behind the menus
    pub background: String,
    pub sprite: SpriteConfig,
    pub media: MediaConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            transitions_enabled: true,
            fps_limit: FpsLimit::default(),
            content_root: "content".to_string(),
            background: "background".to_string(),
            sprite: SpriteConfig::default(),
            media: MediaConfig::default(),
        }
    }
}

impl GameConfig {
    pub fn from_ron(text: &str) -> Result<Self, ConfigError> {
        ron::from_str(text).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    pub fn to_ron(&self) -> Result<String, ConfigError> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| ConfigError::SerializeError(e.to_string()))
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ConfigError::NotFound(path.display().to_string()),
            _ => ConfigError::from(e),
        })?;
        Self::from_ron(&text)
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_ron()?)?;
        Ok(())
    }

    /// Load the first config found in `paths`. A missing file moves on to
    /// the next candidate; any other error stops the search.
    pub fn load_first(paths: &[PathBuf]) -> Result<Option<(Self, PathBuf)>, ConfigError> {
        for path in paths {
            match Self::load(path) {
                Ok(config) => return Ok(Some((config, path.clone()))),
                Err(ConfigError::NotFound(_)) => continue,
                Err(e) => return Err(e),
            }
        }
        Ok(None)
    }
}

/// Per-user config location, if the platform has one
pub fn user_config_path() -> Option<PathBuf> {
    #[cfg(not(target_arch = "wasm32"))]
    {
        dirs::config_dir().map(|dir| dir.join("alien-game").join(CONFIG_FILE))
    }
    #[cfg(target_arch = "wasm32")]
    {
        None
    }
}

/// Candidate config files in lookup order
pub fn search_paths(cli_path: Option<&str>) -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Some(path) = cli_path {
        paths.push(PathBuf::from(path));
    }
    paths.push(PathBuf::from(CONFIG_FILE));
    if let Some(path) = user_config_path() {
        paths.push(path);
    }
    paths
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_round_trip() {
        let config = GameConfig::default();
        let text = config.to_ron().unwrap();
        assert_eq!(GameConfig::from_ron(&text).unwrap(), config);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let text = r#"(
            transitions_enabled: false,
            sprite: (frame_count: 6),
            media: (
                backend: Macroquad,
                songs: [(title: "Theme", path: "music/theme.ogg")],
            ),
        )"#;
        let config = GameConfig::from_ron(text).unwrap();

        assert!(!config.transitions_enabled);
        assert_eq!(config.sprite.frame_count, 6);
        assert_eq!(config.sprite.asset, "alien");
        assert_eq!(config.window.width, 480);
        assert_eq!(config.media.backend, MediaBackend::Macroquad);
        assert_eq!(config.media.songs.len(), 1);
        assert!(!config.media.songs[0].protected);
    }

    #[test]
    fn test_malformed_config() {
        let result = GameConfig::from_ron("(window: (width: \"wide\"))");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
        assert!(matches!(GameConfig::from_ron("(((("), Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE);

        let mut config = GameConfig::default();
        config.fps_limit = FpsLimit::Unlocked;
        config.window.title = "Test".to_string();
        config.save(&path).unwrap();

        let loaded = GameConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_first_skips_missing() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.ron");
        let present = dir.path().join("present.ron");
        std::fs::write(&present, "(content_root: \"assets\")").unwrap();

        let found = GameConfig::load_first(&[missing.clone(), present.clone()]).unwrap();
        let (config, path) = found.unwrap();
        assert_eq!(config.content_root, "assets");
        assert_eq!(path, present);

        assert!(GameConfig::load_first(&[missing]).unwrap().is_none());
    }

    #[test]
    fn test_load_first_stops_on_bad_file() {
        let dir = TempDir::new().unwrap();
        let bad = dir.path().join("bad.ron");
        let good = dir.path().join("good.ron");
        std::fs::write(&bad, "not ron at all {").unwrap();
        std::fs::write(&good, "()").unwrap();

        let result = GameConfig::load_first(&[bad, good]);
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_search_paths_order() {
        let paths = search_paths(Some("custom.ron"));
        assert_eq!(paths[0], PathBuf::from("custom.ron"));
        assert_eq!(paths[1], PathBuf::from(CONFIG_FILE));
    }

    #[test]
    fn test_fps_limit_frame_time() {
        assert_eq!(FpsLimit::Unlocked.frame_time(), None);
        assert!((FpsLimit::Fps30.frame_time().unwrap() - 1.0 / 30.0).abs() < 1e-9);
    }
}
