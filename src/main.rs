//! Alien Game: a small 2D game skeleton
//!
//! A stack of screens with fade transitions (background, loading, menus,
//! gameplay, pause popup) and a frame-strip animated sprite.
//! Configuration is read from `config.ron`.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod config;
mod content;
mod input;
mod media;
mod render;
mod screen;
mod screens;
mod session;
mod sprite;
#[cfg(test)]
mod testing;

use config::{search_paths, user_config_path, ConfigError, GameConfig};
use input::{InputState, MacroquadInput};
use macroquad::logging::{info, warn};
use macroquad::prelude::*;
use render::MacroquadBackend;
use screen::{Screen, ScreenContext, ScreenManager};
use screens::{BackgroundScreen, LoadingScreen, MainMenuScreen};
use session::SessionSettings;
use std::path::PathBuf;

/// First config file found, looking at the command line argument first
fn find_config() -> Result<Option<(GameConfig, PathBuf)>, ConfigError> {
    let cli_path = std::env::args().nth(1);
    GameConfig::load_first(&search_paths(cli_path.as_deref()))
}

fn window_conf() -> Conf {
    let window = find_config()
        .ok()
        .flatten()
        .map(|(config, _)| config.window)
        .unwrap_or_default();

    Conf {
        window_title: format!("{} v{}", window.title, VERSION),
        window_width: window.width,
        window_height: window.height,
        window_resizable: true,
        fullscreen: window.fullscreen,
        ..Default::default()
    }
}

/// Load the config, writing defaults to the user config dir on first run
fn load_config() -> GameConfig {
    match find_config() {
        Ok(Some((config, path))) => {
            info!("Loaded config from {}", path.display());
            config
        }
        Ok(None) => {
            let config = GameConfig::default();
            if let Some(path) = user_config_path() {
                match config.save(&path) {
                    Ok(()) => info!("Wrote default config to {}", path.display()),
                    Err(e) => warn!("Could not write default config: {}", e),
                }
            }
            config
        }
        Err(e) => {
            warn!("Config unreadable, using defaults: {}", e);
            GameConfig::default()
        }
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    let config = load_config();

    let mut backend = MacroquadBackend::new(&config.content_root);
    let mut media = media::create_player(&config.media).await;
    let mut session = SessionSettings::new();
    let mut input = InputState::new();
    let mut source = MacroquadInput::new();

    let mut screens = ScreenManager::new(config.transitions_enabled);
    screens.add_screen(Box::new(BackgroundScreen::new(config.background.clone())));
    let main_menu: Box<dyn Screen> = Box::new(MainMenuScreen::new());
    screens.add_screen(Box::new(LoadingScreen::new(vec![main_menu])));

    info!("=== Alien Game v{} ===", VERSION);

    loop {
        // Track frame start time for FPS limiting
        let frame_start = get_time();
        let dt = get_frame_time();

        input.update(&mut source);

        let mut ctx = ScreenContext::new(&mut backend, media.as_mut(), &mut session, &config);
        screens.update(dt, &mut ctx);
        screens.handle_input(&input, &mut ctx);
        if ctx.quit_requested() || screens.is_empty() {
            info!("Exiting");
            break;
        }

        clear_background(BLACK);
        screens.draw(&mut backend);

        if let Some(target_frame_time) = config.fps_limit.frame_time() {
            let remaining = target_frame_time - (get_time() - frame_start);

            if remaining > 0.0 {
                // Native: use sleep for bulk, then spin-wait for precision
                #[cfg(not(target_arch = "wasm32"))]
                {
                    let spin_margin = 0.002; // 2ms
                    while get_time() - frame_start + spin_margin < target_frame_time {
                        std::thread::sleep(std::time::Duration::from_millis(1));
                    }
                    while get_time() - frame_start < target_frame_time {
                        std::hint::spin_loop();
                    }
                }
                // WASM: the browser paces frames
                #[cfg(target_arch = "wasm32")]
                {
                    while get_time() - frame_start < target_frame_time {}
                }
            }
        }

        next_frame().await;
    }

    media.stop();
}
