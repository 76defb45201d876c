//! The game's screens
//!
//! Flow: background + loading at startup, loading hands over to the main
//! menu, "play game" clears the stack and loads gameplay, gameplay opens
//! the pause menu as a popup, "quit" from there returns to the main menu.

mod background;
mod gameplay;
mod loading;
mod main_menu;
mod pause_menu;

pub use background::BackgroundScreen;
pub use gameplay::GameplayScreen;
pub use loading::LoadingScreen;
pub use main_menu::MainMenuScreen;
pub use pause_menu::PauseMenuScreen;
