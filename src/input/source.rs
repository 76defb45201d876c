//! Raw device sources
//!
//! An `InputSource` reports which logical actions are held right now.
//! Edge detection happens one level up in `InputState`.

use super::gamepad::{button, Gamepads};
use super::{ActionSet, MenuAction};
use macroquad::prelude::{is_key_down, KeyCode};

/// Per-tick provider of held actions
pub trait InputSource {
    /// Pump device events. Called once per tick before `held`.
    fn poll(&mut self) {}

    /// Actions whose button is down for `player`
    fn held(&mut self, player: usize) -> ActionSet;
}

/// Keyboard for player 0, gamepads for players 0..MAX_INPUTS
pub struct MacroquadInput {
    gamepads: Gamepads,
}

impl MacroquadInput {
    pub fn new() -> Self {
        Self { gamepads: Gamepads::new() }
    }

    fn keyboard_action(action: MenuAction) -> KeyCode {
        match action {
            MenuAction::MenuUp => KeyCode::Up,
            MenuAction::MenuDown => KeyCode::Down,
            MenuAction::MenuSelect => KeyCode::Enter,
            MenuAction::MenuCancel => KeyCode::Backspace,
            MenuAction::PauseGame => KeyCode::Escape,
        }
    }

    fn gamepad_button(action: MenuAction) -> u32 {
        match action {
            MenuAction::MenuUp => button::DPAD_UP,
            MenuAction::MenuDown => button::DPAD_DOWN,
            MenuAction::MenuSelect => button::A,
            MenuAction::MenuCancel => button::B,
            MenuAction::PauseGame => button::START,
        }
    }
}

impl Default for MacroquadInput {
    fn default() -> Self {
        Self::new()
    }
}

impl InputSource for MacroquadInput {
    fn poll(&mut self) {
        self.gamepads.poll();
    }

    fn held(&mut self, player: usize) -> ActionSet {
        let mask = self.gamepads.button_mask(player);
        MenuAction::ALL
            .into_iter()
            .filter(|&action| {
                let key = player == 0 && is_key_down(Self::keyboard_action(action));
                let pad = mask & (1 << Self::gamepad_button(action)) != 0;
                key || pad
            })
            .collect()
    }
}
