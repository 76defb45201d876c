//! Input state management
//!
//! Keeps the previous and current held actions for every player slot and
//! answers "was this pressed this frame" by comparing the two.

use super::{ActionSet, InputSource, MenuAction};

/// Number of player slots polled every tick
pub const MAX_INPUTS: usize = 4;

/// Edge-detected menu input for all players
#[derive(Debug, Clone, Default)]
pub struct InputState {
    current: [ActionSet; MAX_INPUTS],
    last: [ActionSet; MAX_INPUTS],
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Call once per frame before any screen reads input
    pub fn update(&mut self, source: &mut dyn InputSource) {
        source.poll();
        for player in 0..MAX_INPUTS {
            self.last[player] = self.current[player];
            self.current[player] = source.held(player);
        }
    }

    /// Newly pressed this frame by any player
    pub fn is_new_press(&self, action: MenuAction) -> bool {
        (0..MAX_INPUTS).any(|player| self.is_new_press_for(action, player))
    }

    /// Newly pressed this frame by one player. Out-of-range slots never press.
    pub fn is_new_press_for(&self, action: MenuAction, player: usize) -> bool {
        if player >= MAX_INPUTS {
            return false;
        }
        self.current[player].contains(action) && !self.last[player].contains(action)
    }

    /// Held this frame by any player
    pub fn is_down(&self, action: MenuAction) -> bool {
        self.current.iter().any(|set| set.contains(action))
    }

    pub fn menu_up(&self) -> bool {
        self.is_new_press(MenuAction::MenuUp)
    }

    pub fn menu_down(&self) -> bool {
        self.is_new_press(MenuAction::MenuDown)
    }

    pub fn menu_select(&self) -> bool {
        self.is_new_press(MenuAction::MenuSelect)
    }

    pub fn menu_cancel(&self) -> bool {
        self.is_new_press(MenuAction::MenuCancel)
    }

    pub fn pause_game(&self) -> bool {
        self.is_new_press(MenuAction::PauseGame)
    }

    /// State where `actions` were just pressed by player 0
    #[cfg(test)]
    pub fn pressed(actions: &[MenuAction]) -> Self {
        let mut state = Self::new();
        state.current[0] = actions.iter().copied().collect();
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedInput;

    #[test]
    fn test_press_is_reported_once() {
        let mut source = ScriptedInput::new();
        let mut input = InputState::new();

        source.hold(0, MenuAction::MenuSelect);
        input.update(&mut source);
        assert!(input.menu_select());

        // Still held: no new press
        input.update(&mut source);
        assert!(!input.menu_select());
        assert!(input.is_down(MenuAction::MenuSelect));

        source.release_all();
        input.update(&mut source);
        assert!(!input.is_down(MenuAction::MenuSelect));

        source.hold(0, MenuAction::MenuSelect);
        input.update(&mut source);
        assert!(input.menu_select());
    }

    #[test]
    fn test_any_player() {
        let mut source = ScriptedInput::new();
        let mut input = InputState::new();

        source.hold(2, MenuAction::PauseGame);
        input.update(&mut source);
        assert!(input.pause_game());
        assert!(input.is_new_press_for(MenuAction::PauseGame, 2));
        assert!(!input.is_new_press_for(MenuAction::PauseGame, 0));
        assert!(!input.is_new_press_for(MenuAction::PauseGame, MAX_INPUTS));
    }

    #[test]
    fn test_players_are_independent() {
        let mut source = ScriptedInput::new();
        let mut input = InputState::new();

        source.hold(0, MenuAction::MenuDown);
        input.update(&mut source);

        // Player 1 pressing the same action is still a new press for them
        source.hold(1, MenuAction::MenuDown);
        input.update(&mut source);
        assert!(input.menu_down());
        assert!(!input.is_new_press_for(MenuAction::MenuDown, 0));
        assert!(input.is_new_press_for(MenuAction::MenuDown, 1));
    }

    #[test]
    fn test_poll_called_each_update() {
        let mut source = ScriptedInput::new();
        let mut input = InputState::new();
        input.update(&mut source);
        input.update(&mut source);
        assert_eq!(source.polls, 2);
    }
}
