//! Logical menu actions
//!
//! Screens never look at keys or buttons directly, only at these actions.

/// Everything a screen can ask the input layer about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuAction {
    MenuUp,
    MenuDown,
    MenuSelect,
    MenuCancel,
    PauseGame,
}

impl MenuAction {
    pub const ALL: [MenuAction; 5] = [
        MenuAction::MenuUp,
        MenuAction::MenuDown,
        MenuAction::MenuSelect,
        MenuAction::MenuCancel,
        MenuAction::PauseGame,
    ];

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

/// Set of actions whose button is held during one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActionSet(u8);

impl ActionSet {
    pub const EMPTY: ActionSet = ActionSet(0);

    pub fn contains(&self, action: MenuAction) -> bool {
        self.0 & action.bit() != 0
    }

    pub fn insert(&mut self, action: MenuAction) {
        self.0 |= action.bit();
    }

    pub fn with(mut self, action: MenuAction) -> Self {
        self.insert(action);
        self
    }

    pub fn union(self, other: ActionSet) -> Self {
        ActionSet(self.0 | other.0)
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

impl FromIterator<MenuAction> for ActionSet {
    fn from_iter<I: IntoIterator<Item = MenuAction>>(iter: I) -> Self {
        let mut set = ActionSet::EMPTY;
        for action in iter {
            set.insert(action);
        }
        set
    }
}
