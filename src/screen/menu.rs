//! Vertical text menu shared by the menu screens
//!
//! Each entry carries a plain action value. Selecting an entry hands that
//! value back to the owning screen, which matches on it; there are no
//! callbacks to register.

use super::{ScreenState, Transition};
use crate::input::InputState;
use crate::render::{with_alpha, Renderer};
use macroquad::prelude::{Color, Vec2};

const TITLE_COLOR: Color = Color::new(0.75, 0.75, 0.75, 1.0);
const ENTRY_COLOR: Color = Color::new(1.0, 1.0, 1.0, 1.0);
const SELECTED_COLOR: Color = Color::new(1.0, 1.0, 0.0, 1.0);

const TITLE_SIZE: f32 = 40.0;
const ENTRY_SIZE: f32 = 24.0;
const LINE_SPACING: f32 = 30.0;

/// One line of a menu
#[derive(Debug, Clone)]
pub struct MenuEntry<A> {
    pub text: String,
    pub action: A,
    /// 0..1, grows while selected for the pulse effect
    selection_fade: f32,
}

/// Result of feeding input to a menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent<A> {
    Selected(A),
    Cancelled,
}

#[derive(Debug, Clone)]
pub struct Menu<A> {
    pub title: String,
    entries: Vec<MenuEntry<A>>,
    selected: usize,
    time: f32,
}

impl<A: Copy + PartialEq> Menu<A> {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            entries: Vec::new(),
            selected: 0,
            time: 0.0,
        }
    }

    pub fn entry(mut self, text: impl Into<String>, action: A) -> Self {
        self.entries.push(MenuEntry {
            text: text.into(),
            action,
            selection_fade: 0.0,
        });
        self
    }

    pub fn entries(&self) -> &[MenuEntry<A>] {
        &self.entries
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Replace the text of every entry bound to `action`
    pub fn set_text(&mut self, action: A, text: impl Into<String>) {
        let text = text.into();
        for entry in self.entries.iter_mut().filter(|e| e.action == action) {
            entry.text = text.clone();
        }
    }

    pub fn text_of(&self, action: A) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.action == action)
            .map(|e| e.text.as_str())
    }

    /// Up/down move the selection (wrapping), select and cancel report back
    pub fn handle_input(&mut self, input: &InputState) -> Option<MenuEvent<A>> {
        let count = self.entries.len();
        if count > 0 {
            if input.menu_up() {
                self.selected = (self.selected + count - 1) % count;
            }
            if input.menu_down() {
                self.selected = (self.selected + 1) % count;
            }
            if input.menu_select() {
                return Some(MenuEvent::Selected(self.entries[self.selected].action));
            }
        }
        if input.menu_cancel() {
            return Some(MenuEvent::Cancelled);
        }
        None
    }

    /// Advance the selection pulse
    pub fn update(&mut self, dt: f32, is_active: bool) {
        self.time += dt;
        let fade_speed = dt * 4.0;
        for (i, entry) in self.entries.iter_mut().enumerate() {
            entry.selection_fade = if is_active && i == self.selected {
                (entry.selection_fade + fade_speed).min(1.0)
            } else {
                (entry.selection_fade - fade_speed).max(0.0)
            };
        }
    }

    /// Entries slide in from the left and out to the right as the
    /// transition runs; the title drifts up
    pub fn draw(&self, renderer: &mut dyn Renderer, transition: &Transition) {
        let screen = renderer.screen_size();
        let alpha = transition.alpha();
        let offset = transition.position().powi(2);

        let mut position = Vec2::new(screen.x * 0.2, screen.y * 0.4);
        if transition.state() == ScreenState::TransitionOn {
            position.x -= offset * 256.0;
        } else {
            position.x += offset * 512.0;
        }

        for (i, entry) in self.entries.iter().enumerate() {
            let selected = i == self.selected;
            let pulse = ((self.time * 6.0).sin() + 1.0) * 0.5;
            let size = ENTRY_SIZE * (1.0 + pulse * 0.1 * entry.selection_fade);
            let color = if selected { SELECTED_COLOR } else { ENTRY_COLOR };
            renderer.draw_text(&entry.text, position, size, with_alpha(color, alpha));
            position.y += LINE_SPACING;
        }

        let title_size = renderer.measure_text(&self.title, TITLE_SIZE);
        let title_pos = Vec2::new(
            (screen.x - title_size.x) * 0.5,
            screen.y * 0.12 - offset * 100.0,
        );
        renderer.draw_text(&self.title, title_pos, TITLE_SIZE, with_alpha(TITLE_COLOR, alpha));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::MenuAction;
    use crate::testing::{DrawCall, FakeRenderer};

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Choice {
        Start,
        Options,
        Quit,
    }

    fn menu() -> Menu<Choice> {
        Menu::new("Main")
            .entry("START", Choice::Start)
            .entry("OPTIONS", Choice::Options)
            .entry("QUIT", Choice::Quit)
    }

    #[test]
    fn test_navigation_wraps() {
        let mut m = menu();
        m.handle_input(&InputState::pressed(&[MenuAction::MenuUp]));
        assert_eq!(m.selected(), 2);
        m.handle_input(&InputState::pressed(&[MenuAction::MenuDown]));
        assert_eq!(m.selected(), 0);
        m.handle_input(&InputState::pressed(&[MenuAction::MenuDown]));
        assert_eq!(m.selected(), 1);
    }

    #[test]
    fn test_select_returns_action() {
        let mut m = menu();
        m.handle_input(&InputState::pressed(&[MenuAction::MenuDown]));
        let event = m.handle_input(&InputState::pressed(&[MenuAction::MenuSelect]));
        assert_eq!(event, Some(MenuEvent::Selected(Choice::Options)));
    }

    #[test]
    fn test_cancel_and_idle() {
        let mut m = menu();
        assert_eq!(m.handle_input(&InputState::new()), None);
        assert_eq!(
            m.handle_input(&InputState::pressed(&[MenuAction::MenuCancel])),
            Some(MenuEvent::Cancelled)
        );
    }

    #[test]
    fn test_empty_menu_only_cancels() {
        let mut m: Menu<Choice> = Menu::new("Empty");
        assert_eq!(m.handle_input(&InputState::pressed(&[MenuAction::MenuSelect])), None);
        assert_eq!(
            m.handle_input(&InputState::pressed(&[MenuAction::MenuCancel])),
            Some(MenuEvent::Cancelled)
        );
    }

    #[test]
    fn test_set_text() {
        let mut m = menu();
        m.set_text(Choice::Quit, "EXIT");
        assert_eq!(m.text_of(Choice::Quit), Some("EXIT"));
        assert_eq!(m.text_of(Choice::Start), Some("START"));
    }

    #[test]
    fn test_draw_fades_with_transition() {
        let m = menu();
        let mut t = Transition::new(1.0, 1.0);
        t.begin(true);
        t.update(0.5, false);

        let mut renderer = FakeRenderer::new();
        m.draw(&mut renderer, &t);

        let texts: Vec<_> = renderer
            .calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Text { text, color, .. } => Some((text.clone(), color.a)),
                _ => None,
            })
            .collect();
        assert_eq!(texts.len(), 4);
        assert_eq!(texts[3].0, "Main");
        for (_, a) in texts {
            assert!((a - 0.5).abs() < 1e-5);
        }
    }
}
