//! Title menu

use super::{GameplayScreen, LoadingScreen};
use crate::input::InputState;
use crate::render::Renderer;
use crate::screen::{Menu, MenuEvent, Screen, ScreenContext, Transition};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MainMenuAction {
    Play,
    Exit,
}

pub struct MainMenuScreen {
    menu: Menu<MainMenuAction>,
    transition: Transition,
}

impl MainMenuScreen {
    pub fn new() -> Self {
        Self {
            menu: Menu::new("Main Menu")
                .entry("PLAY GAME", MainMenuAction::Play)
                .entry("EXIT", MainMenuAction::Exit),
            transition: Transition::new(0.5, 0.5),
        }
    }
}

impl Default for MainMenuScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for MainMenuScreen {
    fn name(&self) -> &str {
        "main_menu"
    }

    fn transition(&self) -> &Transition {
        &self.transition
    }

    fn transition_mut(&mut self) -> &mut Transition {
        &mut self.transition
    }

    fn update(&mut self, dt: f32, _ctx: &mut ScreenContext<'_>) {
        self.menu.update(dt, self.transition.is_active());
    }

    fn handle_input(&mut self, input: &InputState, ctx: &mut ScreenContext<'_>) {
        match self.menu.handle_input(input) {
            Some(MenuEvent::Selected(MainMenuAction::Play)) => {
                let sprite = &ctx.config.sprite;
                let gameplay: Box<dyn Screen> = Box::new(GameplayScreen::new(sprite));
                let loading = LoadingScreen::new(vec![gameplay])
                    .preload([sprite.asset.clone()])
                    .with_message();
                ctx.exit_all();
                ctx.add_screen(Box::new(loading));
            }
            Some(MenuEvent::Selected(MainMenuAction::Exit)) | Some(MenuEvent::Cancelled) => {
                ctx.request_quit();
            }
            None => {}
        }
    }

    fn draw(&self, renderer: &mut dyn Renderer) {
        self.menu.draw(renderer, &self.transition);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::MenuAction;
    use crate::screen::ScreenManager;
    use crate::testing::{call_log, Harness, RecordingScreen};

    fn setup(h: &mut Harness) -> ScreenManager {
        let mut manager = ScreenManager::new(true);
        let log = call_log();
        manager.add_screen(Box::new(RecordingScreen::new("background", &log).always_visible()));
        manager.add_screen(Box::new(MainMenuScreen::new()));
        manager.update(1.0, &mut h.ctx());
        manager
    }

    #[test]
    fn test_play_clears_stack_and_loads() {
        let mut h = Harness::new();
        let mut manager = setup(&mut h);

        manager.handle_input(&InputState::pressed(&[MenuAction::MenuSelect]), &mut h.ctx());

        // Background had no fade-out and is gone; the menu is fading out
        let names: Vec<String> = manager
            .ids()
            .into_iter()
            .filter_map(|id| manager.screen(id).map(|s| s.name().to_string()))
            .collect();
        assert_eq!(names, vec!["main_menu", "loading"]);
        let menu = manager.ids()[0];
        assert!(manager.transition(menu).unwrap().is_exiting());
    }

    #[test]
    fn test_exit_and_cancel_quit() {
        let mut h = Harness::new();
        let mut manager = setup(&mut h);
        let mut ctx = h.ctx();
        manager.handle_input(&InputState::pressed(&[MenuAction::MenuDown, MenuAction::MenuSelect]), &mut ctx);
        assert!(ctx.quit_requested());

        let mut h = Harness::new();
        let mut manager = setup(&mut h);
        let mut ctx = h.ctx();
        manager.handle_input(&InputState::pressed(&[MenuAction::MenuCancel]), &mut ctx);
        assert!(ctx.quit_requested());
    }

    #[test]
    fn test_idle_does_nothing() {
        let mut h = Harness::new();
        let mut manager = setup(&mut h);
        let mut ctx = h.ctx();
        manager.handle_input(&InputState::new(), &mut ctx);
        assert!(!ctx.quit_requested());
        assert_eq!(manager.len(), 2);
    }
}
