//! Screen manager
//!
//! Owns the stack. Each tick: `update` advances transitions top to bottom
//! and works out focus, `handle_input` feeds the focus chain, `draw` paints
//! bottom to top. Requests queued on the context are applied at the end of
//! each pass, followed by removal of screens that finished exiting.

use super::{Screen, ScreenCommand, ScreenContext, ScreenError, ScreenId, ScreenState, StackInfo, Transition};
use crate::input::InputState;
use crate::render::Renderer;
use macroquad::logging::{debug, error};

struct Entry {
    id: ScreenId,
    screen: Box<dyn Screen>,
    /// `load_content` has run
    loaded: bool,
}

pub struct ScreenManager {
    /// Bottom of the stack first
    entries: Vec<Entry>,
    next_id: u64,
    transitions_enabled: bool,
}

impl ScreenManager {
    pub fn new(transitions_enabled: bool) -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
            transitions_enabled,
        }
    }

    /// Push a screen on top. It starts fully off (or fully on when
    /// transitions are disabled) and runs from the next update.
    pub fn add_screen(&mut self, mut screen: Box<dyn Screen>) -> ScreenId {
        screen.transition_mut().begin(self.transitions_enabled);
        let id = ScreenId(self.next_id);
        self.next_id += 1;
        debug!("Adding screen '{}' ({})", screen.name(), id.0);
        self.entries.push(Entry {
            id,
            screen,
            loaded: false,
        });
        id
    }

    /// Drop a screen right away, skipping any fade
    pub fn remove_screen(&mut self, id: ScreenId) -> Result<Box<dyn Screen>, ScreenError> {
        let index = self.index_of(id).ok_or(ScreenError::NotFound(id))?;
        Ok(self.remove_at(index))
    }

    /// Start a screen's exit. With no fade-out time it is removed now,
    /// otherwise the next update fades it out and removes it.
    pub fn exit_screen(&mut self, id: ScreenId) -> Result<(), ScreenError> {
        let index = self.index_of(id).ok_or(ScreenError::NotFound(id))?;
        self.entries[index].screen.transition_mut().exit();
        self.remove_where(Transition::exits_instantly);
        Ok(())
    }

    /// Exit every screen on the stack
    pub fn exit_all(&mut self) {
        for entry in &mut self.entries {
            entry.screen.transition_mut().exit();
        }
        self.remove_where(Transition::exits_instantly);
    }

    pub fn update(&mut self, dt: f32, ctx: &mut ScreenContext<'_>) {
        for entry in self.entries.iter_mut().filter(|e| !e.loaded) {
            entry.loaded = true;
            if let Err(e) = entry.screen.load_content(&mut *ctx.content) {
                error!("Screen '{}' failed to load: {}", entry.screen.name(), e);
                entry.screen.transition_mut().exit();
            }
        }

        ctx.stack = self.stack_info();

        let mut covered = false;
        let mut chain_open = true;
        let mut topmost_taken = false;

        for entry in self.entries.iter_mut().rev() {
            let transition = entry.screen.transition_mut();
            transition.update(dt, covered);

            let live = transition.is_visible_and_live();
            let focus = live && chain_open;
            transition.set_focus(focus, focus && !topmost_taken);
            if focus {
                topmost_taken = true;
                if !transition.is_popup {
                    chain_open = false;
                }
            }
            if live && !transition.is_popup {
                covered = true;
            }

            entry.screen.update(dt, ctx);
        }

        self.flush(ctx);
    }

    /// Feed input top-down through the focus chain, stopping after the
    /// first non-popup
    pub fn handle_input(&mut self, input: &InputState, ctx: &mut ScreenContext<'_>) {
        ctx.stack = self.stack_info();

        for entry in self.entries.iter_mut().rev() {
            let transition = entry.screen.transition();
            if !entry.loaded || !transition.has_focus() || !transition.is_visible_and_live() {
                continue;
            }
            let is_popup = transition.is_popup;

            entry.screen.handle_input(input, ctx);

            if !is_popup {
                break;
            }
        }

        self.flush(ctx);
    }

    /// Draw bottom to top, skipping hidden screens
    pub fn draw(&self, renderer: &mut dyn Renderer) {
        for entry in &self.entries {
            if !entry.loaded || entry.screen.transition().state() == ScreenState::Hidden {
                continue;
            }
            entry.screen.draw(renderer);
            renderer.flush();
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, id: ScreenId) -> bool {
        self.index_of(id).is_some()
    }

    /// Ids bottom to top
    pub fn ids(&self) -> Vec<ScreenId> {
        self.entries.iter().map(|e| e.id).collect()
    }

    pub fn screen(&self, id: ScreenId) -> Option<&dyn Screen> {
        self.index_of(id).map(|i| self.entries[i].screen.as_ref())
    }

    pub fn transition(&self, id: ScreenId) -> Option<&Transition> {
        self.screen(id).map(|s| s.transition())
    }

    pub fn state(&self, id: ScreenId) -> Option<ScreenState> {
        self.transition(id).map(|t| t.state())
    }

    fn stack_info(&self) -> StackInfo {
        StackInfo {
            len: self.entries.len(),
            exiting: self.entries.iter().filter(|e| e.screen.transition().is_exiting()).count(),
        }
    }

    fn index_of(&self, id: ScreenId) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }

    fn remove_at(&mut self, index: usize) -> Box<dyn Screen> {
        let mut entry = self.entries.remove(index);
        if entry.loaded {
            entry.screen.unload_content();
        }
        debug!("Removed screen '{}' ({})", entry.screen.name(), entry.id.0);
        entry.screen
    }

    fn remove_where(&mut self, done: impl Fn(&Transition) -> bool) {
        let mut i = 0;
        while i < self.entries.len() {
            if done(self.entries[i].screen.transition()) {
                self.remove_at(i);
            } else {
                i += 1;
            }
        }
    }

    /// Apply queued requests in order, then drop finished screens
    fn flush(&mut self, ctx: &mut ScreenContext<'_>) {
        for command in ctx.take_commands() {
            match command {
                ScreenCommand::Add(screen) => {
                    self.add_screen(screen);
                }
                ScreenCommand::ExitAll => self.exit_all(),
            }
        }
        self.remove_where(Transition::finished_exit);
    }
}
