//! Gamepad polling
//!
//! Native: gilrs, one button mask per connected pad (in connection order)
//! WASM: no gamepad backend, every pad reads as disconnected

// Standard gamepad button indices (Web Gamepad API standard mapping, Xbox layout)
pub mod button {
    pub const A: u32 = 0;           // South: select
    pub const B: u32 = 1;           // East: cancel
    pub const START: u32 = 9;       // Start/Options: pause
    pub const DPAD_UP: u32 = 12;
    pub const DPAD_DOWN: u32 = 13;
}

#[cfg(target_arch = "wasm32")]
mod platform {
    pub struct Gamepads;

    impl Gamepads {
        pub fn new() -> Self {
            Self
        }

        pub fn poll(&mut self) {}

        pub fn button_mask(&self, _index: usize) -> u32 {
            0
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod platform {
    use gilrs::{Button, Gilrs};
    use macroquad::logging::warn;

    pub struct Gamepads {
        gilrs: Option<Gilrs>,
    }

    impl Gamepads {
        pub fn new() -> Self {
            let gilrs = match Gilrs::new() {
                Ok(gilrs) => Some(gilrs),
                Err(e) => {
                    warn!("Gamepad support unavailable: {}", e);
                    None
                }
            };
            Self { gilrs }
        }

        pub fn poll(&mut self) {
            let Some(gilrs) = self.gilrs.as_mut() else { return };
            // Events update gilrs' cached state; we only read that state
            while gilrs.next_event().is_some() {}
        }

        /// Held buttons of the `index`-th connected pad
        pub fn button_mask(&self, index: usize) -> u32 {
            let Some(gilrs) = self.gilrs.as_ref() else { return 0 };
            let Some((_, gp)) = gilrs.gamepads().nth(index) else { return 0 };

            let mut mask = 0u32;
            if gp.is_pressed(Button::South) { mask |= 1 << super::button::A; }
            if gp.is_pressed(Button::East) { mask |= 1 << super::button::B; }
            if gp.is_pressed(Button::Start) { mask |= 1 << super::button::START; }
            if gp.is_pressed(Button::DPadUp) { mask |= 1 << super::button::DPAD_UP; }
            if gp.is_pressed(Button::DPadDown) { mask |= 1 << super::button::DPAD_DOWN; }
            mask
        }
    }
}

pub use platform::Gamepads;

impl Default for Gamepads {
    fn default() -> Self {
        Self::new()
    }
}
