//! Input handling with gamepad support
//!
//! Raw keyboard and gamepad state is reduced to a handful of menu actions
//! and edge-detected per player, so screens only ask "was Select pressed
//! this frame".
//!
//! Native: gilrs for gamepads
//! WASM: keyboard only

// Allow unused code - queries kept for screens that need them
#![allow(dead_code)]

mod actions;
mod gamepad;
mod source;
mod state;

pub use actions::*;
pub use source::*;
pub use state::*;
