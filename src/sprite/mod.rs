//! Frame-strip sprites
//!
//! A strip is one texture holding equally sized frames side by side.
//! `FrameAnimator` owns the timing, `AnimatedSprite` ties it to a texture
//! and a source rectangle.

// Playback controls not every screen uses
#![allow(dead_code)]

mod animated;
mod animator;

pub use animated::{AnimatedSprite, SpriteTransform};
pub use animator::{AnimationError, FrameAnimator};
