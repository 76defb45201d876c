//! Frame timing for strip animation
//!
//! Converts elapsed time into a frame index. Time accumulates between calls
//! and every whole frame duration that has passed advances the index, so a
//! long tick (low frame rate, window drag, breakpoint) catches up instead of
//! dropping frames. The leftover fraction carries into the next call.

use std::fmt;

/// Animator configuration errors, reported when timing is set
#[derive(Debug, Clone, PartialEq)]
pub enum AnimationError {
    /// A strip needs at least one frame
    NoFrames,
    /// Frames per second must be finite and above zero
    InvalidFrameRate(f32),
    /// Splitting the texture width by the frame count leaves no pixels per frame
    StripTooNarrow { frame_count: usize, texture_width: u32 },
}

impl fmt::Display for AnimationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnimationError::NoFrames => write!(f, "animation needs at least one frame"),
            AnimationError::InvalidFrameRate(fps) => {
                write!(f, "invalid frame rate: {} (must be > 0)", fps)
            }
            AnimationError::StripTooNarrow {
                frame_count,
                texture_width,
            } => write!(f, "{} frames do not fit in a {}px wide strip", frame_count, texture_width),
        }
    }
}

impl std::error::Error for AnimationError {}

fn frame_duration(frames_per_second: f32) -> Result<f32, AnimationError> {
    if !frames_per_second.is_finite() || frames_per_second <= 0.0 {
        return Err(AnimationError::InvalidFrameRate(frames_per_second));
    }
    Ok(1.0 / frames_per_second)
}

/// Looping frame counter driven by elapsed seconds
#[derive(Debug, Clone)]
pub struct FrameAnimator {
    frame_count: usize,
    time_per_frame: f32,
    frame: usize,
    elapsed: f32,
    paused: bool,
}

/// A single frame at one frame per second
impl Default for FrameAnimator {
    fn default() -> Self {
        Self {
            frame_count: 1,
            time_per_frame: 1.0,
            frame: 0,
            elapsed: 0.0,
            paused: false,
        }
    }
}

impl FrameAnimator {
    pub fn new(frame_count: usize, frames_per_second: f32) -> Result<Self, AnimationError> {
        let mut animator = Self::default();
        animator.load(frame_count, frames_per_second)?;
        Ok(animator)
    }

    /// Set frame count and timing, rewind to frame 0 and start playing.
    /// On error the animator is left untouched.
    pub fn load(&mut self, frame_count: usize, frames_per_second: f32) -> Result<(), AnimationError> {
        if frame_count == 0 {
            return Err(AnimationError::NoFrames);
        }
        let time_per_frame = frame_duration(frames_per_second)?;

        self.frame_count = frame_count;
        self.time_per_frame = time_per_frame;
        self.frame = 0;
        self.elapsed = 0.0;
        self.paused = false;
        Ok(())
    }

    /// Change playback speed, keeping the current frame and accumulator
    pub fn set_frames_per_second(&mut self, frames_per_second: f32) -> Result<(), AnimationError> {
        self.time_per_frame = frame_duration(frames_per_second)?;
        Ok(())
    }

    /// Advance by `elapsed` seconds. Negative time is treated as zero.
    pub fn advance(&mut self, elapsed: f32) {
        if self.paused {
            return;
        }

        self.elapsed += elapsed.max(0.0);

        // Number of whole frames strictly exceeded: leaves the accumulator in
        // (0, time_per_frame] once anything has been consumed.
        let steps = ((self.elapsed / self.time_per_frame).ceil() as usize).saturating_sub(1);
        if steps == 0 {
            return;
        }

        self.frame = (self.frame + steps % self.frame_count) % self.frame_count;
        self.elapsed = (self.elapsed - steps as f32 * self.time_per_frame).max(0.0);
    }

    /// Rewind to frame 0 with an empty accumulator
    pub fn reset(&mut self) {
        self.frame = 0;
        self.elapsed = 0.0;
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn play(&mut self) {
        self.paused = false;
    }

    /// Pause and rewind
    pub fn stop(&mut self) {
        self.pause();
        self.reset();
    }

    pub fn frame(&self) -> usize {
        self.frame
    }

    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Time carried toward the next frame, in seconds
    pub fn accumulated(&self) -> f32 {
        self.elapsed
    }

    pub fn time_per_frame(&self) -> f32 {
        self.time_per_frame
    }
}
