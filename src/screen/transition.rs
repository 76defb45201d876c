//! Per-screen transition state
//!
//! Position runs from 1.0 (fully off) to 0.0 (fully on). Screens fade in
//! while TransitionOn, sit at Active, fade out while TransitionOff and end
//! up either Hidden (covered by another screen) or removed (exiting).

/// Where a screen is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenState {
    TransitionOn,
    Active,
    TransitionOff,
    Hidden,
}

#[derive(Debug, Clone)]
pub struct Transition {
    /// Seconds to fade in (0 = instant)
    pub on_time: f32,
    /// Seconds to fade out (0 = removed as soon as it exits)
    pub off_time: f32,
    /// Screens below a popup stay visible and keep input
    pub is_popup: bool,
    /// False for screens that stay up under everything (backgrounds)
    pub hides_when_covered: bool,
    position: f32,
    state: ScreenState,
    exiting: bool,
    animated: bool,
    has_focus: bool,
    topmost: bool,
}

impl Transition {
    pub fn new(on_time: f32, off_time: f32) -> Self {
        Self {
            on_time: on_time.max(0.0),
            off_time: off_time.max(0.0),
            is_popup: false,
            hides_when_covered: true,
            position: 1.0,
            state: ScreenState::TransitionOn,
            exiting: false,
            animated: true,
            has_focus: false,
            topmost: false,
        }
    }

    pub fn popup(mut self) -> Self {
        self.is_popup = true;
        self
    }

    /// Never fade out when covered
    pub fn always_visible(mut self) -> Self {
        self.hides_when_covered = false;
        self
    }

    pub fn state(&self) -> ScreenState {
        self.state
    }

    /// 0.0 = fully on, 1.0 = fully off
    pub fn position(&self) -> f32 {
        self.position
    }

    /// Opacity for drawing: 1.0 when fully on
    pub fn alpha(&self) -> f32 {
        1.0 - self.position
    }

    pub fn is_exiting(&self) -> bool {
        self.exiting
    }

    /// Part of the input chain (top non-popup and the popups above it)
    pub fn has_focus(&self) -> bool {
        self.has_focus
    }

    /// Topmost focused screen that is on or coming on. Covered screens and
    /// screens under a popup are not active.
    pub fn is_active(&self) -> bool {
        self.topmost && matches!(self.state, ScreenState::TransitionOn | ScreenState::Active)
    }

    /// Start leaving. The manager removes the screen once it is fully off
    /// (immediately if `off_time` is zero).
    pub fn exit(&mut self) {
        self.exiting = true;
    }

    /// Receiving updates and input (not fading out, not hidden)
    pub fn is_visible_and_live(&self) -> bool {
        !self.exiting && matches!(self.state, ScreenState::TransitionOn | ScreenState::Active)
    }

    /// Exiting with nothing to fade: can be dropped without waiting for an update
    pub fn exits_instantly(&self) -> bool {
        self.exiting && (self.off_time <= 0.0 || !self.animated)
    }

    /// Done exiting and ready to be dropped from the stack
    pub fn finished_exit(&self) -> bool {
        self.exits_instantly() || (self.exiting && self.position >= 1.0)
    }

    /// Reset when pushed on the stack
    pub(crate) fn begin(&mut self, animated: bool) {
        self.exiting = false;
        self.animated = animated;
        self.has_focus = false;
        self.topmost = false;
        if animated {
            self.state = ScreenState::TransitionOn;
            self.position = 1.0;
        } else {
            self.state = ScreenState::Active;
            self.position = 0.0;
        }
    }

    pub(crate) fn set_focus(&mut self, has_focus: bool, topmost: bool) {
        self.has_focus = has_focus;
        self.topmost = topmost;
    }

    /// Advance by `dt` seconds. Returns true once an exiting screen is fully off.
    pub(crate) fn update(&mut self, dt: f32, covered: bool) -> bool {
        let dt = dt.max(0.0);

        if self.exiting {
            self.state = ScreenState::TransitionOff;
            return !self.step(dt, self.off_time, 1.0);
        }

        if covered && self.hides_when_covered {
            self.state = if self.step(dt, self.off_time, 1.0) {
                ScreenState::TransitionOff
            } else {
                ScreenState::Hidden
            };
        } else {
            self.state = if self.step(dt, self.on_time, -1.0) {
                ScreenState::TransitionOn
            } else {
                ScreenState::Active
            };
        }
        false
    }

    /// Move toward the target end. Returns true while still in transit.
    fn step(&mut self, dt: f32, duration: f32, direction: f32) -> bool {
        let delta = if !self.animated || duration <= 0.0 {
            1.0
        } else {
            dt / duration
        };
        self.position = (self.position + delta * direction).clamp(0.0, 1.0);

        if direction < 0.0 {
            self.position > 0.0
        } else {
            self.position < 1.0
        }
    }
}
