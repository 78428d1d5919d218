//! Per-frame hue animation.

use crate::color::{Color, hsl_to_rgb};
use crate::speed::AnimationSpeed;

/// Hue step applied by [`advance_frame`], in degrees.
pub const HUE_STEP: f32 = 0.5;

/// Upper bound (exclusive) of the hue range, in degrees.
const FULL_TURN: f32 = 360.0;

/// Current hue in degrees, kept in [0, 360).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HueState {
    degrees: f32,
}

impl HueState {
    /// Create a state starting at `degrees`, wrapped into [0, 360).
    pub fn new(degrees: f32) -> Self {
        let degrees = degrees.rem_euclid(FULL_TURN);
        // rem_euclid can round up to exactly 360 for tiny negative inputs
        Self {
            degrees: if degrees >= FULL_TURN { 0.0 } else { degrees },
        }
    }

    /// Current hue in degrees.
    pub fn degrees(&self) -> f32 {
        self.degrees
    }

    /// Move the hue by `step` degrees.
    ///
    /// Reaching or passing 360 resets to 0; dropping below 0 wraps back up
    /// by one full turn. A single correction is applied, which keeps the hue
    /// in range for any step smaller than a full turn.
    pub fn advance_by(&mut self, step: f32) {
        self.degrees += step;
        if self.degrees >= FULL_TURN {
            self.degrees = 0.0;
        } else if self.degrees < 0.0 {
            self.degrees += FULL_TURN;
            if self.degrees >= FULL_TURN {
                self.degrees = 0.0;
            }
        }
    }
}

/// Advance `state` by [`HUE_STEP`] and return the fully saturated,
/// half-lightness color for the new hue.
pub fn advance_frame(state: &mut HueState) -> Color {
    state.advance_by(HUE_STEP);
    hsl_to_rgb(state.degrees(), 100.0, 50.0)
}

/// Configurable hue animation: speed, direction and the fixed saturation
/// and lightness fed to the color engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HueCycle {
    state: HueState,
    speed: AnimationSpeed,
    reversed: bool,
    saturation: f32,
    lightness: f32,
}

impl Default for HueCycle {
    fn default() -> Self {
        Self::new(HueState::default(), AnimationSpeed::default())
    }
}

impl HueCycle {
    pub fn new(state: HueState, speed: AnimationSpeed) -> Self {
        Self {
            state,
            speed,
            reversed: false,
            saturation: 100.0,
            lightness: 50.0,
        }
    }

    pub fn with_saturation(mut self, saturation: f32) -> Self {
        self.saturation = saturation;
        self
    }

    pub fn with_lightness(mut self, lightness: f32) -> Self {
        self.lightness = lightness;
        self
    }

    pub fn with_reversed(mut self, reversed: bool) -> Self {
        self.reversed = reversed;
        self
    }

    pub fn state(&self) -> HueState {
        self.state
    }

    pub fn speed(&self) -> AnimationSpeed {
        self.speed
    }

    pub fn set_speed(&mut self, speed: AnimationSpeed) {
        self.speed = speed;
    }

    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    /// Flip the direction of travel around the hue wheel.
    pub fn reverse(&mut self) {
        self.reversed = !self.reversed;
    }

    /// Step the hue once and return the color for the new hue.
    pub fn advance(&mut self) -> Color {
        let step = self.speed.step_degrees();
        self.state
            .advance_by(if self.reversed { -step } else { step });
        self.current()
    }

    /// Color for the current hue, without stepping.
    pub fn current(&self) -> Color {
        hsl_to_rgb(self.state.degrees(), self.saturation, self.lightness)
    }
}
