//! Animation speed presets.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How far the hue travels per frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationSpeed {
    Slow,
    #[default]
    Normal,
    Fast,
    Turbo,
}

impl AnimationSpeed {
    /// Hue step per frame, in degrees.
    pub fn step_degrees(self) -> f32 {
        match self {
            AnimationSpeed::Slow => 0.25,
            AnimationSpeed::Normal => crate::hue::HUE_STEP,
            AnimationSpeed::Fast => 1.0,
            AnimationSpeed::Turbo => 2.0,
        }
    }

    /// Next faster preset, staying at the fastest.
    pub fn next(self) -> Self {
        match self {
            AnimationSpeed::Slow => AnimationSpeed::Normal,
            AnimationSpeed::Normal => AnimationSpeed::Fast,
            AnimationSpeed::Fast | AnimationSpeed::Turbo => AnimationSpeed::Turbo,
        }
    }

    /// Next slower preset, staying at the slowest.
    pub fn prev(self) -> Self {
        match self {
            AnimationSpeed::Slow | AnimationSpeed::Normal => AnimationSpeed::Slow,
            AnimationSpeed::Fast => AnimationSpeed::Normal,
            AnimationSpeed::Turbo => AnimationSpeed::Fast,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            AnimationSpeed::Slow => "slow",
            AnimationSpeed::Normal => "normal",
            AnimationSpeed::Fast => "fast",
            AnimationSpeed::Turbo => "turbo",
        }
    }
}

impl fmt::Display for AnimationSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AnimationSpeed {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "slow" => Ok(AnimationSpeed::Slow),
            "normal" => Ok(AnimationSpeed::Normal),
            "fast" => Ok(AnimationSpeed::Fast),
            "turbo" => Ok(AnimationSpeed::Turbo),
            other => Err(format!(
                "unknown speed `{other}`, expected slow, normal, fast or turbo"
            )),
        }
    }
}
