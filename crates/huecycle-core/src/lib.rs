//! Core types for the huecycle color animation.
//!
//! The crate holds the pieces that have nothing to do with any particular
//! display: the HSL color engine, the per-frame hue driver and the
//! [`Surface`] boundary that display adapters implement.

mod color;
mod hue;
mod speed;
mod surface;

pub use color::{Color, hsl_to_rgb, hue_distribute};
pub use hue::{HUE_STEP, HueCycle, HueState, advance_frame};
pub use speed::AnimationSpeed;
pub use surface::{FrameView, Input, Surface};
