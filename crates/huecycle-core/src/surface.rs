//! Boundary between the animation and whatever displays it.

use std::time::Duration;

use crate::{AnimationSpeed, Color};

/// Everything a surface needs to paint one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameView {
    /// Color filling the surface.
    pub color: Color,
    /// Hue the color was computed from, in degrees.
    pub hue: f32,
    /// Active speed preset.
    pub speed: AnimationSpeed,
    /// Whether hue travel is currently reversed.
    pub reversed: bool,
    /// Whether the animation is paused.
    pub paused: bool,
    /// Whether the readout and key help should be drawn over the color.
    pub show_help: bool,
}

/// User intent reported by a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Quit,
    TogglePause,
    Faster,
    Slower,
    Reverse,
    ToggleHelp,
}

/// A display that can present frames and report user input.
///
/// Implementations own presentation and pacing: [`Surface::poll_input`]
/// blocks for at most `timeout`, which is how the render loop paces frames.
pub trait Surface {
    type Error;

    /// Paint one frame.
    fn present(&mut self, view: &FrameView) -> Result<(), Self::Error>;

    /// Wait up to `timeout` for the next user input.
    fn poll_input(&mut self, timeout: Duration) -> Result<Option<Input>, Self::Error>;
}

impl<S: Surface + ?Sized> Surface for &mut S {
    type Error = S::Error;

    fn present(&mut self, view: &FrameView) -> Result<(), Self::Error> {
        (**self).present(view)
    }

    fn poll_input(&mut self, timeout: Duration) -> Result<Option<Input>, Self::Error> {
        (**self).poll_input(timeout)
    }
}
