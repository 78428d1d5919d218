//! Terminal rendering for huecycle.
//!
//! Turns a [`huecycle_core::FrameView`] into ratatui widgets: the whole
//! frame is filled with the animated color, optionally with a small hue
//! readout and key help drawn on top.

mod color;
mod frame;

pub use color::{hex, readable_fg, to_terminal_color};
pub use frame::render_frame;
