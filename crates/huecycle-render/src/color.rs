//! Conversions from engine colors to terminal colors.

use huecycle_core::Color as EngineColor;
use ratatui::style::Color;

/// Scale a [0, 1] channel to 0-255, truncating.
fn channel(value: f32) -> u8 {
    // `as` saturates, so out-of-gamut channels pin to 0 or 255
    (value * 255.0) as u8
}

/// Convert an engine color to a 24-bit terminal color. Alpha is dropped.
pub fn to_terminal_color(color: EngineColor) -> Color {
    Color::Rgb(channel(color.r), channel(color.g), channel(color.b))
}

/// `#rrggbb` form of an engine color.
pub fn hex(color: EngineColor) -> String {
    format!(
        "#{:02x}{:02x}{:02x}",
        channel(color.r),
        channel(color.g),
        channel(color.b)
    )
}

/// Black or white, whichever reads better on top of `background`.
pub fn readable_fg(background: EngineColor) -> Color {
    let luma = 0.299 * background.r + 0.587 * background.g + 0.114 * background.b;
    if luma > 0.5 {
        Color::Black
    } else {
        Color::White
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channels_are_truncated() {
        let color = EngineColor::new(1.0, 0.5, 0.0, 1.0);
        assert_eq!(to_terminal_color(color), Color::Rgb(255, 127, 0));
    }

    #[test]
    fn test_out_of_gamut_channels_saturate() {
        let color = EngineColor::new(1.5, -0.2, 0.999, 1.0);
        assert_eq!(to_terminal_color(color), Color::Rgb(255, 0, 254));
    }

    #[test]
    fn test_hex() {
        assert_eq!(hex(EngineColor::new(1.0, 0.0, 0.0, 1.0)), "#ff0000");
        assert_eq!(hex(EngineColor::gray(0.5)), "#7f7f7f");
    }

    #[test]
    fn test_readable_fg() {
        assert_eq!(readable_fg(EngineColor::gray(1.0)), Color::Black);
        assert_eq!(readable_fg(EngineColor::new(0.0, 0.0, 1.0, 1.0)), Color::White);
        assert_eq!(readable_fg(EngineColor::new(1.0, 1.0, 0.0, 1.0)), Color::Black);
        assert_eq!(readable_fg(EngineColor::gray(0.4)), Color::White);
        assert_eq!(readable_fg(EngineColor::gray(0.6)), Color::Black);
    }
}
