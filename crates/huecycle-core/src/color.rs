//! HSL to RGB conversion.

/// Floating point RGBA color with every channel conventionally in [0, 1].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque gray where every channel equals `level`.
    pub const fn gray(level: f32) -> Self {
        Self::new(level, level, level, 1.0)
    }
}

/// Convert HSL to RGB color.
///
/// `hue` is in degrees (0-360), `saturation` and `lightness` are
/// percentages (0-100). Inputs are not clamped, so values outside those
/// ranges yield channels outside [0, 1]. Alpha is always 1.
pub fn hsl_to_rgb(hue: f32, saturation: f32, lightness: f32) -> Color {
    let h = hue / 360.0;
    let s = saturation / 100.0;
    let l = lightness / 100.0;

    if s == 0.0 {
        return Color::gray(l);
    }

    let q = if l < 0.5 {
        l * (1.0 + s)
    } else {
        l + s - l * s
    };
    let p = 2.0 * l - q;

    Color::new(
        hue_distribute(p, q, h + 1.0 / 3.0),
        hue_distribute(p, q, h),
        hue_distribute(p, q, h - 1.0 / 3.0),
        1.0,
    )
}

/// Channel value for hue fraction `t` between the `p` and `q` levels.
///
/// `t` must lie within one period of [0, 1]; a single correction is applied.
pub fn hue_distribute(p: f32, q: f32, mut t: f32) -> f32 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}
