//! Background palette
//!
//! Piecewise-linear ramp from a calm night sky to an overheated orange as
//! the aggregate warming potential approaches its ceiling.

use super::color::Rgba;

/// (ratio, color) anchor on the ramp
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorStop {
    pub ratio: f64,
    pub color: Rgba,
}

pub static COLOR_STOPS: [ColorStop; 4] = [
    ColorStop { ratio: 0.0, color: Rgba::rgb(12.0, 12.0, 26.0) },
    ColorStop { ratio: 0.4, color: Rgba::rgb(139.0, 69.0, 19.0) },
    ColorStop { ratio: 0.7, color: Rgba::rgb(255.0, 215.0, 0.0) },
    ColorStop { ratio: 1.0, color: Rgba::rgb(255.0, 69.0, 0.0) },
];

pub const DEFAULT_MAX_WARMING_POTENTIAL: f64 = 150.0;
pub const DEFAULT_OVERLAY_ALPHA: f64 = 0.2;

/// `total / max`, clamped to [0, 1]
#[inline]
pub fn warming_ratio(total: f64, max: f64) -> f64 {
    (total / max).clamp(0.0, 1.0)
}

/// Interpolated background for a warming ratio in [0, 1]
///
/// The lower stop is the last one with `ratio <= warming_ratio`, so a ratio
/// sitting exactly on a stop returns that stop's color.
pub fn background_color(warming_ratio: f64, alpha: f64) -> Rgba {
    let mut lower = &COLOR_STOPS[0];
    let mut upper = &COLOR_STOPS[1];
    for pair in COLOR_STOPS.windows(2) {
        if warming_ratio >= pair[0].ratio {
            lower = &pair[0];
            upper = &pair[1];
        }
    }

    let local = (warming_ratio - lower.ratio) / (upper.ratio - lower.ratio);
    let (a, b) = (lower.color, upper.color);
    Rgba::new(
        a.r + (b.r - a.r) * local,
        a.g + (b.g - a.g) * local,
        a.b + (b.b - a.b) * local,
        alpha,
    )
}
