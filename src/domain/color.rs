use serde::Serialize;

/// Straight-alpha color with float channels (0..=255 for rgb, 0..=1 for alpha)
///
/// Channels stay fractional because the background is interpolated, and a
/// canvas `fillStyle` accepts non-integer components.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// `rgba(r, g, b, a)` for a 2D canvas context
    pub fn to_css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}
