//! Curve coloring.
//!
//! Colors come from a cyclic sinebow ramp. Parameterized curves hash their
//! effective shape values into a stable ramp position, so the same parameter
//! always yields the same color (distinct parameter sets may collide — the
//! ramp is cyclic). Parameterless curves draw a fresh random ramp position
//! per render instead.

use std::f64::consts::PI;

/// An opaque 24-bit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Sample the sinebow rainbow ramp at `t` in `[0, 1]`.
pub fn rainbow(t: f64) -> Color {
    let t = (0.5 - t) * PI;
    let channel = |phase: f64| {
        let s = (t + phase).sin();
        (255.0 * s * s).round() as u8
    };
    Color {
        r: channel(0.0),
        g: channel(PI / 3.0),
        b: channel(2.0 * PI / 3.0),
    }
}

/// Stable ramp position for a parameterized curve: the fractional part of
/// the sum of its effective shape values.
pub fn curve_color(values: impl IntoIterator<Item = f64>) -> Color {
    let sum: f64 = values.into_iter().sum();
    rainbow(sum.fract())
}
