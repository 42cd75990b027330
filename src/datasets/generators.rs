//! Generation functions for the built-in dataset kinds.

use std::f64::consts::PI;

use crate::datasets::Point;
use crate::error::ChartError;

/// Which generation function a [`super::DatasetGenerator`] runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorKind {
    Sinusoidal,
    PseudoRandom,
    Ring,
}

impl GeneratorKind {
    pub fn generate(self, values: &[f64]) -> Result<Vec<Point>, ChartError> {
        match self {
            GeneratorKind::Sinusoidal => generate_sin(values[0], values[1], values[2], values[3]),
            GeneratorKind::PseudoRandom => generate_random(values[0], values[1], values[2]),
            GeneratorKind::Ring => generate_ring(values[0], values[1], values[2]),
        }
    }
}

/// Points constrained to a sine curve.
///
/// `point_count = cycles * density`; `x` sweeps `[0, cycles * period)` and
/// `y = amplitude * sin(x * 2π / period)`.
fn generate_sin(amplitude: f64, period: f64, cycles: f64, density: f64) -> Result<Vec<Point>, ChartError> {
    let point_count = (cycles * density).round();
    if !(point_count > 0.0) {
        return Err(ChartError::Generation(format!(
            "sinusoidal point count must be > 0 (cycles={cycles} * density={density})"
        )));
    }
    let n = point_count as usize;

    let mut data = Vec::with_capacity(n);
    for i in 0..n {
        let x = i as f64 * cycles * period / point_count;
        let y = amplitude * (x * 2.0 * PI / period).sin();
        data.push(Point::new(x, y));
    }
    Ok(data)
}

/// A seeded, reproducible "random" dataset.
///
/// Not a statistical RNG: a fixed sine-mixing transform that is bit-identical
/// for identical `(seed, amplitude, points)` inputs. Useful for testing how a
/// curve handles sharp changes in data.
fn generate_random(seed: f64, amplitude: f64, points: f64) -> Result<Vec<Point>, ChartError> {
    let count = points.round();
    if !(count > 0.0) {
        return Err(ChartError::Generation(format!(
            "random point count must be > 0 (points={points})"
        )));
    }
    let n = count as usize;

    // A bit more entropy to work with.
    let seed = (seed * seed / 3.0 * 10_000.0).round();

    let mut data = Vec::with_capacity(n);
    for i in 0..n {
        let fi = i as f64;
        let mut acc = fi;
        for k in 0..10 {
            let angle = (acc * fi * k as f64 * seed + 1.0) % 10_000.0 / 1000.0;
            acc = angle.sin();
        }
        data.push(Point::new(fi.round(), amplitude * acc.abs()));
    }
    Ok(data)
}

/// Two concentric rings of points, interleaved.
///
/// Ring A sits at angles `i·θ` with magnitude `radius1`; ring B is offset by
/// `θ/2` with magnitude `radius2`. The output alternates `[A0, B0, A1, B1, …]`
/// so connecting the points in order zig-zags between the rings.
fn generate_ring(radius1: f64, radius2: f64, density: f64) -> Result<Vec<Point>, ChartError> {
    let count = density.round();
    if !(count > 0.0) {
        return Err(ChartError::Generation(format!(
            "ring density must be > 0 (density={density})"
        )));
    }
    let n = count as usize;
    let theta = 2.0 * PI / count;

    let polar = |angle: f64, magnitude: f64| Point::new(magnitude * angle.cos(), magnitude * angle.sin());

    let mut data = Vec::with_capacity(2 * n);
    for i in 0..n {
        let base = i as f64 * theta;
        data.push(polar(base, radius1));
        data.push(polar(base + theta / 2.0, radius2));
    }
    Ok(data)
}
