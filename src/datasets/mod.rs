//! Synthetic dataset generators.
//!
//! This module defines:
//!
//! - [`ParameterSpec`]: declarative descriptor of a numeric input
//! - [`DatasetGenerator`]: a named, pure generation function plus its specs
//! - the three built-in generators (sinusoidal, pseudo-random, ring)
//!
//! Generators are deterministic: identical effective parameter values always
//! produce an identical point sequence.

mod generators;

pub use generators::GeneratorKind;

use crate::error::ChartError;
use crate::scale::LinearScale;

/// A 2D data point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Declarative descriptor of one numeric parameter.
///
/// The spec owns a scale that maps raw input values into the effective
/// domain: out-of-bounds values are clamped, and `round` snaps the result to
/// an integer. Specs are immutable and defined at startup.
#[derive(Debug, Clone)]
pub struct ParameterSpec {
    pub name: &'static str,
    pub default: f64,
    pub bounds: [f64; 2],
    pub clamp: bool,
    pub round: bool,
}

impl ParameterSpec {
    pub fn new(name: &'static str, default: f64, bounds: [f64; 2]) -> Self {
        Self {
            name,
            default,
            bounds,
            clamp: true,
            round: false,
        }
    }

    pub fn rounded(mut self) -> Self {
        self.round = true;
        self
    }

    /// The scale that turns a raw input value into an effective one.
    pub fn scale(&self) -> LinearScale {
        let mut s = LinearScale::new(self.bounds, self.bounds);
        if self.clamp {
            s = s.clamp();
        }
        if self.round {
            s = s.round();
        }
        s
    }

    /// Map a raw input value to its effective domain value.
    pub fn effective(&self, raw: f64) -> f64 {
        self.scale().map(raw)
    }

    /// Identifier for the collaborating input control: `"<name>-<index>"`.
    pub fn control_id(&self, index: usize) -> String {
        format!("{}-{index}", self.name)
    }

    /// Step size for the numeric control bound to this parameter.
    ///
    /// `1/(10·k)` when the default has `k` fractional digits, else `2` for
    /// defaults above 10, else `1`.
    pub fn step(&self) -> f64 {
        let text = format!("{}", self.default);
        match text.split_once('.') {
            Some((_, frac)) if !frac.is_empty() => 1.0 / (10.0 * frac.len() as f64),
            _ => {
                if self.default > 10.0 {
                    2.0
                } else {
                    1.0
                }
            }
        }
    }
}

/// A named parametric dataset generator.
#[derive(Debug, Clone)]
pub struct DatasetGenerator {
    pub name: &'static str,
    pub kind: GeneratorKind,
    pub params: Vec<ParameterSpec>,
}

impl DatasetGenerator {
    /// Generate the point sequence for the given *effective* parameter
    /// values (one per spec, in spec order).
    pub fn generate(&self, values: &[f64]) -> Result<Vec<Point>, ChartError> {
        debug_assert_eq!(values.len(), self.params.len());
        self.kind.generate(values)
    }

    /// Default raw values, one per parameter spec.
    pub fn default_values(&self) -> Vec<f64> {
        self.params.iter().map(|p| p.default).collect()
    }
}

/// The three built-in generators with their parameter bounds.
pub fn standard_generators() -> Vec<DatasetGenerator> {
    vec![
        DatasetGenerator {
            name: "Sinusoidal Curve",
            kind: GeneratorKind::Sinusoidal,
            params: vec![
                ParameterSpec::new("amplitude", 1.0, [0.0, 100_000.0]),
                ParameterSpec::new("period", 1.0, [0.0, 50.0]),
                ParameterSpec::new("cycles", 1.0, [0.0, 50.0]).rounded(),
                ParameterSpec::new("density", 16.0, [5.0, 100.0]).rounded(),
            ],
        },
        DatasetGenerator {
            name: "Seeded Random Distribution",
            kind: GeneratorKind::PseudoRandom,
            params: vec![
                ParameterSpec::new("seed", 5.0, [0.0, 1e7]),
                ParameterSpec::new("amplitude", 100.0, [0.0, 10_000.0]),
                ParameterSpec::new("points", 50.0, [4.0, 1000.0]).rounded(),
            ],
        },
        DatasetGenerator {
            name: "Rings",
            kind: GeneratorKind::Ring,
            params: vec![
                ParameterSpec::new("radius1", 40.0, [0.0, 1e7]),
                ParameterSpec::new("radius2", 70.0, [0.0, 1e7]),
                ParameterSpec::new("density", 12.0, [3.0, 100.0]).rounded(),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn effective_clamps_out_of_bounds_input() {
        let spec = ParameterSpec::new("density", 16.0, [5.0, 100.0]).rounded();
        assert_eq!(spec.effective(3.0), 5.0);
        assert_eq!(spec.effective(1000.0), 100.0);
        assert_eq!(spec.effective(16.4), 16.0);
    }

    #[test]
    fn effective_passes_nan_through() {
        // NaN is a validation error at the renderer boundary, not a clamp.
        let spec = ParameterSpec::new("seed", 5.0, [0.0, 1e7]);
        assert!(spec.effective(f64::NAN).is_nan());
    }

    #[test]
    fn step_from_fractional_digits() {
        assert_eq!(ParameterSpec::new("beta", 0.5, [0.0, 1.0]).step(), 0.1);
        assert_eq!(ParameterSpec::new("alpha", 0.25, [0.0, 1.0]).step(), 0.05);
    }

    #[test]
    fn step_for_integer_defaults() {
        assert_eq!(ParameterSpec::new("cycles", 1.0, [0.0, 50.0]).step(), 1.0);
        assert_eq!(ParameterSpec::new("density", 16.0, [5.0, 100.0]).step(), 2.0);
    }

    #[test]
    fn control_ids_follow_name_index_convention() {
        let spec = ParameterSpec::new("amplitude", 1.0, [0.0, 10.0]);
        assert_eq!(spec.control_id(0), "amplitude-0");
        assert_eq!(spec.control_id(3), "amplitude-3");
    }

    #[test]
    fn standard_registry_has_three_generators() {
        let gens = standard_generators();
        assert_eq!(gens.len(), 3);
        assert_eq!(gens[0].params.len(), 4);
        assert_eq!(gens[1].params.len(), 3);
        assert_eq!(gens[2].params.len(), 3);
    }
}
