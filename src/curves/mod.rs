//! Interpolation curve registry.
//!
//! Eighteen named variants, ported from the d3-shape curve state machines.
//! Each variant either takes no shape parameter or exactly one numeric
//! parameter in `[0, 1]` (beta for bundle, tension for the cardinal family,
//! alpha for the catmull-rom family).
//!
//! Binding a parameter yields a new immutable [`BoundCurve`]; registry
//! entries themselves are never mutated. `build` turns an ordered sequence
//! of screen-space points into an opaque [`Path`].

mod basis;
mod cardinal;
mod catmull_rom;
mod linear;
mod monotone;
mod natural;
mod path;

pub use path::{Path, PathCommand};

use crate::datasets::ParameterSpec;

/// Every interpolation variant in the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurveKind {
    Basis,
    BasisClosed,
    BasisOpen,
    Bundle,
    Cardinal,
    CardinalClosed,
    CardinalOpen,
    CatmullRom,
    CatmullRomClosed,
    CatmullRomOpen,
    Linear,
    LinearClosed,
    MonotoneX,
    MonotoneY,
    Natural,
    Step,
    StepAfter,
    StepBefore,
}

impl CurveKind {
    pub const ALL: [CurveKind; 18] = [
        CurveKind::Basis,
        CurveKind::BasisClosed,
        CurveKind::BasisOpen,
        CurveKind::Bundle,
        CurveKind::Cardinal,
        CurveKind::CardinalClosed,
        CurveKind::CardinalOpen,
        CurveKind::CatmullRom,
        CurveKind::CatmullRomClosed,
        CurveKind::CatmullRomOpen,
        CurveKind::Linear,
        CurveKind::LinearClosed,
        CurveKind::MonotoneX,
        CurveKind::MonotoneY,
        CurveKind::Natural,
        CurveKind::Step,
        CurveKind::StepAfter,
        CurveKind::StepBefore,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            CurveKind::Basis => "Basis",
            CurveKind::BasisClosed => "BasisClosed",
            CurveKind::BasisOpen => "BasisOpen",
            CurveKind::Bundle => "Bundle",
            CurveKind::Cardinal => "Cardinal",
            CurveKind::CardinalClosed => "CardinalClosed",
            CurveKind::CardinalOpen => "CardinalOpen",
            CurveKind::CatmullRom => "CatmullRom",
            CurveKind::CatmullRomClosed => "CatmullRomClosed",
            CurveKind::CatmullRomOpen => "CatmullRomOpen",
            CurveKind::Linear => "Linear",
            CurveKind::LinearClosed => "LinearClosed",
            CurveKind::MonotoneX => "MonotoneX",
            CurveKind::MonotoneY => "MonotoneY",
            CurveKind::Natural => "Natural",
            CurveKind::Step => "Step",
            CurveKind::StepAfter => "StepAfter",
            CurveKind::StepBefore => "StepBefore",
        }
    }

    /// The shape parameter this variant accepts, if any.
    pub fn shape_param(self) -> Option<ParameterSpec> {
        let spec = |name| ParameterSpec::new(name, 0.5, [0.0, 1.0]);
        match self {
            CurveKind::Bundle => Some(spec("beta")),
            CurveKind::Cardinal | CurveKind::CardinalClosed | CurveKind::CardinalOpen => {
                Some(spec("tension"))
            }
            CurveKind::CatmullRom | CurveKind::CatmullRomClosed | CurveKind::CatmullRomOpen => {
                Some(spec("alpha"))
            }
            _ => None,
        }
    }
}

/// A registry entry: a variant plus its (0 or 1) parameter specs.
#[derive(Debug, Clone)]
pub struct CurveType {
    pub kind: CurveKind,
    pub params: Vec<ParameterSpec>,
}

impl CurveType {
    pub fn new(kind: CurveKind) -> Self {
        Self {
            kind,
            params: kind.shape_param().into_iter().collect(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.kind.display_name()
    }

    /// Bind the shape parameter, producing an immutable builder.
    ///
    /// `value` is ignored for parameterless variants. Out-of-domain values
    /// are clamped by the parameter's spec.
    pub fn bind(&self, value: f64) -> BoundCurve {
        let value = self.params.first().map(|spec| spec.effective(value));
        BoundCurve {
            kind: self.kind,
            value,
        }
    }

    /// Bind using the parameter's default (if any).
    pub fn bind_default(&self) -> BoundCurve {
        self.bind(self.params.first().map(|p| p.default).unwrap_or(0.0))
    }
}

/// An immutable path builder: a variant with its parameter bound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundCurve {
    kind: CurveKind,
    value: Option<f64>,
}

impl BoundCurve {
    pub fn kind(&self) -> CurveKind {
        self.kind
    }

    /// The bound parameter values (empty for parameterless variants).
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.value.into_iter()
    }

    /// Build a drawable path over an ordered screen-space point sequence.
    pub fn build(&self, points: &[(f64, f64)]) -> Path {
        let mut out = Path::new();
        let v = self.value.unwrap_or(0.5);
        match self.kind {
            CurveKind::Basis => basis::basis(points, &mut out),
            CurveKind::BasisClosed => basis::basis_closed(points, &mut out),
            CurveKind::BasisOpen => basis::basis_open(points, &mut out),
            CurveKind::Bundle => basis::bundle(points, v, &mut out),
            CurveKind::Cardinal => cardinal::cardinal(points, v, &mut out),
            CurveKind::CardinalClosed => cardinal::cardinal_closed(points, v, &mut out),
            CurveKind::CardinalOpen => cardinal::cardinal_open(points, v, &mut out),
            CurveKind::CatmullRom => catmull_rom::catmull_rom(points, v, &mut out),
            CurveKind::CatmullRomClosed => catmull_rom::catmull_rom_closed(points, v, &mut out),
            CurveKind::CatmullRomOpen => catmull_rom::catmull_rom_open(points, v, &mut out),
            CurveKind::Linear => linear::linear(points, &mut out),
            CurveKind::LinearClosed => linear::linear_closed(points, &mut out),
            CurveKind::MonotoneX => monotone::monotone_x(points, &mut out),
            CurveKind::MonotoneY => monotone::monotone_y(points, &mut out),
            CurveKind::Natural => natural::natural(points, &mut out),
            CurveKind::Step => linear::step(points, 0.5, &mut out),
            CurveKind::StepAfter => linear::step(points, 1.0, &mut out),
            CurveKind::StepBefore => linear::step(points, 0.0, &mut out),
        }
        out
    }
}

/// The full registry, in display order.
pub fn standard_curves() -> Vec<CurveType> {
    CurveKind::ALL.iter().copied().map(CurveType::new).collect()
}
