//! Monotone cubic interpolation (Fritsch-Carlson tangents).
//!
//! Preserves monotonicity of the data along one axis: if the y-values are
//! monotone in x, the interpolant is too, so no spurious overshoot appears
//! between samples. The y variant runs the same machine over transposed
//! coordinates and swaps the emitted commands back.

use super::path::Path;

struct Mono {
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
    t0: f64,
    state: u8,
}

fn sign(x: f64) -> f64 {
    if x < 0.0 {
        -1.0
    } else {
        1.0
    }
}

/// Three-point slope estimate, clamped to keep the segment monotone.
fn slope3(m: &Mono, x2: f64, y2: f64) -> f64 {
    let h0 = m.x1 - m.x0;
    let h1 = x2 - m.x1;
    // Signed zeros stand in for degenerate spacings so the quotients keep
    // a meaningful sign (matching the reference implementation).
    let d0 = if h0 != 0.0 {
        h0
    } else if h1 < 0.0 {
        -0.0
    } else {
        0.0
    };
    let d1 = if h1 != 0.0 {
        h1
    } else if h0 < 0.0 {
        -0.0
    } else {
        0.0
    };
    let s0 = (m.y1 - m.y0) / d0;
    let s1 = (y2 - m.y1) / d1;
    let p = (s0 * h1 + s1 * h0) / (h0 + h1);
    let t = (sign(s0) + sign(s1)) * s0.abs().min(s1.abs()).min(0.5 * p.abs());
    if t.is_nan() {
        0.0
    } else {
        t
    }
}

/// One-sided slope estimate for the endpoints.
fn slope2(m: &Mono, t: f64) -> f64 {
    let h = m.x1 - m.x0;
    if h != 0.0 {
        (3.0 * (m.y1 - m.y0) / h - t) / 2.0
    } else {
        t
    }
}

/// Emit the hermite segment from `(x0, y0)` to `(x1, y1)` with tangents
/// `t0`, `t1`, expressed as a cubic bezier.
fn curve(m: &Mono, out: &mut Path, t0: f64, t1: f64) {
    let dx = (m.x1 - m.x0) / 3.0;
    out.curve_to(
        m.x0 + dx,
        m.y0 + dx * t0,
        m.x1 - dx,
        m.y1 - dx * t1,
        m.x1,
        m.y1,
    );
}

fn run(points: &[(f64, f64)], out: &mut Path) {
    let mut m = Mono {
        x0: f64::NAN,
        y0: f64::NAN,
        x1: f64::NAN,
        y1: f64::NAN,
        t0: f64::NAN,
        state: 0,
    };

    for &(x, y) in points {
        let mut t1 = f64::NAN;
        // Coincident points carry no slope information.
        if x == m.x1 && y == m.y1 {
            continue;
        }
        match m.state {
            0 => {
                m.state = 1;
                out.move_to(x, y);
            }
            1 => m.state = 2,
            2 => {
                m.state = 3;
                t1 = slope3(&m, x, y);
                curve(&m, out, slope2(&m, t1), t1);
            }
            _ => {
                t1 = slope3(&m, x, y);
                curve(&m, out, m.t0, t1);
            }
        }
        m.x0 = m.x1;
        m.y0 = m.y1;
        m.x1 = x;
        m.y1 = y;
        m.t0 = t1;
    }

    match m.state {
        2 => out.line_to(m.x1, m.y1),
        3 => {
            let t1 = slope2(&m, m.t0);
            curve(&m, out, m.t0, t1);
        }
        _ => {}
    }
}

pub fn monotone_x(points: &[(f64, f64)], out: &mut Path) {
    run(points, out);
}

pub fn monotone_y(points: &[(f64, f64)], out: &mut Path) {
    let swapped: Vec<(f64, f64)> = points.iter().map(|&(x, y)| (y, x)).collect();
    let mut transposed = Path::new();
    run(&swapped, &mut transposed);
    transposed.transpose();
    *out = transposed;
}
