//! Cubic uniform B-spline variants (basis, basis-closed, basis-open) and the
//! bundle curve, which straightens a basis spline toward the chord between
//! the endpoints.
//!
//! Ported from the d3-shape curve state machines: each input point advances a
//! small state counter, and beziers are emitted over a sliding window of the
//! two previous points.

use super::path::Path;

/// Emit the basis bezier for the window `(x0, y0), (x1, y1)` and the incoming
/// point `(x, y)`.
fn bezier(out: &mut Path, x0: f64, y0: f64, x1: f64, y1: f64, x: f64, y: f64) {
    out.curve_to(
        (2.0 * x0 + x1) / 3.0,
        (2.0 * y0 + y1) / 3.0,
        (x0 + 2.0 * x1) / 3.0,
        (y0 + 2.0 * y1) / 3.0,
        (x0 + 4.0 * x1 + x) / 6.0,
        (y0 + 4.0 * y1 + y) / 6.0,
    );
}

pub fn basis(points: &[(f64, f64)], out: &mut Path) {
    let (mut x0, mut y0, mut x1, mut y1) = (f64::NAN, f64::NAN, f64::NAN, f64::NAN);
    let mut state = 0u8;

    for &(x, y) in points {
        match state {
            0 => {
                state = 1;
                out.move_to(x, y);
            }
            1 => state = 2,
            _ => {
                if state == 2 {
                    state = 3;
                    out.line_to((5.0 * x0 + x1) / 6.0, (5.0 * y0 + y1) / 6.0);
                }
                bezier(out, x0, y0, x1, y1, x, y);
            }
        }
        x0 = x1;
        y0 = y1;
        x1 = x;
        y1 = y;
    }

    match state {
        3 => {
            bezier(out, x0, y0, x1, y1, x1, y1);
            out.line_to(x1, y1);
        }
        2 => out.line_to(x1, y1),
        _ => {}
    }
}

pub fn basis_open(points: &[(f64, f64)], out: &mut Path) {
    let (mut x0, mut y0, mut x1, mut y1) = (f64::NAN, f64::NAN, f64::NAN, f64::NAN);
    let mut state = 0u8;

    for &(x, y) in points {
        match state {
            0 => state = 1,
            1 => state = 2,
            2 => {
                state = 3;
                out.move_to((x0 + 4.0 * x1 + x) / 6.0, (y0 + 4.0 * y1 + y) / 6.0);
            }
            _ => bezier(out, x0, y0, x1, y1, x, y),
        }
        x0 = x1;
        y0 = y1;
        x1 = x;
        y1 = y;
    }
}

#[derive(Default)]
struct BasisClosedState {
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
    // First three points, replayed at the end to wrap the spline around.
    x2: f64,
    y2: f64,
    x3: f64,
    y3: f64,
    x4: f64,
    y4: f64,
    state: u8,
}

impl BasisClosedState {
    fn feed(&mut self, out: &mut Path, x: f64, y: f64) {
        match self.state {
            0 => {
                self.state = 1;
                self.x2 = x;
                self.y2 = y;
            }
            1 => {
                self.state = 2;
                self.x3 = x;
                self.y3 = y;
            }
            2 => {
                self.state = 3;
                self.x4 = x;
                self.y4 = y;
                out.move_to(
                    (self.x0 + 4.0 * self.x1 + x) / 6.0,
                    (self.y0 + 4.0 * self.y1 + y) / 6.0,
                );
            }
            _ => bezier(out, self.x0, self.y0, self.x1, self.y1, x, y),
        }
        self.x0 = self.x1;
        self.y0 = self.y1;
        self.x1 = x;
        self.y1 = y;
    }
}

pub fn basis_closed(points: &[(f64, f64)], out: &mut Path) {
    let mut s = BasisClosedState::default();

    for &(x, y) in points {
        s.feed(out, x, y);
    }

    match s.state {
        1 => {
            out.move_to(s.x2, s.y2);
            out.close();
        }
        2 => {
            out.move_to((s.x2 + 2.0 * s.x3) / 3.0, (s.y2 + 2.0 * s.y3) / 3.0);
            out.line_to((s.x3 + 2.0 * s.x2) / 3.0, (s.y3 + 2.0 * s.y2) / 3.0);
            out.close();
        }
        3 => {
            // Replaying the first three points closes the loop geometrically;
            // the final bezier lands exactly on the starting move.
            let (x2, y2, x3, y3, x4, y4) = (s.x2, s.y2, s.x3, s.y3, s.x4, s.y4);
            for (x, y) in [(x2, y2), (x3, y3), (x4, y4)] {
                s.feed(out, x, y);
            }
        }
        _ => {}
    }
}

/// Basis spline of points blended toward the straight chord between the
/// first and last point. `beta = 1` is the plain basis curve; `beta = 0`
/// collapses onto the chord.
pub fn bundle(points: &[(f64, f64)], beta: f64, out: &mut Path) {
    if points.len() < 2 {
        basis(points, out);
        return;
    }

    let j = points.len() - 1;
    let (x0, y0) = points[0];
    let dx = points[j].0 - x0;
    let dy = points[j].1 - y0;

    let blended: Vec<(f64, f64)> = points
        .iter()
        .enumerate()
        .map(|(i, &(x, y))| {
            let t = i as f64 / j as f64;
            (
                beta * x + (1.0 - beta) * (x0 + t * dx),
                beta * y + (1.0 - beta) * (y0 + t * dy),
            )
        })
        .collect();

    basis(&blended, out);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curves::PathCommand;

    #[test]
    fn basis_two_points_is_a_segment() {
        let mut path = Path::new();
        basis(&[(0.0, 0.0), (2.0, 2.0)], &mut path);
        assert_eq!(
            path.commands(),
            &[PathCommand::MoveTo(0.0, 0.0), PathCommand::LineTo(2.0, 2.0)]
        );
    }

    #[test]
    fn basis_interior_follows_spline_average() {
        let mut path = Path::new();
        basis(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)], &mut path);
        // Collinear input stays collinear: every emitted y is 0.
        for cmd in path.commands() {
            match *cmd {
                PathCommand::MoveTo(_, y) | PathCommand::LineTo(_, y) => assert_eq!(y, 0.0),
                PathCommand::CurveTo(_, y1, _, y2, _, y) => {
                    assert_eq!(y1, 0.0);
                    assert_eq!(y2, 0.0);
                    assert_eq!(y, 0.0);
                }
                PathCommand::Close => {}
            }
        }
    }

    #[test]
    fn bundle_beta_one_equals_basis() {
        let pts = [(0.0, 0.0), (1.0, 3.0), (2.0, -1.0), (3.0, 2.0)];
        let mut a = Path::new();
        let mut b = Path::new();
        bundle(&pts, 1.0, &mut a);
        basis(&pts, &mut b);
        assert_eq!(a, b);
    }

    #[test]
    fn bundle_beta_zero_collapses_to_chord() {
        let pts = [(0.0, 0.0), (1.0, 5.0), (2.0, -3.0), (3.0, 3.0)];
        let mut path = Path::new();
        bundle(&pts, 0.0, &mut path);
        // All geometry lies on the chord y = x.
        for line in path.flatten(8) {
            for (x, y) in line {
                assert!((y - x).abs() < 1e-9, "({x}, {y}) off the chord");
            }
        }
    }

    #[test]
    fn basis_closed_returns_to_start() {
        let mut path = Path::new();
        basis_closed(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)], &mut path);
        let lines = path.flatten(8);
        let line = &lines[0];
        let first = line.first().unwrap();
        let last = line.last().unwrap();
        assert!((first.0 - last.0).abs() < 1e-9 && (first.1 - last.1).abs() < 1e-9);
    }

    #[test]
    fn basis_open_skips_endpoints() {
        let mut path = Path::new();
        basis_open(
            &[(0.0, 0.0), (1.0, 1.0), (2.0, 0.0), (3.0, 1.0), (4.0, 0.0)],
            &mut path,
        );
        // The open variant starts strictly inside the hull of the first
        // three points, not at the first input point.
        match path.commands()[0] {
            PathCommand::MoveTo(x, _) => assert!((x - 1.0).abs() < 1e-9),
            ref other => panic!("expected MoveTo, got {other:?}"),
        }
    }
}
