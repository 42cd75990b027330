//! Natural cubic spline.
//!
//! Unlike the streaming variants, the natural spline needs every point up
//! front: the control points come from a tridiagonal solve over the whole
//! sequence (zero second derivative at both ends).

use super::path::Path;

/// Solve for the bezier control points along one axis.
///
/// Returns `(first_controls, second_controls)`, one pair per segment.
fn control_points(x: &[f64]) -> (Vec<f64>, Vec<f64>) {
    let n = x.len() - 1;
    let mut a = vec![0.0; n];
    let mut b = vec![0.0; n];
    let mut r = vec![0.0; n];

    a[0] = 0.0;
    b[0] = 2.0;
    r[0] = x[0] + 2.0 * x[1];
    for i in 1..n - 1 {
        a[i] = 1.0;
        b[i] = 4.0;
        r[i] = 4.0 * x[i] + 2.0 * x[i + 1];
    }
    a[n - 1] = 2.0;
    b[n - 1] = 7.0;
    r[n - 1] = 8.0 * x[n - 1] + x[n];

    // Forward elimination, then back substitution.
    for i in 1..n {
        let m = a[i] / b[i - 1];
        b[i] -= m;
        r[i] -= m * r[i - 1];
    }
    a[n - 1] = r[n - 1] / b[n - 1];
    for i in (0..n - 1).rev() {
        a[i] = (r[i] - a[i + 1]) / b[i];
    }

    b[n - 1] = (x[n] + a[n - 1]) / 2.0;
    for i in 0..n - 1 {
        b[i] = 2.0 * x[i + 1] - a[i + 1];
    }

    (a, b)
}

pub fn natural(points: &[(f64, f64)], out: &mut Path) {
    let n = points.len();
    if n == 0 {
        return;
    }

    out.move_to(points[0].0, points[0].1);

    if n == 1 {
        return;
    }
    if n == 2 {
        out.line_to(points[1].0, points[1].1);
        return;
    }

    let xs: Vec<f64> = points.iter().map(|p| p.0).collect();
    let ys: Vec<f64> = points.iter().map(|p| p.1).collect();
    let (px1, px2) = control_points(&xs);
    let (py1, py2) = control_points(&ys);

    for i in 1..n {
        out.curve_to(
            px1[i - 1],
            py1[i - 1],
            px2[i - 1],
            py2[i - 1],
            xs[i],
            ys[i],
        );
    }
}
