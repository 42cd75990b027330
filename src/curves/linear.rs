//! Polyline and step variants.

use super::path::Path;

pub fn linear(points: &[(f64, f64)], out: &mut Path) {
    for (i, &(x, y)) in points.iter().enumerate() {
        if i == 0 {
            out.move_to(x, y);
        } else {
            out.line_to(x, y);
        }
    }
}

pub fn linear_closed(points: &[(f64, f64)], out: &mut Path) {
    linear(points, out);
    if !points.is_empty() {
        out.close();
    }
}

/// Step interpolation.
///
/// `t` positions the riser between consecutive points: 0 steps before
/// (riser at the previous x), 1 steps after (riser at the next x), 0.5 in
/// the middle.
pub fn step(points: &[(f64, f64)], t: f64, out: &mut Path) {
    let mut prev: Option<(f64, f64)> = None;

    for &(x, y) in points {
        match prev {
            None => out.move_to(x, y),
            Some((px, py)) => {
                if t <= 0.0 {
                    out.line_to(px, y);
                    out.line_to(x, y);
                } else {
                    let x1 = px * (1.0 - t) + x * t;
                    out.line_to(x1, py);
                    out.line_to(x1, y);
                }
            }
        }
        prev = Some((x, y));
    }

    // A mid riser leaves the final tread unfinished.
    if 0.0 < t && t < 1.0 {
        if let Some((px, py)) = prev {
            if points.len() >= 2 {
                out.line_to(px, py);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curves::PathCommand;

    #[test]
    fn linear_is_one_segment_per_gap() {
        let mut path = Path::new();
        linear(&[(0.0, 0.0), (1.0, 1.0), (2.0, 0.0)], &mut path);
        assert_eq!(
            path.commands(),
            &[
                PathCommand::MoveTo(0.0, 0.0),
                PathCommand::LineTo(1.0, 1.0),
                PathCommand::LineTo(2.0, 0.0),
            ]
        );
    }

    #[test]
    fn linear_closed_appends_close() {
        let mut path = Path::new();
        linear_closed(&[(0.0, 0.0), (1.0, 1.0)], &mut path);
        assert_eq!(path.commands().last(), Some(&PathCommand::Close));
    }

    #[test]
    fn step_before_rises_at_previous_x() {
        let mut path = Path::new();
        step(&[(0.0, 0.0), (2.0, 4.0)], 0.0, &mut path);
        assert_eq!(
            path.commands(),
            &[
                PathCommand::MoveTo(0.0, 0.0),
                PathCommand::LineTo(0.0, 4.0),
                PathCommand::LineTo(2.0, 4.0),
            ]
        );
    }

    #[test]
    fn step_after_rises_at_next_x() {
        let mut path = Path::new();
        step(&[(0.0, 0.0), (2.0, 4.0)], 1.0, &mut path);
        assert_eq!(
            path.commands(),
            &[
                PathCommand::MoveTo(0.0, 0.0),
                PathCommand::LineTo(2.0, 0.0),
                PathCommand::LineTo(2.0, 4.0),
            ]
        );
    }

    #[test]
    fn step_mid_rises_halfway_and_finishes_the_tread() {
        let mut path = Path::new();
        step(&[(0.0, 0.0), (2.0, 4.0)], 0.5, &mut path);
        assert_eq!(
            path.commands(),
            &[
                PathCommand::MoveTo(0.0, 0.0),
                PathCommand::LineTo(1.0, 0.0),
                PathCommand::LineTo(1.0, 4.0),
                PathCommand::LineTo(2.0, 4.0),
            ]
        );
    }
}
