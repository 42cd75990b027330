//! Cardinal spline variants.
//!
//! The tension parameter `t ∈ [0, 1]` scales the tangents via
//! `k = (1 - t) / 6`: tension 1 yields straight segments, tension 0 the
//! classic Catmull-Rom-like cardinal spline.

use super::path::Path;

pub(super) struct CardinalCore {
    pub k: f64,
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl CardinalCore {
    pub fn new(tension: f64) -> Self {
        Self {
            k: (1.0 - tension) / 6.0,
            x0: f64::NAN,
            y0: f64::NAN,
            x1: f64::NAN,
            y1: f64::NAN,
            x2: f64::NAN,
            y2: f64::NAN,
        }
    }

    /// Emit the segment ending at `(x2, y2)`, with tangents taken from the
    /// surrounding window and the incoming point `(x, y)`.
    pub fn bezier(&self, out: &mut Path, x: f64, y: f64) {
        out.curve_to(
            self.x1 + self.k * (self.x2 - self.x0),
            self.y1 + self.k * (self.y2 - self.y0),
            self.x2 + self.k * (self.x1 - x),
            self.y2 + self.k * (self.y1 - y),
            self.x2,
            self.y2,
        );
    }

    pub fn shift(&mut self, x: f64, y: f64) {
        self.x0 = self.x1;
        self.x1 = self.x2;
        self.x2 = x;
        self.y0 = self.y1;
        self.y1 = self.y2;
        self.y2 = y;
    }
}

pub fn cardinal(points: &[(f64, f64)], tension: f64, out: &mut Path) {
    let mut c = CardinalCore::new(tension);
    let mut state = 0u8;

    for &(x, y) in points {
        match state {
            0 => {
                state = 1;
                out.move_to(x, y);
            }
            1 => {
                state = 2;
                c.x1 = x;
                c.y1 = y;
            }
            _ => {
                state = 3;
                c.bezier(out, x, y);
            }
        }
        c.shift(x, y);
    }

    match state {
        2 => out.line_to(c.x2, c.y2),
        3 => {
            let (x1, y1) = (c.x1, c.y1);
            c.bezier(out, x1, y1);
        }
        _ => {}
    }
}

pub fn cardinal_open(points: &[(f64, f64)], tension: f64, out: &mut Path) {
    let mut c = CardinalCore::new(tension);
    let mut state = 0u8;

    for &(x, y) in points {
        match state {
            0 => state = 1,
            1 => state = 2,
            2 => {
                state = 3;
                out.move_to(c.x2, c.y2);
            }
            _ => c.bezier(out, x, y),
        }
        c.shift(x, y);
    }
}

struct CardinalClosedState {
    c: CardinalCore,
    x3: f64,
    y3: f64,
    x4: f64,
    y4: f64,
    x5: f64,
    y5: f64,
    state: u8,
}

impl CardinalClosedState {
    fn feed(&mut self, out: &mut Path, x: f64, y: f64) {
        match self.state {
            0 => {
                self.state = 1;
                self.x3 = x;
                self.y3 = y;
            }
            1 => {
                self.state = 2;
                self.x4 = x;
                self.y4 = y;
                out.move_to(x, y);
            }
            2 => {
                self.state = 3;
                self.x5 = x;
                self.y5 = y;
            }
            _ => self.c.bezier(out, x, y),
        }
        self.c.shift(x, y);
    }
}

pub fn cardinal_closed(points: &[(f64, f64)], tension: f64, out: &mut Path) {
    let mut s = CardinalClosedState {
        c: CardinalCore::new(tension),
        x3: 0.0,
        y3: 0.0,
        x4: 0.0,
        y4: 0.0,
        x5: 0.0,
        y5: 0.0,
        state: 0,
    };

    for &(x, y) in points {
        s.feed(out, x, y);
    }

    match s.state {
        1 => {
            out.move_to(s.x3, s.y3);
            out.close();
        }
        2 => {
            out.line_to(s.x3, s.y3);
            out.close();
        }
        3 => {
            let (x3, y3, x4, y4, x5, y5) = (s.x3, s.y3, s.x4, s.y4, s.x5, s.y5);
            for (x, y) in [(x3, y3), (x4, y4), (x5, y5)] {
                s.feed(out, x, y);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curves::PathCommand;

    #[test]
    fn full_tension_degenerates_to_straight_controls() {
        // tension = 1 -> k = 0: control points collapse onto the segment ends.
        let mut path = Path::new();
        cardinal(&[(0.0, 0.0), (1.0, 2.0), (2.0, 0.0)], 1.0, &mut path);
        for cmd in path.commands() {
            if let PathCommand::CurveTo(x1, y1, x2, y2, x, y) = *cmd {
                // Second control point equals the endpoint when k = 0.
                assert_eq!((x2, y2), (x, y));
                assert!(x1.is_finite() && y1.is_finite());
            }
        }
    }

    #[test]
    fn two_points_fall_back_to_a_segment() {
        let mut path = Path::new();
        cardinal(&[(0.0, 1.0), (5.0, 2.0)], 0.5, &mut path);
        assert_eq!(
            path.commands(),
            &[PathCommand::MoveTo(0.0, 1.0), PathCommand::LineTo(5.0, 2.0)]
        );
    }

    #[test]
    fn open_variant_starts_at_second_point() {
        let mut path = Path::new();
        cardinal_open(
            &[(0.0, 0.0), (1.0, 1.0), (2.0, 0.0), (3.0, 1.0)],
            0.0,
            &mut path,
        );
        assert_eq!(path.commands()[0], PathCommand::MoveTo(1.0, 1.0));
    }

    #[test]
    fn closed_variant_wraps_around() {
        let mut path = Path::new();
        cardinal_closed(
            &[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)],
            0.5,
            &mut path,
        );
        let lines = path.flatten(6);
        let line = &lines[0];
        assert_eq!(line.first(), line.last());
    }
}
