//! Catmull-Rom spline variants with centripetal parameterization.
//!
//! `alpha ∈ (0, 1]` controls the knot parameterization (0.5 = centripetal,
//! 1 = chordal). An alpha of zero degrades to the uniform case, which is the
//! cardinal spline with tension 0 — the same fallback the original library
//! performs.

use super::cardinal;
use super::path::Path;

const EPSILON: f64 = 1e-12;

struct CatCore {
    alpha: f64,
    l01_a: f64,
    l12_a: f64,
    l23_a: f64,
    l01_2a: f64,
    l12_2a: f64,
    l23_2a: f64,
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
}

impl CatCore {
    fn new(alpha: f64) -> Self {
        Self {
            alpha,
            l01_a: 0.0,
            l12_a: 0.0,
            l23_a: 0.0,
            l01_2a: 0.0,
            l12_2a: 0.0,
            l23_2a: 0.0,
            x0: f64::NAN,
            y0: f64::NAN,
            x1: f64::NAN,
            y1: f64::NAN,
            x2: f64::NAN,
            y2: f64::NAN,
        }
    }

    fn update_l23(&mut self, x: f64, y: f64) {
        let x23 = self.x2 - x;
        let y23 = self.y2 - y;
        self.l23_2a = (x23 * x23 + y23 * y23).powf(self.alpha);
        self.l23_a = self.l23_2a.sqrt();
    }

    /// Emit the segment ending at `(x2, y2)` with knot-weighted tangents.
    fn bezier(&self, out: &mut Path, x: f64, y: f64) {
        let mut cx1 = self.x1;
        let mut cy1 = self.y1;
        let mut cx2 = self.x2;
        let mut cy2 = self.y2;

        if self.l01_a > EPSILON {
            let a = 2.0 * self.l01_2a + 3.0 * self.l01_a * self.l12_a + self.l12_2a;
            let n = 3.0 * self.l01_a * (self.l01_a + self.l12_a);
            cx1 = (cx1 * a - self.x0 * self.l12_2a + self.x2 * self.l01_2a) / n;
            cy1 = (cy1 * a - self.y0 * self.l12_2a + self.y2 * self.l01_2a) / n;
        }

        if self.l23_a > EPSILON {
            let b = 2.0 * self.l23_2a + 3.0 * self.l23_a * self.l12_a + self.l12_2a;
            let m = 3.0 * self.l23_a * (self.l23_a + self.l12_a);
            cx2 = (cx2 * b + self.x1 * self.l23_2a - x * self.l12_2a) / m;
            cy2 = (cy2 * b + self.y1 * self.l23_2a - y * self.l12_2a) / m;
        }

        out.curve_to(cx1, cy1, cx2, cy2, self.x2, self.y2);
    }

    fn shift(&mut self, x: f64, y: f64) {
        self.l01_a = self.l12_a;
        self.l12_a = self.l23_a;
        self.l01_2a = self.l12_2a;
        self.l12_2a = self.l23_2a;
        self.x0 = self.x1;
        self.x1 = self.x2;
        self.x2 = x;
        self.y0 = self.y1;
        self.y1 = self.y2;
        self.y2 = y;
    }
}

struct CatState {
    c: CatCore,
    state: u8,
}

impl CatState {
    fn point(&mut self, out: &mut Path, x: f64, y: f64) {
        if self.state != 0 {
            self.c.update_l23(x, y);
        }
        match self.state {
            0 => {
                self.state = 1;
                out.move_to(x, y);
            }
            1 => self.state = 2,
            _ => {
                self.state = 3;
                self.c.bezier(out, x, y);
            }
        }
        self.c.shift(x, y);
    }
}

pub fn catmull_rom(points: &[(f64, f64)], alpha: f64, out: &mut Path) {
    if !(alpha > 0.0) {
        return cardinal::cardinal(points, 0.0, out);
    }

    let mut s = CatState {
        c: CatCore::new(alpha),
        state: 0,
    };
    for &(x, y) in points {
        s.point(out, x, y);
    }

    match s.state {
        2 => out.line_to(s.c.x2, s.c.y2),
        3 => {
            let (x2, y2) = (s.c.x2, s.c.y2);
            s.point(out, x2, y2);
        }
        _ => {}
    }
}

pub fn catmull_rom_open(points: &[(f64, f64)], alpha: f64, out: &mut Path) {
    if !(alpha > 0.0) {
        return cardinal::cardinal_open(points, 0.0, out);
    }

    let mut c = CatCore::new(alpha);
    let mut state = 0u8;

    for &(x, y) in points {
        if state != 0 {
            c.update_l23(x, y);
        }
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

struct CatClosedState {
    c: CatCore,
    x3: f64,
    y3: f64,
    x4: f64,
    y4: f64,
    x5: f64,
    y5: f64,
    state: u8,
}

impl CatClosedState {
    fn point(&mut self, out: &mut Path, x: f64, y: f64) {
        if self.state != 0 {
            self.c.update_l23(x, y);
        }
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

pub fn catmull_rom_closed(points: &[(f64, f64)], alpha: f64, out: &mut Path) {
    if !(alpha > 0.0) {
        return cardinal::cardinal_closed(points, 0.0, out);
    }

    let mut s = CatClosedState {
        c: CatCore::new(alpha),
        x3: 0.0,
        y3: 0.0,
        x4: 0.0,
        y4: 0.0,
        x5: 0.0,
        y5: 0.0,
        state: 0,
    };
    for &(x, y) in points {
        s.point(out, x, y);
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
                s.point(out, x, y);
            }
        }
        _ => {}
    }
}
