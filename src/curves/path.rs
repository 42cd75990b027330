//! Drawable path representation.
//!
//! Curve builders emit an opaque command list (move / line / cubic bezier /
//! close). The TUI flattens it into polylines for Plotters; other front-ends
//! could map the commands onto a richer canvas directly.

/// One path drawing command, in screen-space coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(f64, f64),
    LineTo(f64, f64),
    /// Cubic bezier: two control points, then the end point.
    CurveTo(f64, f64, f64, f64, f64, f64),
    Close,
}

/// An ordered command list produced by a curve builder.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, x: f64, y: f64) {
        self.commands.push(PathCommand::MoveTo(x, y));
    }

    pub fn line_to(&mut self, x: f64, y: f64) {
        self.commands.push(PathCommand::LineTo(x, y));
    }

    pub fn curve_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64) {
        self.commands
            .push(PathCommand::CurveTo(x1, y1, x2, y2, x, y));
    }

    pub fn close(&mut self) {
        self.commands.push(PathCommand::Close);
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Swap the x and y of every command.
    ///
    /// Lets a curve defined over one axis (monotone-x) serve as its
    /// transposed sibling (monotone-y).
    pub fn transpose(&mut self) {
        for cmd in &mut self.commands {
            *cmd = match *cmd {
                PathCommand::MoveTo(x, y) => PathCommand::MoveTo(y, x),
                PathCommand::LineTo(x, y) => PathCommand::LineTo(y, x),
                PathCommand::CurveTo(x1, y1, x2, y2, x, y) => {
                    PathCommand::CurveTo(y1, x1, y2, x2, y, x)
                }
                PathCommand::Close => PathCommand::Close,
            }
        }
    }

    /// Flatten into polylines, one per subpath.
    ///
    /// Beziers are sampled at `curve_samples` interior steps. `Close` appends
    /// the subpath's starting vertex.
    pub fn flatten(&self, curve_samples: usize) -> Vec<Vec<(f64, f64)>> {
        let mut lines: Vec<Vec<(f64, f64)>> = Vec::new();
        let mut current: Vec<(f64, f64)> = Vec::new();
        let mut start: Option<(f64, f64)> = None;

        for cmd in &self.commands {
            match *cmd {
                PathCommand::MoveTo(x, y) => {
                    if current.len() > 1 {
                        lines.push(std::mem::take(&mut current));
                    } else {
                        current.clear();
                    }
                    start = Some((x, y));
                    current.push((x, y));
                }
                PathCommand::LineTo(x, y) => current.push((x, y)),
                PathCommand::CurveTo(x1, y1, x2, y2, x, y) => {
                    let &(x0, y0) = current.last().unwrap_or(&(x1, y1));
                    let steps = curve_samples.max(1);
                    for s in 1..=steps {
                        let t = s as f64 / steps as f64;
                        let u = 1.0 - t;
                        let px = u * u * u * x0
                            + 3.0 * u * u * t * x1
                            + 3.0 * u * t * t * x2
                            + t * t * t * x;
                        let py = u * u * u * y0
                            + 3.0 * u * u * t * y1
                            + 3.0 * u * t * t * y2
                            + t * t * t * y;
                        current.push((px, py));
                    }
                }
                PathCommand::Close => {
                    if let Some(s) = start {
                        current.push(s);
                    }
                }
            }
        }
        if current.len() > 1 {
            lines.push(current);
        }
        lines
    }
}
