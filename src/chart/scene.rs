//! The retained visual scene.
//!
//! One [`ScenePoint`] per current datum, a separate fading list for points
//! whose data vanished, one colored path per active curve, and animated
//! axis bounds. The scene is pure state: sampling it at an instant yields
//! concrete screen coordinates, and the terminal frame at any instant is a
//! pure function of (scene, now).

use std::time::Instant;

use crate::curves::Path;

use super::animate::Animated;
use super::color::Color;

#[derive(Debug, Clone, Copy)]
pub struct ScenePoint {
    pub x: Animated,
    pub y: Animated,
    pub radius: Animated,
}

impl ScenePoint {
    /// Sampled screen position and radius at `now`.
    pub fn sample(&self, now: Instant) -> (f64, f64, f64) {
        (
            self.x.value_at(now),
            self.y.value_at(now),
            self.radius.value_at(now),
        )
    }
}

/// One active curve's drawable output.
#[derive(Debug, Clone)]
pub struct RenderedPath {
    pub path: Path,
    pub color: Color,
}

#[derive(Debug, Clone)]
pub struct Scene {
    /// Points joined to the current data, in data order.
    pub points: Vec<ScenePoint>,
    /// Points whose datum vanished, shrinking toward radius zero.
    pub fading: Vec<ScenePoint>,
    pub paths: Vec<RenderedPath>,
    pub x_bounds: [Animated; 2],
    pub y_bounds: [Animated; 2],
}

impl Scene {
    pub fn new(now: Instant) -> Self {
        Self {
            points: Vec::new(),
            fading: Vec::new(),
            paths: Vec::new(),
            x_bounds: [Animated::fixed(0.0, now), Animated::fixed(1.0, now)],
            y_bounds: [Animated::fixed(0.0, now), Animated::fixed(1.0, now)],
        }
    }

    /// Drop fading points that have finished shrinking.
    pub fn prune(&mut self, now: Instant) {
        self.fading.retain(|p| !p.radius.is_done(now));
    }

    /// Every point still worth drawing, joined and fading alike.
    pub fn visible_points(&self, now: Instant) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        self.points
            .iter()
            .chain(self.fading.iter())
            .map(move |p| p.sample(now))
    }

    /// Sampled data-space axis bounds at `now`.
    pub fn axis_bounds(&self, now: Instant) -> ([f64; 2], [f64; 2]) {
        (
            [self.x_bounds[0].value_at(now), self.x_bounds[1].value_at(now)],
            [self.y_bounds[0].value_at(now), self.y_bounds[1].value_at(now)],
        )
    }

    /// True while any transition is still in flight.
    pub fn is_animating(&self, now: Instant) -> bool {
        let point_busy = |p: &ScenePoint| {
            !p.x.is_done(now) || !p.y.is_done(now) || !p.radius.is_done(now)
        };
        self.points.iter().any(point_busy)
            || self.fading.iter().any(point_busy)
            || self.x_bounds.iter().any(|b| !b.is_done(now))
            || self.y_bounds.iter().any(|b| !b.is_done(now))
    }
}
