//! The animated chart renderer.
//!
//! `render` is the single entry point: it takes a state snapshot and the
//! current instant, recomputes the data pipeline (validate, generate,
//! extents, scales), and diffs the result against the retained scene.
//! Points joined to surviving data glide to their new positions, new points
//! grow in from the median of the incoming data, and orphaned points shrink
//! away. The whole pass is apply-or-reject: every fallible step runs before
//! the first scene mutation, so a failed render leaves the previous scene
//! fully intact.

mod animate;
mod color;
mod scene;

pub use animate::Animated;
pub use color::{curve_color, rainbow, Color};
pub use scene::{RenderedPath, Scene, ScenePoint};

use std::rc::Rc;
use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::ExplorerConfig;
use crate::error::ChartError;
use crate::scale::{extent, LinearScale};
use crate::store::RenderState;

/// Screen radius of a fully grown data point.
pub const POINT_RADIUS: f64 = 2.5;

pub const POINT_ENTER: Duration = Duration::from_millis(400);
pub const POINT_UPDATE: Duration = Duration::from_millis(350);
pub const POINT_EXIT: Duration = Duration::from_millis(250);
pub const AXIS_UPDATE: Duration = Duration::from_millis(350);
pub const DELAY_PER_POINT: Duration = Duration::from_millis(6);

/// The transition durations one render pass hands out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Durations {
    pub enter: Duration,
    pub update: Duration,
    pub exit: Duration,
    pub axis: Duration,
    pub delay_per_point: Duration,
}

impl Durations {
    pub fn animated() -> Self {
        Self {
            enter: POINT_ENTER,
            update: POINT_UPDATE,
            exit: POINT_EXIT,
            axis: AXIS_UPDATE,
            delay_per_point: DELAY_PER_POINT,
        }
    }

    /// Everything completes immediately.
    pub fn instant() -> Self {
        Self {
            enter: Duration::ZERO,
            update: Duration::ZERO,
            exit: Duration::ZERO,
            axis: Duration::ZERO,
            delay_per_point: Duration::ZERO,
        }
    }

    pub fn for_state(play_animations: bool) -> Self {
        if play_animations {
            Self::animated()
        } else {
            Self::instant()
        }
    }
}

/// The drawable area, in abstract screen units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub margin: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 640.0,
            height: 480.0,
            margin: 40.0,
        }
    }
}

/// What one successful render pass produced.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSummary {
    pub points: usize,
    pub paths: usize,
    pub x_extent: [f64; 2],
    pub y_extent: [f64; 2],
    pub durations: Durations,
}

pub struct ChartRenderer {
    config: Rc<ExplorerConfig>,
    viewport: Viewport,
    scene: Scene,
    rng: StdRng,
}

impl ChartRenderer {
    pub fn new(config: Rc<ExplorerConfig>, viewport: Viewport) -> Self {
        Self::with_rng(config, viewport, StdRng::from_entropy())
    }

    /// Deterministic variant for tests.
    pub fn with_seed(config: Rc<ExplorerConfig>, viewport: Viewport, seed: u64) -> Self {
        Self::with_rng(config, viewport, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: Rc<ExplorerConfig>, viewport: Viewport, rng: StdRng) -> Self {
        Self {
            config,
            viewport,
            scene: Scene::new(Instant::now()),
            rng,
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Drop finished exit transitions. Call once per frame.
    pub fn tick(&mut self, now: Instant) {
        self.scene.prune(now);
    }

    /// Recompute the pipeline for `state` and transition the scene toward
    /// the result.
    pub fn render(
        &mut self,
        state: &RenderState,
        now: Instant,
    ) -> Result<RenderSummary, ChartError> {
        // Everything that can fail happens before the first scene mutation.
        let generator = &self.config.generators[state.active_dataset];
        let effective = validated_values(&generator.params, state.active_values())?;

        for (ct, sel) in self.config.curves.iter().zip(&state.curves) {
            if !sel.active {
                continue;
            }
            if let (Some(spec), Some(raw)) = (ct.params.first(), sel.value) {
                if !spec.effective(raw).is_finite() {
                    return Err(ChartError::Validation(format!(
                        "{} {} = {raw}",
                        ct.name(),
                        spec.name
                    )));
                }
            }
        }

        let points = generator.generate(&effective)?;
        let x_extent = extent(points.iter().map(|p| p.x))
            .ok_or_else(|| ChartError::Generation("dataset has no finite x values".into()))?;
        let y_extent = extent(points.iter().map(|p| p.y))
            .ok_or_else(|| ChartError::Generation("dataset has no finite y values".into()))?;

        let vp = self.viewport;
        let x_scale = LinearScale::new(x_extent, [vp.margin, vp.width - vp.margin]);
        let y_scale = LinearScale::new(y_extent, [vp.margin, vp.height - vp.margin]);
        let screen: Vec<(f64, f64)> = points
            .iter()
            .map(|p| (x_scale.map(p.x), y_scale.map(p.y)))
            .collect();

        let d = Durations::for_state(state.play_animations());

        self.diff_points(&screen, state.show_data_points(), now, &d);
        self.rebuild_paths(state, &screen);

        self.scene.x_bounds[0].retarget(x_extent[0], now, now, d.axis);
        self.scene.x_bounds[1].retarget(x_extent[1], now, now, d.axis);
        self.scene.y_bounds[0].retarget(y_extent[0], now, now, d.axis);
        self.scene.y_bounds[1].retarget(y_extent[1], now, now, d.axis);

        Ok(RenderSummary {
            points: screen.len(),
            paths: self.scene.paths.len(),
            x_extent,
            y_extent,
            durations: d,
        })
    }

    /// Join the scene's points to the new screen positions by index.
    fn diff_points(&mut self, screen: &[(f64, f64)], show: bool, now: Instant, d: &Durations) {
        if !show {
            // Fade everything out; no inserts or position updates.
            for mut p in self.scene.points.drain(..) {
                p.radius.retarget(0.0, now, now, d.exit);
                self.scene.fading.push(p);
            }
            return;
        }

        let old = self.scene.points.len();
        let new = screen.len();

        if new < old {
            for mut p in self.scene.points.split_off(new) {
                p.radius.retarget(0.0, now, now, d.exit);
                self.scene.fading.push(p);
            }
        }

        for (i, p) in self.scene.points.iter_mut().enumerate() {
            let (tx, ty) = screen[i];
            let start = now + d.delay_per_point * i as u32;
            p.x.retarget(tx, now, start, d.update);
            p.y.retarget(ty, now, start, d.update);
            p.radius.retarget(POINT_RADIUS, now, start, d.update);
        }

        if new > old {
            let entry_x = median(screen.iter().map(|p| p.0));
            for i in old..new {
                let (tx, ty) = screen[i];
                let start = now + d.delay_per_point * i as u32;
                self.scene.points.push(ScenePoint {
                    x: Animated::transition(entry_x, tx, start, d.enter),
                    y: Animated::transition(0.0, ty, start, d.enter),
                    radius: Animated::transition(0.0, POINT_RADIUS, start, d.enter),
                });
            }
        }
    }

    /// Paths are cheap enough to rebuild from scratch every pass.
    fn rebuild_paths(&mut self, state: &RenderState, screen: &[(f64, f64)]) {
        self.scene.paths.clear();
        for (ct, sel) in self.config.curves.iter().zip(&state.curves) {
            if !sel.active {
                continue;
            }
            let bound = match sel.value {
                Some(raw) => ct.bind(raw),
                None => ct.bind_default(),
            };
            let values: Vec<f64> = bound.values().collect();
            let color = if values.is_empty() {
                rainbow(self.rng.gen::<f64>())
            } else {
                curve_color(values)
            };
            self.scene.paths.push(RenderedPath {
                path: bound.build(screen),
                color,
            });
        }
    }
}

fn validated_values(
    specs: &[crate::datasets::ParameterSpec],
    raw: &[f64],
) -> Result<Vec<f64>, ChartError> {
    specs
        .iter()
        .zip(raw)
        .map(|(spec, &r)| {
            let v = spec.effective(r);
            if v.is_finite() {
                Ok(v)
            } else {
                Err(ChartError::Validation(format!("{} = {r}", spec.name)))
            }
        })
        .collect()
}

fn median(values: impl Iterator<Item = f64>) -> f64 {
    let mut sorted: Vec<f64> = values.collect();
    if sorted.is_empty() {
        return 0.0;
    }
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SettingValue, PLAY_ANIMATIONS, SHOW_DATA_POINTS};
    use crate::store::RenderState;

    fn setup() -> (Rc<ExplorerConfig>, RenderState, ChartRenderer) {
        let config = Rc::new(ExplorerConfig::standard());
        let state = RenderState::with_defaults(&config);
        let renderer = ChartRenderer::with_seed(config.clone(), Viewport::default(), 7);
        (config, state, renderer)
    }

    fn set_setting(state: &mut RenderState, name: &str, value: bool) {
        let s = state.settings.iter_mut().find(|s| s.name == name).unwrap();
        s.value = SettingValue::Bool(value);
    }

    #[test]
    fn default_sinusoidal_with_linear_curve_renders_instantly() {
        let (config, mut state, mut renderer) = setup();
        set_setting(&mut state, PLAY_ANIMATIONS, false);
        let linear = config.curve_index("Linear").unwrap();
        state.curves[linear].active = true;

        let now = Instant::now();
        let summary = renderer.render(&state, now).unwrap();

        // Defaults: amplitude 1, period 1, cycles 1, density 16.
        assert_eq!(summary.points, 16);
        assert_eq!(summary.paths, 1);
        assert_eq!(summary.durations, Durations::instant());

        // With zero durations every point sits at its target immediately.
        let vp = renderer.viewport();
        for (x, y, r) in renderer.scene().visible_points(now) {
            assert!(x >= vp.margin && x <= vp.width - vp.margin);
            assert!(y >= vp.margin && y <= vp.height - vp.margin);
            assert_eq!(r, POINT_RADIUS);
        }
        let (xb, yb) = renderer.scene().axis_bounds(now);
        assert_eq!(xb, summary.x_extent);
        assert_eq!(yb, summary.y_extent);
    }

    #[test]
    fn failed_render_leaves_the_scene_untouched() {
        let (_, mut state, mut renderer) = setup();
        set_setting(&mut state, PLAY_ANIMATIONS, false);

        let now = Instant::now();
        renderer.render(&state, now).unwrap();
        let before: Vec<_> = renderer.scene().visible_points(now).collect();

        state.dataset_values[0][0] = f64::NAN;
        let err = renderer.render(&state, now).unwrap_err();
        assert!(matches!(err, ChartError::Validation(_)));

        let after: Vec<_> = renderer.scene().visible_points(now).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn nan_curve_parameter_is_rejected() {
        let (config, mut state, mut renderer) = setup();
        let bundle = config.curve_index("Bundle").unwrap();
        state.curves[bundle].active = true;
        state.curves[bundle].value = Some(f64::NAN);

        let err = renderer.render(&state, Instant::now()).unwrap_err();
        assert!(matches!(err, ChartError::Validation(_)));
    }

    #[test]
    fn shrinking_dataset_fades_out_the_extras() {
        let (_, mut state, mut renderer) = setup();
        let now = Instant::now();
        renderer.render(&state, now).unwrap();
        assert_eq!(renderer.scene().points.len(), 16);

        // Halve density: 16 -> 8 points.
        state.dataset_values[0][3] = 8.0;
        renderer.render(&state, now).unwrap();
        assert_eq!(renderer.scene().points.len(), 8);
        assert_eq!(renderer.scene().fading.len(), 8);
        for p in &renderer.scene().fading {
            assert_eq!(p.radius.target(), 0.0);
        }

        // Once the exit transitions finish, tick discards them.
        renderer.tick(now + POINT_EXIT + Duration::from_millis(1));
        assert!(renderer.scene().fading.is_empty());
    }

    #[test]
    fn new_points_grow_in_from_the_median() {
        let (_, mut state, mut renderer) = setup();
        let now = Instant::now();
        renderer.render(&state, now).unwrap();

        state.dataset_values[0][3] = 20.0;
        renderer.render(&state, now).unwrap();
        assert_eq!(renderer.scene().points.len(), 20);

        // An entering point starts collapsed at the median x, top edge.
        let entered = &renderer.scene().points[16];
        let (x, y, r) = entered.sample(now);
        assert_eq!(y, 0.0);
        assert_eq!(r, 0.0);
        let vp = renderer.viewport();
        assert!(x >= vp.margin && x <= vp.width - vp.margin);
        assert_eq!(entered.radius.target(), POINT_RADIUS);
    }

    #[test]
    fn hiding_data_points_fades_everything() {
        let (_, mut state, mut renderer) = setup();
        let now = Instant::now();
        renderer.render(&state, now).unwrap();

        set_setting(&mut state, SHOW_DATA_POINTS, false);
        let summary = renderer.render(&state, now).unwrap();

        assert!(renderer.scene().points.is_empty());
        assert_eq!(renderer.scene().fading.len(), 16);
        // Paths still render while points are hidden.
        assert_eq!(summary.points, 16);
    }

    #[test]
    fn rerender_retargets_points_in_flight() {
        let (_, mut state, mut renderer) = setup();
        let now = Instant::now();
        renderer.render(&state, now).unwrap();

        let mid = now + Duration::from_millis(100);
        state.dataset_values[0][0] = 40.0; // amplitude
        renderer.render(&state, mid).unwrap();

        // Same cardinality: everything joined, nothing fading.
        assert_eq!(renderer.scene().points.len(), 16);
        assert!(renderer.scene().fading.is_empty());
        assert!(renderer.scene().is_animating(mid + Duration::from_millis(1)));
        assert!(!renderer
            .scene()
            .is_animating(mid + POINT_UPDATE + DELAY_PER_POINT * 16 + AXIS_UPDATE));
    }

    #[test]
    fn parameterized_curve_color_is_stable() {
        let (config, mut state, mut renderer) = setup();
        let bundle = config.curve_index("Bundle").unwrap();
        state.curves[bundle].active = true;
        state.curves[bundle].value = Some(0.7);

        let now = Instant::now();
        renderer.render(&state, now).unwrap();
        let first = renderer.scene().paths[0].color;
        renderer.render(&state, now).unwrap();
        let second = renderer.scene().paths[0].color;

        assert_eq!(first, second);
        assert_eq!(first, curve_color([0.7]));
    }

    #[test]
    fn paths_follow_the_active_curve_set() {
        let (_, mut state, mut renderer) = setup();
        for sel in &mut state.curves {
            sel.active = true;
        }
        let summary = renderer.render(&state, Instant::now()).unwrap();
        assert_eq!(summary.paths, 18);

        for sel in &mut state.curves {
            sel.active = false;
        }
        let summary = renderer.render(&state, Instant::now()).unwrap();
        assert_eq!(summary.paths, 0);
        assert!(renderer.scene().paths.is_empty());
    }

    #[test]
    fn median_of_even_and_odd_sets() {
        assert_eq!(median([3.0, 1.0, 2.0].into_iter()), 2.0);
        assert_eq!(median([4.0, 1.0, 2.0, 3.0].into_iter()), 2.5);
        assert_eq!(median(std::iter::empty()), 0.0);
    }
}
