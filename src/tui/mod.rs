//! Ratatui-based terminal UI.
//!
//! The TUI wires the state store to the chart renderer: every key that
//! changes a selection publishes an update, the subscribed renderer
//! recomputes the scene synchronously, and the event loop keeps redrawing
//! while any transition is in flight.

use std::cell::RefCell;
use std::io;
use std::rc::Rc;
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Terminal,
};

use crate::chart::{ChartRenderer, Viewport};
use crate::config::{ExplorerConfig, SettingValue};
use crate::datasets::ParameterSpec;
use crate::error::AppError;
use crate::store::{StateStore, StateUpdate};

mod plotters_chart;

use plotters_chart::ExplorerChart;

/// Flattening resolution for bezier segments before line drawing.
const CURVE_SAMPLES: usize = 12;

/// Start the TUI.
pub fn run() -> Result<(), AppError> {
    let _guard = TerminalGuard::new()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)
        .map_err(|e| AppError::new(4, format!("Failed to initialize terminal: {e}")))?;

    let mut app = App::new()?;
    app.event_loop(&mut terminal)
}

/// Ensures the terminal is restored (raw mode, alternate screen) on exit.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self, AppError> {
        enable_raw_mode().map_err(|e| AppError::new(4, format!("Failed to enable raw mode: {e}")))?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(AppError::new(4, format!("Failed to enter alternate screen: {e}")));
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Panel {
    Datasets,
    Parameters,
    Curves,
    Settings,
}

impl Panel {
    fn next(self) -> Self {
        match self {
            Panel::Datasets => Panel::Parameters,
            Panel::Parameters => Panel::Curves,
            Panel::Curves => Panel::Settings,
            Panel::Settings => Panel::Datasets,
        }
    }

    fn prev(self) -> Self {
        match self {
            Panel::Datasets => Panel::Settings,
            Panel::Parameters => Panel::Datasets,
            Panel::Curves => Panel::Parameters,
            Panel::Settings => Panel::Curves,
        }
    }

    fn index(self) -> usize {
        match self {
            Panel::Datasets => 0,
            Panel::Parameters => 1,
            Panel::Curves => 2,
            Panel::Settings => 3,
        }
    }
}

struct App {
    config: Rc<ExplorerConfig>,
    store: StateStore,
    renderer: Rc<RefCell<ChartRenderer>>,
    last_error: Rc<RefCell<Option<String>>>,
    panel: Panel,
    cursors: [usize; 4],
    status: String,
}

impl App {
    fn new() -> Result<Self, AppError> {
        let config = Rc::new(ExplorerConfig::standard());
        let mut store = StateStore::new(config.clone());
        let renderer = Rc::new(RefCell::new(ChartRenderer::new(
            config.clone(),
            Viewport::default(),
        )));
        let last_error: Rc<RefCell<Option<String>>> = Rc::new(RefCell::new(None));

        {
            let renderer = renderer.clone();
            let last_error = last_error.clone();
            store.subscribe(move |state| {
                let result = renderer.borrow_mut().render(state, Instant::now());
                *last_error.borrow_mut() = result.err().map(|e| e.to_string());
            });
        }

        // Initial paint before the first key arrives.
        renderer.borrow_mut().render(store.state(), Instant::now())?;

        Ok(Self {
            config,
            store,
            renderer,
            last_error,
            panel: Panel::Datasets,
            cursors: [0; 4],
            status: "Tab to switch panels, q to quit.".to_string(),
        })
    }

    fn event_loop<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        let mut needs_redraw = true;
        loop {
            let now = Instant::now();
            let animating = {
                let renderer = self.renderer.borrow();
                renderer.scene().is_animating(now) || !renderer.scene().fading.is_empty()
            };

            if needs_redraw || animating {
                self.renderer.borrow_mut().tick(now);
                terminal
                    .draw(|f| self.draw(f))
                    .map_err(|e| AppError::new(4, format!("Terminal draw error: {e}")))?;
                needs_redraw = false;
            }

            if !event::poll(Duration::from_millis(33))
                .map_err(|e| AppError::new(4, format!("Event poll error: {e}")))?
            {
                continue;
            }

            match event::read().map_err(|e| AppError::new(4, format!("Event read error: {e}")))? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if self.handle_key(key.code) {
                        break;
                    }
                    needs_redraw = true;
                }
                Event::Resize(_, _) => {
                    needs_redraw = true;
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Returns true when the app should quit.
    fn handle_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') => return true,
            KeyCode::Tab => self.panel = self.panel.next(),
            KeyCode::BackTab => self.panel = self.panel.prev(),
            KeyCode::Up => {
                let c = &mut self.cursors[self.panel.index()];
                *c = c.saturating_sub(1);
            }
            KeyCode::Down => {
                let len = self.panel_len(self.panel);
                let c = &mut self.cursors[self.panel.index()];
                if *c + 1 < len {
                    *c += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.activate(),
            KeyCode::Left => self.adjust(-1.0),
            KeyCode::Right => self.adjust(1.0),
            KeyCode::Char('a') => {
                self.store.publish(StateUpdate::SelectAllCurves);
                self.status = "All curves on.".to_string();
            }
            KeyCode::Char('n') => {
                self.store.publish(StateUpdate::SelectNoCurves);
                self.status = "All curves off.".to_string();
            }
            _ => {}
        }
        self.surface_render_error();
        false
    }

    fn panel_len(&self, panel: Panel) -> usize {
        match panel {
            Panel::Datasets => self.config.generators.len(),
            Panel::Parameters => self.active_generator_params().len(),
            Panel::Curves => self.config.curves.len(),
            Panel::Settings => self.store.state().settings.len(),
        }
    }

    fn active_generator_params(&self) -> &[ParameterSpec] {
        &self.config.generators[self.store.state().active_dataset].params
    }

    fn activate(&mut self) {
        let cursor = self.cursors[self.panel.index()];
        match self.panel {
            Panel::Datasets => {
                self.store.publish(StateUpdate::SelectDataset(cursor));
                // The new generator may have fewer parameters.
                let params = self.active_generator_params().len();
                let c = &mut self.cursors[Panel::Parameters.index()];
                *c = (*c).min(params.saturating_sub(1));
                self.status = format!("Dataset: {}", self.config.generators[cursor].name);
            }
            Panel::Parameters => {
                // Reset to the spec default.
                let dataset = self.store.state().active_dataset;
                let Some(spec) = self.active_generator_params().get(cursor) else {
                    return;
                };
                let name = spec.name;
                let default = spec.default;
                self.store.publish(StateUpdate::SetDatasetValue {
                    dataset,
                    param: cursor,
                    value: default,
                });
                self.status = format!("{name} reset to {default}");
            }
            Panel::Curves => {
                let active = !self.store.state().curves[cursor].active;
                self.store.publish(StateUpdate::SetCurveActive {
                    curve: cursor,
                    active,
                });
                let verb = if active { "on" } else { "off" };
                self.status = format!("{} {verb}", self.config.curves[cursor].name());
            }
            Panel::Settings => {
                let setting = &self.store.state().settings[cursor];
                if let SettingValue::Bool(current) = setting.value {
                    let name = setting.name.clone();
                    self.store.publish(StateUpdate::SetSetting {
                        name: name.clone(),
                        value: SettingValue::Bool(!current),
                    });
                    let verb = if current { "off" } else { "on" };
                    self.status = format!("{name}: {verb}");
                }
            }
        }
    }

    fn adjust(&mut self, delta: f64) {
        let cursor = self.cursors[self.panel.index()];
        match self.panel {
            Panel::Parameters => {
                let dataset = self.store.state().active_dataset;
                let Some(spec) = self.active_generator_params().get(cursor) else {
                    return;
                };
                let step = spec.step();
                let name = spec.name;
                let raw = self.store.state().dataset_values[dataset][cursor];
                let value = raw + delta * step;
                self.store.publish(StateUpdate::SetDatasetValue {
                    dataset,
                    param: cursor,
                    value,
                });
                self.status = format!("{name} = {value}");
            }
            Panel::Curves => {
                let ct = &self.config.curves[cursor];
                let Some(spec) = ct.params.first() else {
                    return;
                };
                let Some(raw) = self.store.state().curves[cursor].value else {
                    return;
                };
                let value = raw + delta * spec.step();
                let name = ct.name();
                let param = spec.name;
                self.store
                    .publish(StateUpdate::SetCurveValue { curve: cursor, value });
                self.status = format!("{name} {param} = {value}");
            }
            _ => {}
        }
    }

    fn surface_render_error(&mut self) {
        if let Some(err) = self.last_error.borrow_mut().take() {
            self.status = err;
        }
    }

    fn draw(&self, frame: &mut ratatui::Frame<'_>) {
        let size = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Min(0),
                Constraint::Length(3),
            ])
            .split(size);

        self.draw_header(frame, chunks[0]);
        self.draw_body(frame, chunks[1]);
        self.draw_footer(frame, chunks[2]);
    }

    fn draw_header(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let state = self.store.state();
        let dataset = self.config.generators[state.active_dataset].name;
        let active_curves = state.curves.iter().filter(|c| c.active).count();
        let animations = if state.play_animations() { "on" } else { "off" };
        let points = self.renderer.borrow().scene().points.len();

        let lines = vec![
            Line::from(vec![
                Span::styled("curvelab", Style::default().fg(Color::Cyan)),
                Span::raw(" - interpolation curve explorer"),
            ]),
            Line::from(Span::styled(
                format!(
                    "dataset: {dataset} | points: {points} | curves: {active_curves}/{} | animations: {animations}",
                    self.config.curves.len(),
                ),
                Style::default().fg(Color::Gray),
            )),
        ];

        let p = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }

    fn draw_body(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(34), Constraint::Min(0)])
            .split(area);

        self.draw_sidebar(frame, chunks[0]);
        self.draw_chart(frame, chunks[1]);
    }

    fn draw_sidebar(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let datasets = self.config.generators.len() as u16;
        let params = self.active_generator_params().len() as u16;
        let settings = self.store.state().settings.len() as u16;

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(datasets + 2),
                Constraint::Length(params + 2),
                Constraint::Min(0),
                Constraint::Length(settings + 2),
            ])
            .split(area);

        self.draw_datasets(frame, chunks[0]);
        self.draw_parameters(frame, chunks[1]);
        self.draw_curves(frame, chunks[2]);
        self.draw_settings(frame, chunks[3]);
    }

    fn draw_list(
        &self,
        frame: &mut ratatui::Frame<'_>,
        area: Rect,
        panel: Panel,
        title: &str,
        items: Vec<ListItem>,
    ) {
        let focused = self.panel == panel;
        let border = if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        };
        let list = List::new(items)
            .block(
                Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .border_style(border),
            )
            .highlight_style(Style::default().fg(Color::Black).bg(Color::White))
            .highlight_symbol("> ");

        let mut state = ListState::default();
        if focused {
            state.select(Some(self.cursors[panel.index()]));
        }
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn draw_datasets(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let active = self.store.state().active_dataset;
        let items = self
            .config
            .generators
            .iter()
            .enumerate()
            .map(|(i, g)| {
                let marker = if i == active { "*" } else { " " };
                ListItem::new(format!("{marker} {}", g.name))
            })
            .collect();
        self.draw_list(frame, area, Panel::Datasets, "Datasets", items);
    }

    fn draw_parameters(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let state = self.store.state();
        let values = state.active_values();
        let items = self
            .active_generator_params()
            .iter()
            .zip(values)
            .map(|(spec, &raw)| ListItem::new(format!("{}: {}", spec.name, fmt_value(spec, raw))))
            .collect();
        self.draw_list(frame, area, Panel::Parameters, "Parameters", items);
    }

    fn draw_curves(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let state = self.store.state();
        let items = self
            .config
            .curves
            .iter()
            .zip(&state.curves)
            .map(|(ct, sel)| {
                let mark = if sel.active { "x" } else { " " };
                let label = match (ct.params.first(), sel.value) {
                    (Some(spec), Some(v)) => {
                        format!("[{mark}] {} ({} {v:.2})", ct.name(), spec.name)
                    }
                    _ => format!("[{mark}] {}", ct.name()),
                };
                ListItem::new(label)
            })
            .collect();
        self.draw_list(frame, area, Panel::Curves, "Curves (a: all, n: none)", items);
    }

    fn draw_settings(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let items = self
            .store
            .state()
            .settings
            .iter()
            .map(|s| {
                let mark = match s.value {
                    SettingValue::Bool(true) => "x",
                    _ => " ",
                };
                ListItem::new(format!("[{mark}] {}", s.name))
            })
            .collect();
        self.draw_list(frame, area, Panel::Settings, "Settings", items);
    }

    fn draw_chart(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let block = Block::default().title("Chart").borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(Clear, inner);

        let now = Instant::now();
        let renderer = self.renderer.borrow();
        let scene = renderer.scene();
        let vp = renderer.viewport();

        let paths: Vec<(Vec<Vec<(f64, f64)>>, crate::chart::Color)> = scene
            .paths
            .iter()
            .map(|p| (p.path.flatten(CURVE_SAMPLES), p.color))
            .collect();
        let points: Vec<(f64, f64, f64)> = scene.visible_points(now).collect();
        let (x_data, y_data) = scene.axis_bounds(now);

        let widget = ExplorerChart {
            paths: &paths,
            points: &points,
            x_screen: [vp.margin, vp.width - vp.margin],
            y_screen: [vp.margin, vp.height - vp.margin],
            x_data,
            y_data,
        };
        frame.render_widget(widget, inner);
    }

    fn draw_footer(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let help = "Tab panel  up/dn select  lt/rt adjust  Enter toggle/reset  q quit";
        let line = Line::from(vec![
            Span::styled(help, Style::default().fg(Color::Gray)),
            Span::raw(" | "),
            Span::styled(&self.status, Style::default().fg(Color::Yellow)),
        ]);
        let p = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }
}

fn fmt_value(spec: &ParameterSpec, raw: f64) -> String {
    if spec.round {
        format!("{raw:.0}")
    } else {
        format!("{raw:.2}")
    }
}
