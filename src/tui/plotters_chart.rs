//! Plotters-powered explorer chart widget for Ratatui.
//!
//! Why Plotters instead of Ratatui's built-in `Chart` widget?
//! - nicer axis + tick rendering
//! - bezier-flattened polylines draw as plain line series
//! - easy to extend later (legend, exportable PNG/SVG backends, etc.)
//!
//! We render Plotters output into the Ratatui buffer using
//! `plotters-ratatui-backend`.

use plotters::prelude::*;
use plotters_ratatui_backend::widget_fn;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

/// A data point is only worth a cell once it has grown past this radius.
pub const VISIBLE_RADIUS: f64 = 0.5;

/// A lightweight, render-only chart description.
///
/// All geometry arrives pre-computed in the renderer's screen space; this
/// widget only maps it onto the terminal canvas. Axis tick labels are
/// translated back into data space through the (possibly mid-animation)
/// data bounds.
pub struct ExplorerChart<'a> {
    /// Flattened polylines plus color, one entry per active curve.
    pub paths: &'a [(Vec<Vec<(f64, f64)>>, crate::chart::Color)],
    /// Sampled `(x, y, radius)` for every visible data point.
    pub points: &'a [(f64, f64, f64)],
    /// Screen-space bounds of the drawable region.
    pub x_screen: [f64; 2],
    pub y_screen: [f64; 2],
    /// Data-space bounds backing the axis labels.
    pub x_data: [f64; 2],
    pub y_data: [f64; 2],
}

/// Translate a screen coordinate back into data space for tick labels.
fn screen_to_data(screen: [f64; 2], data: [f64; 2], v: f64) -> f64 {
    let span = screen[1] - screen[0];
    if span == 0.0 {
        return data[0];
    }
    data[0] + (v - screen[0]) / span * (data[1] - data[0])
}

impl<'a> Widget for ExplorerChart<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // When the available area is too small, Plotters may fail to build a
        // chart. Render a hint instead of panicking.
        if area.width < 20 || area.height < 8 {
            buf.set_string(
                area.x,
                area.y,
                "Chart area too small (resize terminal).",
                Style::default().fg(Color::Yellow),
            );
            return;
        }

        let [x0, x1] = self.x_screen;
        let [y0, y1] = self.y_screen;
        if !(x0.is_finite() && x1.is_finite() && y0.is_finite() && y1.is_finite())
            || x1 <= x0
            || y1 <= y0
        {
            return;
        }

        let widget = widget_fn(move |root| {
            let mut chart = ChartBuilder::on(&root)
                .margin(1)
                // Terminal cells are low-res, so keep label areas compact.
                .set_label_area_size(LabelAreaPosition::Left, 6)
                .set_label_area_size(LabelAreaPosition::Bottom, 3)
                .build_cartesian_2d(x0..x1, y0..y1)?;

            chart
                .configure_mesh()
                .disable_x_mesh()
                .disable_y_mesh()
                .x_labels(5)
                .y_labels(5)
                .x_label_formatter(&|v| {
                    format!("{:.1}", screen_to_data(self.x_screen, self.x_data, *v))
                })
                .y_label_formatter(&|v| {
                    format!("{:.1}", screen_to_data(self.y_screen, self.y_data, *v))
                })
                .label_style(("sans-serif", 10).into_font().color(&WHITE))
                .axis_style(&WHITE)
                .draw()?;

            for (lines, color) in self.paths {
                let c = RGBColor(color.r, color.g, color.b);
                for line in lines {
                    chart.draw_series(LineSeries::new(line.iter().copied(), &c))?;
                }
            }

            // `Circle` markers are avoided here: the underlying
            // `plotters-ratatui-backend` currently maps circle radii
            // incorrectly (pixel radius -> normalized canvas units),
            // producing huge circles. A `Pixel` gives a clean dot that
            // looks right in terminals, so the animated radius only gates
            // visibility.
            chart.draw_series(
                self.points
                    .iter()
                    .filter(|&&(_, _, r)| r >= VISIBLE_RADIUS)
                    .map(|&(x, y, _)| Pixel::new((x, y), WHITE)),
            )?;

            Ok(())
        });

        widget.render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_labels_map_back_into_data_space() {
        let screen = [40.0, 600.0];
        let data = [-2.0, 2.0];
        assert_eq!(screen_to_data(screen, data, 40.0), -2.0);
        assert_eq!(screen_to_data(screen, data, 600.0), 2.0);
        assert_eq!(screen_to_data(screen, data, 320.0), 0.0);
    }

    #[test]
    fn degenerate_screen_span_pins_to_the_lower_bound() {
        assert_eq!(screen_to_data([5.0, 5.0], [1.0, 3.0], 5.0), 1.0);
    }
}
