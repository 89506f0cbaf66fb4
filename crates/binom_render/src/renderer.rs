//! PNG chart renderer.
//!
//! Draws the binomial samples, the interpolated curve and the highlighted
//! sample on a coordinate cross through the origin, then exports the bitmap.

use crate::fonts::{ensure_registered, FONT_FAMILY};
use crate::style::{ChartStyle, CURVE_PINK, HIGHLIGHT_RED, SAMPLE_BLUE};
use crate::ticks::{padded_range, tick_label, x_ticks, y_ticks};
use binom_core::traits::{ChartRenderer, RenderOutput};
use binom_core::types::{ChartData, RenderError};
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::fmt::Display;
use std::ops::Range;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

type Chart<'a, DB> = ChartContext<'a, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

/// Default output file, written to the working directory.
pub const DEFAULT_OUTPUT_FILE: &str = "Analytic Extension of Combinatorial Numbers.png";

/// [`ChartRenderer`] backed by the plotters bitmap backend.
///
/// # Example
///
/// ```no_run
/// use binom_core::math::combinatorics::binomial_samples;
/// use binom_core::traits::ChartRenderer;
/// use binom_core::types::ChartData;
/// use binom_render::{ChartStyle, PlotRenderer};
///
/// let samples = binomial_samples(6).unwrap();
/// let chart = ChartData::new(samples, vec![0.0, 3.0, 6.0], vec![1.0, 20.0, 1.0], 1).unwrap();
///
/// let renderer = PlotRenderer::new("chart.png", ChartStyle::default());
/// let output = renderer.render(&chart).unwrap();
/// assert_eq!((output.width, output.height), (7680, 5760));
/// ```
#[derive(Debug, Clone)]
pub struct PlotRenderer {
    output_path: PathBuf,
    style: ChartStyle,
}

impl Default for PlotRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUT_FILE, ChartStyle::default())
    }
}

impl PlotRenderer {
    /// Renderer writing to `output_path` with `style`.
    pub fn new(output_path: impl Into<PathBuf>, style: ChartStyle) -> Self {
        Self {
            output_path: output_path.into(),
            style,
        }
    }

    /// Destination of the exported image.
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Presentation settings.
    pub fn style(&self) -> &ChartStyle {
        &self.style
    }

    fn text(&self, points: f64, pos: Pos) -> TextStyle<'static> {
        FontDesc::new(
            FontFamily::Name(FONT_FAMILY),
            f64::from(self.style.pt(points)),
            FontStyle::Normal,
        )
        .color(&BLACK)
        .pos(pos)
    }

    fn draw<DB: DrawingBackend>(
        &self,
        root: &DrawingArea<DB, plotters::coord::Shift>,
        chart_data: &ChartData,
    ) -> Result<(), RenderError> {
        root.fill(&WHITE).map_err(draw_err)?;

        let samples = chart_data.samples();
        let x_lo = chart_data.grid_xs().iter().copied().fold(0.0, f64::min);
        let x_hi = chart_data
            .grid_xs()
            .iter()
            .copied()
            .fold(f64::from(samples.order()), f64::max);
        let x_range = padded_range(x_lo, x_hi);
        let y_range = padded_range(chart_data.y_min(), chart_data.y_max());
        debug!(?x_range, ?y_range, "Chart ranges");

        let title_font = FontDesc::new(
            FontFamily::Name(FONT_FAMILY),
            f64::from(self.style.pt(12.0)),
            FontStyle::Normal,
        );
        let mut chart = ChartBuilder::on(root)
            .caption(&self.style.title, title_font)
            .margin(self.style.pt(8.0))
            .x_label_area_size(self.style.pt(24.0))
            .y_label_area_size(self.style.pt(24.0))
            .build_cartesian_2d(x_range.clone(), y_range.clone())
            .map_err(draw_err)?;

        self.draw_axes(&mut chart, &x_range, &y_range)?;
        self.draw_ticks(&mut chart, chart_data)?;
        self.draw_data(&mut chart, chart_data)?;
        self.draw_highlight(&mut chart, chart_data)?;

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .label_font(self.text(9.0, Pos::new(HPos::Left, VPos::Center)))
            .margin(self.style.pt(4.0))
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()
            .map_err(draw_err)?;

        // Axis descriptions sit in the label areas, outside the plotting area.
        let (px, py) = chart.plotting_area().get_pixel_range();
        let gap = self.style.offset(6.0);
        root.draw(&Text::new(
            "x Value",
            ((px.start + px.end) / 2, py.end + gap),
            self.text(10.0, Pos::new(HPos::Center, VPos::Top)),
        ))
        .map_err(draw_err)?;
        root.draw(&Text::new(
            "y Value",
            (px.start - gap, (py.start + py.end) / 2),
            self.text(10.0, Pos::new(HPos::Center, VPos::Bottom))
                .transform(FontTransform::Rotate270),
        ))
        .map_err(draw_err)?;

        Ok(())
    }

    /// Coordinate cross through the origin with arrowheads and axis names.
    fn draw_axes<DB: DrawingBackend>(
        &self,
        chart: &mut Chart<'_, DB>,
        x_range: &Range<f64>,
        y_range: &Range<f64>,
    ) -> Result<(), RenderError> {
        let axis = BLACK.stroke_width(self.style.pt(0.8));
        chart
            .draw_series([
                PathElement::new(vec![(x_range.start, 0.0), (x_range.end, 0.0)], axis),
                PathElement::new(vec![(0.0, y_range.start), (0.0, y_range.end)], axis),
            ])
            .map_err(draw_err)?;

        let a = self.style.offset(5.0);
        chart
            .draw_series([
                EmptyElement::at((x_range.end, 0.0))
                    + Polygon::new(vec![(0, 0), (-a, -a / 2), (-a, a / 2)], BLACK.filled()),
                EmptyElement::at((0.0, y_range.end))
                    + Polygon::new(vec![(0, 0), (-a / 2, a), (a / 2, a)], BLACK.filled()),
            ])
            .map_err(draw_err)?;

        let gap = self.style.offset(4.0);
        chart
            .draw_series([
                EmptyElement::at((0.0, 0.0))
                    + Text::new("O", (-gap, gap), self.text(10.0, Pos::new(HPos::Right, VPos::Top))),
                EmptyElement::at((x_range.end, 0.0))
                    + Text::new("x", (0, gap), self.text(10.0, Pos::new(HPos::Center, VPos::Top))),
                EmptyElement::at((0.0, y_range.end))
                    + Text::new(
                        "f(x)",
                        (gap, 0),
                        self.text(10.0, Pos::new(HPos::Left, VPos::Center)),
                    ),
            ])
            .map_err(draw_err)?;

        Ok(())
    }

    fn draw_ticks<DB: DrawingBackend>(
        &self,
        chart: &mut Chart<'_, DB>,
        chart_data: &ChartData,
    ) -> Result<(), RenderError> {
        let mark = self.style.offset(3.5);
        let gap = mark + self.style.offset(2.0);
        let line = BLACK.stroke_width(self.style.pt(0.8));

        let xs = x_ticks(chart_data.samples());
        chart
            .draw_series(xs.iter().map(|&x| {
                EmptyElement::at((x, 0.0))
                    + PathElement::new(vec![(0, 0), (0, mark)], line)
                    + Text::new(
                        tick_label(x),
                        (0, gap),
                        self.text(9.0, Pos::new(HPos::Center, VPos::Top)),
                    )
            }))
            .map_err(draw_err)?;

        let ys = y_ticks(chart_data.samples(), self.style.y_tick_step);
        chart
            .draw_series(ys.iter().map(|&y| {
                EmptyElement::at((0.0, y))
                    + PathElement::new(vec![(0, 0), (-mark, 0)], line)
                    + Text::new(
                        tick_label(y),
                        (-gap, 0),
                        self.text(9.0, Pos::new(HPos::Right, VPos::Center)),
                    )
            }))
            .map_err(draw_err)?;

        debug!(x_ticks = xs.len(), y_ticks = ys.len(), "Drew ticks");
        Ok(())
    }

    /// Sample scatter and interpolated curve, both with legend entries.
    fn draw_data<DB: DrawingBackend>(
        &self,
        chart: &mut Chart<'_, DB>,
        chart_data: &ChartData,
    ) -> Result<(), RenderError> {
        let samples = chart_data.samples();
        let radius = self.style.pt(3.0);
        let legend_len = self.style.offset(14.0);

        chart
            .draw_series(
                samples
                    .samples()
                    .iter()
                    .map(|s| Circle::new((f64::from(s.x), s.y), radius, SAMPLE_BLUE.filled())),
            )
            .map_err(draw_err)?
            .label(format!("n = {}", samples.order()))
            .legend(move |(x, y)| {
                Circle::new((x + legend_len / 2, y), radius, SAMPLE_BLUE.filled())
            });

        let curve = CURVE_PINK.stroke_width(self.style.pt(1.5));
        chart
            .draw_series(LineSeries::new(chart_data.curve(), curve))
            .map_err(draw_err)?
            .label(curve_label(samples.order()))
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + legend_len, y)], curve));

        Ok(())
    }

    /// Dashed guides from both axes to the highlighted sample, plus a marker.
    fn draw_highlight<DB: DrawingBackend>(
        &self,
        chart: &mut Chart<'_, DB>,
        chart_data: &ChartData,
    ) -> Result<(), RenderError> {
        let point = chart_data.highlight();
        let (x, y) = (f64::from(point.x), point.y);
        let guide = HIGHLIGHT_RED.stroke_width(self.style.pt(1.0));
        let (dash, spacing) = (self.style.pt(4.0), self.style.pt(2.0));

        chart
            .draw_series(DashedLineSeries::new(
                vec![(x, 0.0), (x, y)],
                dash,
                spacing,
                guide,
            ))
            .map_err(draw_err)?;
        chart
            .draw_series(DashedLineSeries::new(
                vec![(0.0, y), (x, y)],
                dash,
                spacing,
                guide,
            ))
            .map_err(draw_err)?;
        chart
            .draw_series(std::iter::once(Circle::new(
                (x, y),
                self.style.pt(3.0),
                HIGHLIGHT_RED.filled(),
            )))
            .map_err(draw_err)?;

        debug!(x = point.x, y = point.y, "Highlighted sample");
        Ok(())
    }
}

impl ChartRenderer for PlotRenderer {
    fn render(&self, chart: &ChartData) -> Result<RenderOutput, RenderError> {
        let font = ensure_registered(&self.style.font_candidates)?;
        let (width, height) = self.style.pixel_size();
        debug!(font = %font.display(), width, height, "Rendering chart");

        {
            let root = BitMapBackend::new(&self.output_path, (width, height)).into_drawing_area();
            self.draw(&root, chart)?;
            root.present().map_err(|e| RenderError::Export {
                path: self.output_path.clone(),
                message: e.to_string(),
            })?;
        }

        let bytes = std::fs::metadata(&self.output_path)
            .map_err(|e| RenderError::Export {
                path: self.output_path.clone(),
                message: e.to_string(),
            })?
            .len();

        info!(
            path = %self.output_path.display(),
            width,
            height,
            bytes,
            "Chart exported"
        );

        Ok(RenderOutput {
            path: self.output_path.clone(),
            width,
            height,
            bytes,
        })
    }
}

/// Legend text naming the analytic extension drawn by the curve.
pub fn curve_label(order: u32) -> String {
    format!(
        "\u{0393}({n}+1) / (\u{0393}(x+1) \u{0393}({n}+1-x))",
        n = order
    )
}

fn draw_err<E: Display>(e: E) -> RenderError {
    RenderError::Draw(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_curve_label_substitutes_order() {
        assert_eq!(curve_label(6), "Γ(6+1) / (Γ(x+1) Γ(6+1-x))");
    }

    #[test]
    fn test_default_renderer_targets_fixed_file() {
        let renderer = PlotRenderer::default();
        assert_eq!(
            renderer.output_path(),
            Path::new("Analytic Extension of Combinatorial Numbers.png")
        );
        assert_eq!(renderer.style().pixel_size(), (7680, 5760));
    }

    #[test]
    fn test_draw_err_keeps_message() {
        assert_eq!(draw_err("boom"), RenderError::Draw("boom".to_string()));
    }
}
