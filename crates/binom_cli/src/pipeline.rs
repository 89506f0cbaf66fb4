//! End-to-end run: samples, spline, grid, chart.
//!
//! Each stage logs on completion and propagates its own error type, which
//! [`CliError`](crate::CliError) wraps with the stage name.

use crate::config::PlotConfig;
use crate::error::Result;
use binom_core::math::combinatorics::binomial_samples;
use binom_core::math::grid::EvaluationGrid;
use binom_core::math::interpolators::{CubicSplineInterpolator, Interpolator};
use binom_core::traits::{ChartRenderer, RenderOutput};
use binom_core::types::ChartData;
use tracing::{debug, info};

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineReport {
    /// Upper index of the rendered coefficients
    pub order: u32,
    /// Number of discrete samples
    pub sample_count: usize,
    /// Number of evaluated curve points
    pub grid_points: usize,
    /// The written image
    pub output: RenderOutput,
}

/// Run every stage for `config` and hand the chart to `renderer`.
///
/// # Errors
///
/// The first failing stage, wrapped in the matching [`CliError`](crate::CliError)
/// variant. Nothing is rendered when an earlier stage fails.
pub fn run<R: ChartRenderer>(config: &PlotConfig, renderer: &R) -> Result<PipelineReport> {
    config.validate()?;

    let samples = binomial_samples(config.order)?;
    info!(order = samples.order(), samples = samples.len(), "Generated binomial samples");

    let spline = CubicSplineInterpolator::new(&samples.xs(), &samples.ys())?;
    let (lo, hi) = spline.domain();
    debug!(boundary = ?spline.boundary(), lo, hi, "Fitted cubic spline");

    let grid = EvaluationGrid::over_domain(&spline, config.grid_points)?;
    let (xs, ys): (Vec<f64>, Vec<f64>) = grid
        .evaluate(&spline)
        .collect::<std::result::Result<Vec<_>, _>>()?
        .into_iter()
        .unzip();
    info!(grid_points = xs.len(), "Evaluated spline on grid");

    let order = samples.order();
    let sample_count = samples.len();
    let grid_points = xs.len();

    let chart = ChartData::new(samples, xs, ys, config.highlight_x)?;
    let output = renderer.render(&chart)?;
    info!(
        path = %output.path.display(),
        bytes = output.bytes,
        "Rendered chart"
    );

    Ok(PipelineReport {
        order,
        sample_count,
        grid_points,
        output,
    })
}
