//! Chart renderer contract.

use crate::types::{ChartData, RenderError};
use std::path::PathBuf;

/// Description of a written image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOutput {
    /// File the image was written to
    pub path: PathBuf,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Size of the written file in bytes
    pub bytes: u64,
}

/// Turns chart data into a saved image.
///
/// Implementations own every presentation concern: styling, fonts, layout
/// and export. A call either writes exactly one image file or fails; it
/// never reports success without output.
///
/// # Example
///
/// ```
/// use binom_core::traits::{ChartRenderer, RenderOutput};
/// use binom_core::types::{ChartData, RenderError};
/// use std::cell::Cell;
/// use std::path::PathBuf;
///
/// struct CountingRenderer {
///     calls: Cell<usize>,
/// }
///
/// impl ChartRenderer for CountingRenderer {
///     fn render(&self, chart: &ChartData) -> Result<RenderOutput, RenderError> {
///         self.calls.set(self.calls.get() + 1);
///         Ok(RenderOutput {
///             path: PathBuf::from("memory"),
///             width: chart.grid_xs().len() as u32,
///             height: 1,
///             bytes: 0,
///         })
///     }
/// }
///
/// let renderer = CountingRenderer { calls: Cell::new(0) };
/// let samples = binom_core::math::combinatorics::binomial_samples(6).unwrap();
/// let chart = ChartData::new(samples, vec![0.0, 6.0], vec![1.0, 1.0], 1).unwrap();
/// assert_eq!(renderer.render(&chart).unwrap().width, 2);
/// assert_eq!(renderer.calls.get(), 1);
/// ```
pub trait ChartRenderer {
    /// Render `chart` and export it.
    ///
    /// # Errors
    ///
    /// Any [`RenderError`]: missing fonts, drawing failures, or an output
    /// path that cannot be written.
    fn render(&self, chart: &ChartData) -> Result<RenderOutput, RenderError>;
}
