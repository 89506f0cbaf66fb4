//! Input handed to chart renderers.

use super::{RenderError, Sample, SampleSet};

/// Everything a [`ChartRenderer`](crate::traits::ChartRenderer) needs:
/// the discrete samples, the densely evaluated curve and the sample to
/// highlight.
///
/// # Example
///
/// ```
/// use binom_core::math::combinatorics::binomial_samples;
/// use binom_core::types::ChartData;
///
/// let samples = binomial_samples(6).unwrap();
/// let xs = vec![0.0, 3.0, 6.0];
/// let ys = vec![1.0, 20.0, 1.0];
/// let chart = ChartData::new(samples, xs, ys, 1).unwrap();
/// assert_eq!(chart.highlight().y, 6.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    samples: SampleSet,
    grid_xs: Vec<f64>,
    grid_ys: Vec<f64>,
    highlight_x: u32,
}

impl ChartData {
    /// Bundle the renderer input.
    ///
    /// # Errors
    ///
    /// `RenderError::InvalidChart` when the curve is empty, the curve
    /// coordinates differ in length, or `highlight_x` is not a sample.
    pub fn new(
        samples: SampleSet,
        grid_xs: Vec<f64>,
        grid_ys: Vec<f64>,
        highlight_x: u32,
    ) -> Result<Self, RenderError> {
        if grid_xs.len() != grid_ys.len() {
            return Err(RenderError::InvalidChart(format!(
                "grid_xs and grid_ys must have same length: got {} and {}",
                grid_xs.len(),
                grid_ys.len()
            )));
        }
        if grid_xs.is_empty() {
            return Err(RenderError::InvalidChart("curve has no points".to_string()));
        }
        if samples.get(highlight_x).is_none() {
            return Err(RenderError::InvalidChart(format!(
                "highlight x = {} is not a sample of order {}",
                highlight_x,
                samples.order()
            )));
        }

        Ok(Self {
            samples,
            grid_xs,
            grid_ys,
            highlight_x,
        })
    }

    /// Discrete samples.
    #[inline]
    pub fn samples(&self) -> &SampleSet {
        &self.samples
    }

    /// Curve abscissae.
    #[inline]
    pub fn grid_xs(&self) -> &[f64] {
        &self.grid_xs
    }

    /// Curve ordinates.
    #[inline]
    pub fn grid_ys(&self) -> &[f64] {
        &self.grid_ys
    }

    /// Curve as `(x, y)` pairs.
    pub fn curve(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.grid_xs.iter().copied().zip(self.grid_ys.iter().copied())
    }

    /// Lower index of the highlighted sample.
    #[inline]
    pub fn highlight_x(&self) -> u32 {
        self.highlight_x
    }

    /// The highlighted sample.
    pub fn highlight(&self) -> Sample {
        // validated in `new`
        self.samples.samples()[self.highlight_x as usize]
    }

    /// Largest ordinate among samples and curve.
    pub fn y_max(&self) -> f64 {
        self.grid_ys
            .iter()
            .copied()
            .fold(self.samples.max_y(), f64::max)
    }

    /// Smallest ordinate among samples and curve.
    pub fn y_min(&self) -> f64 {
        self.grid_ys.iter().copied().fold(0.0, f64::min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::combinatorics::binomial_samples;

    #[test]
    fn test_new_rejects_mismatched_curve() {
        let samples = binomial_samples(4).unwrap();
        let result = ChartData::new(samples, vec![0.0, 1.0], vec![1.0], 1);
        match result.unwrap_err() {
            RenderError::InvalidChart(msg) => assert!(msg.contains("same length")),
            other => panic!("Expected InvalidChart error, got {:?}", other),
        }
    }

    #[test]
    fn test_new_rejects_empty_curve() {
        let samples = binomial_samples(4).unwrap();
        let result = ChartData::new(samples, vec![], vec![], 1);
        assert!(matches!(result, Err(RenderError::InvalidChart(_))));
    }

    #[test]
    fn test_new_rejects_unknown_highlight() {
        let samples = binomial_samples(4).unwrap();
        let result = ChartData::new(samples, vec![0.0], vec![1.0], 5);
        match result.unwrap_err() {
            RenderError::InvalidChart(msg) => assert!(msg.contains("highlight x = 5")),
            other => panic!("Expected InvalidChart error, got {:?}", other),
        }
    }

    #[test]
    fn test_y_range_covers_curve_overshoot() {
        let samples = binomial_samples(4).unwrap();
        let chart =
            ChartData::new(samples, vec![0.0, 1.0, 2.0], vec![-0.5, 3.0, 6.5], 2).unwrap();
        assert_eq!(chart.y_max(), 6.5);
        assert_eq!(chart.y_min(), -0.5);
        assert_eq!(chart.highlight().y, 6.0);
        assert_eq!(chart.curve().count(), 3);
    }
}
