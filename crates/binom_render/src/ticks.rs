//! Axis ranges and tick placement.

use binom_core::types::SampleSet;
use std::ops::Range;

/// Fraction of the data span added on each side of an axis.
pub const AXIS_MARGIN: f64 = 0.05;

/// Data interval padded by [`AXIS_MARGIN`] on both ends.
///
/// A degenerate interval is widened to one unit.
pub fn padded_range(lo: f64, hi: f64) -> Range<f64> {
    let span = hi - lo;
    if span <= 0.0 {
        return (lo - 0.5)..(hi + 0.5);
    }
    let pad = span * AXIS_MARGIN;
    (lo - pad)..(hi + pad)
}

/// Ticks on the horizontal axis: every sample x except the origin.
pub fn x_ticks(samples: &SampleSet) -> Vec<f64> {
    samples
        .samples()
        .iter()
        .filter(|s| s.x != 0)
        .map(|s| f64::from(s.x))
        .collect()
}

/// Most regular ticks drawn on the vertical axis.
pub const MAX_REGULAR_TICKS: usize = 10;

/// Spacing of the regular y ticks up to `max_y`.
///
/// `step` is kept while it yields at most [`MAX_REGULAR_TICKS`] multiples;
/// otherwise the spacing widens to the smallest 1, 2, 2.5 or 5 times a
/// power of ten that does.
pub fn regular_step(max_y: f64, step: f64) -> f64 {
    if !(max_y.is_finite() && max_y > 0.0) || max_y / step <= MAX_REGULAR_TICKS as f64 {
        return step;
    }

    let raw = max_y / MAX_REGULAR_TICKS as f64;
    let magnitude = 10f64.powi(raw.log10().floor() as i32);
    [1.0, 2.0, 2.5, 5.0, 10.0]
        .iter()
        .map(|m| m * magnitude)
        .find(|&candidate| candidate >= raw)
        .unwrap_or(10.0 * magnitude)
}

/// Ticks on the vertical axis.
///
/// At most [`MAX_REGULAR_TICKS`] multiples of [`regular_step`] up to the
/// largest coefficient, merged with every non-zero sample value, sorted
/// and deduplicated. A non-positive step yields only the sample values.
pub fn y_ticks(samples: &SampleSet, step: f64) -> Vec<f64> {
    let max_y = samples.max_y();
    let mut ticks: Vec<f64> = Vec::new();

    if step > 0.0 && step.is_finite() {
        let step = regular_step(max_y, step);
        let count = ((max_y / step).floor() as usize).min(MAX_REGULAR_TICKS);
        ticks.extend((1..=count).map(|i| step * i as f64));
    }
    ticks.extend(samples.samples().iter().map(|s| s.y).filter(|&y| y != 0.0));

    ticks.sort_by(|a, b| a.total_cmp(b));
    ticks.dedup();
    ticks
}

/// Tick label with one decimal.
pub fn tick_label(value: f64) -> String {
    format!("{:.1}", value)
}
