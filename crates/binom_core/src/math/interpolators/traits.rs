//! The one-dimensional interpolation interface.

use crate::types::InterpolationError;
use num_traits::Float;

/// A function reconstructed from discrete samples.
///
/// Implementors are defined only on a closed domain `[x_min, x_max]`;
/// queries outside it fail with `InterpolationError::OutOfBounds` rather
/// than extrapolating.
///
/// # Example
///
/// ```
/// use binom_core::math::interpolators::{CubicSplineInterpolator, Interpolator};
///
/// fn midpoint<T: num_traits::Float, I: Interpolator<T>>(interp: &I) -> T {
///     let (lo, hi) = interp.domain();
///     interp.interpolate((lo + hi) / (T::one() + T::one())).unwrap()
/// }
///
/// let xs: [f64; 4] = [0.0, 1.0, 2.0, 3.0];
/// let ys: [f64; 4] = [0.0, 1.0, 8.0, 27.0];
/// let spline = CubicSplineInterpolator::new(&xs, &ys).unwrap();
/// assert!((midpoint(&spline) - 3.375).abs() < 1e-12);
/// ```
pub trait Interpolator<T: Float> {
    /// Value of the interpolant at `x`.
    ///
    /// # Errors
    ///
    /// `InterpolationError::OutOfBounds` if `x` lies outside [`domain`](Self::domain).
    fn interpolate(&self, x: T) -> Result<T, InterpolationError>;

    /// Closed interval `(x_min, x_max)` on which the interpolant is defined.
    fn domain(&self) -> (T, T);
}
