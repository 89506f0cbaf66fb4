//! Dense evaluation grids.
//!
//! An [`EvaluationGrid`] holds `m` equally spaced abscissae spanning a closed
//! interval. The end points are stored exactly, so the first and last grid
//! points coincide with the interval bounds regardless of rounding in the
//! step.

use crate::math::interpolators::Interpolator;
use crate::types::InterpolationError;
use num_traits::Float;

/// Grid size used for rendering smooth curves.
pub const DEFAULT_GRID_POINTS: usize = 1000;

/// Ordered, equally spaced points over `[start, end]`.
///
/// # Example
///
/// ```
/// use binom_core::math::grid::EvaluationGrid;
///
/// let grid = EvaluationGrid::new(0.0, 6.0, 4).unwrap();
/// assert_eq!(grid.points(), &[0.0, 2.0, 4.0, 6.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationGrid<T: Float> {
    points: Vec<T>,
}

impl<T: Float> EvaluationGrid<T> {
    /// Build `m` equally spaced points from `start` to `end` inclusive.
    ///
    /// # Errors
    ///
    /// `InterpolationError::InvalidInput` when `m < 2`, a bound is not
    /// finite, or `start >= end`.
    pub fn new(start: T, end: T, m: usize) -> Result<Self, InterpolationError> {
        if m < 2 {
            return Err(InterpolationError::InvalidInput(format!(
                "grid needs at least 2 points, got {}",
                m
            )));
        }
        if !start.is_finite() || !end.is_finite() || start >= end {
            return Err(InterpolationError::InvalidInput(format!(
                "grid bounds must be finite with start < end: got [{}, {}]",
                start.to_f64().unwrap_or(f64::NAN),
                end.to_f64().unwrap_or(f64::NAN)
            )));
        }

        let steps = T::from(m - 1).ok_or_else(|| {
            InterpolationError::InvalidInput(format!("grid size {} not representable", m))
        })?;
        let span = end - start;

        let mut points: Vec<T> = Vec::with_capacity(m);
        for i in 0..m - 1 {
            // i < m - 1, so the cast below cannot fail when `steps` succeeded
            let t = T::from(i).unwrap_or_else(T::zero) / steps;
            points.push((start + span * t).min(end));
        }
        points.push(end);

        Ok(Self { points })
    }

    /// Grid spanning the whole domain of `interp`.
    ///
    /// # Example
    ///
    /// ```
    /// use binom_core::math::grid::EvaluationGrid;
    /// use binom_core::math::interpolators::CubicSplineInterpolator;
    ///
    /// let xs: [f64; 4] = [0.0, 1.0, 2.0, 3.0];
    /// let spline = CubicSplineInterpolator::new(&xs, &[1.0, 3.0, 3.0, 1.0]).unwrap();
    /// let grid = EvaluationGrid::over_domain(&spline, 1000).unwrap();
    /// assert_eq!(grid.len(), 1000);
    /// assert_eq!(grid.last(), 3.0);
    /// ```
    pub fn over_domain<I: Interpolator<T>>(interp: &I, m: usize) -> Result<Self, InterpolationError> {
        let (start, end) = interp.domain();
        Self::new(start, end, m)
    }

    /// Grid points in increasing order.
    #[inline]
    pub fn points(&self) -> &[T] {
        &self.points
    }

    /// First grid point (the interval start).
    #[inline]
    pub fn first(&self) -> T {
        self.points[0]
    }

    /// Last grid point (the interval end).
    #[inline]
    pub fn last(&self) -> T {
        self.points[self.points.len() - 1]
    }

    /// Number of grid points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false for a constructed grid.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Lazily evaluate `interp` at every grid point.
    ///
    /// Nothing is computed until the returned iterator is advanced. Calling
    /// `evaluate` again (or cloning the iterator) restarts from the first
    /// point.
    ///
    /// # Example
    ///
    /// ```
    /// use binom_core::math::grid::EvaluationGrid;
    /// use binom_core::math::interpolators::CubicSplineInterpolator;
    ///
    /// let spline =
    ///     CubicSplineInterpolator::new(&[0.0_f64, 1.0, 2.0, 3.0], &[0.0, 1.0, 8.0, 27.0]).unwrap();
    /// let grid = EvaluationGrid::new(0.0, 3.0, 7).unwrap();
    ///
    /// let curve: Vec<(f64, f64)> = grid.evaluate(&spline).collect::<Result<_, _>>().unwrap();
    /// assert_eq!(curve.len(), 7);
    /// assert!((curve[1].1 - 0.125).abs() < 1e-12);
    /// ```
    pub fn evaluate<'a, I: Interpolator<T>>(&'a self, interp: &'a I) -> GridEvaluation<'a, T, I> {
        GridEvaluation {
            points: self.points.iter(),
            interp,
        }
    }
}

/// Iterator over `(x, f(x))` for each grid point.
///
/// Created by [`EvaluationGrid::evaluate`].
#[derive(Debug)]
pub struct GridEvaluation<'a, T: Float, I> {
    points: std::slice::Iter<'a, T>,
    interp: &'a I,
}

impl<T: Float, I> Clone for GridEvaluation<'_, T, I> {
    fn clone(&self) -> Self {
        Self {
            points: self.points.clone(),
            interp: self.interp,
        }
    }
}

impl<T: Float, I: Interpolator<T>> Iterator for GridEvaluation<'_, T, I> {
    type Item = Result<(T, T), InterpolationError>;

    fn next(&mut self) -> Option<Self::Item> {
        let x = *self.points.next()?;
        Some(self.interp.interpolate(x).map(|y| (x, y)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.points.size_hint()
    }
}

impl<T: Float, I: Interpolator<T>> ExactSizeIterator for GridEvaluation<'_, T, I> {}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn test_grid_shape(
            start in -1e3f64..1e3,
            width in 1e-3f64..1e3,
            m in 2usize..5000,
        ) {
            let end = start + width;
            let grid = EvaluationGrid::new(start, end, m).unwrap();

            prop_assert_eq!(grid.len(), m);
            prop_assert_eq!(grid.first(), start);
            prop_assert_eq!(grid.last(), end);
            prop_assert!(grid.points().windows(2).all(|w| w[0] < w[1]));
        }
    }
}
