//! Exact cubic spline interpolation.
//!
//! The spline is built from the second derivatives `M[i]` at the knots,
//! which satisfy the tridiagonal system
//!
//! ```text
//! h[i-1]*M[i-1] + 2*(h[i-1]+h[i])*M[i] + h[i]*M[i+1]
//!     = 6*((y[i+1]-y[i])/h[i] - (y[i]-y[i-1])/h[i-1])
//! ```
//!
//! for every interior knot, closed by one of the [`SplineBoundary`]
//! end conditions.

use super::Interpolator;
use crate::types::InterpolationError;
use num_traits::Float;

/// Minimum number of data points for a degree-3 fit.
pub const MIN_SPLINE_POINTS: usize = 4;

/// End conditions closing the spline system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SplineBoundary {
    /// Third derivative continuous at the second and second-to-last knots.
    ///
    /// Equivalent to an interpolating B-spline whose knot vector omits
    /// `x[1]` and `x[n-2]`. Reproduces any cubic polynomial exactly.
    #[default]
    NotAKnot,
    /// Zero second derivative at both ends.
    Natural,
}

/// Polynomial coefficients for a cubic spline segment.
///
/// Represents a cubic polynomial: `y = a + b*(x-xi) + c*(x-xi)² + d*(x-xi)³`
#[derive(Debug, Clone, Copy)]
struct SplineCoeffs<T: Float> {
    /// Constant term (y value at segment start)
    a: T,
    /// Linear coefficient
    b: T,
    /// Quadratic coefficient
    c: T,
    /// Cubic coefficient
    d: T,
}

/// Cubic spline interpolator with C² continuity.
///
/// Stores sorted knots and one cubic per segment. Interpolation is exact:
/// the curve passes through every data point (no smoothing).
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`, `f32`)
///
/// # Construction
///
/// Data points are automatically sorted by x-coordinate during construction.
/// At least [`MIN_SPLINE_POINTS`] data points are required.
///
/// # Example
///
/// ```
/// use binom_core::math::interpolators::{CubicSplineInterpolator, Interpolator};
///
/// let xs: [f64; 5] = [0.0, 1.0, 2.0, 3.0, 4.0];
/// let ys = [1.0, 4.0, 6.0, 4.0, 1.0];
///
/// let interp = CubicSplineInterpolator::new(&xs, &ys).unwrap();
/// let y = interp.interpolate(1.5).unwrap();
/// assert!(y > 4.0 && y < 6.0);
/// ```
#[derive(Debug, Clone)]
pub struct CubicSplineInterpolator<T: Float> {
    /// Sorted x-coordinates
    xs: Vec<T>,
    /// Polynomial coefficients for each segment
    coeffs: Vec<SplineCoeffs<T>>,
    boundary: SplineBoundary,
}

impl<T: Float> CubicSplineInterpolator<T> {
    /// Construct a not-a-knot cubic spline from x and y data points.
    ///
    /// # Arguments
    ///
    /// * `xs` - Slice of x-coordinates
    /// * `ys` - Slice of corresponding y-values
    ///
    /// # Returns
    ///
    /// * `Ok(CubicSplineInterpolator)` - Successfully constructed interpolator
    /// * `Err(InterpolationError::InsufficientData)` - Fewer than 4 data points
    /// * `Err(InterpolationError::InvalidInput)` - Mismatched lengths or non-finite values
    /// * `Err(InterpolationError::NonMonotonicData)` - Duplicated x-coordinate
    ///
    /// # Example
    ///
    /// ```
    /// use binom_core::math::interpolators::CubicSplineInterpolator;
    ///
    /// // Valid construction
    /// let interp = CubicSplineInterpolator::new(&[0.0_f64, 1.0, 2.0, 3.0], &[0.0, 1.0, 4.0, 9.0]).unwrap();
    /// assert_eq!(interp.len(), 4);
    ///
    /// // Insufficient data
    /// let result = CubicSplineInterpolator::new(&[0.0_f64, 1.0, 2.0], &[0.0, 1.0, 4.0]);
    /// assert!(result.is_err());
    /// ```
    pub fn new(xs: &[T], ys: &[T]) -> Result<Self, InterpolationError> {
        Self::with_boundary(xs, ys, SplineBoundary::NotAKnot)
    }

    /// Construct a cubic spline with explicit end conditions.
    ///
    /// Same validation as [`new`](Self::new).
    pub fn with_boundary(
        xs: &[T],
        ys: &[T],
        boundary: SplineBoundary,
    ) -> Result<Self, InterpolationError> {
        // Validate array lengths match
        if xs.len() != ys.len() {
            return Err(InterpolationError::InvalidInput(format!(
                "xs and ys must have same length: got {} and {}",
                xs.len(),
                ys.len()
            )));
        }

        if xs.len() < MIN_SPLINE_POINTS {
            return Err(InterpolationError::InsufficientData {
                got: xs.len(),
                need: MIN_SPLINE_POINTS,
            });
        }

        if let Some(i) = xs
            .iter()
            .zip(ys.iter())
            .position(|(x, y)| !x.is_finite() || !y.is_finite())
        {
            return Err(InterpolationError::InvalidInput(format!(
                "non-finite data point at index {}",
                i
            )));
        }

        // Create paired data and sort by x
        let mut pairs: Vec<(T, T)> = xs.iter().copied().zip(ys.iter().copied()).collect();
        pairs.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));

        // Unzip back into separate vectors
        let (sorted_xs, sorted_ys): (Vec<T>, Vec<T>) = pairs.into_iter().unzip();

        if let Some(index) = (1..sorted_xs.len()).find(|&i| sorted_xs[i] <= sorted_xs[i - 1]) {
            return Err(InterpolationError::NonMonotonicData { index });
        }

        let m = Self::second_derivatives(&sorted_xs, &sorted_ys, boundary)?;
        let coeffs = Self::segment_coefficients(&sorted_xs, &sorted_ys, &m);

        Ok(Self {
            xs: sorted_xs,
            coeffs,
            boundary,
        })
    }

    /// Solve for the second derivatives `M` at every knot.
    ///
    /// Not-a-knot rows eliminate `M[0]` and `M[n-1]` through
    /// `(M[1]-M[0])/h[0] = (M[2]-M[1])/h[1]` and its mirror, which keeps the
    /// system tridiagonal and strictly diagonally dominant.
    fn second_derivatives(
        xs: &[T],
        ys: &[T],
        boundary: SplineBoundary,
    ) -> Result<Vec<T>, InterpolationError> {
        let n = xs.len();
        let two = T::one() + T::one();
        let six = two + two + two;

        // Compute intervals h[i] = x[i+1] - x[i]
        let h: Vec<T> = (0..n - 1).map(|i| xs[i + 1] - xs[i]).collect();

        let interior = n - 2;
        let mut sub: Vec<T> = Vec::with_capacity(interior);
        let mut diag: Vec<T> = Vec::with_capacity(interior);
        let mut sup: Vec<T> = Vec::with_capacity(interior);
        let mut rhs: Vec<T> = Vec::with_capacity(interior);

        for i in 1..n - 1 {
            sub.push(h[i - 1]);
            diag.push(two * (h[i - 1] + h[i]));
            sup.push(h[i]);
            rhs.push(six * ((ys[i + 1] - ys[i]) / h[i] - (ys[i] - ys[i - 1]) / h[i - 1]));
        }
        sub[0] = T::zero();
        sup[interior - 1] = T::zero();

        let (h0, h1) = (h[0], h[1]);
        let (ha, hb) = (h[n - 3], h[n - 2]);

        if boundary == SplineBoundary::NotAKnot {
            diag[0] = (h0 + h1) * (h0 + two * h1) / h1;
            sup[0] = (h1 * h1 - h0 * h0) / h1;
            diag[interior - 1] = (ha + hb) * (two * ha + hb) / ha;
            sub[interior - 1] = (ha * ha - hb * hb) / ha;
        }

        let inner = solve_tridiagonal(&sub, &diag, &sup, &rhs)?;

        let mut m: Vec<T> = vec![T::zero(); n];
        m[1..n - 1].copy_from_slice(&inner);

        if boundary == SplineBoundary::NotAKnot {
            m[0] = ((h0 + h1) * m[1] - h0 * m[2]) / h1;
            m[n - 1] = ((ha + hb) * m[n - 2] - hb * m[n - 3]) / ha;
        }
        // Natural: m[0] and m[n-1] stay 0

        Ok(m)
    }

    /// Polynomial coefficients for each segment from knot second derivatives.
    fn segment_coefficients(xs: &[T], ys: &[T], m: &[T]) -> Vec<SplineCoeffs<T>> {
        let two = T::one() + T::one();
        let six = two + two + two;

        (0..xs.len() - 1)
            .map(|i| {
                let h = xs[i + 1] - xs[i];
                SplineCoeffs {
                    a: ys[i],
                    b: (ys[i + 1] - ys[i]) / h - h * (two * m[i] + m[i + 1]) / six,
                    c: m[i] / two,
                    d: (m[i + 1] - m[i]) / (six * h),
                }
            })
            .collect()
    }

    /// Find the segment index for interpolation using binary search.
    ///
    /// Returns the index `i` such that `xs[i] <= x < xs[i+1]`,
    /// clamped to valid segment range [0, n-2].
    #[inline]
    fn find_segment(&self, x: T) -> usize {
        let pos = self.xs.partition_point(|&xi| xi <= x);
        if pos == 0 {
            0
        } else if pos >= self.xs.len() {
            self.xs.len() - 2
        } else {
            pos - 1
        }
    }

    #[inline]
    fn check_bounds(&self, x: T) -> Result<(), InterpolationError> {
        let (x_min, x_max) = self.domain();
        if x < x_min || x > x_max || x.is_nan() {
            return Err(InterpolationError::OutOfBounds {
                x: x.to_f64().unwrap_or(f64::NAN),
                min: x_min.to_f64().unwrap_or(f64::NAN),
                max: x_max.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(())
    }

    /// First derivative of the spline at `x`.
    ///
    /// # Errors
    ///
    /// `InterpolationError::OutOfBounds` if `x` is outside the domain.
    ///
    /// # Example
    ///
    /// ```
    /// use binom_core::math::interpolators::CubicSplineInterpolator;
    ///
    /// // y = x², reproduced exactly by a not-a-knot spline
    /// let interp =
    ///     CubicSplineInterpolator::new(&[0.0_f64, 1.0, 2.0, 3.0], &[0.0, 1.0, 4.0, 9.0]).unwrap();
    /// assert!((interp.derivative(1.5).unwrap() - 3.0).abs() < 1e-12);
    /// ```
    pub fn derivative(&self, x: T) -> Result<T, InterpolationError> {
        self.check_bounds(x)?;

        let i = self.find_segment(x);
        let coeffs = &self.coeffs[i];
        let two = T::one() + T::one();
        let three = two + T::one();

        let dx = x - self.xs[i];
        Ok(coeffs.b + two * coeffs.c * dx + three * coeffs.d * dx * dx)
    }

    /// Returns a reference to the sorted x-coordinates.
    #[inline]
    pub fn xs(&self) -> &[T] {
        &self.xs
    }

    /// End conditions used to build the spline.
    #[inline]
    pub fn boundary(&self) -> SplineBoundary {
        self.boundary
    }

    /// Returns the number of data points.
    #[inline]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Returns true if the interpolator has no data points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }
}

impl<T: Float> Interpolator<T> for CubicSplineInterpolator<T> {
    /// Interpolate value at point `x` using cubic spline.
    ///
    /// Uses binary search (O(log n)) to find the appropriate segment,
    /// then evaluates the cubic polynomial.
    ///
    /// # Formula
    ///
    /// ```text
    /// y = a + b*(x-xi) + c*(x-xi)² + d*(x-xi)³
    /// ```
    ///
    /// # Returns
    ///
    /// * `Ok(y)` - The interpolated value
    /// * `Err(InterpolationError::OutOfBounds)` - If `x` is outside the domain
    fn interpolate(&self, x: T) -> Result<T, InterpolationError> {
        self.check_bounds(x)?;

        // Find the segment containing x
        let i = self.find_segment(x);
        let coeffs = &self.coeffs[i];

        // Horner form of a + b*dx + c*dx² + d*dx³
        let dx = x - self.xs[i];
        Ok(coeffs.a + dx * (coeffs.b + dx * (coeffs.c + dx * coeffs.d)))
    }

    /// Return the valid interpolation domain.
    #[inline]
    fn domain(&self) -> (T, T) {
        (self.xs[0], self.xs[self.xs.len() - 1])
    }
}

/// Thomas algorithm for a tridiagonal system.
///
/// `sub[0]` and `sup[n-1]` are ignored.
fn solve_tridiagonal<T: Float>(
    sub: &[T],
    diag: &[T],
    sup: &[T],
    rhs: &[T],
) -> Result<Vec<T>, InterpolationError> {
    let n = diag.len();
    let mut c_prime: Vec<T> = Vec::with_capacity(n);
    let mut d_prime: Vec<T> = Vec::with_capacity(n);

    // Forward elimination
    for i in 0..n {
        let (denom, carried) = if i == 0 {
            (diag[0], T::zero())
        } else {
            (
                diag[i] - sub[i] * c_prime[i - 1],
                sub[i] * d_prime[i - 1],
            )
        };
        if denom == T::zero() || !denom.is_finite() {
            return Err(InterpolationError::SingularSystem { row: i });
        }
        c_prime.push(sup[i] / denom);
        d_prime.push((rhs[i] - carried) / denom);
    }

    // Back substitution
    let mut solution: Vec<T> = vec![T::zero(); n];
    solution[n - 1] = d_prime[n - 1];
    for i in (0..n - 1).rev() {
        solution[i] = d_prime[i] - c_prime[i] * solution[i + 1];
    }

    Ok(solution)
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn test_spline_passes_through_every_point(
            steps in prop::collection::vec(0.1f64..2.0, 3..20),
            seed_ys in prop::collection::vec(-100.0f64..100.0, 20),
        ) {
            let mut xs = vec![0.0];
            for step in &steps {
                let next = xs[xs.len() - 1] + step;
                xs.push(next);
            }
            let ys = &seed_ys[..xs.len()];

            let interp = CubicSplineInterpolator::new(&xs, ys).unwrap();
            for (x, y) in xs.iter().zip(ys.iter()) {
                let got = interp.interpolate(*x).unwrap();
                prop_assert!((got - y).abs() < 1e-6, "x={} y={} got={}", x, y, got);
            }
        }
    }
}
