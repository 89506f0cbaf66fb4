//! Interpolation methods for numerical computation.
//!
//! ## Available Interpolators
//!
//! - [`CubicSplineInterpolator`]: Exact cubic spline with C² continuity,
//!   not-a-knot ([`SplineBoundary::NotAKnot`]) or natural
//!   ([`SplineBoundary::Natural`]) end conditions
//!
//! ## Core Trait
//!
//! All 1D interpolators implement the [`Interpolator`] trait, which defines:
//! - `interpolate(x: T) -> Result<T, InterpolationError>`: Compute interpolated value
//! - `domain() -> (T, T)`: Return valid interpolation range
//!
//! Interpolators are generic over `T: num_traits::Float`.
//!
//! ## Example
//!
//! ```
//! use binom_core::math::interpolators::{CubicSplineInterpolator, Interpolator};
//!
//! let xs: [f64; 7] = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
//! let ys: [f64; 7] = [1.0, 6.0, 15.0, 20.0, 15.0, 6.0, 1.0];
//!
//! let spline = CubicSplineInterpolator::new(&xs, &ys).unwrap();
//! assert_eq!(spline.domain(), (0.0, 6.0));
//!
//! // Passes through every sample
//! let y = spline.interpolate(2.0).unwrap();
//! assert!((y - 15.0).abs() < 1e-10);
//! ```

mod cubic_spline;
mod traits;

// Re-export public types at module level
pub use cubic_spline::{CubicSplineInterpolator, SplineBoundary, MIN_SPLINE_POINTS};
pub use traits::Interpolator;
