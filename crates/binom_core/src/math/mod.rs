//! Numerical building blocks.
//!
//! - `combinatorics`: Binomial coefficients and the sample generator
//! - `interpolators`: Cubic spline interpolation behind the [`Interpolator`](interpolators::Interpolator) trait
//! - `grid`: Equally spaced evaluation grids and lazy curve evaluation

pub mod combinatorics;
pub mod grid;
pub mod interpolators;
