//! # binom_core: Samples and Interpolation for the Combinatorial Chart
//!
//! ## Layer 1 (Foundation) Role
//!
//! binom_core is the bottom layer of the workspace, providing:
//! - Binomial coefficients and the sample generator (`math::combinatorics`)
//! - Cubic spline interpolation (`math::interpolators`)
//! - Dense evaluation grids (`math::grid`)
//! - The chart renderer contract (`traits`)
//! - Data and error types: `SampleSet`, `ChartData`, `SampleError`,
//!   `InterpolationError`, `RenderError` (`types`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other binom_* crates, with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Error derives
//! - serde: Serialisation support (optional)
//!
//! No rendering backend is linked here; see `binom_render`.
//!
//! ## Usage Examples
//!
//! ```rust
//! use binom_core::math::combinatorics::binomial_samples;
//! use binom_core::math::grid::{EvaluationGrid, DEFAULT_GRID_POINTS};
//! use binom_core::math::interpolators::{CubicSplineInterpolator, Interpolator};
//!
//! let samples = binomial_samples(6).unwrap();
//! let spline = CubicSplineInterpolator::new(&samples.xs(), &samples.ys()).unwrap();
//! let grid = EvaluationGrid::over_domain(&spline, DEFAULT_GRID_POINTS).unwrap();
//!
//! let curve: Vec<(f64, f64)> = grid.evaluate(&spline).collect::<Result<_, _>>().unwrap();
//! assert_eq!(curve.len(), 1000);
//! # assert!((spline.interpolate(3.0).unwrap() - 20.0).abs() < 1e-9);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for samples, spline boundaries and error types

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod traits;
pub mod types;
