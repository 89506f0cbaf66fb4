//! Error types for structured error handling.
//!
//! This module provides:
//! - `SampleError`: Errors from binomial sample generation
//! - `InterpolationError`: Errors from interpolation and grid operations
//! - `RenderError`: Errors reported by chart renderers

use std::path::PathBuf;
use thiserror::Error;

/// Sample generation errors.
///
/// # Variants
/// - `NegativeOrder`: The upper index `n` is negative
/// - `Overflow`: The coefficients of order `n` are not representable as `f64`
/// - `InvalidSamples`: Externally supplied samples break the set invariants
///
/// # Examples
/// ```
/// use binom_core::types::SampleError;
///
/// let err = SampleError::NegativeOrder { n: -1 };
/// assert_eq!(format!("{}", err), "Invalid order: n = -1 must be non-negative");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SampleError {
    /// Upper index is negative.
    #[error("Invalid order: n = {n} must be non-negative")]
    NegativeOrder {
        /// The rejected order
        n: i64,
    },

    /// Coefficients of this order overflow `f64`.
    #[error("Binomial coefficients of order {n} overflow f64 (maximum order is {max})")]
    Overflow {
        /// The rejected order
        n: i64,
        /// Largest supported order
        max: u32,
    },

    /// Samples do not form the coefficients of a single order.
    #[error("Invalid sample set: {0}")]
    InvalidSamples(String),
}

/// Interpolation-related errors.
///
/// Provides structured error handling for interpolation operations
/// with descriptive context for each failure mode.
///
/// # Variants
/// - `OutOfBounds`: Query point outside valid interpolation domain
/// - `InsufficientData`: Not enough data points for interpolation
/// - `NonMonotonicData`: Duplicated abscissa after sorting
/// - `SingularSystem`: Spline system has a vanishing pivot
/// - `InvalidInput`: General invalid input error
///
/// # Examples
/// ```
/// use binom_core::types::InterpolationError;
///
/// let err = InterpolationError::OutOfBounds { x: 5.0, min: 0.0, max: 3.0 };
/// assert!(format!("{}", err).contains("outside valid domain"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InterpolationError {
    /// Query point outside valid interpolation domain.
    #[error("Query point {x} outside valid domain [{min}, {max}]")]
    OutOfBounds {
        /// The query point that was out of bounds
        x: f64,
        /// Minimum valid value
        min: f64,
        /// Maximum valid value
        max: f64,
    },

    /// Insufficient data points for interpolation.
    #[error("Insufficient data points: got {got}, need at least {need}")]
    InsufficientData {
        /// Number of points provided
        got: usize,
        /// Minimum number of points required
        need: usize,
    },

    /// Data is not strictly increasing in x.
    #[error("Data is not monotonic at index {index}")]
    NonMonotonicData {
        /// Index where monotonicity violation was detected
        index: usize,
    },

    /// Tridiagonal solve hit a zero pivot.
    #[error("Singular spline system at row {row}")]
    SingularSystem {
        /// Row of the vanishing pivot
        row: usize,
    },

    /// Invalid input data or parameters.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Chart rendering errors.
///
/// Returned by [`ChartRenderer`](crate::traits::ChartRenderer)
/// implementations. Every variant is fatal for the run.
///
/// # Examples
/// ```
/// use binom_core::types::RenderError;
/// use std::path::PathBuf;
///
/// let err = RenderError::Export {
///     path: PathBuf::from("/readonly/out.png"),
///     message: "permission denied".to_string(),
/// };
/// assert!(format!("{}", err).contains("/readonly/out.png"));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RenderError {
    /// None of the configured fonts could be loaded.
    #[error("No usable font found (tried: {})", tried.join(", "))]
    FontUnavailable {
        /// Font files that were tried
        tried: Vec<String>,
    },

    /// Drawing onto the canvas failed.
    #[error("Drawing failed: {0}")]
    Draw(String),

    /// Writing the image file failed.
    #[error("Failed to export image to {}: {message}", path.display())]
    Export {
        /// Target file
        path: PathBuf,
        /// Backend diagnostic
        message: String,
    },

    /// Chart data violates the renderer contract.
    #[error("Invalid chart data: {0}")]
    InvalidChart(String),
}
