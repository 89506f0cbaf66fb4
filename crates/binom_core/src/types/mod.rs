//! Core data and error types.
//!
//! This module provides:
//! - `sample`: Binomial samples and the ordered sample set
//! - `chart`: The data handed to chart renderers
//! - `error`: Structured error types for sampling, interpolation and rendering
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`Sample`], [`SampleSet`] from `sample`
//! - [`ChartData`] from `chart`
//! - [`SampleError`], [`InterpolationError`], [`RenderError`] from `error`

pub mod chart;
pub mod error;
pub mod sample;

// Re-export commonly used types at module level
pub use chart::ChartData;
pub use error::{InterpolationError, RenderError, SampleError};
pub use sample::{Sample, SampleSet};
