//! Error types for the binom CLI.

use crate::config::ConfigError;
use binom_core::types::{InterpolationError, RenderError, SampleError};
use thiserror::Error;

/// CLI error type, one variant per pipeline stage.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration rejected before any work started
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Sample generation failed
    #[error("Sample generation error: {0}")]
    Samples(#[from] SampleError),

    /// Spline construction or evaluation failed
    #[error("Interpolation error: {0}")]
    Interpolation(#[from] InterpolationError),

    /// Rendering or export failed
    #[error("Render error: {0}")]
    Render(#[from] RenderError),
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
