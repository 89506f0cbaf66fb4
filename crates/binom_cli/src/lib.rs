//! # binom_cli: the `binom` binary
//!
//! Service layer of the workspace. Orchestrates the core numerics and the
//! renderer: binomial samples of order 6, a not-a-knot cubic spline through
//! them, a 1000-point evaluation grid and a PNG chart named
//! `Analytic Extension of Combinatorial Numbers.png` in the working
//! directory.
//!
//! The pipeline is generic over [`ChartRenderer`](binom_core::traits::ChartRenderer),
//! so it runs without a bitmap backend in tests.

pub mod config;
pub mod error;
pub mod pipeline;

pub use config::{ConfigError, PlotConfig};
pub use error::{CliError, Result};
pub use pipeline::{run, PipelineReport};
