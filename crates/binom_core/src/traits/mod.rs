//! Collaborator interfaces.
//!
//! The numerical core never draws anything itself. It hands a
//! [`ChartData`](crate::types::ChartData) to a [`ChartRenderer`], so sampling and interpolation stay
//! testable without any rendering backend or font installed.

pub mod renderer;

pub use renderer::{ChartRenderer, RenderOutput};

/// Generic floating-point trait used by the interpolators.
pub use num_traits::Float;
