//! # binom_render: PNG rendering of the binomial curve
//!
//! Implements [`binom_core::traits::ChartRenderer`] on top of the plotters
//! bitmap backend. Everything presentational lives here: figure geometry,
//! fonts, tick placement, colours and export.
//!
//! ## Fonts
//!
//! Text is rasterised with `ab_glyph` from a font file found on disk. The
//! first readable entry of [`ChartStyle::font_candidates`] is registered
//! once per process; if none exists rendering fails with
//! [`RenderError::FontUnavailable`](binom_core::types::RenderError::FontUnavailable).
//!
//! ## Usage
//!
//! ```no_run
//! use binom_core::math::combinatorics::binomial_samples;
//! use binom_core::traits::ChartRenderer;
//! use binom_core::types::ChartData;
//! use binom_render::PlotRenderer;
//!
//! let samples = binomial_samples(6).unwrap();
//! let chart = ChartData::new(samples, vec![0.0, 6.0], vec![1.0, 1.0], 1).unwrap();
//! PlotRenderer::default().render(&chart).unwrap();
//! ```

#![warn(missing_docs)]

pub mod fonts;
pub mod renderer;
pub mod style;
pub mod ticks;

pub use renderer::{PlotRenderer, DEFAULT_OUTPUT_FILE};
pub use style::ChartStyle;
