//! Plot configuration.
//!
//! Every parameter is a fixed constant; [`PlotConfig::default`] is the only
//! source. `validate` exists so hand-built configurations fail early with
//! every problem listed at once.

use binom_core::math::combinatorics::MAX_ORDER;
use binom_core::math::grid::DEFAULT_GRID_POINTS;
use binom_core::math::interpolators::MIN_SPLINE_POINTS;
use binom_render::{ChartStyle, DEFAULT_OUTPUT_FILE};
use std::path::PathBuf;
use thiserror::Error;

/// Parameters of one end-to-end run.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotConfig {
    /// Upper index `n` of the binomial coefficients
    pub order: i64,
    /// Points in the dense evaluation grid
    pub grid_points: usize,
    /// Lower index of the highlighted sample
    pub highlight_x: u32,
    /// Image destination
    pub output_path: PathBuf,
    /// Output resolution
    pub dpi: u32,
    /// Figure width and height in inches
    pub figure_size_in: (f64, f64),
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            order: 6,
            grid_points: DEFAULT_GRID_POINTS,
            highlight_x: 1,
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
            dpi: 1200,
            figure_size_in: (6.4, 4.8),
        }
    }
}

impl PlotConfig {
    /// Check every field, collecting all problems.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        // The spline needs MIN_SPLINE_POINTS samples, i.e. order + 1 of them
        let min_order = MIN_SPLINE_POINTS as i64 - 1;
        if self.order < min_order {
            errors.push(format!(
                "order {} too small: the spline needs at least {} samples (order >= {})",
                self.order, MIN_SPLINE_POINTS, min_order
            ));
        }
        if self.order > i64::from(MAX_ORDER) {
            errors.push(format!(
                "order {} exceeds maximum allowed ({})",
                self.order, MAX_ORDER
            ));
        }

        if self.grid_points < 2 {
            errors.push(format!(
                "grid_points must be at least 2, got {}",
                self.grid_points
            ));
        }

        if self.order >= 0 && i64::from(self.highlight_x) > self.order {
            errors.push(format!(
                "highlight_x {} is outside 0..={}",
                self.highlight_x, self.order
            ));
        }

        if self.output_path.as_os_str().is_empty() {
            errors.push("output_path cannot be empty".to_string());
        }

        if self.dpi == 0 {
            errors.push("dpi must be greater than 0".to_string());
        }

        let (w, h) = self.figure_size_in;
        if !(w.is_finite() && h.is_finite() && w > 0.0 && h > 0.0) {
            errors.push(format!(
                "figure_size_in must be positive, got {} x {}",
                w, h
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Renderer style for this configuration.
    pub fn chart_style(&self) -> ChartStyle {
        ChartStyle {
            figure_size_in: self.figure_size_in,
            dpi: self.dpi,
            ..ChartStyle::default()
        }
    }
}

/// Configuration error type
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// One or more fields are invalid
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================
    // Defaults
    // ========================================

    #[test]
    fn test_default_is_valid() {
        let config = PlotConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.order, 6);
        assert_eq!(config.grid_points, 1000);
        assert_eq!(config.highlight_x, 1);
        assert_eq!(
            config.output_path,
            PathBuf::from("Analytic Extension of Combinatorial Numbers.png")
        );
    }

    #[test]
    fn test_chart_style_follows_config() {
        let config = PlotConfig {
            dpi: 100,
            figure_size_in: (4.0, 3.0),
            ..PlotConfig::default()
        };
        let style = config.chart_style();
        assert_eq!(style.pixel_size(), (400, 300));
        assert_eq!(style.title, ChartStyle::default().title);
        assert_eq!(PlotConfig::default().chart_style().pixel_size(), (7680, 5760));
    }

    // ========================================
    // Validation
    // ========================================

    #[test]
    fn test_validate_collects_every_problem() {
        let config = PlotConfig {
            order: 2,
            grid_points: 1,
            highlight_x: 5,
            output_path: PathBuf::new(),
            dpi: 0,
            figure_size_in: (0.0, 4.8),
        };

        match config.validate().unwrap_err() {
            ConfigError::Validation(errors) => {
                assert_eq!(errors.len(), 6);
                assert!(errors[0].contains("too small"));
                assert!(errors[1].contains("grid_points"));
                assert!(errors[2].contains("highlight_x"));
            }
        }
    }

    #[test]
    fn test_validate_negative_order() {
        let config = PlotConfig {
            order: -1,
            ..PlotConfig::default()
        };
        let ConfigError::Validation(errors) = config.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("order -1"));
    }

    #[test]
    fn test_validate_order_limit() {
        let config = PlotConfig {
            order: i64::from(MAX_ORDER) + 1,
            ..PlotConfig::default()
        };
        let ConfigError::Validation(errors) = config.validate().unwrap_err();
        assert!(errors[0].contains("exceeds maximum"));

        let at_limit = PlotConfig {
            order: i64::from(MAX_ORDER),
            ..PlotConfig::default()
        };
        assert!(at_limit.validate().is_ok());
    }

    #[test]
    fn test_error_display_joins_messages() {
        let err = ConfigError::Validation(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(err.to_string(), "Validation errors: a; b");
    }
}
