//! Figure geometry, typography and colours.

use plotters::style::RGBColor;
use std::path::PathBuf;

/// Scatter colour of the samples.
pub const SAMPLE_BLUE: RGBColor = RGBColor(31, 119, 180);
/// Colour of the interpolated curve.
pub const CURVE_PINK: RGBColor = RGBColor(255, 192, 203);
/// Colour of the highlight guides and marker.
pub const HIGHLIGHT_RED: RGBColor = RGBColor(255, 0, 0);

/// Serif fonts tried in order; the first readable one typesets every label.
pub const DEFAULT_FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSerif.ttf",
    "/usr/share/fonts/dejavu/DejaVuSerif.ttf",
    "/usr/share/fonts/TTF/DejaVuSerif.ttf",
    "/usr/share/fonts/dejavu-serif-fonts/DejaVuSerif.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSerif-Regular.ttf",
    "/usr/share/fonts/liberation/LiberationSerif-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Times New Roman.ttf",
    "/Library/Fonts/Times New Roman.ttf",
    "C:\\Windows\\Fonts\\times.ttf",
];

/// Presentation settings for [`PlotRenderer`](crate::PlotRenderer).
///
/// Sizes follow print conventions: the figure is measured in inches and
/// text in points, both converted to pixels through `dpi`.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartStyle {
    /// Figure width and height in inches
    pub figure_size_in: (f64, f64),
    /// Output resolution
    pub dpi: u32,
    /// Font files tried in order
    pub font_candidates: Vec<PathBuf>,
    /// Chart title
    pub title: String,
    /// Spacing of the regular y ticks
    pub y_tick_step: f64,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            figure_size_in: (6.4, 4.8),
            dpi: 1200,
            font_candidates: DEFAULT_FONT_CANDIDATES.iter().map(PathBuf::from).collect(),
            title: "Analytic Extension of C\u{2099}\u{02E3} - by know634".to_string(),
            y_tick_step: 2.5,
        }
    }
}

impl ChartStyle {
    /// Image size in pixels.
    pub fn pixel_size(&self) -> (u32, u32) {
        let dpi = f64::from(self.dpi);
        (
            (self.figure_size_in.0 * dpi).round() as u32,
            (self.figure_size_in.1 * dpi).round() as u32,
        )
    }

    /// Convert a length in points to pixels (at least one pixel).
    pub fn pt(&self, points: f64) -> u32 {
        ((points * f64::from(self.dpi) / 72.0).round() as u32).max(1)
    }

    /// Same as [`pt`](Self::pt), signed for pixel offsets.
    pub fn offset(&self, points: f64) -> i32 {
        self.pt(points) as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pixel_size_at_1200_dpi() {
        assert_eq!(ChartStyle::default().pixel_size(), (7680, 5760));
    }

    #[test]
    fn test_point_scaling() {
        let style = ChartStyle {
            dpi: 144,
            ..ChartStyle::default()
        };
        assert_eq!(style.pt(14.0), 28);
        assert_eq!(style.offset(3.0), 6);
    }

    #[test]
    fn test_point_scaling_never_vanishes() {
        let style = ChartStyle {
            dpi: 10,
            ..ChartStyle::default()
        };
        assert_eq!(style.pt(0.5), 1);
    }

    #[test]
    fn test_default_title_uses_unicode_indices() {
        assert!(ChartStyle::default().title.contains("Cₙˣ"));
    }
}
