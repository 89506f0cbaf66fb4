//! PlotRenderer against the real bitmap backend.
//!
//! Success-path tests need a serif font on the host and return early when
//! none of the candidates exists.

use binom_core::math::combinatorics::binomial_samples;
use binom_core::math::grid::EvaluationGrid;
use binom_core::math::interpolators::CubicSplineInterpolator;
use binom_core::traits::ChartRenderer;
use binom_core::types::{ChartData, RenderError};
use binom_render::fonts::load_first_font;
use binom_render::{ChartStyle, PlotRenderer};

const PNG_MAGIC: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

fn chart(order: i64, m: usize) -> ChartData {
    let samples = binomial_samples(order).unwrap();
    let spline = CubicSplineInterpolator::new(&samples.xs(), &samples.ys()).unwrap();
    let grid = EvaluationGrid::over_domain(&spline, m).unwrap();
    let (xs, ys): (Vec<f64>, Vec<f64>) = grid
        .evaluate(&spline)
        .collect::<Result<Vec<_>, _>>()
        .unwrap()
        .into_iter()
        .unzip();
    ChartData::new(samples, xs, ys, 1).unwrap()
}

/// Low resolution keeps the tests fast: 6.4 x 4.8 in at 50 dpi.
fn small_style() -> ChartStyle {
    ChartStyle {
        dpi: 50,
        ..ChartStyle::default()
    }
}

fn font_available(style: &ChartStyle) -> bool {
    let found = load_first_font(&style.font_candidates).is_ok();
    if !found {
        eprintln!("no candidate font on this host; skipping");
    }
    found
}

#[test]
fn test_render_writes_png() {
    let style = small_style();
    if !font_available(&style) {
        return;
    }

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("binomial.png");
    let renderer = PlotRenderer::new(&path, style);

    let output = renderer.render(&chart(6, 1000)).unwrap();

    assert_eq!(output.path, path);
    assert_eq!((output.width, output.height), (320, 240));
    assert!(output.bytes > 0);

    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(bytes.len() as u64, output.bytes);
    assert_eq!(bytes[..8], PNG_MAGIC);
}

#[test]
fn test_render_overwrites_existing_file() {
    let style = small_style();
    if !font_available(&style) {
        return;
    }

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("binomial.png");
    std::fs::write(&path, b"stale").unwrap();

    let output = PlotRenderer::new(&path, style)
        .render(&chart(4, 200))
        .unwrap();

    assert!(output.bytes > 5);
    assert_eq!(std::fs::read(&path).unwrap()[..8], PNG_MAGIC);
}

#[test]
fn test_render_into_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("binomial.png");
    let renderer = PlotRenderer::new(&path, small_style());

    let err = renderer.render(&chart(6, 100)).unwrap_err();

    assert!(
        matches!(
            err,
            RenderError::Export { .. } | RenderError::FontUnavailable { .. }
        ),
        "unexpected error: {:?}",
        err
    );
    assert!(!path.exists());
}

#[cfg(unix)]
#[test]
fn test_render_into_read_only_directory_is_export_error() {
    use std::os::unix::fs::PermissionsExt;

    let style = small_style();
    if !font_available(&style) {
        return;
    }

    let dir = tempfile::tempdir().unwrap();
    std::fs::set_permissions(dir.path(), std::fs::Permissions::from_mode(0o555)).unwrap();

    // Privileged users write regardless of the mode bits.
    let check = dir.path().join(".writable");
    if std::fs::write(&check, b"").is_ok() {
        std::fs::remove_file(&check).unwrap();
        std::fs::set_permissions(dir.path(), std::fs::Permissions::from_mode(0o755)).unwrap();
        eprintln!("directory permissions not enforced for this user; skipping");
        return;
    }

    let path = dir.path().join("binomial.png");
    let result = PlotRenderer::new(&path, style).render(&chart(6, 100));
    std::fs::set_permissions(dir.path(), std::fs::Permissions::from_mode(0o755)).unwrap();

    match result.unwrap_err() {
        RenderError::Export { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("Expected Export error, got {:?}", other),
    }
    assert!(!path.exists());
}
