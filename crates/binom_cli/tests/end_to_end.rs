//! Full pipeline with the plotters renderer.

use binom_cli::{run, CliError, PlotConfig};
use binom_core::types::RenderError;
use binom_render::fonts::load_first_font;
use binom_render::PlotRenderer;

fn small_config(dir: &std::path::Path, file: &str) -> PlotConfig {
    PlotConfig {
        output_path: dir.join(file),
        dpi: 40,
        ..PlotConfig::default()
    }
}

#[test]
fn test_default_pipeline_writes_png() {
    let dir = tempfile::tempdir().unwrap();
    let config = small_config(dir.path(), "Analytic Extension of Combinatorial Numbers.png");
    let style = config.chart_style();
    if load_first_font(&style.font_candidates).is_err() {
        eprintln!("no candidate font on this host; skipping");
        return;
    }

    let renderer = PlotRenderer::new(config.output_path.clone(), style);
    let report = run(&config, &renderer).unwrap();

    assert_eq!(report.order, 6);
    assert_eq!(report.sample_count, 7);
    assert_eq!(report.grid_points, 1000);
    assert_eq!((report.output.width, report.output.height), (256, 192));
    assert!(report.output.bytes > 0);
    assert!(config.output_path.is_file());
}

#[test]
fn test_unwritable_output_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let config = PlotConfig {
        output_path: dir.path().join("no_such_dir").join("chart.png"),
        dpi: 40,
        ..PlotConfig::default()
    };
    let renderer = PlotRenderer::new(config.output_path.clone(), config.chart_style());

    let err = run(&config, &renderer).unwrap_err();

    assert!(
        matches!(
            err,
            CliError::Render(RenderError::Export { .. } | RenderError::FontUnavailable { .. })
        ),
        "unexpected error: {:?}",
        err
    );
    assert!(!config.output_path.exists());
}

#[cfg(unix)]
#[test]
fn test_read_only_output_directory_is_a_render_error() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let config = small_config(dir.path(), "chart.png");
    let style = config.chart_style();
    if load_first_font(&style.font_candidates).is_err() {
        eprintln!("no candidate font on this host; skipping");
        return;
    }

    std::fs::set_permissions(dir.path(), std::fs::Permissions::from_mode(0o555)).unwrap();
    let check = dir.path().join(".writable");
    if std::fs::write(&check, b"").is_ok() {
        std::fs::remove_file(&check).unwrap();
        std::fs::set_permissions(dir.path(), std::fs::Permissions::from_mode(0o755)).unwrap();
        eprintln!("directory permissions not enforced for this user; skipping");
        return;
    }

    let renderer = PlotRenderer::new(config.output_path.clone(), style);
    let result = run(&config, &renderer);
    std::fs::set_permissions(dir.path(), std::fs::Permissions::from_mode(0o755)).unwrap();

    assert!(
        matches!(result, Err(CliError::Render(RenderError::Export { .. }))),
        "unexpected result: {:?}",
        result
    );
    assert!(!config.output_path.exists());
}
