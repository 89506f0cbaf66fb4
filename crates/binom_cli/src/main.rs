//! binom - render the analytic extension of the binomial coefficients
//!
//! Runs end to end without arguments. `--verbose` only raises the log level;
//! `RUST_LOG` takes precedence when set.

use binom_cli::{run, PlotConfig, Result};
use binom_render::PlotRenderer;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Plot C(n, x) for n = 6 together with its smooth interpolation
#[derive(Parser)]
#[command(name = "binom")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialise tracing
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let config = PlotConfig::default();
    let renderer = PlotRenderer::new(config.output_path.clone(), config.chart_style());
    let report = run(&config, &renderer)?;

    info!(
        path = %report.output.path.display(),
        width = report.output.width,
        height = report.output.height,
        "Done"
    );
    Ok(())
}
