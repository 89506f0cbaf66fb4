//! Process-wide font registration.
//!
//! plotters' `ab_glyph` text backend keeps a global font table keyed by
//! family name. The first successful registration installs the font for
//! the `serif` family for the rest of the process; there is no teardown.

use binom_core::types::RenderError;
use plotters::style::{register_font, FontStyle};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{debug, warn};

/// Family every chart text element is set in.
pub const FONT_FAMILY: &str = "serif";

static REGISTERED: Mutex<Option<PathBuf>> = Mutex::new(None);

/// Read the first candidate that exists and is readable.
///
/// # Errors
///
/// `RenderError::FontUnavailable` listing every candidate when none can be
/// read.
pub fn load_first_font(candidates: &[PathBuf]) -> Result<(PathBuf, Vec<u8>), RenderError> {
    for path in candidates {
        match std::fs::read(path) {
            Ok(bytes) if !bytes.is_empty() => return Ok((path.clone(), bytes)),
            Ok(_) => warn!(path = %path.display(), "Skipping empty font file"),
            Err(e) => debug!(path = %path.display(), error = %e, "Font candidate unavailable"),
        }
    }

    Err(RenderError::FontUnavailable {
        tried: candidates
            .iter()
            .map(|p| p.display().to_string())
            .collect(),
    })
}

/// Make sure a font is registered for [`FONT_FAMILY`].
///
/// Returns the file the registered font was read from. Subsequent calls
/// return the already registered file without touching the disk.
pub fn ensure_registered(candidates: &[PathBuf]) -> Result<PathBuf, RenderError> {
    let mut registered = REGISTERED
        .lock()
        .map_err(|_| RenderError::Draw("font registry lock poisoned".to_string()))?;

    if let Some(path) = registered.as_ref() {
        return Ok(path.clone());
    }

    let (path, bytes) = load_first_font(candidates)?;
    register_bytes(&path, bytes)?;
    debug!(path = %path.display(), family = FONT_FAMILY, "Registered chart font");

    *registered = Some(path.clone());
    Ok(path)
}

fn register_bytes(path: &Path, bytes: Vec<u8>) -> Result<(), RenderError> {
    // The font table holds `'static` slices; this runs once per process.
    let bytes: &'static [u8] = Box::leak(bytes.into_boxed_slice());

    // The ab_glyph error carries no printable detail.
    register_font(FONT_FAMILY, FontStyle::Normal, bytes)
        .map_err(|_| RenderError::Draw(format!("invalid font file {}", path.display())))
}
