//! Annotating and persisting frames to disk.

use std::path::{Path, PathBuf};

use image::RgbImage;

use crate::error::MarkError;
use crate::marker::{draw_marker, MarkerStyle};

/// Draw the marker onto the frame, then write it to `path`.
///
/// The encoding is chosen from the file extension (PNG for the default
/// path). Any existing file at `path` is overwritten. Parent directories are
/// not created: saving into a missing directory is an error.
///
/// # Errors
///
/// Returns an error if the frame cannot be encoded or the file cannot be
/// written.
pub fn annotate_and_save(
    frame: &mut RgbImage,
    style: &MarkerStyle,
    path: &Path,
) -> Result<(), MarkError> {
    draw_marker(frame, style);
    frame.save(path)?;
    Ok(())
}

/// Resolve the output path: the explicit CLI flag wins over the configured
/// default.
#[must_use]
pub fn resolve_output_path(explicit: Option<&str>, config_default: &str) -> PathBuf {
    match explicit {
        Some(p) => PathBuf::from(p),
        None => PathBuf::from(config_default),
    }
}
