//! Frame loading from disk or synthesized blanks.

use std::path::PathBuf;

use image::RgbImage;

use crate::error::MarkError;
use crate::params::parse_dimensions;

/// Where the input frame comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameSource {
    /// Decode an image file from disk.
    File(PathBuf),
    /// Synthesize a black frame, standing in for a capture device.
    Blank {
        /// Frame width in pixels.
        width: u32,
        /// Frame height in pixels.
        height: u32,
    },
}

/// Detect the frame source from the CLI inputs.
///
/// # Errors
///
/// Returns an error if neither an input path nor blank dimensions are given,
/// or if the dimensions do not parse.
pub fn detect_source(input: Option<&str>, blank: Option<&str>) -> Result<FrameSource, String> {
    if let Some(path) = input {
        Ok(FrameSource::File(PathBuf::from(path)))
    } else if let Some(dims) = blank {
        let (width, height) = parse_dimensions(dims)?;
        Ok(FrameSource::Blank { width, height })
    } else {
        Err("Provide an input image path or use -b/--blank WxH".to_string())
    }
}

/// Load the frame as an 8-bit RGB buffer.
///
/// # Errors
///
/// Returns an error if a file source cannot be read or decoded.
pub fn load_frame(source: &FrameSource) -> Result<RgbImage, MarkError> {
    match source {
        FrameSource::File(path) => Ok(image::open(path)?.to_rgb8()),
        FrameSource::Blank { width, height } => Ok(RgbImage::new(*width, *height)),
    }
}
