//! Parsing and validation of marker parameters from CLI and config strings.

use image::Rgb;

/// Largest accepted frame edge, in pixels. Keeps synthesized blank frames
/// within what `ImageBuffer::new` can allocate without overflowing.
pub const MAX_DIMENSION: u32 = 16_384;

/// Parse a point given as `x,y` (e.g., `"0,0"`, `"50,50"`).
///
/// # Errors
///
/// Returns an error if the string is not two comma-separated integers.
pub fn parse_point(s: &str) -> Result<(i32, i32), String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != 2 {
        return Err(format!("Invalid point '{s}'. Expected 'x,y' (e.g., '0,0')"));
    }
    let x = parts[0].parse::<i32>().map_err(|_| format!("Invalid x coordinate '{}'", parts[0]))?;
    let y = parts[1].parse::<i32>().map_err(|_| format!("Invalid y coordinate '{}'", parts[1]))?;
    Ok((x, y))
}

/// Parse a color given as `r,g,b` with each channel in 0-255.
///
/// # Errors
///
/// Returns an error if the string is not three comma-separated bytes.
pub fn parse_color(s: &str) -> Result<Rgb<u8>, String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(format!("Invalid color '{s}'. Expected 'r,g,b' (e.g., '255,0,0')"));
    }
    let mut channels = [0u8; 3];
    for (channel, part) in channels.iter_mut().zip(&parts) {
        *channel = part.parse::<u8>().map_err(|_| format!("Invalid color channel '{part}'"))?;
    }
    Ok(Rgb(channels))
}

/// Parse frame dimensions given as `WxH` (e.g., `"640x480"`).
///
/// # Errors
///
/// Returns an error if the string is not two `x`-separated positive
/// integers, or if either side exceeds [`MAX_DIMENSION`].
pub fn parse_dimensions(s: &str) -> Result<(u32, u32), String> {
    let parts: Vec<&str> = s.split('x').map(str::trim).collect();
    if parts.len() != 2 {
        return Err(format!("Invalid dimensions '{s}'. Expected 'WxH' (e.g., '640x480')"));
    }
    let width = parts[0].parse::<u32>().map_err(|_| format!("Invalid width '{}'", parts[0]))?;
    let height = parts[1].parse::<u32>().map_err(|_| format!("Invalid height '{}'", parts[1]))?;
    if width == 0 || height == 0 {
        return Err(format!("Dimensions must be positive, got '{s}'"));
    }
    if width > MAX_DIMENSION || height > MAX_DIMENSION {
        return Err(format!("Dimensions must be at most {MAX_DIMENSION} per side, got '{s}'"));
    }
    Ok((width, height))
}

/// Validate the stroke thickness.
///
/// # Errors
///
/// Returns an error if the thickness is zero.
pub fn validate_thickness(thickness: u32) -> Result<(), String> {
    if thickness == 0 {
        return Err("Thickness must be at least 1".to_string());
    }
    Ok(())
}

/// Validate that the corners describe a rectangle (top-left at or before
/// bottom-right on both axes).
///
/// # Errors
///
/// Returns an error if the corners are out of order.
pub fn validate_corners(top_left: (i32, i32), bottom_right: (i32, i32)) -> Result<(), String> {
    if top_left.0 > bottom_right.0 || top_left.1 > bottom_right.1 {
        return Err(format!(
            "Top-left corner ({},{}) must not be past bottom-right ({},{})",
            top_left.0, top_left.1, bottom_right.0, bottom_right.1
        ));
    }
    Ok(())
}
