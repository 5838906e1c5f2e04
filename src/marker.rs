//! Marker rectangle drawing on in-memory frames.

use image::{Rgb, RgbImage};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;

/// Geometry and appearance of the marker rectangle.
///
/// Corners are inclusive pixel coordinates. The default is the fixed marker
/// the tool was built around: a red 5-pixel outline from (0,0) to (50,50).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerStyle {
    /// Top-left corner (x, y), inclusive.
    pub top_left: (i32, i32),
    /// Bottom-right corner (x, y), inclusive.
    pub bottom_right: (i32, i32),
    /// Stroke color.
    pub color: Rgb<u8>,
    /// Stroke thickness in pixels.
    pub thickness: u32,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self { top_left: (0, 0), bottom_right: (50, 50), color: Rgb([255, 0, 0]), thickness: 5 }
    }
}

/// Draw the marker outline onto the frame, in place.
///
/// The stroke grows inward from the outline: thickness 5 paints the outline
/// rectangle plus four nested rectangles inset one pixel each, so pixels
/// interior to the stroke band are left untouched. Geometry outside the
/// frame bounds is clipped, never a panic or error; rectangles that collapse
/// before the requested thickness is reached are skipped.
pub fn draw_marker(frame: &mut RgbImage, style: &MarkerStyle) {
    let x0 = i64::from(style.top_left.0);
    let y0 = i64::from(style.top_left.1);
    let x1 = i64::from(style.bottom_right.0);
    let y1 = i64::from(style.bottom_right.1);

    // Corner spans can exceed i32, so the geometry math runs in i64 and
    // only frame-local coordinates ever reach imageproc.
    for inset in 0..i64::from(style.thickness) {
        let (rx0, ry0) = (x0 + inset, y0 + inset);
        let (rx1, ry1) = (x1 - inset, y1 - inset);
        if rx0 > rx1 || ry0 > ry1 {
            break;
        }
        let edges = [
            (rx0, ry0, rx1, ry0), // top
            (rx0, ry1, rx1, ry1), // bottom
            (rx0, ry0, rx0, ry1), // left
            (rx1, ry0, rx1, ry1), // right
        ];
        for (ex0, ey0, ex1, ey1) in edges {
            if let Some(rect) = clip_to_frame(frame, ex0, ey0, ex1, ey1) {
                draw_filled_rect_mut(frame, rect, style.color);
            }
        }
    }
}

/// Intersect an inclusive-corner span with the frame bounds.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn clip_to_frame(frame: &RgbImage, x0: i64, y0: i64, x1: i64, y1: i64) -> Option<Rect> {
    let x0 = x0.max(0);
    let y0 = y0.max(0);
    let x1 = x1.min(i64::from(frame.width()) - 1);
    let y1 = y1.min(i64::from(frame.height()) - 1);
    if x0 > x1 || y0 > y1 {
        return None;
    }
    // Clipped coordinates lie inside the frame, so the narrowing casts are exact.
    Some(Rect::at(x0 as i32, y0 as i32).of_size((x1 - x0 + 1) as u32, (y1 - y0 + 1) as u32))
}
