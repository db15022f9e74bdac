//! Pixel-level drawing primitives for the card canvas.
//!
//! Coordinates are inclusive and may extend past the canvas; out-of-bounds
//! pixels are clipped, matching how grid lines and border strokes are allowed
//! to overlap the canvas edge.

use image::{Rgba, RgbaImage};

/// Fill an inclusive rectangle.
pub fn fill_rect(img: &mut RgbaImage, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgba<u8>) {
    let left = x0.max(0) as u32;
    let top = y0.max(0) as u32;
    if x1 < 0 || y1 < 0 {
        return;
    }
    let right = (x1 as u32).min(img.width().saturating_sub(1));
    let bottom = (y1 as u32).min(img.height().saturating_sub(1));
    for y in top..=bottom {
        for x in left..=right {
            img.put_pixel(x, y, color);
        }
    }
}

/// Stroke a 1px rectangle outline on the inclusive bounds.
pub fn stroke_rect(img: &mut RgbaImage, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgba<u8>) {
    fill_rect(img, x0, y0, x1, y0, color);
    fill_rect(img, x0, y1, x1, y1, color);
    fill_rect(img, x0, y0, x0, y1, color);
    fill_rect(img, x1, y0, x1, y1, color);
}

/// Full-height vertical line centered on `x` with the given stroke width.
pub fn vertical_line(img: &mut RgbaImage, x: u32, width: u32, color: Rgba<u8>) {
    let x0 = x as i32 - (width as i32) / 2;
    fill_rect(img, x0, 0, x0 + width as i32 - 1, img.height() as i32 - 1, color);
}

/// Full-width horizontal line centered on `y` with the given stroke width.
pub fn horizontal_line(img: &mut RgbaImage, y: u32, width: u32, color: Rgba<u8>) {
    let y0 = y as i32 - (width as i32) / 2;
    fill_rect(img, 0, y0, img.width() as i32 - 1, y0 + width as i32 - 1, color);
}
