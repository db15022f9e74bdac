//! Canvas creation and PNG encoding.

use std::io::Cursor;

use image::{ImageFormat, RgbaImage};

use crate::config::Settings;
use crate::error::RenderError;

/// Blank background-filled canvas at the configured card size.
pub fn new_canvas(settings: &Settings) -> RgbaImage {
    RgbaImage::from_pixel(
        settings.card_width,
        settings.card_height,
        settings.background_color,
    )
}

/// Encode the finished canvas as PNG into an in-memory buffer.
pub fn encode_png(canvas: &RgbaImage) -> Result<Vec<u8>, RenderError> {
    let mut buffer = Cursor::new(Vec::new());
    canvas.write_to(&mut buffer, ImageFormat::Png)?;
    Ok(buffer.into_inner())
}
