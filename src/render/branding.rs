//! Branding pass: logo and caption on a panel in the bottom-right corner.

use image::imageops::{self, FilterType};
use image::RgbaImage;
use rusttype::{Font, Scale};

use crate::config::Settings;
use crate::render::{draw, geometry, text};

/// Gap between the caption and the logo in pixels
const CAPTION_LOGO_GAP: u32 = 10;

/// Draw the branding panel, resized logo, and caption.
pub fn draw_branding(
    canvas: &mut RgbaImage,
    font: &Font<'_>,
    settings: &Settings,
    logo: &RgbaImage,
) {
    let (width, height) = (canvas.width() as i32, canvas.height() as i32);
    let scale = Scale::uniform(settings.font_size);

    let (logo_w, logo_h) =
        geometry::scaled_logo_size(logo.width(), logo.height(), settings.logo_width);
    let logo = imageops::resize(logo, logo_w, logo_h, FilterType::Lanczos3);

    let (caption_w, caption_h) = text::text_size(font, scale, &settings.caption);
    let caption_origin = (
        width - caption_w as i32 - logo_w as i32 - CAPTION_LOGO_GAP as i32,
        height - caption_h as i32 - 3,
    );

    // Panel behind caption and logo, flush with the bottom-right corner
    draw::fill_rect(
        canvas,
        caption_origin.0 - settings.nudge as i32,
        caption_origin.1 - 1,
        width - 1,
        height - 1,
        settings.background_color,
    );
    draw::stroke_rect(
        canvas,
        caption_origin.0 - settings.nudge as i32,
        caption_origin.1 - 1,
        width - 1,
        height - 1,
        settings.border_color,
    );

    imageops::overlay(
        canvas,
        &logo,
        (width - logo_w as i32 - 1) as i64,
        (height - logo_h as i32 - 1) as i64,
    );

    text::draw_multiline_text(
        canvas,
        font,
        scale,
        caption_origin,
        settings.branding_color,
        &settings.caption,
    );
}
