//! Text measurement and drawing on an RGBA canvas.
//!
//! Labels are measured before they are placed so the layout pass can pick a
//! font size and center the block; drawing then rasterizes glyph coverage
//! with alpha blending against whatever is already on the canvas.

use image::{Rgba, RgbaImage};
use rusttype::{point, Font, Scale};

/// Width in pixels of a single line of text at the given scale.
fn line_width(font: &Font<'_>, scale: Scale, line: &str) -> u32 {
    if line.is_empty() {
        return 0;
    }
    let v_metrics = font.v_metrics(scale);
    let mut width = 0f32;
    let mut advance = 0f32;
    for glyph in font.layout(line, scale, point(0.0, v_metrics.ascent)) {
        if let Some(bb) = glyph.pixel_bounding_box() {
            width = width.max(bb.max.x as f32);
        }
        advance = glyph.position().x + glyph.unpositioned().h_metrics().advance_width;
    }
    // Trailing whitespace has no bounding box but still advances the caret
    width.max(advance).ceil() as u32
}

/// Advance from one baseline to the next.
fn line_advance(font: &Font<'_>, scale: Scale) -> f32 {
    let v_metrics = font.v_metrics(scale);
    v_metrics.ascent - v_metrics.descent + v_metrics.line_gap
}

/// Bounding-box size of a (possibly multiline) text block.
///
/// Width is the widest line; height spans the first ascent through the last
/// descent, so single-line text measures ascent - descent rather than the
/// nominal font size.
pub fn text_size(font: &Font<'_>, scale: Scale, text: &str) -> (u32, u32) {
    let v_metrics = font.v_metrics(scale);
    let mut width = 0u32;
    let mut lines = 0u32;
    for line in text.lines() {
        width = width.max(line_width(font, scale, line));
        lines += 1;
    }
    if lines == 0 {
        return (0, 0);
    }
    let height =
        (v_metrics.ascent - v_metrics.descent) + (lines - 1) as f32 * line_advance(font, scale);
    (width, height.ceil() as u32)
}

fn blend_pixel(img: &mut RgbaImage, x: i32, y: i32, color: Rgba<u8>, coverage: f32) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as u32, y as u32);
    if x >= img.width() || y >= img.height() {
        return;
    }
    let alpha = coverage.clamp(0.0, 1.0);
    if alpha <= 0.0 {
        return;
    }
    let inv = 1.0 - alpha;
    let dst = img.get_pixel_mut(x, y);
    dst.0[0] = (color.0[0] as f32 * alpha + dst.0[0] as f32 * inv) as u8;
    dst.0[1] = (color.0[1] as f32 * alpha + dst.0[1] as f32 * inv) as u8;
    dst.0[2] = (color.0[2] as f32 * alpha + dst.0[2] as f32 * inv) as u8;
    dst.0[3] = 255;
}

fn draw_line_at(
    img: &mut RgbaImage,
    font: &Font<'_>,
    scale: Scale,
    left: i32,
    baseline: f32,
    color: Rgba<u8>,
    line: &str,
) {
    for glyph in font.layout(line, scale, point(left as f32, baseline)) {
        if let Some(bb) = glyph.pixel_bounding_box() {
            glyph.draw(|gx, gy, coverage| {
                let px = gx as i32 + bb.min.x;
                let py = gy as i32 + bb.min.y;
                blend_pixel(img, px, py, color, coverage);
            });
        }
    }
}

/// Draw a text block with its top-left corner at `origin`. Lines after the
/// first are center-aligned within the block width. Pixels that fall outside
/// the canvas are clipped silently.
pub fn draw_multiline_text(
    img: &mut RgbaImage,
    font: &Font<'_>,
    scale: Scale,
    origin: (i32, i32),
    color: Rgba<u8>,
    text: &str,
) {
    let v_metrics = font.v_metrics(scale);
    let (block_width, _) = text_size(font, scale, text);
    let advance = line_advance(font, scale);

    let mut baseline = origin.1 as f32 + v_metrics.ascent;
    for line in text.lines() {
        let width = line_width(font, scale, line);
        let left = origin.0 + (block_width as i32 - width as i32) / 2;
        draw_line_at(img, font, scale, left, baseline, color, line);
        baseline += advance;
    }
}

/// Greedy whitespace word wrap at a fixed character width.
///
/// A single word longer than the width is kept whole on its own line, so a
/// long unbroken label still triggers the small-font fallback instead of
/// being chopped mid-word.
pub fn wrap_label(label: &str, width: usize) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    for word in label.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.chars().count() + 1 + word.chars().count() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_breaks_at_whitespace() {
        assert_eq!(wrap_label("red fish blue fish", 14), "red fish blue\nfish");
        assert_eq!(wrap_label("short", 14), "short");
        assert_eq!(wrap_label("one two", 14), "one two");
    }

    #[test]
    fn wrap_keeps_long_words_whole() {
        let label = "supercalifragilisticexpialidocious";
        assert_eq!(wrap_label(label, 14), label);
        assert_eq!(
            wrap_label("a supercalifragilisticexpialidocious b", 14),
            "a\nsupercalifragilisticexpialidocious\nb"
        );
    }

    #[test]
    fn wrap_collapses_odd_whitespace() {
        assert_eq!(wrap_label("  spaced   out  ", 14), "spaced out");
        assert_eq!(wrap_label("", 14), "");
    }
}
