//! Grid pass: border rectangle plus interior rule lines.

use image::RgbaImage;

use crate::config::Settings;
use crate::render::{draw, geometry};

/// Draw the 1px border and the interior grid lines.
///
/// Interior lines sit at exact multiples of the cell size; where a thick
/// line or the border would run past the canvas edge it is clipped, not
/// repositioned.
pub fn draw_grid(canvas: &mut RgbaImage, settings: &Settings) {
    let (width, height) = (canvas.width(), canvas.height());
    let (cell_w, cell_h) = geometry::cell_size(width, height, settings.grid_size);

    draw::stroke_rect(
        canvas,
        0,
        0,
        width as i32 - 1,
        height as i32 - 1,
        settings.border_color,
    );

    for k in 1..settings.grid_size {
        draw::vertical_line(canvas, k * cell_w, settings.line_width, settings.line_color);
        draw::horizontal_line(canvas, k * cell_h, settings.line_width, settings.line_color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::canvas::new_canvas;

    #[test]
    fn interior_lines_at_cell_multiples() {
        let settings = Settings::default();
        let mut canvas = new_canvas(&settings);
        draw_grid(&mut canvas, &settings);

        // 720 / 5 = 144: lines at 144, 288, 432, 576
        for k in 1..5u32 {
            let x = k * 144;
            assert_eq!(*canvas.get_pixel(x, 300), settings.line_color);
            assert_eq!(*canvas.get_pixel(300, x), settings.line_color);
        }

        // cell interiors keep the background
        assert_eq!(*canvas.get_pixel(72, 72), settings.background_color);
        assert_eq!(*canvas.get_pixel(360, 360), settings.background_color);
    }

    #[test]
    fn border_is_drawn() {
        let settings = Settings::default();
        let mut canvas = new_canvas(&settings);
        draw_grid(&mut canvas, &settings);

        assert_eq!(*canvas.get_pixel(0, 50), settings.border_color);
        assert_eq!(*canvas.get_pixel(719, 50), settings.border_color);
        assert_eq!(*canvas.get_pixel(50, 0), settings.border_color);
        assert_eq!(*canvas.get_pixel(50, 719), settings.border_color);
    }
}
