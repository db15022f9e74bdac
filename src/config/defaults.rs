use image::Rgba;

/// Default card width in pixels
pub const DEFAULT_CARD_WIDTH: u32 = 720;

/// Default card height in pixels
pub const DEFAULT_CARD_HEIGHT: u32 = 720;

/// Cells per side of the grid
pub const DEFAULT_GRID_SIZE: u32 = 5;

/// Margin subtracted from the cell width when testing text fit
pub const DEFAULT_NUDGE: u32 = 8;

/// Primary label font size in pixels
pub const DEFAULT_FONT_SIZE: f32 = 20.0;

/// Ratio of the small fallback font size to the primary size
pub const SMALL_FONT_RATIO: f32 = 0.8;

/// Character width at which filler labels are wrapped
pub const DEFAULT_WRAP_WIDTH: usize = 14;

/// Stroke width of the interior grid lines
pub const DEFAULT_LINE_WIDTH: u32 = 5;

/// Width the logo is resized to, in pixels
pub const DEFAULT_LOGO_WIDTH: u32 = 40;

/// Caption drawn next to the logo
pub const DEFAULT_CAPTION: &str = "codingwithsomeguy.com";

/// Default font file, probed at startup if not overridden
pub const DEFAULT_FONT_FILE: &str = "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf";

/// Default logo file, relative to the working directory
pub const DEFAULT_LOGO_FILE: &str = "logo.png";

const fn rgb(r: u8, g: u8, b: u8) -> Rgba<u8> {
    Rgba([r, g, b, 255])
}

// Card palette: #37547d, #1d3a62, #8499b6, #ffffff, #ffffff
/// Card background fill (#1d3a62)
pub const BACKGROUND_COLOR: Rgba<u8> = rgb(0x1d, 0x3a, 0x62);

/// Grid line color
pub const LINE_COLOR: Rgba<u8> = rgb(0xff, 0xff, 0xff);

/// Label text color
pub const FOREGROUND_COLOR: Rgba<u8> = rgb(0xff, 0xff, 0xff);

/// Branding caption color
pub const BRANDING_COLOR: Rgba<u8> = rgb(0xff, 0xff, 0xff);

/// Border rectangle color
pub const BORDER_COLOR: Rgba<u8> = rgb(0xff, 0xff, 0xff);
