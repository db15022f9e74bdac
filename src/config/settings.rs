use std::path::PathBuf;

use image::Rgba;

use super::defaults::*;
use crate::cli::Args;
use crate::render::resources;

/// Runtime settings for card generation
///
/// All geometry and palette values are fixed constants in practice; the
/// struct exists so the pipeline has no ambient state and tests can render
/// with substitute resources.
#[derive(Debug, Clone)]
pub struct Settings {
    // Canvas
    pub card_width: u32,
    pub card_height: u32,

    // Grid
    pub grid_size: u32,
    pub line_width: u32,

    // Label layout
    pub nudge: u32,
    pub font_size: f32,
    pub wrap_width: usize,

    // Branding
    pub logo_width: u32,
    pub caption: String,

    // Colors
    pub background_color: Rgba<u8>,
    pub line_color: Rgba<u8>,
    pub foreground_color: Rgba<u8>,
    pub branding_color: Rgba<u8>,
    pub border_color: Rgba<u8>,

    // Resources
    pub font_path: PathBuf,
    pub logo_path: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            card_width: DEFAULT_CARD_WIDTH,
            card_height: DEFAULT_CARD_HEIGHT,

            grid_size: DEFAULT_GRID_SIZE,
            line_width: DEFAULT_LINE_WIDTH,

            nudge: DEFAULT_NUDGE,
            font_size: DEFAULT_FONT_SIZE,
            wrap_width: DEFAULT_WRAP_WIDTH,

            logo_width: DEFAULT_LOGO_WIDTH,
            caption: DEFAULT_CAPTION.to_string(),

            background_color: BACKGROUND_COLOR,
            line_color: LINE_COLOR,
            foreground_color: FOREGROUND_COLOR,
            branding_color: BRANDING_COLOR,
            border_color: BORDER_COLOR,

            font_path: PathBuf::from(DEFAULT_FONT_FILE),
            logo_path: PathBuf::from(DEFAULT_LOGO_FILE),
        }
    }
}

impl Settings {
    /// Build settings from CLI arguments, borrowing path overrides.
    ///
    /// Without a --font flag the system font locations are probed so the
    /// binary works out of the box on typical installs.
    pub fn from_args(args: &Args) -> Self {
        let mut settings = Self::default();
        if let Some(font) = &args.font {
            settings.font_path = font.clone();
        } else if let Some(found) = resources::find_system_font() {
            log::debug!("using system font {}", found.display());
            settings.font_path = found;
        }
        if let Some(logo) = &args.logo {
            settings.logo_path = logo.clone();
        }
        settings
    }

    /// Small fallback font size, derived from the primary size
    pub fn small_font_size(&self) -> f32 {
        (self.font_size * SMALL_FONT_RATIO).floor()
    }

    /// Total number of cells on the card
    pub fn cell_count(&self) -> usize {
        (self.grid_size * self.grid_size) as usize
    }

    /// Number of filler labels a render needs (every cell but the center)
    pub fn fillers_needed(&self) -> usize {
        self.cell_count() - 1
    }
}
