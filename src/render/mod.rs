//! Card rendering pipeline.

pub mod branding;
pub mod canvas;
pub mod draw;
pub mod geometry;
pub mod grid;
pub mod labels;
pub mod resources;
pub mod text;

pub use labels::FontChoice;

use image::RgbaImage;
use rusttype::Font;

use crate::config::Settings;
use crate::error::RenderError;

/// Renderer that owns the loaded font and logo and produces PNG cards.
///
/// Resources load once in `new` and are reused for every render; each call
/// to [`CardRenderer::render`] works on its own canvas, so one renderer can
/// produce any number of cards.
pub struct CardRenderer {
    settings: Settings,
    font: Font<'static>,
    logo: RgbaImage,
}

impl CardRenderer {
    /// Load the font and logo from the paths in `settings`.
    pub fn new(settings: Settings) -> Result<Self, RenderError> {
        let font = resources::load_font(&settings.font_path)?;
        let logo = resources::load_logo(&settings.logo_path)?;
        Ok(Self::from_parts(settings, font, logo))
    }

    /// Build a renderer from already-loaded resources.
    pub fn from_parts(settings: Settings, font: Font<'static>, logo: RgbaImage) -> Self {
        Self {
            settings,
            font,
            logo,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Render one card and return the PNG bytes.
    ///
    /// Fails with [`RenderError::InsufficientLabels`] before any drawing if
    /// there are fewer fillers than non-center cells.
    pub fn render(&self, center_label: &str, fillers: &[String]) -> Result<Vec<u8>, RenderError> {
        labels::validate_fillers(&self.settings, fillers)?;

        let mut card = canvas::new_canvas(&self.settings);
        grid::draw_grid(&mut card, &self.settings);
        labels::draw_labels(&mut card, &self.font, &self.settings, center_label, fillers)?;
        branding::draw_branding(&mut card, &self.font, &self.settings, &self.logo);

        log::info!(
            "rendered {}x{} card with center label {:?}",
            card.width(),
            card.height(),
            center_label
        );
        canvas::encode_png(&card)
    }
}
