//! Label layout pass: resolve, wrap, measure, fit, and draw the text for
//! every cell on the card.

use image::RgbaImage;
use rusttype::{Font, Scale};

use crate::config::Settings;
use crate::error::RenderError;
use crate::render::{geometry, text};

/// Which of the two fixed font sizes a label ended up with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontChoice {
    Primary,
    Small,
}

impl FontChoice {
    pub fn scale(self, settings: &Settings) -> Scale {
        match self {
            FontChoice::Primary => Scale::uniform(settings.font_size),
            FontChoice::Small => Scale::uniform(settings.small_font_size()),
        }
    }
}

/// Fail-fast check that enough fillers exist for every non-center cell.
pub fn validate_fillers(settings: &Settings, fillers: &[String]) -> Result<(), RenderError> {
    let needed = settings.fillers_needed();
    if fillers.len() < needed {
        return Err(RenderError::InsufficientLabels {
            grid_size: settings.grid_size,
            needed,
            got: fillers.len(),
        });
    }
    Ok(())
}

/// Resolve the display text for every cell in linear order.
///
/// The center cell always shows the center label, unwrapped; fillers are
/// wrapped at the configured character width and consumed in order, skipping
/// the center slot.
fn cell_texts(
    settings: &Settings,
    center_label: &str,
    fillers: &[String],
) -> Result<Vec<String>, RenderError> {
    validate_fillers(settings, fillers)?;
    let center = geometry::center_cell(settings.grid_size);

    let mut texts = Vec::with_capacity(settings.cell_count());
    let mut next_filler = fillers.iter();
    for index in 0..settings.cell_count() as u32 {
        let location = geometry::cell_location(index, settings.grid_size);
        if location == (center, center) {
            texts.push(center_label.to_string());
        } else {
            let filler = next_filler.next().ok_or(RenderError::InsufficientLabels {
                grid_size: settings.grid_size,
                needed: settings.fillers_needed(),
                got: fillers.len(),
            })?;
            texts.push(text::wrap_label(filler, settings.wrap_width));
        }
    }
    Ok(texts)
}

/// Measure a label with the primary font and fall back to the small font
/// when it is too wide for the cell. Returns the choice and the measured
/// size under that choice; anything still too wide is drawn clipped.
pub fn fit_label(
    font: &Font<'_>,
    settings: &Settings,
    cell_width: u32,
    label: &str,
) -> (FontChoice, (u32, u32)) {
    let primary = FontChoice::Primary.scale(settings);
    let measured = text::text_size(font, primary, label);
    if !geometry::needs_small_font(measured.0, cell_width, settings.nudge) {
        return (FontChoice::Primary, measured);
    }
    let small = FontChoice::Small.scale(settings);
    (FontChoice::Small, text::text_size(font, small, label))
}

/// Draw all cell labels, centered within their cells.
pub fn draw_labels(
    canvas: &mut RgbaImage,
    font: &Font<'_>,
    settings: &Settings,
    center_label: &str,
    fillers: &[String],
) -> Result<(), RenderError> {
    let texts = cell_texts(settings, center_label, fillers)?;
    let cell = geometry::cell_size(canvas.width(), canvas.height(), settings.grid_size);

    for (index, label) in texts.iter().enumerate() {
        let location = geometry::cell_location(index as u32, settings.grid_size);
        let (choice, measured) = fit_label(font, settings, cell.0, label);
        let origin = geometry::cell_origin(location, cell, measured);
        log::debug!(
            "cell {:?}: {:?} font, {}x{} px at {:?}",
            location,
            choice,
            measured.0,
            measured.1,
            origin
        );
        text::draw_multiline_text(
            canvas,
            font,
            choice.scale(settings),
            origin,
            settings.foreground_color,
            label,
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fillers(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("word{i}")).collect()
    }

    #[test]
    fn center_cell_gets_center_label() {
        let settings = Settings::default();
        let texts = cell_texts(&settings, "FREE", &fillers(24)).unwrap();
        assert_eq!(texts.len(), 25);
        assert_eq!(texts[12], "FREE");
    }

    #[test]
    fn fillers_skip_the_center_slot() {
        let settings = Settings::default();
        let texts = cell_texts(&settings, "FREE", &fillers(24)).unwrap();
        assert_eq!(texts[11], "word11");
        assert_eq!(texts[13], "word12");
        assert_eq!(texts[24], "word23");
    }

    #[test]
    fn fillers_are_wrapped_but_center_is_not() {
        let settings = Settings::default();
        let mut words = fillers(24);
        words[0] = "red fish blue fish".to_string();
        let texts = cell_texts(&settings, "free space for all", &words).unwrap();
        assert_eq!(texts[0], "red fish blue\nfish");
        assert_eq!(texts[12], "free space for all");
    }

    #[test]
    fn too_few_fillers_is_an_error() {
        let settings = Settings::default();
        let err = cell_texts(&settings, "FREE", &fillers(10)).unwrap_err();
        match err {
            RenderError::InsufficientLabels { needed, got, .. } => {
                assert_eq!(needed, 24);
                assert_eq!(got, 10);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn exactly_24_fillers_is_enough() {
        let settings = Settings::default();
        assert!(validate_fillers(&settings, &fillers(24)).is_ok());
        assert!(validate_fillers(&settings, &fillers(23)).is_err());
    }
}
