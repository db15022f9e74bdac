pub mod cli;
pub mod config;
pub mod error;
pub mod render;
pub mod words;

pub use config::Settings;
pub use error::{RenderError, WordSetError};
pub use render::{CardRenderer, FontChoice};
pub use words::{load_word_set, WordSet};

/// High-level API for rendering a single bingo card to PNG bytes.
///
/// Loads the font and logo named in `settings`, renders one card, and
/// returns the encoded image. Callers producing many cards should build a
/// [`CardRenderer`] once and call `render` repeatedly instead, so resources
/// load only once.
///
/// The filler sequence must hold at least 24 labels for the default 5x5
/// grid; the center cell always shows `center_label` regardless of the
/// filler ordering.
///
/// # Example
///
/// ```no_run
/// use bingo_card::{load_word_set, render_card, Settings};
///
/// let words = load_word_set(std::path::Path::new("words.txt")).unwrap();
/// let png = render_card(&words.center, &words.fillers, &Settings::default()).unwrap();
/// std::fs::write("card.png", png).unwrap();
/// ```
pub fn render_card(
    center_label: &str,
    fillers: &[String],
    settings: &Settings,
) -> Result<Vec<u8>, RenderError> {
    let renderer = CardRenderer::new(settings.clone())?;
    renderer.render(center_label, fillers)
}
