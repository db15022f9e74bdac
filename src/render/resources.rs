//! Font and logo acquisition.
//!
//! Both resources load once into the renderer and are reused across cards;
//! either one failing to load aborts before any drawing happens.

use std::fs;
use std::path::{Path, PathBuf};

use image::RgbaImage;
use rusttype::Font;

use crate::error::RenderError;

/// Well-known font locations tried before scanning the font directories.
const FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/truetype/freefont/FreeSansBold.ttf",
];

/// Load a TTF font from disk.
pub fn load_font(path: &Path) -> Result<Font<'static>, RenderError> {
    let bytes = fs::read(path).map_err(|e| RenderError::FontLoad {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    Font::try_from_vec(bytes).ok_or_else(|| RenderError::FontLoad {
        path: path.to_path_buf(),
        message: "not a usable TrueType font".to_string(),
    })
}

/// Load the logo image from disk and convert it to RGBA.
pub fn load_logo(path: &Path) -> Result<RgbaImage, RenderError> {
    let img = image::open(path).map_err(|e| RenderError::LogoLoad {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    Ok(img.to_rgba8())
}

/// Probe for a usable system TTF so the CLI works without a --font flag.
pub fn find_system_font() -> Option<PathBuf> {
    for candidate in FONT_CANDIDATES {
        let path = Path::new(candidate);
        if path.is_file() {
            return Some(path.to_path_buf());
        }
    }
    first_ttf_under(Path::new("/usr/share/fonts"), 0)
}

fn first_ttf_under(dir: &Path, depth: u32) -> Option<PathBuf> {
    if depth > 4 {
        return None;
    }
    let mut entries: Vec<_> = fs::read_dir(dir).ok()?.flatten().map(|e| e.path()).collect();
    entries.sort();
    for path in &entries {
        if path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("ttf")) {
            return Some(path.clone());
        }
    }
    for path in &entries {
        if path.is_dir() {
            if let Some(found) = first_ttf_under(path, depth + 1) {
                return Some(found);
            }
        }
    }
    None
}

#[cfg(test)]
pub(crate) fn test_font() -> Option<Font<'static>> {
    let path = find_system_font()?;
    load_font(&path).ok()
}
