use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Not enough labels for a {grid_size}x{grid_size} grid: need {needed}, got {got}")]
    InsufficientLabels {
        grid_size: u32,
        needed: usize,
        got: usize,
    },

    #[error("Failed to load font {}: {message}", .path.display())]
    FontLoad { path: PathBuf, message: String },

    #[error("Failed to load logo {}: {message}", .path.display())]
    LogoLoad { path: PathBuf, message: String },

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum WordSetError {
    #[error("Not enough labels in {}: need at least {needed}, found {found}", .path.display())]
    NotEnoughWords {
        path: PathBuf,
        needed: usize,
        found: usize,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
