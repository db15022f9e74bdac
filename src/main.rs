use anyhow::{Context, Result};
use clap::Parser;
use std::fs;

use bingo_card::cli::Args;
use bingo_card::render::CardRenderer;
use bingo_card::words::load_word_set;
use bingo_card::Settings;

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    env_logger::Builder::new()
        .filter_level(match args.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        })
        .init();

    // Load the word list
    let words = load_word_set(&args.input)
        .with_context(|| format!("Failed to load word list: {}", args.input.display()))?;

    log::info!(
        "loaded center label {:?} and {} fillers",
        words.center,
        words.fillers.len()
    );

    // Build settings from CLI overrides
    let settings = Settings::from_args(&args);

    // Render the card
    let renderer = CardRenderer::new(settings).with_context(|| "Failed to load resources")?;
    let png = renderer
        .render(&words.center, &words.fillers)
        .with_context(|| "Failed to render card")?;

    // Write output
    let output_path = args.output_path();
    fs::write(&output_path, png)
        .with_context(|| format!("Failed to write output file: {}", output_path.display()))?;

    println!("Successfully wrote card to {}", output_path.display());

    Ok(())
}
