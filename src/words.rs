//! Word-list loading: the label source for the render core.
//!
//! A word file is one label per line; the first line is the center label and
//! every following line contributes the text before the first tab. Fillers
//! are shuffled so each run deals a different card.

use std::fs;
use std::path::Path;

use rand::seq::SliceRandom;

use crate::error::WordSetError;

/// Center label plus shuffled filler labels.
#[derive(Debug, Clone)]
pub struct WordSet {
    pub center: String,
    pub fillers: Vec<String>,
}

/// Parse word-file content. Blank lines are skipped; lines may carry extra
/// tab-separated fields which are ignored.
pub fn parse_word_set(content: &str) -> Vec<String> {
    content
        .lines()
        .filter_map(|line| {
            let first_field = line.split('\t').next().unwrap_or("").trim();
            (!first_field.is_empty()).then(|| first_field.to_string())
        })
        .collect()
}

/// Load a word file and shuffle the fillers.
pub fn load_word_set(path: &Path) -> Result<WordSet, WordSetError> {
    let content = fs::read_to_string(path)?;
    let mut words = parse_word_set(&content);

    if words.len() < 2 {
        return Err(WordSetError::NotEnoughWords {
            path: path.to_path_buf(),
            needed: 2,
            found: words.len(),
        });
    }

    let center = words.remove(0);
    words.shuffle(&mut rand::thread_rng());
    log::debug!("loaded {} filler labels from {}", words.len(), path.display());

    Ok(WordSet {
        center,
        fillers: words,
    })
}
