//! Word list loading utilities
//!
//! Provides functions to load vocabularies from files or use the embedded
//! demo list.

use std::fs;
use std::io;
use std::path::Path;

/// Load a vocabulary from a file
///
/// One word per line, trimmed and lowercased; blank lines are skipped.
/// Words may have differing lengths — the game is length-agnostic.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use probetree::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/dictionary.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;

    let words = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_lowercase())
            }
        })
        .collect();

    Ok(words)
}

/// Convert an embedded string slice to an owned vocabulary
///
/// # Examples
/// ```
/// use probetree::wordlists::loader::words_from_slice;
/// use probetree::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().map(ToString::to_string).collect()
}
