//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use the embedded list.

use super::ANSWERS;
use crate::core::Word;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading a word list
#[derive(Debug, Error)]
pub enum WordListError {
    #[error("Error reading word list from {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("No valid words found in path: {}", path.display())]
    NoValidWords { path: PathBuf },
}

/// Where the game's words come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSource {
    /// The list compiled into the binary
    Builtin,
    /// A newline-separated word file
    File(PathBuf),
}

impl From<&str> for WordSource {
    fn from(value: &str) -> Self {
        match value {
            "builtin" => Self::Builtin,
            path => Self::File(PathBuf::from(path)),
        }
    }
}

impl WordSource {
    /// Load the words from this source
    ///
    /// # Errors
    ///
    /// See [`load_from_file`].
    pub fn load(&self) -> Result<Vec<Word>, WordListError> {
        match self {
            Self::Builtin => Ok(words_from_slice(ANSWERS)),
            Self::File(path) => load_from_file(path),
        }
    }
}

/// Load words from a file
///
/// Each line is trimmed; lines that are not exactly five ASCII letters are
/// skipped. Surviving words are normalized to upper case.
///
/// # Errors
///
/// Returns [`WordListError::Io`] if the file cannot be read, and
/// [`WordListError::NoValidWords`] if no line holds a valid word.
///
/// # Examples
/// ```no_run
/// use wordle_game::wordlists::loader::load_from_file;
///
/// let words = load_from_file("words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, WordListError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| WordListError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut skipped = 0usize;
    let words: Vec<Word> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| {
            let word = Word::new(line).ok();
            if word.is_none() {
                skipped += 1;
            }
            word
        })
        .collect();

    if words.is_empty() {
        return Err(WordListError::NoValidWords {
            path: path.to_path_buf(),
        });
    }

    tracing::debug!(
        path = %path.display(),
        loaded = words.len(),
        skipped,
        "loaded word list"
    );

    Ok(words)
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_game::wordlists::loader::words_from_slice;
/// use wordle_game::wordlists::ANSWERS;
///
/// let words = words_from_slice(ANSWERS);
/// assert_eq!(words.len(), ANSWERS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
