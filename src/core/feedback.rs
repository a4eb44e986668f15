//! Duplicate-safe feedback scoring
//!
//! Scores a guess against an answer position by position. Scoring runs in two
//! passes over the letters:
//!
//! 1. Exact pass: mark every position where guess and answer agree, and tally
//!    the answer letters that were *not* matched exactly.
//! 2. Present pass: walk the remaining guess positions left to right, marking a
//!    letter present only while the tally still holds an unclaimed occurrence.
//!
//! Exact matches must be settled before any present letter is attributed,
//! otherwise a guess letter can claim an answer occurrence that a later
//! position matches exactly.

use super::{Hint, Word};
use std::fmt;
use thiserror::Error;

/// Word length used by the game
pub const WORD_LENGTH: usize = 5;

const ALPHABET_SIZE: usize = 26;

/// Reasons a scoring request is rejected before any work is done
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreError {
    /// An operand is missing or contains something other than ASCII letters
    #[error("invalid input: {reason}")]
    InvalidInput { reason: &'static str },

    /// An operand has the wrong length, or the operands disagree in length
    #[error(
        "answer and guess must be {expected}-letter words (answer has {answer}, guess has {guess})"
    )]
    InvalidLength {
        expected: usize,
        answer: usize,
        guess: usize,
    },
}

/// Feedback for one guess: one [`Hint`] per guess position
///
/// `hints()[i]` always describes letter `i` of the guess.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Feedback(Vec<Hint>);

impl Feedback {
    /// Score two pre-validated words
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Feedback, Hint, Word};
    ///
    /// let answer = Word::new("water").unwrap();
    /// let guess = Word::new("otter").unwrap();
    /// let feedback = Feedback::calculate(&guess, &answer);
    ///
    /// assert_eq!(feedback.to_string(), "--GGG");
    /// assert_eq!(feedback.count(Hint::Exact), 3);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        Self(score_letters(answer.letters(), guess.letters()))
    }

    #[inline]
    #[must_use]
    pub fn hints(&self) -> &[Hint] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether every position is an exact match
    #[must_use]
    pub fn is_solved(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&hint| hint == Hint::Exact)
    }

    /// Number of positions carrying `hint`
    #[must_use]
    pub fn count(&self, hint: Hint) -> usize {
        self.0.iter().filter(|&&h| h == hint).count()
    }

    /// Render as an emoji row like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|hint| hint.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for hint in &self.0 {
            write!(f, "{}", hint.symbol())?;
        }
        Ok(())
    }
}

/// Validating scorer for a fixed word length
///
/// Stateless and `Copy`; a single value can be shared freely across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scorer {
    length: usize,
}

impl Default for Scorer {
    fn default() -> Self {
        Self::new(WORD_LENGTH)
    }
}

impl Scorer {
    #[must_use]
    pub const fn new(length: usize) -> Self {
        Self { length }
    }

    #[inline]
    #[must_use]
    pub const fn length(self) -> usize {
        self.length
    }

    /// Score `guess` against `answer`
    ///
    /// Letters are compared case-insensitively.
    ///
    /// # Errors
    /// - [`ScoreError::InvalidLength`] if either word is not `length` letters long
    /// - [`ScoreError::InvalidInput`] if either word contains a non-letter
    pub fn score(self, answer: &str, guess: &str) -> Result<Feedback, ScoreError> {
        self.score_optional(Some(answer), Some(guess))
    }

    /// Score operands that may be missing
    ///
    /// # Errors
    /// Returns [`ScoreError::InvalidInput`] if either operand is `None`, otherwise
    /// the same errors as [`Scorer::score`].
    pub fn score_optional(
        self,
        answer: Option<&str>,
        guess: Option<&str>,
    ) -> Result<Feedback, ScoreError> {
        let (Some(answer), Some(guess)) = (answer, guess) else {
            return Err(ScoreError::InvalidInput {
                reason: "answer and guess must not be missing",
            });
        };

        let answer_len = answer.chars().count();
        let guess_len = guess.chars().count();
        if answer_len != self.length || guess_len != self.length {
            return Err(ScoreError::InvalidLength {
                expected: self.length,
                answer: answer_len,
                guess: guess_len,
            });
        }

        let answer = normalize(answer)?;
        let guess = normalize(guess)?;

        Ok(Feedback(score_letters(&answer, &guess)))
    }
}

/// Score a 5-letter guess against a 5-letter answer
///
/// # Errors
/// See [`Scorer::score`].
///
/// # Examples
/// ```
/// use wordle_game::core::{Hint, score};
///
/// let feedback = score("BANAL", "AAAAA").unwrap();
/// assert_eq!(
///     feedback.hints(),
///     &[Hint::Absent, Hint::Exact, Hint::Absent, Hint::Exact, Hint::Absent]
/// );
///
/// assert!(score("ABCD", "ABCDE").is_err());
/// ```
pub fn score(answer: &str, guess: &str) -> Result<Feedback, ScoreError> {
    Scorer::default().score(answer, guess)
}

/// Score 5-letter operands that may be missing
///
/// # Errors
/// See [`Scorer::score_optional`].
pub fn score_optional(answer: Option<&str>, guess: Option<&str>) -> Result<Feedback, ScoreError> {
    Scorer::default().score_optional(answer, guess)
}

fn normalize(text: &str) -> Result<Vec<u8>, ScoreError> {
    if !text.bytes().all(|b| b.is_ascii_alphabetic()) {
        return Err(ScoreError::InvalidInput {
            reason: "answer and guess must contain only ASCII letters",
        });
    }
    Ok(text.bytes().map(|b| b.to_ascii_uppercase()).collect())
}

#[inline]
fn letter_index(letter: u8) -> usize {
    usize::from(letter - b'A')
}

/// Two-pass scoring over upper-case ASCII letters of equal length
fn score_letters(answer: &[u8], guess: &[u8]) -> Vec<Hint> {
    debug_assert_eq!(answer.len(), guess.len());

    let mut hints = vec![Hint::Absent; guess.len()];
    let mut available = [0usize; ALPHABET_SIZE];

    // Exact pass: answer letters not matched here stay available
    for ((hint, &a), &g) in hints.iter_mut().zip(answer).zip(guess) {
        if a == g {
            *hint = Hint::Exact;
        } else {
            available[letter_index(a)] += 1;
        }
    }

    // Present pass, left to right so earlier duplicates claim first
    for (hint, &g) in hints.iter_mut().zip(guess) {
        if *hint == Hint::Exact {
            continue;
        }
        let slot = &mut available[letter_index(g)];
        if *slot > 0 {
            *hint = Hint::Present;
            *slot -= 1;
        }
    }

    hints
}
