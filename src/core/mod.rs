//! Core domain types for Wordle
//!
//! This module contains the scoring core and the word type it operates on.
//! Everything here is pure: no I/O, no shared state.

mod feedback;
mod hint;
mod word;

pub use feedback::{Feedback, ScoreError, Scorer, WORD_LENGTH, score, score_optional};
pub use hint::Hint;
pub use word::{Word, WordError};
