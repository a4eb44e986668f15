//! Score command
//!
//! Scores a single guess against a given answer.

use crate::core::{Feedback, score};
use crate::output::print_score_result;
use anyhow::{Context, Result};

/// Score `guess` against `answer` and print the tiles
///
/// # Errors
///
/// Returns an error if either word fails validation.
pub fn run_score(answer: &str, guess: &str) -> Result<Feedback> {
    let feedback =
        score(answer, guess).with_context(|| format!("cannot score {guess:?} against {answer:?}"))?;
    print_score_result(guess, &feedback);
    Ok(feedback)
}
