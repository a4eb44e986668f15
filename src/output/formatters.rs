//! Formatting utilities for terminal output

use crate::core::{Feedback, Hint};
use colored::Colorize;

/// Format one letter as a colored tile
///
/// Exact letters get a green background and present letters a yellow one.
/// Absent letters are left unstyled.
#[must_use]
pub fn format_tile(letter: char, hint: Hint) -> String {
    let tile = format!(" {} ", letter.to_ascii_uppercase());
    match hint {
        Hint::Exact => tile.black().on_green().to_string(),
        Hint::Present => tile.black().on_yellow().to_string(),
        Hint::Absent => tile,
    }
}

/// Format a scored guess as a row of tiles
#[must_use]
pub fn format_row(guess: &str, feedback: &Feedback) -> String {
    guess
        .chars()
        .zip(feedback.hints())
        .map(|(letter, &hint)| format_tile(letter, hint))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::score;

    #[test]
    fn absent_tile_is_plain() {
        assert_eq!(format_tile('x', Hint::Absent), " X ");
    }

    #[test]
    fn colored_tiles_keep_the_letter() {
        assert!(format_tile('a', Hint::Exact).contains(" A "));
        assert!(format_tile('b', Hint::Present).contains(" B "));
    }

    #[test]
    fn row_has_one_tile_per_letter() {
        let feedback = score("QUERY", "STACK").unwrap();
        assert_eq!(format_row("STACK", &feedback), " S  T  A  C  K ");
    }
}
