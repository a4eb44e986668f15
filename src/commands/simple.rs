//! Simple interactive CLI mode
//!
//! Line-based game without the TUI: one prompt per attempt, colored tiles.

use crate::core::Word;
use crate::game::{Game, GameConfig, GameError, GameStatus, Turn};
use crate::output::{format_row, write_banner, write_introduction};
use anyhow::Result;
use rand::Rng;
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if the word list is empty or on an I/O error reading user
/// input or writing output.
pub fn run_simple<R: Rng + ?Sized>(
    words: &[Word],
    config: GameConfig,
    rng: &mut R,
    banner: Option<&Path>,
) -> Result<()> {
    let mut game = Game::new(words, config, rng)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut out = stdout.lock();

    write_banner(&mut out, banner)?;
    write_introduction(&mut out, config.max_attempts)?;
    play_simple(&mut game, &mut input, &mut out)?;
    Ok(())
}

/// Play one game over arbitrary input and output streams
///
/// Returns the final status. End of input or the `quit` command ends the game
/// early, in which case the status is still [`GameStatus::InProgress`].
///
/// # Errors
///
/// Returns an error on I/O failure, or if the game rejects a guess for a
/// reason other than bad user input.
pub fn play_simple<R: BufRead, W: Write>(
    game: &mut Game<'_>,
    input: &mut R,
    out: &mut W,
) -> Result<GameStatus> {
    let max_attempts = game.config().max_attempts;

    while !game.is_over() {
        write!(out, "Attempt {}/{max_attempts}: ", game.attempt())?;
        out.flush()?;

        let Some(turn) = read_turn(game, input, out)? else {
            writeln!(out)?;
            writeln!(out, "Goodbye!")?;
            return Ok(game.status());
        };
        writeln!(out, "{}", format_row(turn.guess.text(), &turn.feedback))?;
    }

    match game.status() {
        GameStatus::Won { attempts } => writeln!(
            out,
            "Congratulations! You've found the word in {attempts} attempt(s)!"
        )?,
        GameStatus::Lost => writeln!(out, "Out of attempts! The word was: {}", game.answer())?,
        GameStatus::InProgress => {}
    }

    Ok(game.status())
}

/// Read lines until one is accepted as a guess; `None` on quit or end of input
fn read_turn<R: BufRead, W: Write>(
    game: &mut Game<'_>,
    input: &mut R,
    out: &mut W,
) -> Result<Option<Turn>> {
    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let trimmed = line.trim();
        if trimmed.eq_ignore_ascii_case("quit") {
            return Ok(None);
        }

        match game.submit(trimmed) {
            Ok(turn) => return Ok(Some(turn.clone())),
            Err(GameError::InvalidGuess(_)) => {
                write!(out, "Please enter a valid 5-letter word: ")?;
            }
            Err(GameError::UnknownWord(word)) => {
                write!(out, "{word} is not in the word list, try again: ")?;
            }
            Err(err) => return Err(err.into()),
        }
        out.flush()?;
    }
}
