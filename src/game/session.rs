//! A single game: hidden answer, submitted turns, win/loss tracking

use super::GameConfig;
use crate::core::{Feedback, Hint, ScoreError, Word, WordError, score};
use rand::Rng;
use rand::prelude::IndexedRandom;
use thiserror::Error;

const ALPHABET_SIZE: usize = 26;

/// Errors raised while setting up or playing a game
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("Cannot start game with empty word list")]
    EmptyWordList,

    #[error("A game needs at least one attempt")]
    NoAttempts,

    #[error(transparent)]
    InvalidGuess(#[from] WordError),

    #[error("{0} is not in the word list")]
    UnknownWord(String),

    #[error("The game is already over")]
    GameOver,

    #[error(transparent)]
    Score(#[from] ScoreError),
}

/// Where a game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won { attempts: usize },
    Lost,
}

/// One scored guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub guess: Word,
    pub feedback: Feedback,
}

/// State of one game against a hidden answer
#[derive(Debug, Clone)]
pub struct Game<'a> {
    words: &'a [Word],
    answer: Word,
    config: GameConfig,
    turns: Vec<Turn>,
    status: GameStatus,
}

impl<'a> Game<'a> {
    /// Start a game with an answer drawn at random from `words`
    ///
    /// # Errors
    ///
    /// Returns [`GameError::EmptyWordList`] if `words` is empty and
    /// [`GameError::NoAttempts`] if the config allows no guesses.
    pub fn new<R: Rng + ?Sized>(
        words: &'a [Word],
        config: GameConfig,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        let answer = words.choose(rng).ok_or(GameError::EmptyWordList)?.clone();
        Self::with_answer(words, answer, config)
    }

    /// Start a game with a known answer
    ///
    /// # Errors
    ///
    /// Same as [`Game::new`].
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    /// use wordle_game::game::{Game, GameConfig, GameStatus};
    ///
    /// let words = vec![Word::new("water").unwrap()];
    /// let answer = Word::new("water").unwrap();
    /// let mut game = Game::with_answer(&words, answer, GameConfig::default()).unwrap();
    ///
    /// let turn = game.submit("otter").unwrap();
    /// assert_eq!(turn.feedback.to_string(), "--GGG");
    ///
    /// game.submit("WATER").unwrap();
    /// assert_eq!(game.status(), GameStatus::Won { attempts: 2 });
    /// ```
    pub fn with_answer(
        words: &'a [Word],
        answer: Word,
        config: GameConfig,
    ) -> Result<Self, GameError> {
        if words.is_empty() {
            return Err(GameError::EmptyWordList);
        }
        if config.max_attempts == 0 {
            return Err(GameError::NoAttempts);
        }

        tracing::debug!(
            words = words.len(),
            max_attempts = config.max_attempts,
            strict = config.strict,
            "game started"
        );

        Ok(Self {
            words,
            answer,
            config,
            turns: Vec::with_capacity(config.max_attempts),
            status: GameStatus::InProgress,
        })
    }

    /// Score a guess and advance the game
    ///
    /// Surrounding whitespace is ignored and case is insignificant.
    ///
    /// # Errors
    ///
    /// - [`GameError::GameOver`] once the game is won or lost
    /// - [`GameError::InvalidGuess`] if the input is not a 5-letter word
    /// - [`GameError::UnknownWord`] in strict mode, for words outside the list
    pub fn submit(&mut self, input: &str) -> Result<&Turn, GameError> {
        if self.status != GameStatus::InProgress {
            return Err(GameError::GameOver);
        }

        let guess = Word::new(input.trim())?;
        if self.config.strict && !self.words.contains(&guess) {
            return Err(GameError::UnknownWord(guess.text().to_string()));
        }

        let feedback = score(self.answer.text(), guess.text())?;
        let attempts = self.turns.len() + 1;
        tracing::debug!(attempt = attempts, %feedback, "guess scored");

        if feedback.is_solved() {
            self.status = GameStatus::Won { attempts };
            tracing::info!(attempts, "game won");
        } else if attempts >= self.config.max_attempts {
            self.status = GameStatus::Lost;
            tracing::info!(attempts, "game lost");
        }

        self.turns.push(Turn { guess, feedback });
        Ok(&self.turns[self.turns.len() - 1])
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    #[must_use]
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    #[must_use]
    pub const fn config(&self) -> GameConfig {
        self.config
    }

    /// 1-based number of the next attempt
    #[must_use]
    pub fn attempt(&self) -> usize {
        self.turns.len() + 1
    }

    #[must_use]
    pub fn remaining_attempts(&self) -> usize {
        self.config.max_attempts.saturating_sub(self.turns.len())
    }

    /// The hidden answer. Callers should only reveal it once the game is over.
    #[must_use]
    pub const fn answer(&self) -> &Word {
        &self.answer
    }

    /// Best hint seen so far for each letter A-Z
    ///
    /// `Exact` beats `Present` beats `Absent`; letters never guessed are `None`.
    #[must_use]
    pub fn letter_hints(&self) -> [Option<Hint>; ALPHABET_SIZE] {
        let mut known = [None; ALPHABET_SIZE];
        for turn in &self.turns {
            for (&letter, &hint) in turn.guess.letters().iter().zip(turn.feedback.hints()) {
                let slot = &mut known[usize::from(letter - b'A')];
                *slot = (*slot).max(Some(hint));
            }
        }
        known
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn words() -> Vec<Word> {
        words_from_slice(&["water", "otter", "earth", "banal", "crane"])
    }

    fn game_with<'a>(words: &'a [Word], answer: &str, config: GameConfig) -> Game<'a> {
        Game::with_answer(words, Word::new(answer).unwrap(), config).unwrap()
    }

    #[test]
    fn win_on_exact_guess() {
        let words = words();
        let mut game = game_with(&words, "water", GameConfig::default());

        assert_eq!(game.attempt(), 1);
        let turn = game.submit("earth").unwrap();
        assert!(!turn.feedback.is_solved());
        assert_eq!(game.status(), GameStatus::InProgress);

        let turn = game.submit("  Water ").unwrap();
        assert!(turn.feedback.is_solved());
        assert_eq!(game.status(), GameStatus::Won { attempts: 2 });
        assert!(game.is_over());
        assert_eq!(game.turns().len(), 2);
    }

    #[test]
    fn lose_after_max_attempts() {
        let words = words();
        let mut game = game_with(&words, "water", GameConfig::new(2));

        game.submit("crane").unwrap();
        assert_eq!(game.remaining_attempts(), 1);
        game.submit("banal").unwrap();

        assert_eq!(game.status(), GameStatus::Lost);
        assert_eq!(game.remaining_attempts(), 0);
        assert_eq!(game.submit("water"), Err(GameError::GameOver));
    }

    #[test]
    fn winning_on_last_attempt_is_a_win() {
        let words = words();
        let mut game = game_with(&words, "water", GameConfig::new(1));
        game.submit("water").unwrap();
        assert_eq!(game.status(), GameStatus::Won { attempts: 1 });
    }

    #[test]
    fn invalid_guess_does_not_use_an_attempt() {
        let words = words();
        let mut game = game_with(&words, "water", GameConfig::default());

        assert_eq!(
            game.submit("wat"),
            Err(GameError::InvalidGuess(WordError::InvalidLength(3)))
        );
        assert_eq!(
            game.submit("wat3r"),
            Err(GameError::InvalidGuess(WordError::InvalidCharacters))
        );
        assert!(game.turns().is_empty());
        assert_eq!(game.attempt(), 1);
    }

    #[test]
    fn strict_mode_rejects_unknown_words() {
        let words = words();
        let mut game = game_with(&words, "water", GameConfig::default().with_strict(true));

        assert_eq!(
            game.submit("zzzzz"),
            Err(GameError::UnknownWord("ZZZZZ".to_string()))
        );
        assert!(game.submit("otter").is_ok());
    }

    #[test]
    fn lenient_mode_accepts_any_letters() {
        let words = words();
        let mut game = game_with(&words, "water", GameConfig::default());
        assert!(game.submit("zzzzz").is_ok());
    }

    #[test]
    fn rejects_empty_word_list_and_zero_attempts() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(matches!(
            Game::new(&[], GameConfig::default(), &mut rng),
            Err(GameError::EmptyWordList)
        ));

        let words = words();
        assert!(matches!(
            Game::new(&words, GameConfig::new(0), &mut rng),
            Err(GameError::NoAttempts)
        ));
    }

    #[test]
    fn random_answer_comes_from_the_list() {
        let words = words();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            let game = Game::new(&words, GameConfig::default(), &mut rng).unwrap();
            assert!(words.contains(game.answer()));
        }
    }

    #[test]
    fn seeded_rng_is_deterministic() {
        let words = words();
        let a = Game::new(&words, GameConfig::default(), &mut StdRng::seed_from_u64(3)).unwrap();
        let b = Game::new(&words, GameConfig::default(), &mut StdRng::seed_from_u64(3)).unwrap();
        assert_eq!(a.answer(), b.answer());
    }

    #[test]
    fn letter_hints_keep_best_result() {
        let words = words();
        let mut game = game_with(&words, "water", GameConfig::default());

        // OTTER: O absent, first T absent, second T exact, E exact, R exact
        game.submit("otter").unwrap();
        // EARTH: E present, A exact, R present, T present, H absent
        game.submit("earth").unwrap();

        let known = game.letter_hints();
        let at = |c: u8| known[usize::from(c - b'A')];
        assert_eq!(at(b'T'), Some(Hint::Exact));
        assert_eq!(at(b'E'), Some(Hint::Exact));
        assert_eq!(at(b'A'), Some(Hint::Exact));
        assert_eq!(at(b'O'), Some(Hint::Absent));
        assert_eq!(at(b'H'), Some(Hint::Absent));
        assert_eq!(at(b'W'), None);
    }
}
