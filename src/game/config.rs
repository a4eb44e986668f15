//! Game configuration

/// Attempts allowed per game unless overridden
pub const DEFAULT_MAX_ATTEMPTS: usize = 5;

/// Settings for a single game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Guesses allowed before the game is lost
    pub max_attempts: usize,
    /// Only accept guesses that appear in the word list
    pub strict: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ATTEMPTS)
    }
}

impl GameConfig {
    #[must_use]
    pub const fn new(max_attempts: usize) -> Self {
        Self {
            max_attempts,
            strict: false,
        }
    }

    #[must_use]
    pub const fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}
