//! Word lists for the game
//!
//! Provides the embedded answer list and loading from user-supplied files.

mod embedded;
pub mod loader;

pub use embedded::{ANSWERS, ANSWERS_COUNT};
pub use loader::{WordListError, WordSource};
