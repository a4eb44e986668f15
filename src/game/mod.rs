//! Game state shared by the line-mode and TUI front ends

mod config;
mod session;
mod stats;

pub use config::{DEFAULT_MAX_ATTEMPTS, GameConfig};
pub use session::{Game, GameError, GameStatus, Turn};
pub use stats::Statistics;
