//! Wordle Game
//!
//! A terminal Wordle game built around a duplicate-safe feedback scorer.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{Hint, score};
//!
//! let feedback = score("WATER", "OTTER").unwrap();
//! assert_eq!(
//!     feedback.hints(),
//!     &[Hint::Absent, Hint::Absent, Hint::Exact, Hint::Exact, Hint::Exact]
//! );
//! ```

// Core domain types and scoring
pub mod core;

// Game sessions
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Tracing setup
pub mod logging;
