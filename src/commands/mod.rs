//! Command implementations
//!
//! Each module implements one CLI subcommand.

pub mod benchmark;
pub mod score;
pub mod simple;

pub use benchmark::{BenchmarkResult, run_benchmark};
pub use score::run_score;
pub use simple::{play_simple, run_simple};
