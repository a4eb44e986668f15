//! Terminal output formatting
//!
//! Colored tiles and pretty-printing for the line-mode commands.

pub mod display;
pub mod formatters;

pub use display::{print_benchmark_result, print_score_result, write_banner, write_introduction};
pub use formatters::{format_row, format_tile};
