//! Result display functions
//!
//! Banner, rules and report printing for the line-mode commands.

use super::formatters::format_row;
use crate::commands::BenchmarkResult;
use crate::core::Feedback;
use colored::Colorize;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

const BANNER: &str = r"
 __        __            _ _
 \ \      / /__  _ __ __| | | ___
  \ \ /\ / / _ \| '__/ _` | |/ _ \
   \ V  V / (_) | | | (_| | |  __/
    \_/\_/ \___/|_|  \__,_|_|\___|
";

/// Write the welcome banner
///
/// A custom banner file replaces the built-in one. If it cannot be read the
/// failure is logged and the built-in banner is used.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_banner<W: Write>(out: &mut W, custom: Option<&Path>) -> io::Result<()> {
    let banner = match custom.map(fs::read_to_string) {
        Some(Ok(text)) => text,
        Some(Err(err)) => {
            tracing::warn!(error = %err, "could not load banner, using built-in");
            BANNER.to_string()
        }
        None => BANNER.to_string(),
    };
    writeln!(out, "{}", banner.trim_end())
}

/// Write the rules shown before the first guess
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_introduction<W: Write>(out: &mut W, max_attempts: usize) -> io::Result<()> {
    writeln!(out, "Guess the 5-letter word in {max_attempts} tries.")?;
    writeln!(
        out,
        "After each guess, the color of the tiles will change to show how close your guess was to the word."
    )?;
    writeln!(
        out,
        "{}: The letter is correct and in the right position.",
        "Green".green().bold()
    )?;
    writeln!(
        out,
        "{}: The letter is in the word but in the wrong position.",
        "Yellow".yellow().bold()
    )?;
    writeln!(out, "No color: The letter is not in the word.")?;
    writeln!(out, "Let's Go!")
}

/// Print the result of scoring a single pair
pub fn print_score_result(guess: &str, feedback: &Feedback) {
    println!("{}", format_row(guess, feedback));
    println!("{}  {}", feedback.to_emoji(), feedback);
    if feedback.is_solved() {
        println!("{}", "Solved!".green().bold());
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SCORING BENCHMARK".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words:             {}", result.words);
    println!("   Pairs scored:      {}", result.pairs);
    println!("   Time taken:        {:.3}s", result.duration.as_secs_f64());
    println!(
        "   Pairs/second:      {}",
        format!("{:.0}", result.pairs_per_second)
            .bright_yellow()
            .bold()
    );

    println!("\n📈 {}", "Feedback patterns:".bright_cyan().bold());
    println!("   Distinct patterns: {}", result.distinct_patterns);
    println!("   Solved pairs:      {}", result.solved_pairs);
    for (feedback, count) in &result.top_patterns {
        let pct = if result.pairs == 0 {
            0.0
        } else {
            *count as f64 / result.pairs as f64 * 100.0
        };
        println!("   {}  {count:8} ({pct:5.1}%)", feedback.to_emoji());
    }
}
