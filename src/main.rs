//! Wordle Game - CLI
//!
//! Terminal Wordle with TUI and line modes, plus scoring utilities.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use wordle_game::{
    commands::{run_benchmark, run_score, run_simple},
    core::Word,
    game::{DEFAULT_MAX_ATTEMPTS, GameConfig},
    logging,
    output::print_benchmark_result,
    wordlists::WordSource,
};

#[derive(Parser)]
#[command(
    name = "wordle",
    about = "Guess the hidden 5-letter word, with duplicate-safe letter feedback",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'builtin' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "builtin")]
    wordlist: String,

    /// Guesses allowed per game
    #[arg(
        short,
        long,
        global = true,
        default_value_t = DEFAULT_MAX_ATTEMPTS as u16,
        value_parser = clap::value_parser!(u16).range(1..=20)
    )]
    attempts: u16,

    /// Only accept guesses that appear in the word list
    #[arg(long, global = true)]
    strict: bool,

    /// Seed for answer selection, for reproducible games
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Banner file shown in simple mode (default: built-in banner)
    #[arg(long, global = true)]
    banner: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based game without TUI)
    Simple,

    /// Score a single guess against an answer
    Score {
        /// The hidden answer
        answer: String,

        /// The guess to score
        guess: String,
    },

    /// Score every answer/guess pair of the word list in parallel
    Benchmark {
        /// Number of words from the list to use
        #[arg(short = 'n', long, default_value = "500")]
        count: usize,
    },
}

impl Cli {
    fn game_config(&self) -> GameConfig {
        GameConfig::new(usize::from(self.attempts)).with_strict(self.strict)
    }

    fn rng(&self) -> StdRng {
        self.seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
    }

    fn load_words(&self) -> Result<Vec<Word>> {
        let source = WordSource::from(self.wordlist.as_str());
        source
            .load()
            .with_context(|| format!("failed to load word list '{}'", self.wordlist))
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    // Default to Play mode if no command given
    let command = cli.command.as_ref().unwrap_or(&Commands::Play);

    match command {
        Commands::Play => run_play_command(&cli),
        Commands::Simple => {
            let words = cli.load_words()?;
            run_simple(
                &words,
                cli.game_config(),
                &mut cli.rng(),
                cli.banner.as_deref(),
            )
        }
        Commands::Score { answer, guess } => run_score(answer, guess).map(|_| ()),
        Commands::Benchmark { count } => {
            let words = cli.load_words()?;
            let sample = &words[..(*count).min(words.len())];
            println!(
                "Scoring {} pairs from {} words...",
                sample.len() * sample.len(),
                sample.len()
            );
            let result = run_benchmark(sample, true);
            print_benchmark_result(&result);
            Ok(())
        }
    }
}

fn run_play_command(cli: &Cli) -> Result<()> {
    use wordle_game::interactive::{App, run_tui};

    let words = cli.load_words()?;
    let app = App::new(&words, cli.game_config(), cli.rng())?;
    run_tui(app)
}
