//! Spar CLI - practice debating against a heuristic sparring partner
//!
//! # Usage
//!
//! ```bash
//! # Start an interactive debate
//! spar play
//!
//! # Reproducible rebuttals, JSON report on exit
//! spar play --seed 42 --json
//!
//! # Score a single argument
//! spar score "Research shows remote work improves output."
//!
//! # Show the scoring rubric and lexicons
//! spar info
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;

use spar_runtime::SparConfig;

mod commands;

use commands::{info, play, score};

/// Spar - a debate sparring partner
///
/// Pick a topic and a side, then argue against an agent that always takes
/// the opposite stance. Every round is scored on a five-part rubric.
#[derive(Parser)]
#[command(
    name = "spar",
    version,
    about = "Spar - debate practice with scored rounds",
    long_about = "Spar negotiates a debate topic with you, argues the opposite side,\n\
                  and scores each of your arguments on evidence, logic, relevance,\n\
                  persuasiveness and clarity."
)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive debate
    #[command(name = "play")]
    Play(play::PlayArgs),

    /// Score a single argument
    #[command(name = "score")]
    Score(score::ScoreArgs),

    /// Show rubric and lexicon information
    #[command(name = "info")]
    Info(info::InfoArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = SparConfig::from_env()?;

    // Setup tracing based on verbosity
    setup_logging(cli.verbose, config.debug);

    match cli.command {
        Commands::Play(args) => play::run(args, config).await,
        Commands::Score(args) => score::run(args),
        Commands::Info(args) => info::run(args),
    }
}

/// Setup logging based on verbosity level; SPAR_DEBUG raises it to debug
fn setup_logging(verbosity: u8, debug: bool) {
    use tracing_subscriber::EnvFilter;

    let verbosity = if debug { verbosity.max(2) } else { verbosity };
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(filter))
        )
        .init();
}

/// Print an error message with an X
pub fn print_error(msg: &str) {
    eprintln!("{} {}", "✗".red().bold(), msg);
}

/// Print an info message
pub fn print_info(msg: &str) {
    println!("{} {}", "ℹ".blue().bold(), msg);
}
