//! Info command - Show rubric and lexicon information
//!
//! Usage:
//! ```bash
//! spar info
//! ```

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use spar_adversarial::TopicBucket;
use spar_core::lexicon;
use spar_core::score::MAX_TOTAL;
use spar_core::Criterion;

/// Arguments for the info command
#[derive(Args)]
pub struct InfoArgs;

const BUCKETS: [(TopicBucket, &str); 2] = [
    (TopicBucket::AiHealthcare, "topics mentioning AI (default)"),
    (TopicBucket::SocialMedia, "topics mentioning social media"),
];

/// Run the info command
pub fn run(_args: InfoArgs) -> Result<()> {
    let version = env!("CARGO_PKG_VERSION");

    println!("{}", "Spar - Debate Sparring Partner".bold().cyan());
    println!("{}", "═".repeat(50).cyan());
    println!();

    println!("{}", "Version Information:".bold());
    println!("  {} {}", "CLI Version:".dimmed(), version.green());
    println!();

    println!("{}", "Scoring Rubric:".bold());
    for criterion in Criterion::ALL {
        println!(
            "  {} {:<20} {}",
            "•".cyan(),
            criterion.name(),
            format!("max {}", criterion.max()).green()
        );
    }
    println!("  {} {}", "Total:".dimmed(), MAX_TOTAL.to_string().green());
    println!();

    println!("{}", "Lexicons:".bold());
    let lexicons: [(&str, &[&str]); 6] = [
        ("Evidence", lexicon::EVIDENCE),
        ("Connectives", lexicon::CONNECTIVES),
        ("Logical markers", lexicon::LOGICAL_MARKERS),
        ("Emotional", lexicon::EMOTIONAL),
        ("Universals", lexicon::UNIVERSALS),
        ("Persuasive", lexicon::PERSUASIVE),
    ];
    for (label, words) in lexicons {
        println!("  {} {}", format!("{label}:").dimmed(), words.join(", "));
    }
    println!();

    println!("{}", "Rebuttal Topic Buckets:".bold());
    for (bucket, description) in BUCKETS {
        println!("  {} {:?} - {}", "•".cyan(), bucket, description);
    }
    println!();

    println!("{}", "Configuration:".bold());
    println!("  {} SPAR_SEED   seed for reproducible rebuttals", "ℹ".blue());
    println!("  {} SPAR_DEBUG  enable debug logging (1/true)", "ℹ".blue());
    println!("  {} RUST_LOG    override the log filter", "ℹ".blue());
    println!();

    Ok(())
}
