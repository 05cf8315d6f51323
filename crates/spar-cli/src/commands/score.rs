//! Score command - rate one argument without starting a debate
//!
//! Usage:
//! ```bash
//! spar score "Studies show uniforms reduce bullying."
//! spar score --json "Everyone knows homework is useless."
//! spar score --criterion clarity "Homework steals family time."
//! ```

use anyhow::{bail, Context, Result};
use clap::Args;
use colored::Colorize;

use spar_adversarial::Critic;
use spar_core::score::MAX_TOTAL;
use spar_core::{Agent, Criterion, ResponseMetadata};

/// Arguments for the score command
#[derive(Args)]
pub struct ScoreArgs {
    /// The argument to score
    text: String,

    /// Show only one criterion (evidence_use, logical_structure, relevance,
    /// persuasiveness, clarity)
    #[arg(long)]
    criterion: Option<Criterion>,

    /// Output JSON instead of a table
    #[arg(long)]
    json: bool,
}

/// Run the score command
pub fn run(args: ScoreArgs) -> Result<()> {
    if args.text.trim().is_empty() {
        bail!("nothing to score: the argument is empty");
    }

    let mut critic = Critic::new();
    let response = critic.process(&args.text);
    let ResponseMetadata::Score { scores } = response.metadata else {
        bail!("{} returned no scores", critic.name());
    };

    if let Some(criterion) = args.criterion {
        let value = scores.get(criterion);
        if args.json {
            let report = serde_json::json!({
                "criterion": criterion,
                "score": value,
                "max": criterion.max(),
            });
            let rendered =
                serde_json::to_string_pretty(&report).context("failed to serialize score")?;
            println!("{rendered}");
        } else {
            println!(
                "{}: {}/{}",
                criterion.name().bold(),
                value.to_string().green(),
                criterion.max()
            );
        }
        return Ok(());
    }

    if args.json {
        let report = serde_json::json!({
            "scores": scores,
            "total": scores.total(),
            "feedback": response.content,
        });
        let rendered =
            serde_json::to_string_pretty(&report).context("failed to serialize scores")?;
        println!("{rendered}");
        return Ok(());
    }

    println!("{}", "Argument Score".bold().cyan());
    println!("{}", "─".repeat(40).cyan());
    for (criterion, value) in scores.iter() {
        println!(
            "  {} {}/{}",
            format!("{:<20}", criterion.name()).dimmed(),
            format!("{value:>3}").green(),
            criterion.max()
        );
    }
    println!("{}", "─".repeat(40).cyan());
    println!(
        "  {} {}/{}",
        format!("{:<20}", "Total").bold(),
        format!("{:>3}", scores.total()).green().bold(),
        MAX_TOTAL
    );
    println!();
    println!("{} {}", "Feedback:".bold(), response.content);

    Ok(())
}
