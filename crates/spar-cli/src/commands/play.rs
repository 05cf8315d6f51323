//! Play command - interactive debate session
//!
//! Usage:
//! ```bash
//! spar play
//! spar play --seed 42 --json
//! ```

use std::io::Write;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use tokio::io::{AsyncBufReadExt, BufReader};

use spar_core::NextAction;
use spar_runtime::{Orchestrator, SessionState, SparConfig};

use crate::{print_error, print_info};

/// Arguments for the play command
#[derive(Args)]
pub struct PlayArgs {
    /// Seed for reproducible rebuttals (overrides SPAR_SEED)
    #[arg(long)]
    seed: Option<u64>,

    /// Print the evaluation, debate summary and rounds as JSON on exit
    #[arg(long)]
    json: bool,
}

/// Run the play command
pub async fn run(args: PlayArgs, config: SparConfig) -> Result<()> {
    let mut session = Orchestrator::new(config.with_seed(args.seed));
    tracing::debug!(session = %session.session_id(), "interactive loop started");

    print_banner();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("\n{} ", ">".cyan().bold());
        std::io::stdout().flush().context("failed to flush stdout")?;

        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            // EOF
            Ok(None) => break,
            Err(e) => {
                print_error(&format!("failed to read input: {e}"));
                break;
            }
        };

        let input = line.trim();
        if input.is_empty() {
            println!("Please enter something or type 'exit' to quit.");
            continue;
        }

        let lower = input.to_lowercase();
        if lower == "exit" || lower == "quit" {
            println!("\nThank you for using Spar!");
            println!("Keep practicing your debate skills! Goodbye!");
            break;
        }

        if lower == "restart" && session.state() == SessionState::Evaluation {
            let turn = session.restart();
            println!("\n{}", turn.display);
            continue;
        }

        let turn = session.process_input(input);
        println!("\n{}", turn.display);

        if turn.next_action == NextAction::Exit {
            break;
        }
    }

    if args.json {
        print_report(&session)?;
    }

    Ok(())
}

fn print_banner() {
    let rule = "=".repeat(60);
    println!("{}", rule.cyan());
    println!("{}", "                 WELCOME TO SPAR".bold().cyan());
    println!("{}", rule.cyan());
    println!("Practice your debate skills through interactive discussions");
    println!("on topics of your choice.");
    println!();
    print_info("Type 'exit' at any time to quit.");
    println!("{}", rule.cyan());
    println!();
    println!("Let's start! What topic would you like to debate about?");
    println!("(Or just tell me about your interests and I'll suggest topics)");
}

fn print_report(session: &Orchestrator) -> Result<()> {
    let report = serde_json::json!({
        "session_id": session.session_id().to_string(),
        "setup": session.setup(),
        "evaluation": session.evaluation(),
        "summary": session.debate_summary(),
        "rounds": session.rounds(),
    });
    let rendered = serde_json::to_string_pretty(&report).context("failed to serialize report")?;
    println!("{rendered}");
    Ok(())
}
