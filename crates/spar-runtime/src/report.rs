//! Text rendering for round feedback and the final evaluation

use spar_adversarial::Evaluation;
use spar_core::{DebateSetup, ExchangeAnalysis};

/// Shown when a debate ends with nothing scored
pub const EMPTY_DEBATE: &str =
    "The debate ended before any arguments were made. Thank you for your time!";

/// Reply to any input after the evaluation
pub const DEBATE_OVER: &str =
    "The debate has ended. Type 'restart' to begin a new debate or 'exit' to quit.";

/// Feedback block appended to a rebuttal
pub fn round_feedback(round: usize, exchange: &ExchangeAnalysis) -> String {
    format!(
        "\n--- Round {round} Feedback ---\n\
         Your argument score: {}/100\n\
         Feedback: {}\n\
         Current total: You {} - Agent {}\n\
         {}\n\n",
        exchange.user_scores.total(),
        exchange.user_feedback,
        exchange.running_total_user,
        exchange.running_total_agent,
        "=".repeat(50),
    )
}

/// Full evaluation report for a finished debate
pub fn render_evaluation(setup: &DebateSetup, evaluation: &Evaluation) -> String {
    let Some(eval) = evaluation.complete() else {
        return EMPTY_DEBATE.to_string();
    };

    let rule = "=".repeat(60);
    let mut lines = vec![
        String::new(),
        rule.clone(),
        "                    DEBATE EVALUATION".to_string(),
        rule.clone(),
        String::new(),
        format!("Topic: {}", setup.topic),
        format!("Your stance: {}", setup.user_stance.as_str().to_uppercase()),
        format!("Agent stance: {}", setup.agent_stance.as_str().to_uppercase()),
        String::new(),
        format!("Total exchanges: {}", eval.total_exchanges),
        format!("Rounds won by you: {}", eval.user_wins),
        format!("Rounds won by agent: {}", eval.agent_wins),
        format!("Overall winner: {}", eval.overall_winner.to_string().to_uppercase()),
        String::new(),
        format!("Your average score: {:.1}/100", eval.average_user_score),
        format!("Final grade: {}", eval.final_grade),
        String::new(),
        "Your strengths:".to_string(),
    ];
    lines.extend(eval.user_strengths.iter().map(|s| format!("  • {s}")));
    lines.push(String::new());
    lines.push("Areas for improvement:".to_string());
    lines.extend(eval.areas_for_improvement.iter().map(|a| format!("  • {a}")));
    lines.push(String::new());
    lines.push(
        "Thank you for the engaging debate! Type 'restart' for a new topic or 'exit' to quit."
            .to_string(),
    );
    lines.push(rule);

    lines.join("\n")
}
