//! The critic: scores every exchange and keeps the ledger

use spar_core::{
    Agent, AgentResponse, ArgumentAnalysis, ExchangeAnalysis, ResponseMetadata, Winner,
};

use crate::analyzer::analyze;
use crate::evaluation::Evaluation;
use crate::scoring::{feedback, score};

/// Scores both sides of each round and accumulates running totals
///
/// The ledger is append-only; [`Critic::reset`] is the only way to clear
/// it.
#[derive(Debug, Clone, Default)]
pub struct Critic {
    user_total: u32,
    agent_total: u32,
    ledger: Vec<ExchangeAnalysis>,
}

impl Critic {
    /// Create a critic with an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Score one round and append it to the ledger
    ///
    /// The user's argument is scored with its analysis (if any); the agent's
    /// reply is scored on text alone.
    pub fn analyze_exchange(
        &mut self,
        user_argument: &str,
        agent_argument: &str,
        user_analysis: Option<&ArgumentAnalysis>,
    ) -> &ExchangeAnalysis {
        let user_scores = score(user_argument, true, user_analysis);
        let agent_scores = score(agent_argument, false, None);

        self.user_total += user_scores.total();
        self.agent_total += agent_scores.total();

        let exchange = ExchangeAnalysis {
            user_scores,
            agent_scores,
            user_feedback: feedback(&user_scores, user_argument),
            agent_feedback: feedback(&agent_scores, agent_argument),
            winner: Winner::decide(&user_scores, &agent_scores),
            running_total_user: self.user_total,
            running_total_agent: self.agent_total,
        };

        metrics::counter!("spar_exchanges_scored_total").increment(1);
        tracing::debug!(
            round = self.ledger.len() + 1,
            user = user_scores.total(),
            agent = agent_scores.total(),
            winner = ?exchange.winner,
            "scored exchange"
        );

        self.ledger.push(exchange);
        &self.ledger[self.ledger.len() - 1]
    }

    /// Evaluate everything recorded so far
    pub fn evaluation(&self) -> Evaluation {
        Evaluation::from_history(&self.ledger)
    }

    /// All recorded exchanges, oldest first
    pub fn history(&self) -> &[ExchangeAnalysis] {
        &self.ledger
    }

    /// Running user total
    pub fn user_total(&self) -> u32 {
        self.user_total
    }

    /// Running agent total
    pub fn agent_total(&self) -> u32 {
        self.agent_total
    }

    /// Forget every exchange and zero the totals
    pub fn reset(&mut self) {
        self.user_total = 0;
        self.agent_total = 0;
        self.ledger.clear();
    }
}

impl Agent for Critic {
    fn name(&self) -> &str {
        "Critique"
    }

    /// Score a standalone argument without touching the ledger
    fn process(&mut self, utterance: &str) -> AgentResponse {
        let analysis = analyze(utterance);
        let scores = score(utterance, true, Some(&analysis));
        AgentResponse::text(feedback(&scores, utterance))
            .with_metadata(ResponseMetadata::Score { scores })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const USER: &str = "Research shows remote teams ship faster. Therefore offices are \
                        unnecessary because commuting wastes time.";
    const AGENT: &str = "Consider the impact on mentoring. However, the data is mixed.";

    #[test]
    fn test_running_totals_accumulate() {
        let mut critic = Critic::new();
        let analysis = analyze(USER);

        let first = critic.analyze_exchange(USER, AGENT, Some(&analysis)).clone();
        let second = critic.analyze_exchange(USER, AGENT, Some(&analysis)).clone();

        assert_eq!(first.running_total_user, first.user_scores.total());
        assert_eq!(
            second.running_total_user,
            first.user_scores.total() + second.user_scores.total()
        );
        assert_eq!(critic.user_total(), second.running_total_user);
        assert_eq!(critic.agent_total(), second.running_total_agent);
        assert_eq!(critic.history().len(), 2);
    }

    #[test]
    fn test_reset_clears_ledger() {
        let mut critic = Critic::new();
        critic.analyze_exchange(USER, AGENT, None);
        critic.reset();

        assert!(critic.history().is_empty());
        assert_eq!(critic.user_total(), 0);
        assert!(critic.evaluation().is_empty());
    }

    #[test]
    fn test_process_scores_without_recording() {
        let mut critic = Critic::new();
        let response = critic.process(USER);

        assert!(matches!(response.metadata, ResponseMetadata::Score { .. }));
        assert!(response.content.ends_with('.'));
        assert!(critic.history().is_empty());
    }
}
