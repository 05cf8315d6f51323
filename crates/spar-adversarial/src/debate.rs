//! The opposing debater
//!
//! A [`Debater`] argues the agent's side of a fixed [`DebateSetup`]: each
//! user argument is analyzed, answered with a rebuttal, and recorded as a
//! [`DebateRound`].

use rand::rngs::StdRng;
use rand::Rng;
use serde::{Deserialize, Serialize};
use spar_core::{Agent, AgentResponse, DebateSetup, NextAction, ResponseMetadata, Stance};

use crate::analyzer::analyze;
use crate::rebuttal::RebuttalGenerator;

/// Words that end the debate while arguing
pub const END_WORDS: &[&str] = &["exit", "quit", "stop", "end debate"];

/// True if the utterance asks to end the debate
pub fn is_end_request(utterance: &str) -> bool {
    let lower = utterance.trim().to_lowercase();
    END_WORDS.contains(&lower.as_str())
}

const DEBATE_ENDED: &str = "The debate has ended. Thank you for the engaging discussion!";

/// A single round in a debate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebateRound {
    /// Round number (1-based)
    pub round: u32,
    /// The user's argument
    pub user_argument: String,
    /// The debater's rebuttal
    pub rebuttal: String,
}

/// What the debater has argued so far
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebateSummary {
    pub topic: String,
    pub agent_stance: Stance,
    pub total_arguments: u32,
    pub key_points_made: Vec<String>,
}

/// Agent that argues the side opposite the user
#[derive(Debug, Clone)]
pub struct Debater<R = StdRng> {
    setup: DebateSetup,
    generator: RebuttalGenerator<R>,
    argument_count: u32,
    key_points_made: Vec<String>,
    rounds: Vec<DebateRound>,
}

impl<R: Rng> Debater<R> {
    /// Create a debater for the given setup
    pub fn new(setup: DebateSetup, generator: RebuttalGenerator<R>) -> Self {
        Self {
            setup,
            generator,
            argument_count: 0,
            key_points_made: Vec::new(),
            rounds: Vec::new(),
        }
    }

    /// The setup this debater argues
    pub fn setup(&self) -> &DebateSetup {
        &self.setup
    }

    /// Stance the debater argues
    pub fn stance(&self) -> Stance {
        self.setup.agent_stance
    }

    /// Rounds argued so far
    pub fn rounds(&self) -> &[DebateRound] {
        &self.rounds
    }

    /// Summary of the debater's arguments
    pub fn summary(&self) -> DebateSummary {
        DebateSummary {
            topic: self.setup.topic.clone(),
            agent_stance: self.setup.agent_stance,
            total_arguments: self.argument_count,
            key_points_made: self.key_points_made.clone(),
        }
    }
}

impl<R: Rng> Agent for Debater<R> {
    fn name(&self) -> &str {
        "Debater"
    }

    fn process(&mut self, utterance: &str) -> AgentResponse {
        if is_end_request(utterance) {
            return AgentResponse::text(DEBATE_ENDED).with_action(NextAction::EndDebate);
        }

        let analysis = analyze(utterance);
        let rebuttal = self
            .generator
            .rebut(&analysis, self.setup.agent_stance, &self.setup.topic);

        self.argument_count += 1;
        self.key_points_made.push(rebuttal.key_point);
        self.rounds.push(DebateRound {
            round: self.argument_count,
            user_argument: utterance.to_string(),
            rebuttal: rebuttal.text.clone(),
        });

        tracing::debug!(
            round = self.argument_count,
            evidence = analysis.evidence_provided,
            fallacies = analysis.fallacies.len(),
            "debater answered argument"
        );

        AgentResponse::text(rebuttal.text).with_metadata(ResponseMetadata::Argument {
            argument_number: self.argument_count,
            analysis,
            agent_stance: self.setup.agent_stance,
        })
    }
}
