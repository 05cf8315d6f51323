//! Scored rounds of a debate

use serde::{Deserialize, Serialize};

use crate::score::ScoreBreakdown;

/// Side that took a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Winner {
    User,
    Agent,
}

impl Winner {
    /// The user wins a round only with a strictly higher total
    pub fn decide(user: &ScoreBreakdown, agent: &ScoreBreakdown) -> Self {
        if user.total() > agent.total() {
            Self::User
        } else {
            Self::Agent
        }
    }
}

/// Complete record of one round; appended to the ledger and never edited
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeAnalysis {
    pub user_scores: ScoreBreakdown,
    pub agent_scores: ScoreBreakdown,
    pub user_feedback: String,
    pub agent_feedback: String,
    pub winner: Winner,
    /// Sum of every user total up to and including this round
    pub running_total_user: u32,
    /// Sum of every agent total up to and including this round
    pub running_total_agent: u32,
}
