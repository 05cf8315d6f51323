//! Stances and the finalized debate setup

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// Position a participant argues relative to the topic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stance {
    /// Argues in favour of the topic statement
    For,
    /// Argues against the topic statement
    Against,
}

impl Stance {
    /// The opposing stance
    pub fn complement(self) -> Self {
        match self {
            Self::For => Self::Against,
            Self::Against => Self::For,
        }
    }

    /// Lowercase label used in prompts and templates
    pub fn as_str(self) -> &'static str {
        match self {
            Self::For => "for",
            Self::Against => "against",
        }
    }
}

impl fmt::Display for Stance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Stance {
    type Err = ParseError;

    /// Accepts the stance words offered during negotiation, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "for" | "pro" | "support" => Ok(Self::For),
            "against" | "con" | "oppose" => Ok(Self::Against),
            _ => Err(ParseError::UnknownStance(s.to_string())),
        }
    }
}

/// Topic and sides, fixed once negotiation completes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebateSetup {
    /// The statement being debated
    pub topic: String,
    /// Side argued by the user
    pub user_stance: Stance,
    /// Side argued by the agent (always the complement of `user_stance`)
    pub agent_stance: Stance,
}

impl DebateSetup {
    /// Create a setup; the agent takes the opposite side
    pub fn new(topic: impl Into<String>, user_stance: Stance) -> Self {
        Self {
            topic: topic.into(),
            user_stance,
            agent_stance: user_stance.complement(),
        }
    }
}
