//! Agent capability for Spar
//!
//! Each debate role (topic negotiator, debater, critic) is an [`Agent`]:
//! it consumes one utterance and answers with an [`AgentResponse`]. Roles
//! own disjoint state, so there is no shared base to inherit from.

use serde::{Deserialize, Serialize};

use crate::analysis::ArgumentAnalysis;
use crate::score::ScoreBreakdown;
use crate::stance::{DebateSetup, Stance};

/// What the caller should do after a response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NextAction {
    /// Keep feeding utterances to the same state
    #[default]
    None,
    /// Negotiation finished; the setup is in the metadata
    StartDebate,
    /// The debate is over; evaluate it
    EndDebate,
    /// The user asked to leave
    Exit,
    /// State was discarded; start from topic selection
    Restart,
}

/// Machine-readable payload attached to a response
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResponseMetadata {
    #[default]
    None,
    /// A topic proposed by the user, awaiting confirmation
    CandidateTopic { topic: String },
    /// Numbered topic suggestions offered this turn
    Suggestions { topics: Vec<String> },
    /// The finalized setup, sent with [`NextAction::StartDebate`]
    Setup(DebateSetup),
    /// The debater's reading of the user's argument
    Argument {
        argument_number: u32,
        analysis: ArgumentAnalysis,
        agent_stance: Stance,
    },
    /// Rubric scores for a single argument
    Score { scores: ScoreBreakdown },
}

/// Output of one agent turn
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AgentResponse {
    /// Text shown to the user
    pub content: String,
    /// Structured payload for the orchestrator
    pub metadata: ResponseMetadata,
    /// Requested follow-up
    pub next_action: NextAction,
}

impl AgentResponse {
    /// A plain text reply with no payload
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    /// Attach a metadata payload
    pub fn with_metadata(mut self, metadata: ResponseMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Attach a follow-up action
    pub fn with_action(mut self, next_action: NextAction) -> Self {
        self.next_action = next_action;
        self
    }
}

/// A debate role that answers one utterance at a time
pub trait Agent {
    /// Human-readable role name
    fn name(&self) -> &str;

    /// Handle one utterance
    fn process(&mut self, utterance: &str) -> AgentResponse;
}
