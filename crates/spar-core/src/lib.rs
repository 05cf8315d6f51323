//! # Spar Core
//!
//! Core types for the Spar debate trainer:
//! - [`Stance`] and [`DebateSetup`] — who argues which side of which topic
//! - [`ArgumentAnalysis`] — structural reading of one utterance
//! - [`ScoreBreakdown`] — the five-criterion rubric (max 100)
//! - [`ExchangeAnalysis`] — one scored round in the append-only ledger
//! - [`Agent`] — the capability every debate role implements

pub mod agent;
pub mod analysis;
pub mod error;
pub mod exchange;
pub mod lexicon;
pub mod score;
pub mod stance;

pub use agent::{Agent, AgentResponse, NextAction, ResponseMetadata};
pub use analysis::{ArgumentAnalysis, Fallacy, LogicalStructure};
pub use error::ParseError;
pub use exchange::{ExchangeAnalysis, Winner};
pub use score::{Criterion, ScoreBreakdown};
pub use stance::{DebateSetup, Stance};
