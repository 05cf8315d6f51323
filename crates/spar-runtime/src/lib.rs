//! # Spar Runtime
//!
//! Session orchestration: topic and stance negotiation, debate rounds,
//! and the final evaluation report.

pub mod config;
pub mod negotiator;
pub mod orchestrator;
pub mod report;

pub use config::{ConfigError, SparConfig};
pub use negotiator::{suggest_topics, NegotiationState, TopicNegotiator};
pub use orchestrator::{Orchestrator, SessionState, Turn};
