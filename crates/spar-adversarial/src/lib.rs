//! # Spar Adversarial
//!
//! The opposing side of a Spar debate and the judge that scores it.
//!
//! ## Key Types
//!
//! - [`analyze`] — lexical structure of one argument
//! - [`score`] / [`feedback`] — five-criterion rubric scoring
//! - [`RebuttalGenerator`] — stance-consistent counter-arguments
//! - [`Debater`] — agent arguing the side opposite the user
//! - [`Critic`] — agent keeping the scored exchange ledger
//! - [`Evaluation`] — end-of-debate summary and grade
//!
//! ## Quick Start
//!
//! ```rust
//! use spar_adversarial::{Critic, Debater, RebuttalGenerator};
//! use spar_core::{Agent, DebateSetup, ResponseMetadata, Stance};
//!
//! let setup = DebateSetup::new("Social media does more harm than good", Stance::For);
//! let mut debater = Debater::new(setup, RebuttalGenerator::seeded(7));
//! let mut critic = Critic::new();
//!
//! let argument = "Studies link heavy use to anxiety. Therefore platforms harm teens.";
//! let reply = debater.process(argument);
//! let analysis = match &reply.metadata {
//!     ResponseMetadata::Argument { analysis, .. } => Some(analysis.clone()),
//!     _ => None,
//! };
//!
//! let exchange = critic.analyze_exchange(argument, &reply.content, analysis.as_ref());
//! assert!(exchange.user_scores.total() <= 100);
//! assert!(!critic.evaluation().is_empty());
//! ```

pub mod analyzer;
pub mod critique;
pub mod debate;
pub mod evaluation;
pub mod rebuttal;
pub mod scoring;

pub use analyzer::analyze;
pub use critique::Critic;
pub use debate::{DebateRound, DebateSummary, Debater};
pub use evaluation::{DebateEvaluation, Evaluation, Grade, Verdict};
pub use rebuttal::{Rebuttal, RebuttalGenerator, RebuttalTable, TopicBucket};
pub use scoring::{feedback, score};
