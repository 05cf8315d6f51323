//! End-of-debate evaluation
//!
//! An [`Evaluation`] is computed on demand from the exchange ledger and is
//! never stored: the same ledger always yields the same evaluation.

use serde::{Deserialize, Serialize};
use std::fmt;

use spar_core::score::MAX_TOTAL;
use spar_core::{Criterion, ExchangeAnalysis, Winner};

/// Letter grade for the user's average score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    /// Standard cutoffs on a 0-100 percentage
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 90.0 {
            Self::A
        } else if percentage >= 80.0 {
            Self::B
        } else if percentage >= 70.0 {
            Self::C
        } else if percentage >= 60.0 {
            Self::D
        } else {
            Self::F
        }
    }

    /// Grade for an average rubric total
    pub fn for_average(average_score: f64) -> Self {
        Self::from_percentage(average_score * 100.0 / MAX_TOTAL as f64)
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::F => "F",
        };
        f.write_str(letter)
    }
}

/// Overall outcome across all rounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    User,
    Agent,
    Tie,
}

impl Verdict {
    /// Compare round-win counts
    pub fn from_wins(user_wins: usize, agent_wins: usize) -> Self {
        match user_wins.cmp(&agent_wins) {
            std::cmp::Ordering::Greater => Self::User,
            std::cmp::Ordering::Less => Self::Agent,
            std::cmp::Ordering::Equal => Self::Tie,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::User => "user",
            Self::Agent => "agent",
            Self::Tie => "tie",
        };
        f.write_str(label)
    }
}

/// Criterion averages at or above these values count as strengths
const STRENGTH_THRESHOLDS: [(Criterion, f64, &str); 4] = [
    (Criterion::EvidenceUse, 15.0, "Strong use of evidence and examples"),
    (Criterion::LogicalStructure, 18.0, "Excellent logical reasoning and structure"),
    (Criterion::Persuasiveness, 15.0, "Persuasive and compelling arguments"),
    (Criterion::Clarity, 13.5, "Clear and articulate communication"),
];

/// Criterion averages below these values need work
const IMPROVEMENT_THRESHOLDS: [(Criterion, f64, &str); 4] = [
    (Criterion::EvidenceUse, 12.0, "Incorporate more evidence and concrete examples"),
    (Criterion::LogicalStructure, 14.4, "Improve logical flow and argument structure"),
    (Criterion::Persuasiveness, 12.0, "Work on making arguments more persuasive and impactful"),
    (Criterion::Clarity, 12.0, "Focus on clearer and more concise communication"),
];

const DEFAULT_STRENGTH: &str = "Consistent participation and engagement";
const DEFAULT_IMPROVEMENT: &str = "Continue developing argumentation skills";

/// Summary of a finished debate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebateEvaluation {
    pub total_exchanges: usize,
    pub user_wins: usize,
    pub agent_wins: usize,
    pub overall_winner: Verdict,
    /// Mean user total per exchange, rounded to one decimal
    pub average_user_score: f64,
    /// Mean agent total per exchange, rounded to one decimal
    pub average_agent_score: f64,
    pub user_strengths: Vec<String>,
    pub areas_for_improvement: Vec<String>,
    pub final_grade: Grade,
}

/// Result of evaluating a ledger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Evaluation {
    /// No exchanges were recorded
    Empty,
    /// At least one exchange was scored
    Complete(DebateEvaluation),
}

impl Evaluation {
    /// Evaluate the full exchange history
    pub fn from_history(history: &[ExchangeAnalysis]) -> Self {
        if history.is_empty() {
            return Self::Empty;
        }

        let n = history.len() as f64;
        let user_sum: u32 = history.iter().map(|e| e.user_scores.total()).sum();
        let agent_sum: u32 = history.iter().map(|e| e.agent_scores.total()).sum();
        let average_user = user_sum as f64 / n;
        let average_agent = agent_sum as f64 / n;

        let user_wins = history.iter().filter(|e| e.winner == Winner::User).count();
        let agent_wins = history.len() - user_wins;

        let average_of = |criterion: Criterion| {
            history
                .iter()
                .map(|e| e.user_scores.get(criterion) as f64)
                .sum::<f64>()
                / n
        };

        let mut user_strengths: Vec<String> = STRENGTH_THRESHOLDS
            .iter()
            .filter(|(c, threshold, _)| average_of(*c) >= *threshold)
            .map(|(_, _, message)| message.to_string())
            .collect();
        if user_strengths.is_empty() {
            user_strengths.push(DEFAULT_STRENGTH.to_string());
        }

        let mut areas_for_improvement: Vec<String> = IMPROVEMENT_THRESHOLDS
            .iter()
            .filter(|(c, threshold, _)| average_of(*c) < *threshold)
            .map(|(_, _, message)| message.to_string())
            .collect();
        if areas_for_improvement.is_empty() {
            areas_for_improvement.push(DEFAULT_IMPROVEMENT.to_string());
        }

        Self::Complete(DebateEvaluation {
            total_exchanges: history.len(),
            user_wins,
            agent_wins,
            overall_winner: Verdict::from_wins(user_wins, agent_wins),
            average_user_score: round_tenth(average_user),
            average_agent_score: round_tenth(average_agent),
            user_strengths,
            areas_for_improvement,
            final_grade: Grade::for_average(average_user),
        })
    }

    /// Whether the ledger was empty
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// The evaluation, if any exchange was scored
    pub fn complete(&self) -> Option<&DebateEvaluation> {
        match self {
            Self::Complete(evaluation) => Some(evaluation),
            Self::Empty => None,
        }
    }
}

/// One decimal place, ties to even
fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}
