//! Five-criterion scoring rubric
//!
//! Every argument is scored on the same rubric. Each criterion has a fixed
//! maximum and the maxima sum to 100, so a breakdown's total reads directly
//! as a percentage.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// A scoring dimension of the rubric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    EvidenceUse,
    LogicalStructure,
    Relevance,
    Persuasiveness,
    Clarity,
}

impl Criterion {
    /// All criteria in rubric order
    pub const ALL: [Criterion; 5] = [
        Self::EvidenceUse,
        Self::LogicalStructure,
        Self::Relevance,
        Self::Persuasiveness,
        Self::Clarity,
    ];

    /// Highest attainable sub-score
    pub fn max(self) -> u32 {
        match self {
            Self::EvidenceUse => 20,
            Self::LogicalStructure => 25,
            Self::Relevance => 20,
            Self::Persuasiveness => 20,
            Self::Clarity => 15,
        }
    }

    /// Snake-case name used in reports
    pub fn name(self) -> &'static str {
        match self {
            Self::EvidenceUse => "evidence_use",
            Self::LogicalStructure => "logical_structure",
            Self::Relevance => "relevance",
            Self::Persuasiveness => "persuasiveness",
            Self::Clarity => "clarity",
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Criterion {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| ParseError::UnknownCriterion(s.to_string()))
    }
}

/// Sum of all criterion maxima
pub const MAX_TOTAL: u32 = 100;

/// Sub-scores for one argument
///
/// Fields are private so every value stays within its criterion's bound;
/// construct through [`ScoreBreakdown::new`], which clamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    evidence_use: u32,
    logical_structure: u32,
    relevance: u32,
    persuasiveness: u32,
    clarity: u32,
}

impl ScoreBreakdown {
    /// Build a breakdown, clamping each value to its criterion maximum
    pub fn new(
        evidence_use: u32,
        logical_structure: u32,
        relevance: u32,
        persuasiveness: u32,
        clarity: u32,
    ) -> Self {
        Self {
            evidence_use: evidence_use.min(Criterion::EvidenceUse.max()),
            logical_structure: logical_structure.min(Criterion::LogicalStructure.max()),
            relevance: relevance.min(Criterion::Relevance.max()),
            persuasiveness: persuasiveness.min(Criterion::Persuasiveness.max()),
            clarity: clarity.min(Criterion::Clarity.max()),
        }
    }

    /// Sub-score for one criterion
    pub fn get(&self, criterion: Criterion) -> u32 {
        match criterion {
            Criterion::EvidenceUse => self.evidence_use,
            Criterion::LogicalStructure => self.logical_structure,
            Criterion::Relevance => self.relevance,
            Criterion::Persuasiveness => self.persuasiveness,
            Criterion::Clarity => self.clarity,
        }
    }

    /// Sum of all sub-scores (never above [`MAX_TOTAL`])
    pub fn total(&self) -> u32 {
        Criterion::ALL.iter().map(|c| self.get(*c)).sum()
    }

    /// `(criterion, sub-score)` pairs in rubric order
    pub fn iter(&self) -> impl Iterator<Item = (Criterion, u32)> + '_ {
        Criterion::ALL.into_iter().map(move |c| (c, self.get(c)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maxima_sum_to_total() {
        let sum: u32 = Criterion::ALL.iter().map(|c| c.max()).sum();
        assert_eq!(sum, MAX_TOTAL);
    }

    #[test]
    fn test_new_clamps_each_criterion() {
        let scores = ScoreBreakdown::new(99, 99, 99, 99, 99);
        assert_eq!(scores.get(Criterion::EvidenceUse), 20);
        assert_eq!(scores.get(Criterion::LogicalStructure), 25);
        assert_eq!(scores.get(Criterion::Clarity), 15);
        assert_eq!(scores.total(), MAX_TOTAL);
    }

    #[test]
    fn test_criterion_names_round_trip() {
        for c in Criterion::ALL {
            assert_eq!(c.name().parse::<Criterion>(), Ok(c));
        }
        assert!("charisma".parse::<Criterion>().is_err());
    }
}
