//! Structural analysis of a single utterance

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Whether an argument links its claims with explicit connectives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogicalStructure {
    Clear,
    #[default]
    Unclear,
}

/// Lexically detected reasoning flaw
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Fallacy {
    /// Universal quantifiers ("everyone", "never") used as proof
    Overgeneralization,
}

impl Fallacy {
    /// Tag string used in reports
    pub fn tag(self) -> &'static str {
        match self {
            Self::Overgeneralization => "overgeneralization",
        }
    }
}

impl fmt::Display for Fallacy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Read-only analysis of one utterance, produced fresh per turn
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ArgumentAnalysis {
    /// Cites studies, research, data or statistics
    pub evidence_provided: bool,
    /// Uses causal connectives
    pub logical_structure: LogicalStructure,
    /// Leans on feeling or belief
    pub emotional_appeals: bool,
    /// Detected fallacy tags
    pub fallacies: BTreeSet<Fallacy>,
    /// Up to three substantial sentences, in order
    pub main_points: Vec<String>,
}

impl ArgumentAnalysis {
    /// Whether any fallacy was detected
    pub fn has_fallacies(&self) -> bool {
        !self.fallacies.is_empty()
    }

    /// First extracted main point, if any
    pub fn lead_point(&self) -> Option<&str> {
        self.main_points.first().map(String::as_str)
    }
}
