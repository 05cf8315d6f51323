//! Lexical argument analysis
//!
//! Reads one utterance and reports its structure using word-list
//! heuristics: evidence, causal connectives, emotional appeals, universal
//! claims, and the leading sentences.

use spar_core::lexicon::{self, contains_any};
use spar_core::{ArgumentAnalysis, Fallacy, LogicalStructure};

/// Most main points kept per utterance
pub const MAX_MAIN_POINTS: usize = 3;

/// Sentences must be longer than this (in characters) to count as a point
const MIN_POINT_CHARS: usize = 10;

/// Analyze one utterance
///
/// Pure and infallible: every input yields an analysis, possibly with all
/// flags false and no points.
///
/// ```
/// use spar_adversarial::analyze;
/// use spar_core::{Fallacy, LogicalStructure};
///
/// let analysis = analyze("Everyone always does this because it is true.");
/// assert!(analysis.fallacies.contains(&Fallacy::Overgeneralization));
/// assert_eq!(analysis.logical_structure, LogicalStructure::Clear);
/// assert!(!analysis.evidence_provided);
/// ```
pub fn analyze(utterance: &str) -> ArgumentAnalysis {
    let lower = utterance.to_lowercase();

    let logical_structure = if contains_any(&lower, lexicon::CONNECTIVES) {
        LogicalStructure::Clear
    } else {
        LogicalStructure::Unclear
    };

    let mut analysis = ArgumentAnalysis {
        evidence_provided: contains_any(&lower, lexicon::EVIDENCE),
        logical_structure,
        emotional_appeals: contains_any(&lower, lexicon::EMOTIONAL),
        main_points: main_points(utterance),
        ..ArgumentAnalysis::default()
    };

    if contains_any(&lower, lexicon::UNIVERSALS) {
        analysis.fallacies.insert(Fallacy::Overgeneralization);
    }

    analysis
}

/// First few period-delimited sentences long enough to carry a claim
fn main_points(utterance: &str) -> Vec<String> {
    utterance
        .split('.')
        .map(str::trim)
        .filter(|s| s.chars().count() > MIN_POINT_CHARS)
        .take(MAX_MAIN_POINTS)
        .map(str::to_string)
        .collect()
}
