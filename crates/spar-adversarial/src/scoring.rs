//! Heuristic rubric scoring
//!
//! Turns raw argument text into a [`ScoreBreakdown`] without any model:
//! lexicon hits, sentence counts and word counts drive every criterion.
//! Scores are deterministic for the same inputs.

use spar_core::lexicon::{self, contains_any, count_present};
use spar_core::{ArgumentAnalysis, Criterion, ScoreBreakdown};

/// Evidence score when the analysis (or lexicon) finds evidence
const EVIDENCE_WITH_ANALYSIS: u32 = 18;
const EVIDENCE_BY_LEXICON: u32 = 15;
const EVIDENCE_MISSING: u32 = 8;

const LOGIC_BASE: u32 = 10;
const LOGIC_PER_MARKER: u32 = 3;
const FALLACY_PENALTY: u32 = 8;
const LOGIC_FLOOR: u32 = 5;

const PERSUASION_BASE: u32 = 8;
const PERSUASION_PER_TERM: u32 = 2;

/// Score one argument
///
/// `is_user` together with a supplied `analysis` switches evidence scoring
/// to the analysis flag; any fallacy in `analysis` costs logical structure
/// points.
pub fn score(
    utterance: &str,
    is_user: bool,
    analysis: Option<&ArgumentAnalysis>,
) -> ScoreBreakdown {
    let lower = utterance.to_lowercase();

    let evidence_use = match analysis {
        Some(a) if is_user => {
            if a.evidence_provided {
                EVIDENCE_WITH_ANALYSIS
            } else {
                EVIDENCE_MISSING
            }
        }
        _ => {
            if contains_any(&lower, lexicon::EVIDENCE_LOOSE) {
                EVIDENCE_BY_LEXICON
            } else {
                EVIDENCE_MISSING
            }
        }
    };

    let markers = count_present(&lower, lexicon::LOGICAL_MARKERS) as u32;
    let mut logical_structure =
        (LOGIC_BASE + markers * LOGIC_PER_MARKER).min(Criterion::LogicalStructure.max());
    if analysis.is_some_and(ArgumentAnalysis::has_fallacies) {
        logical_structure = logical_structure
            .saturating_sub(FALLACY_PENALTY)
            .max(LOGIC_FLOOR);
    }

    let substantial_sentences = utterance
        .split('.')
        .filter(|s| s.trim().chars().count() > 5)
        .count();
    let relevance = if substantial_sentences >= 2 { 20 } else { 12 };

    let terms = count_present(&lower, lexicon::PERSUASIVE) as u32;
    let persuasiveness =
        (PERSUASION_BASE + terms * PERSUASION_PER_TERM).min(Criterion::Persuasiveness.max());

    let clarity = match utterance.split_whitespace().count() {
        20..=100 => 15,
        101..=150 => 12,
        _ => 8,
    };

    ScoreBreakdown::new(
        evidence_use,
        logical_structure,
        relevance,
        persuasiveness,
        clarity,
    )
}

/// Feedback sentences for a breakdown
///
/// Each criterion contributes at most one sentence (low or high); if none
/// apply a single generic sentence is returned.
pub fn feedback(scores: &ScoreBreakdown, _utterance: &str) -> String {
    let mut parts = Vec::new();

    let evidence = scores.get(Criterion::EvidenceUse);
    if evidence < 12 {
        parts.push("Consider adding more evidence or examples to support your claims");
    } else if evidence >= 16 {
        parts.push("Good use of evidence and supporting details");
    }

    let logic = scores.get(Criterion::LogicalStructure);
    if logic < 15 {
        parts.push("Work on connecting your ideas with clearer logical transitions");
    } else if logic >= 20 {
        parts.push("Strong logical flow and structure in your argument");
    }

    let persuasion = scores.get(Criterion::Persuasiveness);
    if persuasion < 12 {
        parts.push("Try to make your argument more compelling and consider counterpoints");
    } else if persuasion >= 16 {
        parts.push("Persuasive and well-articulated argument");
    }

    let clarity = scores.get(Criterion::Clarity);
    if clarity < 12 {
        parts.push("Consider being more concise or breaking down complex ideas");
    } else if clarity >= 14 {
        parts.push("Clear and well-structured presentation");
    }

    if parts.is_empty() {
        parts.push("Solid argument overall with room for minor improvements");
    }

    format!("{}.", parts.join(". "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::analyze;
    use proptest::prelude::*;

    #[test]
    fn test_evidence_follows_supplied_analysis() {
        let with = ArgumentAnalysis {
            evidence_provided: true,
            ..ArgumentAnalysis::default()
        };
        let without = ArgumentAnalysis::default();

        assert_eq!(score("data", true, Some(&with)).get(Criterion::EvidenceUse), 18);
        assert_eq!(score("data", true, Some(&without)).get(Criterion::EvidenceUse), 8);
    }

    #[test]
    fn test_evidence_by_lexicon_without_analysis() {
        let agent = score("For example, look at this.", false, None);
        assert_eq!(agent.get(Criterion::EvidenceUse), 15);

        let user = score("Just my view.", true, None);
        assert_eq!(user.get(Criterion::EvidenceUse), 8);
    }

    #[test]
    fn test_logical_markers_and_cap() {
        let plain = score("nothing linked here", false, None);
        assert_eq!(plain.get(Criterion::LogicalStructure), 10);

        let two = score("because of this, therefore that", false, None);
        assert_eq!(two.get(Criterion::LogicalStructure), 16);

        let all = "because therefore thus consequently as a result furthermore \
                   however moreover in addition";
        assert_eq!(score(all, false, None).get(Criterion::LogicalStructure), 25);
    }

    #[test]
    fn test_fallacy_penalty_floors_at_five() {
        let analysis = analyze("Everyone always agrees");
        let scores = score("Everyone always agrees", true, Some(&analysis));
        // base 10 minus 8 would be 2; the floor holds it at 5
        assert_eq!(scores.get(Criterion::LogicalStructure), 5);

        let text = "Everyone agrees because therefore thus it follows";
        let analysis = analyze(text);
        assert_eq!(score(text, true, Some(&analysis)).get(Criterion::LogicalStructure), 11);
    }

    #[test]
    fn test_relevance_needs_two_sentences() {
        assert_eq!(score("One sentence only.", false, None).get(Criterion::Relevance), 12);
        assert_eq!(
            score("First sentence. Second sentence.", false, None).get(Criterion::Relevance),
            20
        );
    }

    #[test]
    fn test_persuasiveness_cap() {
        let text = "consider perspective important crucial significant impact \
                    consequences benefits";
        assert_eq!(score(text, false, None).get(Criterion::Persuasiveness), 20);
        assert_eq!(score("impact", false, None).get(Criterion::Persuasiveness), 10);
    }

    #[test]
    fn test_clarity_bands() {
        let words = |n: usize| vec!["word"; n].join(" ");
        assert_eq!(score(&words(19), false, None).get(Criterion::Clarity), 8);
        assert_eq!(score(&words(20), false, None).get(Criterion::Clarity), 15);
        assert_eq!(score(&words(100), false, None).get(Criterion::Clarity), 15);
        assert_eq!(score(&words(101), false, None).get(Criterion::Clarity), 12);
        assert_eq!(score(&words(150), false, None).get(Criterion::Clarity), 12);
        assert_eq!(score(&words(151), false, None).get(Criterion::Clarity), 8);
    }

    #[test]
    fn test_feedback_low_scores() {
        let scores = ScoreBreakdown::new(8, 10, 12, 8, 8);
        assert_eq!(
            feedback(&scores, ""),
            "Consider adding more evidence or examples to support your claims. \
             Work on connecting your ideas with clearer logical transitions. \
             Try to make your argument more compelling and consider counterpoints. \
             Consider being more concise or breaking down complex ideas."
        );
    }

    #[test]
    fn test_feedback_generic_when_nothing_triggers() {
        // every criterion sits between its low and high thresholds
        let scores = ScoreBreakdown::new(14, 17, 12, 14, 12);
        assert_eq!(
            feedback(&scores, ""),
            "Solid argument overall with room for minor improvements."
        );
    }

    #[test]
    fn test_feedback_high_scores() {
        let scores = ScoreBreakdown::new(18, 22, 20, 16, 15);
        let text = feedback(&scores, "");
        assert!(text.starts_with("Good use of evidence and supporting details."));
        assert!(text.ends_with("Clear and well-structured presentation."));
    }

    proptest! {
        #[test]
        fn prop_scores_stay_in_bounds(text in ".{0,400}", is_user in any::<bool>()) {
            let analysis = analyze(&text);
            for scores in [
                score(&text, is_user, Some(&analysis)),
                score(&text, is_user, None),
            ] {
                for (criterion, value) in scores.iter() {
                    prop_assert!(value <= criterion.max());
                }
                prop_assert!(scores.get(Criterion::Clarity) >= 8);
                prop_assert!(scores.get(Criterion::LogicalStructure) >= 5);
                prop_assert!(scores.total() <= 100);
            }
        }
    }
}
