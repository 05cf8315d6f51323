//! Stance-consistent rebuttal composition
//!
//! A rebuttal is assembled from an opener that quotes the user's lead
//! point, a canned counter-argument for the agent's stance and the topic's
//! bucket, a fixed key point, optional challenges, and a closing prompt.
//! Opener and body are drawn uniformly at random from an injected RNG.

use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use spar_core::{ArgumentAnalysis, Stance};

/// Prompt that closes every rebuttal, after a paragraph break
pub const CLOSING_PROMPT: &str = "What's your response to this perspective?";

const EVIDENCE_CHALLENGE: &str =
    " Furthermore, I notice your argument would be stronger with supporting evidence or examples.";

const FALLACY_NOTE: &str =
    " I also notice some overgeneralization in your reasoning that we should address.";

/// Family of canned arguments a topic maps onto
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TopicBucket {
    /// AI in healthcare; also the default for unrecognized topics
    AiHealthcare,
    /// Platform responsibility for social media content
    SocialMedia,
}

impl TopicBucket {
    /// Pick a bucket by substring match on the lowercased topic
    pub fn classify(topic: &str) -> Self {
        let lower = topic.to_lowercase();
        if lower.contains("ai") || lower.contains("artificial intelligence") {
            Self::AiHealthcare
        } else if lower.contains("social media") {
            Self::SocialMedia
        } else {
            Self::AiHealthcare
        }
    }
}

const BUILTIN: [(Stance, TopicBucket, [&str; 3]); 4] = [
    (
        Stance::For,
        TopicBucket::AiHealthcare,
        [
            "While I understand your concerns, consider that AI can process vast amounts of medical data faster than humans, potentially saving lives through quicker diagnoses.",
            "You raise valid points, but AI systems can reduce human error and provide consistent, unbiased medical recommendations based on comprehensive data analysis.",
            "That's an interesting perspective, however AI in healthcare could democratize access to quality medical advice, especially in underserved areas.",
        ],
    ),
    (
        Stance::For,
        TopicBucket::SocialMedia,
        [
            "I see your argument, but platforms have the infrastructure and reach to combat misinformation at scale in ways individuals cannot.",
            "While you make valid points, social media companies profit from user engagement and should bear responsibility for the content they amplify.",
            "Your perspective is noted, yet these platforms shape public discourse and have a duty to ensure information accuracy.",
        ],
    ),
    (
        Stance::Against,
        TopicBucket::AiHealthcare,
        [
            "I appreciate your argument, but human judgment involves empathy and contextual understanding that AI cannot replicate in medical care.",
            "You make some points, however AI systems can perpetuate biases present in training data, potentially harming vulnerable populations.",
            "While technology has benefits, medical decisions require human intuition and the ability to handle unique, unprecedented cases.",
        ],
    ),
    (
        Stance::Against,
        TopicBucket::SocialMedia,
        [
            "I understand your position, but platforms cannot effectively determine truth without becoming censors of legitimate discourse.",
            "Your points have merit, yet holding platforms responsible could lead to over-censorship and suppression of diverse viewpoints.",
            "That's a fair argument, however the sheer volume of content makes comprehensive fact-checking practically impossible.",
        ],
    ),
];

/// Counter-arguments keyed by (stance, topic bucket)
///
/// Lookups never fail: a missing or empty entry resolves to generic
/// templates that name the stance.
#[derive(Debug, Clone)]
pub struct RebuttalTable {
    entries: HashMap<(Stance, TopicBucket), Vec<String>>,
}

impl RebuttalTable {
    /// A table with no entries; every lookup takes the generic fallback
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// The built-in table covering every stance and bucket
    pub fn builtin() -> Self {
        let mut table = Self::empty();
        for (stance, bucket, lines) in BUILTIN {
            table.insert(stance, bucket, lines.iter().map(|l| l.to_string()).collect());
        }
        table
    }

    /// Replace the entry for one combination
    pub fn insert(&mut self, stance: Stance, bucket: TopicBucket, lines: Vec<String>) {
        self.entries.insert((stance, bucket), lines);
    }

    /// Candidate rebuttals for a combination
    pub fn lookup(&self, stance: Stance, bucket: TopicBucket) -> Vec<String> {
        match self.entries.get(&(stance, bucket)) {
            Some(lines) if !lines.is_empty() => lines.clone(),
            _ => generic_rebuttals(stance),
        }
    }
}

impl Default for RebuttalTable {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Stance-referencing templates used when the table has no entry
pub fn generic_rebuttals(stance: Stance) -> Vec<String> {
    vec![
        format!(
            "I understand your position, but from the {stance} perspective, we must consider the broader implications."
        ),
        format!(
            "You make some valid points, however arguing {stance} this topic reveals important considerations you may have overlooked."
        ),
        format!(
            "While I respect your viewpoint, taking the {stance} stance shows us a different angle on this issue."
        ),
    ]
}

/// Openers that acknowledge the user's lead point
pub fn openers(analysis: &ArgumentAnalysis) -> Vec<String> {
    let point = analysis.lead_point();
    vec![
        format!(
            "I hear your argument about {}, but let me present a different perspective.",
            point.unwrap_or("this topic")
        ),
        format!(
            "You raise some interesting points, particularly about {}. However, consider this:",
            point.unwrap_or("this issue")
        ),
        format!(
            "I appreciate the thought you've put into this, especially regarding {}. Let me offer a counterpoint:",
            point.unwrap_or("your position")
        ),
    ]
}

/// The deterministic key point for the agent's stance
pub fn key_point(stance: Stance) -> String {
    let (subject, verb) = match stance {
        Stance::For => ("this approach", "addresses"),
        Stance::Against => ("this position", "overlooks"),
    };
    format!(
        "One crucial point to consider is that {subject} {verb} the long-term consequences for society."
    )
}

/// A composed rebuttal and the key point it made
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rebuttal {
    pub text: String,
    pub key_point: String,
}

/// Composes rebuttals with an injectable random source
#[derive(Debug, Clone)]
pub struct RebuttalGenerator<R = StdRng> {
    rng: R,
    table: RebuttalTable,
}

impl RebuttalGenerator<StdRng> {
    /// Reproducible generator
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RebuttalGenerator<R> {
    /// Create a generator over the built-in table
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            table: RebuttalTable::builtin(),
        }
    }

    /// Use a custom rebuttal table
    pub fn with_table(mut self, table: RebuttalTable) -> Self {
        self.table = table;
        self
    }

    /// Compose a counter-argument to `analysis` from `my_stance` on `topic`
    pub fn rebut(
        &mut self,
        analysis: &ArgumentAnalysis,
        my_stance: Stance,
        topic: &str,
    ) -> Rebuttal {
        let bucket = TopicBucket::classify(topic);
        let bodies = self.table.lookup(my_stance, bucket);
        let starters = openers(analysis);

        let opener = starters.choose(&mut self.rng).cloned().unwrap_or_default();
        let body = bodies.choose(&mut self.rng).cloned().unwrap_or_default();
        let key_point = key_point(my_stance);

        let evidence = if analysis.evidence_provided {
            ""
        } else {
            EVIDENCE_CHALLENGE
        };
        let fallacy = if analysis.has_fallacies() {
            FALLACY_NOTE
        } else {
            ""
        };

        tracing::debug!(stance = %my_stance, ?bucket, "composed rebuttal");

        Rebuttal {
            text: format!("{opener} {body} {key_point}{evidence}{fallacy}\n\n{CLOSING_PROMPT}"),
            key_point,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::analyze;
    use spar_core::Fallacy;

    #[test]
    fn test_classify_topics() {
        assert_eq!(
            TopicBucket::classify("Artificial Intelligence should replace doctors"),
            TopicBucket::AiHealthcare
        );
        assert_eq!(
            TopicBucket::classify("Social media does more harm than good"),
            TopicBucket::SocialMedia
        );
        // unrecognized topics default to the AI bucket
        assert_eq!(
            TopicBucket::classify("Universal basic income would solve poverty"),
            TopicBucket::AiHealthcare
        );
    }

    #[test]
    fn test_ai_substring_wins_over_social_media() {
        // "campaigns" contains "ai"
        assert_eq!(
            TopicBucket::classify("Social media campaigns work"),
            TopicBucket::AiHealthcare
        );
    }

    #[test]
    fn test_builtin_table_is_complete() {
        let table = RebuttalTable::builtin();
        for stance in [Stance::For, Stance::Against] {
            for bucket in [TopicBucket::AiHealthcare, TopicBucket::SocialMedia] {
                let lines = table.lookup(stance, bucket);
                assert_eq!(lines.len(), 3);
                assert_ne!(lines, generic_rebuttals(stance));
            }
        }
    }

    #[test]
    fn test_empty_table_falls_back_to_generic() {
        let table = RebuttalTable::empty();
        let lines = table.lookup(Stance::Against, TopicBucket::SocialMedia);
        assert_eq!(lines, generic_rebuttals(Stance::Against));
        assert!(lines[0].contains("from the against perspective"));
    }

    #[test]
    fn test_rebuttal_is_drawn_from_candidates() {
        let analysis = analyze("Research shows that machines are careful. They never tire.");
        let mut generator = RebuttalGenerator::seeded(7);
        let rebuttal = generator.rebut(&analysis, Stance::Against, "AI in healthcare");

        let opener_hit = openers(&analysis)
            .iter()
            .any(|o| rebuttal.text.starts_with(o.as_str()));
        assert!(opener_hit);

        let body_hit = RebuttalTable::builtin()
            .lookup(Stance::Against, TopicBucket::AiHealthcare)
            .iter()
            .any(|b| rebuttal.text.contains(b.as_str()));
        assert!(body_hit);

        assert!(openers(&analysis)[0].contains("Research shows that machines are careful"));
        assert_eq!(rebuttal.key_point, key_point(Stance::Against));
        assert!(rebuttal.text.contains("this position overlooks"));
    }

    #[test]
    fn test_challenges_follow_analysis() {
        let mut generator = RebuttalGenerator::seeded(1);

        let mut analysis = ArgumentAnalysis::default();
        let text = generator.rebut(&analysis, Stance::For, "topic").text;
        assert!(text.contains(EVIDENCE_CHALLENGE.trim()));
        assert!(!text.contains(FALLACY_NOTE.trim()));

        analysis.evidence_provided = true;
        analysis.fallacies.insert(Fallacy::Overgeneralization);
        let text = generator.rebut(&analysis, Stance::For, "topic").text;
        assert!(!text.contains(EVIDENCE_CHALLENGE.trim()));
        assert!(text.contains(FALLACY_NOTE.trim()));
    }

    #[test]
    fn test_layout_ends_with_closing_prompt() {
        let mut generator = RebuttalGenerator::seeded(3);
        let analysis = ArgumentAnalysis {
            evidence_provided: true,
            ..ArgumentAnalysis::default()
        };
        let text = generator.rebut(&analysis, Stance::For, "AI").text;
        let expected_tail = format!("{}\n\n{}", key_point(Stance::For), CLOSING_PROMPT);
        assert!(text.ends_with(&expected_tail));
    }

    #[test]
    fn test_same_seed_same_rebuttal() {
        let analysis = analyze("Social platforms spread lies quickly.");
        let a = RebuttalGenerator::seeded(42).rebut(&analysis, Stance::For, "social media");
        let b = RebuttalGenerator::seeded(42).rebut(&analysis, Stance::For, "social media");
        assert_eq!(a, b);
    }
}
