//! Fixed word lists behind the lexical argument heuristics
//!
//! Matching is plain substring presence on lowercased text. Nothing is
//! tokenized, so a trigger inside a longer word ("data" in "database",
//! "no one" in "piano one") still counts.

/// Words that mark an utterance as citing evidence
pub const EVIDENCE: &[&str] = &["study", "research", "data", "statistics", "evidence"];

/// Evidence words accepted when scoring without a prior analysis
pub const EVIDENCE_LOOSE: &[&str] = &[
    "study",
    "research",
    "data",
    "statistics",
    "evidence",
    "example",
];

/// Connectives that make an argument's structure clear
pub const CONNECTIVES: &[&str] = &["because", "therefore", "thus", "consequently", "as a result"];

/// Connectives rewarded by the logical-structure score
pub const LOGICAL_MARKERS: &[&str] = &[
    "because",
    "therefore",
    "thus",
    "consequently",
    "as a result",
    "furthermore",
    "however",
    "moreover",
    "in addition",
];

/// Appeals to feeling or belief rather than reasons
pub const EMOTIONAL: &[&str] = &["feel", "believe", "think", "everyone knows", "obviously"];

/// Universal quantifiers that signal overgeneralization
pub const UNIVERSALS: &[&str] = &["everyone", "no one", "always", "never"];

/// Vocabulary rewarded by the persuasiveness score
pub const PERSUASIVE: &[&str] = &[
    "consider",
    "perspective",
    "important",
    "crucial",
    "significant",
    "impact",
    "consequences",
    "benefits",
    "advantages",
    "disadvantages",
];

/// True if any entry of `words` occurs in `text_lower`
pub fn contains_any(text_lower: &str, words: &[&str]) -> bool {
    words.iter().any(|w| text_lower.contains(w))
}

/// Number of distinct entries of `words` that occur in `text_lower`
pub fn count_present(text_lower: &str, words: &[&str]) -> usize {
    words.iter().filter(|w| text_lower.contains(*w)).count()
}
