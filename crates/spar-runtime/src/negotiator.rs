//! Topic and stance negotiation
//!
//! A four-state conversation that settles what to debate and which side
//! the user takes:
//!
//! ```text
//! Initial ──"...topic..." (>3 words)──▶ TopicConfirmation
//!    │                                   ▲      │ yes / number / own topic
//!    └──anything else──▶ TopicDiscovery ─┘      ▼
//!                          ▲   "no"       StanceSelection ──for/against──▶ DebateSetup
//!                          └──────────────────┘ (from TopicConfirmation)
//! ```
//!
//! An exit word in any state ends negotiation.

use serde::{Deserialize, Serialize};
use spar_core::{Agent, AgentResponse, DebateSetup, NextAction, ResponseMetadata, Stance};

/// Words that leave the program during negotiation
pub const EXIT_WORDS: &[&str] = &["exit", "quit", "stop"];

/// True if the utterance is an exit word
pub fn is_exit(utterance: &str) -> bool {
    let lower = utterance.trim().to_lowercase();
    EXIT_WORDS.contains(&lower.as_str())
}

const GOODBYE: &str = "Goodbye! Feel free to come back anytime for a debate.";

const WELCOME_MENU: &str = "\
Welcome to the Debate Agent! I'll help you find an interesting topic to debate.\n\n\
What are you interested in? Some popular areas include:\n\
- Technology and AI\n\
- Environmental issues\n\
- Social media and privacy\n\
- Education and learning\n\
- Health and wellness\n\
- Politics and governance\n\n\
Or tell me about your background/interests, or type 'exit' to quit.";

const STANCE_QUESTION: &str =
    "Would you like to argue FOR or AGAINST this topic? (for/against)\n\nOr type 'exit' to quit.";

/// Negotiation states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NegotiationState {
    Initial,
    TopicDiscovery,
    TopicConfirmation,
    StanceSelection,
}

/// Interest keywords mapped to three suggested topics each
const SUGGESTION_TABLE: [(&[&str], [&str; 3]); 3] = [
    (
        &["tech", "ai", "artificial", "computer", "software"],
        [
            "Artificial Intelligence should replace human decision-making in healthcare",
            "Social media platforms should be held responsible for misinformation",
            "Remote work is more productive than office work",
        ],
    ),
    (
        &["environment", "climate", "green", "nature"],
        [
            "Nuclear energy is the best solution to climate change",
            "Individual actions matter more than corporate responsibility for environment",
            "Economic growth should be prioritized over environmental protection",
        ],
    ),
    (
        &["education", "school", "learning", "student"],
        [
            "Standardized testing accurately measures student ability",
            "College education is worth the debt",
            "Online learning is as effective as in-person education",
        ],
    ),
];

const DEFAULT_SUGGESTIONS: [&str; 3] = [
    "Social media does more harm than good",
    "Universal basic income would solve poverty",
    "Space exploration funding should be redirected to Earth problems",
];

/// Suggest three topics for a description of the user's interests
pub fn suggest_topics(interests: &str) -> Vec<String> {
    let lower = interests.to_lowercase();
    let topics = SUGGESTION_TABLE
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(_, topics)| topics)
        .unwrap_or(&DEFAULT_SUGGESTIONS);
    topics.iter().map(|t| t.to_string()).collect()
}

/// Agent that settles the topic and the user's stance
#[derive(Debug, Clone)]
pub struct TopicNegotiator {
    state: NegotiationState,
    selected_topic: Option<String>,
    selected_stance: Option<Stance>,
    suggestions: Vec<String>,
}

impl Default for TopicNegotiator {
    fn default() -> Self {
        Self::new()
    }
}

impl TopicNegotiator {
    pub fn new() -> Self {
        Self {
            state: NegotiationState::Initial,
            selected_topic: None,
            selected_stance: None,
            suggestions: Vec::new(),
        }
    }

    pub fn state(&self) -> NegotiationState {
        self.state
    }

    /// Topic chosen or proposed so far
    pub fn selected_topic(&self) -> Option<&str> {
        self.selected_topic.as_deref()
    }

    /// Suggestions offered on the most recent discovery turn
    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    /// The finalized setup, once both topic and stance are chosen
    pub fn setup(&self) -> Option<DebateSetup> {
        match (&self.selected_topic, self.selected_stance) {
            (Some(topic), Some(stance)) => Some(DebateSetup::new(topic.clone(), stance)),
            _ => None,
        }
    }

    fn handle_initial(&mut self, utterance: &str) -> AgentResponse {
        let wants_topic = utterance.to_lowercase().contains("topic")
            && utterance.split_whitespace().count() > 3;

        if wants_topic {
            self.selected_topic = Some(utterance.to_string());
            self.state = NegotiationState::TopicConfirmation;
            return AgentResponse::text(format!(
                "Great! I see you want to debate about: '{utterance}'\n\nIs this correct? (yes/no)\n\nOr type 'exit' to quit."
            ))
            .with_metadata(ResponseMetadata::CandidateTopic {
                topic: utterance.to_string(),
            });
        }

        self.state = NegotiationState::TopicDiscovery;
        AgentResponse::text(WELCOME_MENU)
    }

    fn handle_discovery(&mut self, utterance: &str) -> AgentResponse {
        let topics = suggest_topics(utterance);
        let listing = topics
            .iter()
            .enumerate()
            .map(|(i, t)| format!("{}. {}", i + 1, t))
            .collect::<Vec<_>>()
            .join("\n");

        self.suggestions = topics.clone();
        self.state = NegotiationState::TopicConfirmation;

        AgentResponse::text(format!(
            "Based on your interests, here are some debate topics:\n\n{listing}\n\n\
             Pick a number (1-{}), suggest your own topic, or type 'exit' to quit.",
            topics.len()
        ))
        .with_metadata(ResponseMetadata::Suggestions { topics })
    }

    fn handle_confirmation(&mut self, utterance: &str) -> AgentResponse {
        let lower = utterance.trim().to_lowercase();

        match lower.as_str() {
            "yes" | "y" => {
                let Some(topic) = self.selected_topic.clone() else {
                    tracing::debug!("confirmation without a candidate topic");
                    return AgentResponse::text(
                        "There's no topic to confirm yet. Pick a number from the list, \
                         suggest your own topic, or type 'exit' to quit.",
                    );
                };
                self.state = NegotiationState::StanceSelection;
                AgentResponse::text(format!(
                    "Perfect! We'll debate: '{topic}'\n\n{STANCE_QUESTION}"
                ))
            }
            "no" | "n" => {
                self.selected_topic = None;
                self.suggestions.clear();
                self.state = NegotiationState::TopicDiscovery;
                AgentResponse::text("No problem! Let's find a better topic. What interests you?")
            }
            // non-ASCII numerals never parse, so they re-prompt
            digits if !digits.is_empty() && digits.chars().all(char::is_numeric) => {
                self.select_suggestion(digits)
            }
            _ => {
                self.selected_topic = Some(utterance.to_string());
                self.state = NegotiationState::StanceSelection;
                AgentResponse::text(format!(
                    "Interesting topic! We'll debate: '{utterance}'\n\n{STANCE_QUESTION}"
                ))
            }
        }
    }

    /// Pick a remembered suggestion by its 1-based number
    fn select_suggestion(&mut self, digits: &str) -> AgentResponse {
        let chosen = digits
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| self.suggestions.get(i))
            .cloned();

        match chosen {
            Some(topic) => {
                self.selected_topic = Some(topic.clone());
                self.state = NegotiationState::StanceSelection;
                AgentResponse::text(format!(
                    "Great choice! We'll debate: '{topic}'\n\n{STANCE_QUESTION}"
                ))
            }
            None if self.suggestions.is_empty() => {
                tracing::warn!(input = digits, "number given but no suggestions were offered");
                AgentResponse::text(
                    "There's no numbered list to pick from yet. Suggest your own topic, \
                     type 'no' to browse suggestions, or type 'exit' to quit.",
                )
            }
            None => {
                tracing::warn!(
                    input = digits,
                    offered = self.suggestions.len(),
                    "suggestion number out of range"
                );
                AgentResponse::text(format!(
                    "Please pick a number between 1 and {}, suggest your own topic, or type 'exit' to quit.",
                    self.suggestions.len()
                ))
            }
        }
    }

    fn handle_stance(&mut self, utterance: &str) -> AgentResponse {
        let Ok(stance) = utterance.parse::<Stance>() else {
            return AgentResponse::text("Please choose 'for' or 'against', or type 'exit' to quit.");
        };

        let Some(topic) = self.selected_topic.clone() else {
            tracing::warn!("stance chosen before any topic");
            self.state = NegotiationState::TopicDiscovery;
            return AgentResponse::text("Let's pick a topic first. What interests you?");
        };

        self.selected_stance = Some(stance);
        let setup = DebateSetup::new(topic, stance);
        tracing::info!(topic = %setup.topic, user_stance = %stance, "debate setup finalized");

        AgentResponse::text(format!(
            "Excellent! You'll argue {} the topic: '{}'\n\nLet's begin the debate! Make your opening argument.",
            stance.as_str().to_uppercase(),
            setup.topic
        ))
        .with_metadata(ResponseMetadata::Setup(setup))
        .with_action(NextAction::StartDebate)
    }
}

impl Agent for TopicNegotiator {
    fn name(&self) -> &str {
        "TopicSelector"
    }

    fn process(&mut self, utterance: &str) -> AgentResponse {
        if is_exit(utterance) {
            return AgentResponse::text(GOODBYE).with_action(NextAction::Exit);
        }

        let before = self.state;
        let response = match self.state {
            NegotiationState::Initial => self.handle_initial(utterance),
            NegotiationState::TopicDiscovery => self.handle_discovery(utterance),
            NegotiationState::TopicConfirmation => self.handle_confirmation(utterance),
            NegotiationState::StanceSelection => self.handle_stance(utterance),
        };
        tracing::debug!(from = ?before, to = ?self.state, "negotiation step");
        response
    }
}
