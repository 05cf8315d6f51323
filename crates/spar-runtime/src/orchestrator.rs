//! Orchestrator - runs one debate session turn by turn

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use spar_adversarial::debate::is_end_request;
use spar_adversarial::{
    Critic, DebateRound, DebateSummary, Debater, Evaluation, RebuttalGenerator, RebuttalTable,
};
use spar_core::{Agent, DebateSetup, ExchangeAnalysis, NextAction, ResponseMetadata};

use crate::config::SparConfig;
use crate::negotiator::TopicNegotiator;
use crate::report::{render_evaluation, round_feedback, DEBATE_OVER, EMPTY_DEBATE};

const RESTART_GREETING: &str = "Welcome back! Let's start a new debate. What topic interests you?";
const LOST_DEBATER: &str = "Something went wrong. Please restart the system.";

/// Session phases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    TopicSelection,
    Debating,
    Evaluation,
}

/// Outcome of one input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    /// Text to show the user
    pub display: String,
    /// What the shell should do next
    pub next_action: NextAction,
}

impl Turn {
    fn new(display: impl Into<String>, next_action: NextAction) -> Self {
        Self {
            display: display.into(),
            next_action,
        }
    }
}

/// Owns every piece of mutable state for one debate session
///
/// Input flows to the [`TopicNegotiator`] until a [`DebateSetup`] is agreed,
/// then to the [`Debater`] and [`Critic`] each round, and finally to the
/// evaluation.
pub struct Orchestrator {
    session_id: Uuid,
    config: SparConfig,
    /// Seeds one rebuttal generator per debate
    rng: StdRng,
    rebuttals: RebuttalTable,
    state: SessionState,
    negotiator: TopicNegotiator,
    debater: Option<Debater>,
    critic: Critic,
    setup: Option<DebateSetup>,
}

impl Orchestrator {
    /// Create a session; a configured seed makes rebuttals reproducible
    pub fn new(config: SparConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let session_id = Uuid::new_v4();
        tracing::info!(session = %session_id, seeded = config.seed.is_some(), "session created");

        Self {
            session_id,
            config,
            rng,
            rebuttals: RebuttalTable::builtin(),
            state: SessionState::TopicSelection,
            negotiator: TopicNegotiator::new(),
            debater: None,
            critic: Critic::new(),
            setup: None,
        }
    }

    /// Argue from a custom rebuttal table in every following debate
    pub fn with_rebuttal_table(mut self, table: RebuttalTable) -> Self {
        self.rebuttals = table;
        self
    }

    /// Handle one non-empty user utterance
    pub fn process_input(&mut self, input: &str) -> Turn {
        match self.state {
            SessionState::TopicSelection => self.negotiate(input),
            SessionState::Debating => self.debate(input),
            SessionState::Evaluation => Turn::new(DEBATE_OVER, NextAction::None),
        }
    }

    /// Discard the current debate and return to topic selection
    pub fn restart(&mut self) -> Turn {
        tracing::info!(session = %self.session_id, from = ?self.state, "session restarted");
        metrics::counter!("spar_restarts_total").increment(1);

        self.negotiator = TopicNegotiator::new();
        self.debater = None;
        self.critic.reset();
        self.setup = None;
        self.state = SessionState::TopicSelection;

        Turn::new(RESTART_GREETING, NextAction::Restart)
    }

    fn negotiate(&mut self, input: &str) -> Turn {
        let response = self.negotiator.process(input);

        if response.next_action == NextAction::StartDebate {
            let setup = match response.metadata {
                ResponseMetadata::Setup(setup) => Some(setup),
                _ => self.negotiator.setup(),
            };
            match setup {
                Some(setup) => self.start_debate(setup),
                None => {
                    tracing::warn!(
                        session = %self.session_id,
                        "negotiator started a debate without a setup"
                    );
                    return Turn::new(response.content, NextAction::None);
                }
            }
        }

        Turn::new(response.content, response.next_action)
    }

    fn start_debate(&mut self, setup: DebateSetup) {
        let generator = RebuttalGenerator::new(StdRng::from_rng(&mut self.rng))
            .with_table(self.rebuttals.clone());
        self.debater = Some(Debater::new(setup.clone(), generator));
        self.state = SessionState::Debating;

        metrics::counter!("spar_debates_started_total").increment(1);
        tracing::info!(
            session = %self.session_id,
            topic = %setup.topic,
            user_stance = %setup.user_stance,
            agent_stance = %setup.agent_stance,
            "debate started"
        );
        self.setup = Some(setup);
    }

    fn debate(&mut self, input: &str) -> Turn {
        if is_end_request(input) {
            return self.finish();
        }

        let Some(debater) = self.debater.as_mut() else {
            tracing::warn!(session = %self.session_id, "debating without a debater");
            return Turn::new(LOST_DEBATER, NextAction::None);
        };

        let reply = debater.process(input);
        if reply.next_action == NextAction::EndDebate {
            return self.finish();
        }

        let analysis = match &reply.metadata {
            ResponseMetadata::Argument { analysis, .. } => Some(analysis),
            _ => None,
        };
        let round = self.critic.history().len() + 1;
        let exchange = self.critic.analyze_exchange(input, &reply.content, analysis);
        let block = round_feedback(round, exchange);

        Turn::new(format!("{}\n\n{}", reply.content, block), NextAction::None)
    }

    fn finish(&mut self) -> Turn {
        self.state = SessionState::Evaluation;
        let evaluation = self.critic.evaluation();

        metrics::counter!("spar_debates_evaluated_total").increment(1);
        tracing::info!(
            session = %self.session_id,
            exchanges = self.critic.history().len(),
            user_total = self.critic.user_total(),
            agent_total = self.critic.agent_total(),
            "debate evaluated"
        );

        let display = match &self.setup {
            Some(setup) => render_evaluation(setup, &evaluation),
            None => EMPTY_DEBATE.to_string(),
        };
        Turn::new(display, NextAction::EndDebate)
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn config(&self) -> &SparConfig {
        &self.config
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// The agreed topic and stances, once negotiation is done
    pub fn setup(&self) -> Option<&DebateSetup> {
        self.setup.as_ref()
    }

    /// Scored rounds, oldest first
    pub fn history(&self) -> &[ExchangeAnalysis] {
        self.critic.history()
    }

    /// Evaluation of the rounds scored so far
    pub fn evaluation(&self) -> Evaluation {
        self.critic.evaluation()
    }

    /// Arguments and rebuttals of the current debate, oldest first
    pub fn rounds(&self) -> &[DebateRound] {
        self.debater.as_ref().map(Debater::rounds).unwrap_or_default()
    }

    /// What the debater has argued, if a debate has started
    pub fn debate_summary(&self) -> Option<DebateSummary> {
        self.debater.as_ref().map(Debater::summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spar_adversarial::rebuttal::generic_rebuttals;
    use spar_core::Stance;

    fn seeded() -> Orchestrator {
        Orchestrator::new(SparConfig::default().with_seed(Some(7)))
    }

    fn into_debate(orchestrator: &mut Orchestrator) {
        orchestrator.process_input("Let us pick the topic of school uniforms");
        orchestrator.process_input("yes");
        let turn = orchestrator.process_input("for");
        assert_eq!(turn.next_action, NextAction::StartDebate);
    }

    #[test]
    fn test_negotiation_starts_debate() {
        let mut orchestrator = seeded();
        assert_eq!(orchestrator.state(), SessionState::TopicSelection);
        into_debate(&mut orchestrator);

        assert_eq!(orchestrator.state(), SessionState::Debating);
        let setup = orchestrator.setup().unwrap();
        assert_eq!(setup.topic, "Let us pick the topic of school uniforms");
        assert_eq!(orchestrator.debate_summary().unwrap().total_arguments, 0);
    }

    #[test]
    fn test_round_display_has_feedback_block() {
        let mut orchestrator = seeded();
        into_debate(&mut orchestrator);

        let turn =
            orchestrator.process_input("Uniforms reduce bullying because clothing marks status.");
        assert_eq!(turn.next_action, NextAction::None);
        assert!(turn.display.contains("\n\n\n--- Round 1 Feedback ---\n"));

        let turn = orchestrator.process_input("Schools with uniforms report better focus.");
        assert!(turn.display.contains("--- Round 2 Feedback ---"));
        assert_eq!(orchestrator.history().len(), 2);
    }

    #[test]
    fn test_end_debate_evaluates() {
        let mut orchestrator = seeded();
        into_debate(&mut orchestrator);
        orchestrator.process_input("Uniforms save families money.");

        let turn = orchestrator.process_input("End Debate");
        assert_eq!(turn.next_action, NextAction::EndDebate);
        assert_eq!(orchestrator.state(), SessionState::Evaluation);
        assert!(turn.display.contains("DEBATE EVALUATION"));

        let turn = orchestrator.process_input("one more point");
        assert_eq!(turn.display, DEBATE_OVER);
        assert_eq!(orchestrator.history().len(), 1);
    }

    #[test]
    fn test_ending_without_arguments_is_empty() {
        let mut orchestrator = seeded();
        into_debate(&mut orchestrator);
        let turn = orchestrator.process_input("stop");
        assert_eq!(turn.display, EMPTY_DEBATE);
        assert!(orchestrator.evaluation().is_empty());
    }

    #[test]
    fn test_same_seed_same_rebuttals() {
        let mut a = seeded();
        let mut b = seeded();
        into_debate(&mut a);
        into_debate(&mut b);

        let argument = "Data shows uniforms lower costs. Therefore parents benefit.";
        assert_eq!(a.process_input(argument), b.process_input(argument));
    }

    #[test]
    fn test_custom_table_reaches_debater() {
        let mut orchestrator = seeded().with_rebuttal_table(RebuttalTable::empty());
        into_debate(&mut orchestrator);

        let turn = orchestrator.process_input("Uniforms save families money.");
        // the agent argues against, so every line comes from the generic fallback
        let generic = generic_rebuttals(Stance::Against);
        assert!(generic.iter().any(|line| turn.display.contains(line.as_str())));

        let rounds = orchestrator.rounds();
        assert_eq!(rounds.len(), 1);
        assert_eq!(rounds[0].user_argument, "Uniforms save families money.");
        assert!(turn.display.starts_with(&rounds[0].rebuttal));
    }

    #[test]
    fn test_restart_from_debating() {
        let mut orchestrator = seeded();
        into_debate(&mut orchestrator);
        orchestrator.process_input("Uniforms save families money.");

        let turn = orchestrator.restart();
        assert_eq!(turn.next_action, NextAction::Restart);
        assert_eq!(turn.display, RESTART_GREETING);
        assert_eq!(orchestrator.state(), SessionState::TopicSelection);
        assert!(orchestrator.setup().is_none());
        assert!(orchestrator.history().is_empty());
        assert!(orchestrator.debate_summary().is_none());
        assert!(orchestrator.rounds().is_empty());
    }
}
