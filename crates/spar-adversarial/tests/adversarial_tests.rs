use spar_adversarial::{
    analyze, feedback, score, Critic, Debater, Evaluation, Grade, RebuttalGenerator, Verdict,
};
use spar_core::{Agent, ArgumentAnalysis, Criterion, DebateSetup, ResponseMetadata, Stance, Winner};

fn analysis_of(metadata: &ResponseMetadata) -> Option<ArgumentAnalysis> {
    match metadata {
        ResponseMetadata::Argument { analysis, .. } => Some(analysis.clone()),
        _ => None,
    }
}

#[test]
fn test_evidence_score_is_exact_with_analysis() {
    let with = ArgumentAnalysis {
        evidence_provided: true,
        ..ArgumentAnalysis::default()
    };
    let without = ArgumentAnalysis::default();

    for word in ["study", "research", "data", "statistics", "evidence"] {
        assert_eq!(score(word, true, Some(&with)).get(Criterion::EvidenceUse), 18);
        assert_eq!(score(word, true, Some(&without)).get(Criterion::EvidenceUse), 8);
    }
}

#[test]
fn test_full_round_through_debater_and_critic() {
    let topic = "Social media platforms should be held responsible for misinformation";
    let setup = DebateSetup::new(topic, Stance::Against);
    let mut debater = Debater::new(setup, RebuttalGenerator::seeded(99));
    let mut critic = Critic::new();

    let argument = "Everyone knows platforms never check facts. \
                    That is obviously a problem for society.";
    let reply = debater.process(argument);
    let analysis = analysis_of(&reply.metadata).expect("debater attaches its analysis");

    assert!(analysis.has_fallacies());
    assert!(analysis.emotional_appeals);
    // agent argues FOR, so its key point "addresses" the consequences
    assert!(reply.content.contains("this approach addresses"));
    assert!(reply.content.contains("overgeneralization"));
    assert!(reply.content.ends_with("\n\nWhat's your response to this perspective?"));

    let exchange = critic.analyze_exchange(argument, &reply.content, Some(&analysis)).clone();
    assert_eq!(exchange.user_scores.get(Criterion::EvidenceUse), 8);
    assert_eq!(exchange.user_feedback, feedback(&exchange.user_scores, argument));
    assert_eq!(exchange.winner, Winner::decide(&exchange.user_scores, &exchange.agent_scores));
}

#[test]
fn test_totals_equal_sum_of_rounds() {
    let setup = DebateSetup::new("AI in healthcare", Stance::For);
    let mut debater = Debater::new(setup, RebuttalGenerator::seeded(5));
    let mut critic = Critic::new();

    let arguments = [
        "AI reads scans quickly.",
        "Research from several hospitals shows fewer missed diagnoses. \
         Therefore AI helps patients.",
        "Consider the benefits for rural clinics because they lack specialists. \
         The impact is significant.",
    ];

    let mut expected_user = 0;
    let mut expected_agent = 0;
    let mut previous_total = 0;
    for argument in arguments {
        let reply = debater.process(argument);
        let analysis = analysis_of(&reply.metadata);
        let exchange = critic.analyze_exchange(argument, &reply.content, analysis.as_ref());

        expected_user += exchange.user_scores.total();
        expected_agent += exchange.agent_scores.total();
        assert!(exchange.running_total_user >= previous_total);
        previous_total = exchange.running_total_user;
    }

    assert_eq!(critic.user_total(), expected_user);
    assert_eq!(critic.agent_total(), expected_agent);
    assert_eq!(debater.summary().total_arguments, 3);
}

#[test]
fn test_evaluation_counts_every_round() {
    let mut critic = Critic::new();
    let strong = "Research and data show clear benefits. Therefore we should consider this \
                  important change, because the impact on patients is significant and the \
                  consequences of waiting are serious for everybody involved in care.";
    let analysis = analyze(strong);
    critic.analyze_exchange(strong, "Short reply.", Some(&analysis));
    critic.analyze_exchange(strong, "Short reply.", Some(&analysis));

    match critic.evaluation() {
        Evaluation::Complete(evaluation) => {
            assert_eq!(evaluation.total_exchanges, 2);
            assert_eq!(evaluation.user_wins, 2);
            assert_eq!(evaluation.overall_winner, Verdict::User);
            assert!(evaluation.final_grade <= Grade::B);
        }
        Evaluation::Empty => panic!("two exchanges were recorded"),
    }
}
