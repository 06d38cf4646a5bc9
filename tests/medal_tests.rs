//! Medal evaluation over played matches.
//!
//! These tests play scripted duels and check the feedback both players get:
//! - Outcome medals only once the match is over
//! - Accuracy medals per arithmetic operator
//! - The end-of-match report

use math_duel::core::{MatchConfig, PlayerId, ScriptedRng};
use math_duel::game::Match;
use math_duel::problems::{ArithmeticGenerator, Operator, OperatorSet};
use math_duel::rules::MatchResult;
use math_duel::stats::{Badge, MedalEvaluator, MedalTone};

/// Every problem is `3 × 4`.
fn three_times_four(max_life: u32) -> Match<ArithmeticGenerator> {
    let generator = ArithmeticGenerator::with_operators(OperatorSet::only(Operator::Multiply));
    let config = MatchConfig::default().with_max_life(max_life);
    Match::with_rng(generator, config, ScriptedRng::new(vec![0, 3, 4])).unwrap()
}

/// Play until the match ends: player 1 answers right, player 2 wrong.
fn play_out(duel: &mut Match<ArithmeticGenerator>) {
    while !duel.is_over() {
        let answer = if duel.active_player() == PlayerId::new(0) { "12" } else { "7" };
        duel.submit_answer(answer, 29);
        duel.advance_turn();
    }
}

/// Test that the outcome medal waits for the end of the match.
#[test]
fn test_outcome_medal_only_at_end() {
    let mut duel = three_times_four(100);
    duel.submit_answer("12", 29);

    let early = duel.medals(PlayerId::new(0));
    assert!(!early.iter().any(|m| m.badge == Badge::Winner));

    duel.advance_turn();
    play_out(&mut duel);

    let winner = duel.medals(PlayerId::new(0));
    assert!(winner.iter().any(|m| m.badge == Badge::Winner));
    let loser = duel.medals(PlayerId::new(1));
    assert!(loser.iter().any(|m| m.badge == Badge::NotWinner));
}

/// Test per-operator medals for a strong and a weak player.
#[test]
fn test_multiplication_medals() {
    let mut duel = three_times_four(200);
    play_out(&mut duel);

    let strong = duel.medals(PlayerId::new(0));
    assert_eq!(strong[0].badge, Badge::OperatorMastered(Operator::Multiply));
    assert_eq!(strong[0].tone, MedalTone::Good);

    let weak = duel.medals(PlayerId::new(1));
    assert_eq!(weak[0].badge, Badge::OperatorNeedsWork(Operator::Multiply));
    assert!(weak[0].text.contains("3 times table"), "{}", weak[0].text);
    assert!(weak.iter().any(|m| m.badge == Badge::ErrorStreak));
}

/// Test the report built at the end of a match.
#[test]
fn test_end_of_match_report() {
    let mut duel = three_times_four(60);
    play_out(&mut duel);

    let report = duel.report();
    assert_eq!(report.outcome, Some(MatchResult::Winner(PlayerId::new(0))));

    let first = report.player(PlayerId::new(0));
    assert_eq!(first.summary.percent, 100);
    assert_eq!(first.operators.multiplication.correct, first.summary.correct);
    assert_eq!(first.label, "Player 1");

    let second = report.player(PlayerId::new(1));
    assert_eq!(second.summary.percent, 0);
    assert_eq!(second.operators.most_missed_table, Some(3));
}

/// Test that the evaluator can be called directly on live stats.
#[test]
fn test_evaluate_mid_match() {
    let mut duel = three_times_four(300);
    duel.submit_answer("12", 28);

    let stats = duel.stats(PlayerId::new(0));
    let medals = MedalEvaluator::new().evaluate(stats, PlayerId::new(0), None);
    assert_eq!(medals[0].badge, Badge::OperatorMastered(Operator::Multiply));
    assert!(medals.iter().any(|m| m.badge == Badge::Excellent));
    assert!(!medals
        .iter()
        .any(|m| matches!(m.badge, Badge::Winner | Badge::NotWinner | Badge::Draw)));
}
