//! End-of-match report for the presentation layer.

use serde::{Deserialize, Serialize};

use super::breakdown::OperatorBreakdown;
use super::medals::{Medal, MedalEvaluator};
use super::player_stats::PlayerStats;
use super::summary::StatsSummary;
use crate::core::{PlayerId, PlayerMap};
use crate::rules::MatchResult;

/// Everything shown for one player after a match.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerReport {
    pub player: PlayerId,
    /// Display label (name or chosen character).
    pub label: String,
    pub won: bool,
    pub summary: StatsSummary,
    pub operators: OperatorBreakdown,
    pub medals: Vec<Medal>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchReport {
    /// `None` while the match is still running.
    pub outcome: Option<MatchResult>,
    pub players: PlayerMap<PlayerReport>,
}

impl MatchReport {
    /// Build a report with the default medal rules.
    #[must_use]
    pub fn build(
        stats: &PlayerMap<PlayerStats>,
        outcome: Option<MatchResult>,
        labels: &PlayerMap<String>,
    ) -> Self {
        Self::build_with(&MedalEvaluator::new(), stats, outcome, labels)
    }

    #[must_use]
    pub fn build_with(
        evaluator: &MedalEvaluator,
        stats: &PlayerMap<PlayerStats>,
        outcome: Option<MatchResult>,
        labels: &PlayerMap<String>,
    ) -> Self {
        let players = stats.map(|player, s| PlayerReport {
            player,
            label: labels[player].clone(),
            won: outcome.is_some_and(|r| r.is_winner(player)),
            summary: StatsSummary::from_stats(s),
            operators: OperatorBreakdown::from_log(&s.log),
            medals: evaluator.evaluate(s, player, outcome),
        });
        Self { outcome, players }
    }

    #[must_use]
    pub fn player(&self, player: PlayerId) -> &PlayerReport {
        &self.players[player]
    }
}
