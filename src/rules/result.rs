//! Match outcome.

use serde::{Deserialize, Serialize};

use crate::core::{Player, PlayerId, PlayerMap};

/// Result of a completed match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchResult {
    /// Single winner.
    Winner(PlayerId),
    /// Nobody left standing.
    Draw,
}

impl MatchResult {
    /// Decide the match from current life totals.
    ///
    /// Returns `None` while both players are alive.
    #[must_use]
    pub fn from_players(players: &PlayerMap<Player>) -> Option<Self> {
        let alive: Vec<PlayerId> = players
            .iter()
            .filter(|(_, p)| p.is_alive())
            .map(|(id, _)| id)
            .collect();

        match alive.as_slice() {
            [] => Some(MatchResult::Draw),
            [winner] => Some(MatchResult::Winner(*winner)),
            _ => None,
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, MatchResult::Winner(p) if *p == player)
    }

    /// The winning seat, if any.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            MatchResult::Winner(p) => Some(*p),
            MatchResult::Draw => None,
        }
    }
}
