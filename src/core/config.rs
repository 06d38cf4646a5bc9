//! Match configuration.
//!
//! A match is configured at startup with `MatchConfig`:
//! - Starting (and maximum) life
//! - Turn duration in seconds
//! - Damage rules
//! - Display names for both seats

use serde::{Deserialize, Serialize};

use super::error::{DuelError, DuelResult};
use super::player::{PlayerId, PlayerMap};
use crate::rules::DamageRules;

/// Starting life for each player.
pub const DEFAULT_MAX_LIFE: u32 = 300;

/// Seconds a player has to answer.
pub const DEFAULT_TURN_SECS: u32 = 30;

/// Complete match configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Life each player starts (and restarts) with.
    pub max_life: u32,

    /// Seconds available per turn.
    pub turn_secs: u32,

    /// How correctness and speed translate into damage.
    pub damage: DamageRules,

    /// Display names, indexed by seat.
    pub player_names: PlayerMap<String>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_life: DEFAULT_MAX_LIFE,
            turn_secs: DEFAULT_TURN_SECS,
            damage: DamageRules::default(),
            player_names: PlayerMap::new(|p| p.to_string()),
        }
    }
}

impl MatchConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the starting life.
    #[must_use]
    pub fn with_max_life(mut self, life: u32) -> Self {
        self.max_life = life;
        self
    }

    /// Set the turn duration in seconds.
    #[must_use]
    pub fn with_turn_secs(mut self, secs: u32) -> Self {
        self.turn_secs = secs;
        self
    }

    /// Replace the damage rules.
    #[must_use]
    pub fn with_damage(mut self, damage: DamageRules) -> Self {
        self.damage = damage;
        self
    }

    /// Set a player's display name.
    #[must_use]
    pub fn with_player_name(mut self, player: PlayerId, name: impl Into<String>) -> Self {
        self.player_names[player] = name.into();
        self
    }

    /// Check that the configuration can drive a match.
    pub fn validate(&self) -> DuelResult<()> {
        if self.max_life == 0 {
            return Err(DuelError::InvalidConfig("max_life must be positive".into()));
        }
        if self.turn_secs == 0 {
            return Err(DuelError::InvalidConfig("turn_secs must be positive".into()));
        }
        if self.damage.min_hit == 0 {
            return Err(DuelError::InvalidConfig(
                "min_hit must be positive so every correct answer costs life".into(),
            ));
        }
        if self.damage.penalty == 0 {
            return Err(DuelError::InvalidConfig(
                "penalty must be positive so every miss costs life".into(),
            ));
        }
        if self.damage.min_hit > self.damage.max_hit {
            return Err(DuelError::InvalidConfig(format!(
                "min_hit ({}) exceeds max_hit ({})",
                self.damage.min_hit, self.damage.max_hit
            )));
        }
        Ok(())
    }
}
