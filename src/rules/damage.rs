//! Damage rules.
//!
//! A correct answer hits the opponent for a share of `max_hit` proportional
//! to the time left, never less than `min_hit`. A wrong answer or a timeout
//! costs the answering player a fixed `penalty`.
//!
//! The stats log records a separate, nominal "damage taken" for wrong
//! answers (`wrong_answer_stat`). It is kept apart from the life actually
//! removed so both numbers stay visible.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageRules {
    /// Damage for an instant correct answer.
    pub max_hit: u32,
    /// Floor for a correct answer given at the last second.
    pub min_hit: u32,
    /// Life a player loses for a wrong answer or a timeout.
    pub penalty: u32,
    /// Damage-taken stat recorded for a wrong (non-timeout) answer.
    pub wrong_answer_stat: u32,
}

impl Default for DamageRules {
    fn default() -> Self {
        Self {
            max_hit: 30,
            min_hit: 5,
            penalty: 10,
            wrong_answer_stat: 5,
        }
    }
}

/// Damage resolved for one settled turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hit {
    /// Life to remove from the target.
    pub life_delta: u32,
    /// Amount added to the target's damage-taken stat.
    pub stat_damage_taken: u32,
}

impl DamageRules {
    /// Damage for a correct answer: `max(min_hit, round(max_hit * remaining / turn_secs))`.
    ///
    /// Rounds half up. `remaining` above `turn_secs` is clamped.
    ///
    /// ```
    /// use math_duel::rules::DamageRules;
    ///
    /// let rules = DamageRules::default();
    /// assert_eq!(rules.correct_hit(25, 30).life_delta, 25);
    /// assert_eq!(rules.correct_hit(0, 30).life_delta, 5);
    /// ```
    #[must_use]
    pub fn correct_hit(&self, remaining: u32, turn_secs: u32) -> Hit {
        let turn = u64::from(turn_secs.max(1));
        let remaining = u64::from(remaining.min(turn_secs));
        let scaled = (2 * u64::from(self.max_hit) * remaining + turn) / (2 * turn);
        let damage = (scaled as u32).max(self.min_hit);
        Hit {
            life_delta: damage,
            stat_damage_taken: damage,
        }
    }

    /// Self-inflicted damage for a wrong answer.
    #[must_use]
    pub fn wrong_answer(&self) -> Hit {
        Hit {
            life_delta: self.penalty,
            stat_damage_taken: self.wrong_answer_stat,
        }
    }

    /// Self-inflicted damage for running out of time.
    #[must_use]
    pub fn timeout(&self) -> Hit {
        Hit {
            life_delta: self.penalty,
            stat_damage_taken: self.penalty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_correct_hit_scales_with_time() {
        let rules = DamageRules::default();

        assert_eq!(rules.correct_hit(30, 30).life_delta, 30);
        assert_eq!(rules.correct_hit(25, 30).life_delta, 25);
        assert_eq!(rules.correct_hit(15, 30).life_delta, 15);
        assert_eq!(rules.correct_hit(1, 30).life_delta, 5);
    }

    #[test]
    fn test_correct_hit_rounds_half_up() {
        let rules = DamageRules::default();
        // 30 * 1 / 20 = 1.5 -> 2, floored to min_hit
        assert_eq!(rules.correct_hit(1, 20).life_delta, 5);
        // 30 * 7 / 20 = 10.5 -> 11
        assert_eq!(rules.correct_hit(7, 20).life_delta, 11);
    }

    #[test]
    fn test_correct_hit_clamps_remaining() {
        let rules = DamageRules::default();
        assert_eq!(rules.correct_hit(90, 30).life_delta, 30);
    }

    #[test]
    fn test_wrong_answer_keeps_nominal_stat() {
        let hit = DamageRules::default().wrong_answer();
        assert_eq!(hit.life_delta, 10);
        assert_eq!(hit.stat_damage_taken, 5);
    }

    #[test]
    fn test_timeout_stat_matches_life() {
        let hit = DamageRules::default().timeout();
        assert_eq!(hit.life_delta, 10);
        assert_eq!(hit.stat_damage_taken, 10);
    }
}
