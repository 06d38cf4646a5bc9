//! Per-player answer statistics for one match.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::problems::{Category, Problem};

/// One answered (or timed-out) turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerRecord {
    /// This player's own answer count, starting at 1.
    pub turn: u32,
    pub category: Category,
    pub correct: bool,
    pub timed_out: bool,
    /// Seconds from the start of the turn to the answer.
    pub reaction_secs: u32,
    pub prompt: String,
    pub expected: String,
    pub given: String,
    pub explanation: String,
}

/// Counters and the answer log for one player.
///
/// Timeouts count as errors, so `total == correct + errors` always holds.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats {
    /// Correct answers.
    pub correct: u32,

    /// Wrong answers, timeouts included.
    pub errors: u32,

    /// Turns that ran out of time.
    pub timeouts: u32,

    /// Turns answered in total.
    pub total: u32,

    /// Current run of correct answers.
    pub streak: u32,
    pub max_streak: u32,

    /// Current run of errors.
    pub error_streak: u32,
    pub max_error_streak: u32,

    /// Reaction time of every answer, in order. Timeouts record the full turn.
    pub reactions: Vec<u32>,

    /// Fastest correct answer, if any.
    pub fastest: Option<u32>,

    /// Slowest correct answer, if any.
    pub slowest: Option<u32>,

    /// Damage this player's correct answers dealt.
    pub damage_done: u32,

    /// Damage-taken stat. Wrong answers count a nominal amount that can
    /// differ from the life lost.
    pub damage_taken: u32,

    /// Append-only answer history.
    pub log: Vector<AnswerRecord>,
}

impl PlayerStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Record a correct answer that dealt `damage` to the opponent.
    pub fn record_correct(
        &mut self,
        problem: &Problem,
        given: &str,
        reaction_secs: u32,
        damage: u32,
    ) -> &AnswerRecord {
        self.correct += 1;
        self.streak += 1;
        self.max_streak = self.max_streak.max(self.streak);
        self.error_streak = 0;
        self.damage_done += damage;

        self.fastest = Some(self.fastest.map_or(reaction_secs, |f| f.min(reaction_secs)));
        self.slowest = Some(self.slowest.map_or(reaction_secs, |s| s.max(reaction_secs)));

        self.push(problem, given, reaction_secs, true, false)
    }

    /// Record a wrong answer.
    pub fn record_incorrect(
        &mut self,
        problem: &Problem,
        given: &str,
        reaction_secs: u32,
        stat_damage: u32,
    ) -> &AnswerRecord {
        self.record_error(stat_damage);
        self.push(problem, given, reaction_secs, false, false)
    }

    /// Record a turn that ran out of time.
    pub fn record_timeout(
        &mut self,
        problem: &Problem,
        given: &str,
        turn_secs: u32,
        stat_damage: u32,
    ) -> &AnswerRecord {
        self.timeouts += 1;
        self.record_error(stat_damage);
        self.push(problem, given, turn_secs, false, true)
    }

    /// Add to the damage-taken stat for a hit from the opponent.
    pub fn take_hit(&mut self, amount: u32) {
        self.damage_taken += amount;
    }

    fn record_error(&mut self, stat_damage: u32) {
        self.errors += 1;
        self.error_streak += 1;
        self.max_error_streak = self.max_error_streak.max(self.error_streak);
        self.streak = 0;
        self.damage_taken += stat_damage;
    }

    fn push(
        &mut self,
        problem: &Problem,
        given: &str,
        reaction_secs: u32,
        correct: bool,
        timed_out: bool,
    ) -> &AnswerRecord {
        self.total += 1;
        self.reactions.push(reaction_secs);
        self.log.push_back(AnswerRecord {
            turn: self.total,
            category: problem.category,
            correct,
            timed_out,
            reaction_secs,
            prompt: problem.prompt.clone(),
            expected: problem.expected_text(),
            given: given.to_string(),
            explanation: problem.explanation.clone(),
        });
        &self.log[self.log.len() - 1]
    }

    /// Share of correct answers, `0.0..=1.0`. Zero with no answers.
    #[must_use]
    pub fn accuracy(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            f64::from(self.correct) / f64::from(self.total)
        }
    }

    /// Mean reaction over every answer, timeouts included.
    #[must_use]
    pub fn average_reaction(&self) -> f64 {
        if self.reactions.is_empty() {
            0.0
        } else {
            let sum: u64 = self.reactions.iter().map(|&r| u64::from(r)).sum();
            sum as f64 / self.reactions.len() as f64
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::problems::{Answer, InputPolicy, Operator, ProblemDetail};
    use smallvec::SmallVec;

    pub(crate) fn sum_problem(a: i64, b: i64) -> Problem {
        Problem {
            category: Category::Arithmetic,
            prompt: format!("{} + {}", a, b),
            expected: Answer::Number(a + b),
            explanation: format!("{} + {} = {}.", a, b, a + b),
            options: SmallVec::new(),
            input: InputPolicy::Digits { max_len: 3 },
            detail: ProblemDetail::Arithmetic {
                operator: Operator::Add,
                a,
                b,
            },
        }
    }

    #[test]
    fn test_stats_default() {
        let stats = PlayerStats::new();
        assert_eq!(stats.total, 0);
        assert_eq!(stats.accuracy(), 0.0);
        assert_eq!(stats.average_reaction(), 0.0);
        assert!(stats.log.is_empty());
    }

    #[test]
    fn test_record_correct() {
        let mut stats = PlayerStats::new();
        let record = stats.record_correct(&sum_problem(1, 2), "3", 5, 25).clone();

        assert_eq!(record.turn, 1);
        assert!(record.correct);
        assert_eq!(record.expected, "3");
        assert_eq!(record.given, "3");
        assert_eq!(stats.streak, 1);
        assert_eq!(stats.damage_done, 25);
        assert_eq!(stats.fastest, Some(5));
        assert_eq!(stats.slowest, Some(5));
    }

    #[test]
    fn test_streaks_reset_each_other() {
        let mut stats = PlayerStats::new();
        let problem = sum_problem(2, 2);

        stats.record_correct(&problem, "4", 2, 28);
        stats.record_correct(&problem, "4", 3, 27);
        stats.record_incorrect(&problem, "5", 4, 5);
        stats.record_timeout(&problem, "", 30, 10);

        assert_eq!(stats.max_streak, 2);
        assert_eq!(stats.streak, 0);
        assert_eq!(stats.error_streak, 2);
        assert_eq!(stats.max_error_streak, 2);
        assert_eq!(stats.total, stats.correct + stats.errors);
        assert_eq!(stats.timeouts, 1);
        assert_eq!(stats.damage_taken, 15);
    }

    #[test]
    fn test_fastest_slowest_ignore_errors() {
        let mut stats = PlayerStats::new();
        let problem = sum_problem(3, 4);

        stats.record_incorrect(&problem, "8", 1, 5);
        stats.record_correct(&problem, "7", 6, 24);
        stats.record_timeout(&problem, "", 30, 10);
        stats.record_correct(&problem, "7", 9, 21);

        assert_eq!(stats.fastest, Some(6));
        assert_eq!(stats.slowest, Some(9));
        // (1 + 6 + 30 + 9) / 4
        assert_eq!(stats.average_reaction(), 11.5);
        assert_eq!(stats.accuracy(), 0.5);
    }

    #[test]
    fn test_log_turns_count_per_player() {
        let mut stats = PlayerStats::new();
        let problem = sum_problem(1, 1);
        for _ in 0..3 {
            stats.record_incorrect(&problem, "3", 2, 5);
        }
        let turns: Vec<u32> = stats.log.iter().map(|r| r.turn).collect();
        assert_eq!(turns, vec![1, 2, 3]);
    }
}
