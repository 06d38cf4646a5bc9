//! Headline numbers derived from `PlayerStats`.

use serde::{Deserialize, Serialize};

use super::player_stats::PlayerStats;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StatsSummary {
    pub total: u32,
    pub correct: u32,
    pub errors: u32,
    pub timeouts: u32,
    /// Rounded share of correct answers, 0..=100.
    pub percent: u32,
    /// Mean reaction over all answers, in seconds.
    pub average_reaction: f64,
    /// Fastest correct answer; 0 when there is none.
    pub fastest: u32,
    /// Slowest correct answer; 0 when there is none.
    pub slowest: u32,
    pub max_streak: u32,
    pub max_error_streak: u32,
    pub damage_done: u32,
    pub damage_taken: u32,
}

impl StatsSummary {
    #[must_use]
    pub fn from_stats(stats: &PlayerStats) -> Self {
        Self {
            total: stats.total,
            correct: stats.correct,
            errors: stats.errors,
            timeouts: stats.timeouts,
            percent: percent(stats.correct, stats.total),
            average_reaction: stats.average_reaction(),
            fastest: stats.fastest.unwrap_or(0),
            slowest: stats.slowest.unwrap_or(0),
            max_streak: stats.max_streak,
            max_error_streak: stats.max_error_streak,
            damage_done: stats.damage_done,
            damage_taken: stats.damage_taken,
        }
    }
}

/// `round(part / total * 100)`, half away from zero. Zero when `total` is 0.
pub(crate) fn percent(part: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    let (part, total) = (u64::from(part), u64::from(total));
    ((200 * part + total) / (2 * total)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::player_stats::tests::sum_problem;

    #[test]
    fn test_percent_rounding() {
        assert_eq!(percent(0, 0), 0);
        assert_eq!(percent(1, 3), 33);
        assert_eq!(percent(2, 3), 67);
        assert_eq!(percent(1, 8), 13);
        assert_eq!(percent(5, 5), 100);
    }

    #[test]
    fn test_summary_from_stats() {
        let mut stats = PlayerStats::new();
        let problem = sum_problem(1, 2);
        stats.record_correct(&problem, "3", 5, 25);
        stats.record_incorrect(&problem, "4", 3, 5);
        stats.record_timeout(&problem, "", 30, 10);

        let summary = StatsSummary::from_stats(&stats);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.percent, 33);
        assert!((summary.average_reaction - 38.0 / 3.0).abs() < 1e-9);
        assert_eq!(summary.fastest, 5);
        assert_eq!(summary.slowest, 5);
        assert_eq!(summary.timeouts, 1);
        assert_eq!(summary.damage_taken, 15);
    }

    #[test]
    fn test_empty_summary() {
        let summary = StatsSummary::from_stats(&PlayerStats::new());
        assert_eq!(summary, StatsSummary::default());
    }
}
