//! Post-match medals.
//!
//! `MedalEvaluator` turns a player's answer history into an ordered list of
//! qualitative badges. Rules fire independently, in a fixed order:
//!
//! 1. Accuracy and speed per arithmetic operator
//! 2. Accuracy and speed per other category present in the log
//! 3. General patterns (streaks, timeouts, impulsive answering, ...)
//! 4. The match outcome, when one is supplied
//!
//! If nothing fires, a single fallback medal grades overall accuracy.
//!
//! ## Example
//!
//! ```
//! use math_duel::core::PlayerId;
//! use math_duel::stats::{MedalEvaluator, PlayerStats};
//!
//! let medals = MedalEvaluator::new().evaluate(&PlayerStats::new(), PlayerId::new(0), None);
//! assert_eq!(medals.len(), 1);
//! assert_eq!(medals[0].label, "No answers");
//! ```

use serde::{Deserialize, Serialize};

use super::breakdown::{category_tallies, OperatorBreakdown, Tally};
use super::player_stats::PlayerStats;
use super::summary::StatsSummary;
use crate::core::PlayerId;
use crate::problems::{Category, Operator};
use crate::rules::MatchResult;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MedalTone {
    Good,
    Bad,
}

/// Stable identifier for each medal rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Badge {
    NoAnswers,
    OperatorMastered(Operator),
    OperatorNeedsWork(Operator),
    OperatorAcceptable(Operator),
    OperatorSlow(Operator),
    CategoryMastered(Category),
    CategoryNeedsWork(Category),
    CategorySlow(Category),
    Impulsive,
    Excellent,
    HighPrecision,
    LowPrecisionAndSpeed,
    ManyTimeouts,
    ErrorStreak,
    SuccessStreak,
    Winner,
    NotWinner,
    Draw,
    VariableTimes,
    NoRealAttempts,
    PerfectAndFast,
    PerfectButSlow,
    RushedErrors,
    ErrorsAndSlow,
    ErrorsWithoutTimeouts,
    ErrorsAndTimeouts,
    GoodPerformance,
    CanImprove,
    NeedsPractice,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Medal {
    pub tone: MedalTone,
    pub badge: Badge,
    /// Short title.
    pub label: String,
    /// Full message for the player.
    pub text: String,
}

impl Medal {
    fn new(
        tone: MedalTone,
        badge: Badge,
        label: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            tone,
            badge,
            label: label.into(),
            text: text.into(),
        }
    }

    fn good(badge: Badge, label: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(MedalTone::Good, badge, label, text)
    }

    fn bad(badge: Badge, label: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(MedalTone::Bad, badge, label, text)
    }
}

/// Cut-offs used by the medal rules.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MedalThresholds {
    /// Accuracy at or above which a topic counts as mastered.
    pub mastered: f64,
    /// Accuracy below which a topic needs work.
    pub needs_work: f64,
    /// Average reaction above which answers count as slow.
    pub slow_secs: f64,
    /// Average reaction at or below which answers count as very fast.
    pub fast_secs: f64,
    /// Average reaction allowed for the "excellent" medal.
    pub excellent_secs: f64,
    /// Errors allowed for the "excellent" medal.
    pub excellent_max_errors: u32,
    /// Reaction at or below which a single answer is "quick".
    pub quick_secs: u32,
    /// Streak length that earns a streak medal.
    pub streak: u32,
    /// Share of quick answers that makes answering look impulsive.
    pub impulsive_share: f64,
    /// Percent below which quick answering is impulsive.
    pub impulsive_percent: u32,
    /// Share of timeouts, of all answers, that counts as many.
    pub timeout_share: f64,
    /// Timeouts that always count as many.
    pub min_timeouts: u32,
    /// Spread between fastest and slowest correct answer that counts as variable.
    pub variable_spread: u32,
    /// Percent for "excellent", "high precision" and "good performance" style rules.
    pub high_percent: u32,
    /// Percent below which the low-accuracy rules fire.
    pub low_percent: u32,
    /// Percent for the "good performance" fallback and "variable times".
    pub good_percent: u32,
    /// Percent for the "can improve" fallback.
    pub improve_percent: u32,
}

impl Default for MedalThresholds {
    fn default() -> Self {
        Self {
            mastered: 0.8,
            needs_work: 0.5,
            slow_secs: 7.0,
            fast_secs: 3.0,
            excellent_secs: 5.0,
            excellent_max_errors: 2,
            quick_secs: 2,
            streak: 3,
            impulsive_share: 0.7,
            impulsive_percent: 40,
            timeout_share: 0.3,
            min_timeouts: 2,
            variable_spread: 10,
            high_percent: 80,
            low_percent: 50,
            good_percent: 70,
            improve_percent: 40,
        }
    }
}

impl MedalThresholds {
    /// Set the mastered and needs-work accuracy cut-offs (0.0..=1.0).
    #[must_use]
    pub fn with_accuracy(mut self, mastered: f64, needs_work: f64) -> Self {
        self.mastered = mastered;
        self.needs_work = needs_work;
        self
    }

    #[must_use]
    pub fn with_slow_secs(mut self, secs: f64) -> Self {
        self.slow_secs = secs;
        self
    }

    #[must_use]
    pub fn with_streak(mut self, streak: u32) -> Self {
        self.streak = streak;
        self
    }
}

/// Accuracy tier for one topic.
enum Tier {
    Mastered,
    NeedsWork,
    Acceptable,
}

#[derive(Clone, Debug, Default)]
pub struct MedalEvaluator {
    thresholds: MedalThresholds,
}

impl MedalEvaluator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_thresholds(mut self, thresholds: MedalThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    #[must_use]
    pub fn thresholds(&self) -> &MedalThresholds {
        &self.thresholds
    }

    /// Medals for `player`. `outcome` adds a win, loss or draw medal.
    #[must_use]
    pub fn evaluate(
        &self,
        stats: &PlayerStats,
        player: PlayerId,
        outcome: Option<MatchResult>,
    ) -> Vec<Medal> {
        let t = &self.thresholds;
        let s = StatsSummary::from_stats(stats);
        if s.total == 0 {
            return vec![Medal::bad(
                Badge::NoAnswers,
                "No answers",
                "No answers were recorded for this player.",
            )];
        }

        let mut medals = Vec::new();

        let breakdown = OperatorBreakdown::from_log(&stats.log);
        for op in Operator::ALL {
            self.operator_medals(op, &breakdown, &mut medals);
        }
        for (category, tally) in category_tallies(&stats.log) {
            self.category_medals(category, &tally, &mut medals);
        }

        let quick = stats
            .log
            .iter()
            .filter(|r| !r.timed_out && r.reaction_secs <= t.quick_secs)
            .count() as u32;
        let avg = s.average_reaction;
        let slow = avg > t.slow_secs;
        let fast = avg <= t.fast_secs;
        let low = s.percent < t.low_percent;

        if f64::from(quick) >= f64::from(s.total) * t.impulsive_share
            && s.percent < t.impulsive_percent
        {
            medals.push(Medal::bad(
                Badge::Impulsive,
                "Impulsive answers",
                "You answered very quickly but most answers were wrong. Maybe you were just pressing OK without trying to solve the exercises.",
            ));
        }
        if s.percent >= t.high_percent
            && avg <= t.excellent_secs
            && s.errors <= t.excellent_max_errors
        {
            medals.push(Medal::good(
                Badge::Excellent,
                "Excellent performance!",
                "Excellent overall performance! You answered most exercises correctly and quickly.",
            ));
        }
        if s.percent >= t.high_percent && slow {
            medals.push(Medal::good(
                Badge::HighPrecision,
                "High precision",
                "Your accuracy is very good, but try answering a little faster to sharpen your mental agility.",
            ));
        }
        if low && slow {
            medals.push(Medal::bad(
                Badge::LowPrecisionAndSpeed,
                "Low precision and speed",
                "You struggled with both accuracy and speed. Review the topics and practise to improve understanding and pace.",
            ));
        }

        let many_timeouts =
            t.min_timeouts.max((f64::from(s.total) * t.timeout_share).round() as u32);
        if s.timeouts >= many_timeouts {
            medals.push(Medal::bad(
                Badge::ManyTimeouts,
                "Many timeouts",
                "You left several questions unanswered. Try to stay focused and not leave questions blank.",
            ));
        }
        if s.max_error_streak >= t.streak {
            medals.push(Medal::bad(
                Badge::ErrorStreak,
                "Error streak",
                "You had several wrong answers in a row. If you get stuck, take a moment to think before answering.",
            ));
        }
        if s.max_streak >= t.streak {
            medals.push(Medal::good(
                Badge::SuccessStreak,
                "Success streak",
                "You got a great run of correct answers! That shows focus and mastery.",
            ));
        }

        match outcome {
            Some(result) if result.is_winner(player) => medals.push(Medal::good(
                Badge::Winner,
                "Winner!",
                "Congratulations, you won the match!",
            )),
            Some(MatchResult::Winner(_)) => medals.push(Medal::bad(
                Badge::NotWinner,
                "Not this time",
                "You didn't win this time, but you can improve with more practice.",
            )),
            Some(MatchResult::Draw) => medals.push(Medal::good(
                Badge::Draw,
                "Draw",
                "The match ended in a draw.",
            )),
            None => {}
        }

        if s.percent >= t.good_percent
            && s.slowest.saturating_sub(s.fastest) > t.variable_spread
            && s.fastest > 0
        {
            medals.push(Medal::bad(
                Badge::VariableTimes,
                "Variable times",
                "Your response times varied a lot. Try to keep a steady pace.",
            ));
        }
        if s.percent == 0 && quick == s.total {
            medals.push(Medal::bad(
                Badge::NoRealAttempts,
                "No real attempts",
                "Every answer was wrong and very fast. You probably didn't try to solve the exercises.",
            ));
        }
        if s.percent == 100 && fast {
            medals.push(Medal::good(
                Badge::PerfectAndFast,
                "Perfect and fast!",
                "You answered everything correctly and very quickly! Excellent mental agility.",
            ));
        }
        if s.percent == 100 && slow {
            medals.push(Medal::good(
                Badge::PerfectButSlow,
                "Perfect but slow!",
                "All your answers were correct! If you get faster, you'll be unstoppable.",
            ));
        }
        if low && fast {
            medals.push(Medal::bad(
                Badge::RushedErrors,
                "Rushed errors",
                "You answered very fast but made many mistakes. Take a little more time to think before answering.",
            ));
        }
        if low && slow {
            medals.push(Medal::bad(
                Badge::ErrorsAndSlow,
                "Errors and slow",
                "You made several mistakes and your reaction time was high. Review the topics and keep practising.",
            ));
        }
        if low && s.errors > s.timeouts && s.timeouts == 0 {
            medals.push(Medal::bad(
                Badge::ErrorsWithoutTimeouts,
                "Errors but no timeouts",
                "You made several mistakes but at least you tried to answer every question. Review the topics to improve your accuracy.",
            ));
        }
        if low && s.timeouts > 0 && s.errors > 0 {
            medals.push(Medal::bad(
                Badge::ErrorsAndTimeouts,
                "Errors and timeouts",
                "You made several mistakes and left questions unanswered. Try to stay calm and not leave questions blank.",
            ));
        }

        if medals.is_empty() {
            medals.push(self.fallback(s.percent));
        }
        medals
    }

    fn tier(&self, tally: &Tally) -> Tier {
        let accuracy = tally.accuracy();
        if accuracy >= self.thresholds.mastered {
            Tier::Mastered
        } else if accuracy < self.thresholds.needs_work {
            Tier::NeedsWork
        } else {
            Tier::Acceptable
        }
    }

    fn operator_medals(
        &self,
        op: Operator,
        breakdown: &OperatorBreakdown,
        medals: &mut Vec<Medal>,
    ) {
        let tally = breakdown.get(op);
        if tally.total == 0 {
            return;
        }
        let topic = capitalize(op.label());

        medals.push(match self.tier(tally) {
            Tier::Mastered => Medal::good(
                Badge::OperatorMastered(op),
                format!("{} mastered", topic),
                format!(
                    "Great work on {}! You solved most of them correctly.",
                    op.label()
                ),
            ),
            Tier::NeedsWork => {
                let text = match (op, breakdown.most_missed(op)) {
                    (Operator::Multiply, Some(table)) => format!(
                        "Multiplication was your biggest challenge, especially the {} times table. Review and practise the {} times table.",
                        table, table
                    ),
                    (_, Some(n)) => format!(
                        "{} looks like an area to work on, especially with the number {}. Practise {} that include {}.",
                        topic, n, op.label(), n
                    ),
                    (_, None) => format!(
                        "{} looks like an area to work on. Review the basics and practise more exercises.",
                        topic
                    ),
                };
                Medal::bad(Badge::OperatorNeedsWork(op), format!("{} needs work", topic), text)
            }
            Tier::Acceptable => Medal::bad(
                Badge::OperatorAcceptable(op),
                format!("{} acceptable", topic),
                format!(
                    "Your results in {} are acceptable, but you can improve further with practice.",
                    op.label()
                ),
            ),
        });

        if tally.average_reaction > self.thresholds.slow_secs {
            medals.push(Medal::bad(
                Badge::OperatorSlow(op),
                format!("Slow {}", op.label()),
                format!(
                    "In {}, try answering a little faster to build agility.",
                    op.label()
                ),
            ));
        }
    }

    /// Non-arithmetic categories only report the outer tiers, so a middling
    /// result there leaves room for the fallback medal.
    fn category_medals(&self, category: Category, tally: &Tally, medals: &mut Vec<Medal>) {
        let topic = capitalize(category.label());

        match self.tier(tally) {
            Tier::Mastered => medals.push(Medal::good(
                Badge::CategoryMastered(category),
                format!("{} mastered", topic),
                format!(
                    "Great work on {}! You answered most of them correctly.",
                    category.label()
                ),
            )),
            Tier::NeedsWork => medals.push(Medal::bad(
                Badge::CategoryNeedsWork(category),
                format!("{} needs work", topic),
                format!(
                    "{} looks like an area to work on. Review the explanations and practise more.",
                    topic
                ),
            )),
            Tier::Acceptable => {}
        }

        if tally.average_reaction > self.thresholds.slow_secs {
            medals.push(Medal::bad(
                Badge::CategorySlow(category),
                format!("Slow {}", category.label()),
                format!(
                    "In {}, try answering a little faster to build agility.",
                    category.label()
                ),
            ));
        }
    }

    fn fallback(&self, percent: u32) -> Medal {
        if percent >= self.thresholds.good_percent {
            Medal::good(
                Badge::GoodPerformance,
                "Good performance",
                "Good overall performance. Keep practising to improve even more.",
            )
        } else if percent >= self.thresholds.improve_percent {
            Medal::bad(
                Badge::CanImprove,
                "Room to improve",
                "You can improve your accuracy and speed with more practice.",
            )
        } else {
            Medal::bad(
                Badge::NeedsPractice,
                "Needs practice",
                "Review the topics and practise more to improve your results.",
            )
        }
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
