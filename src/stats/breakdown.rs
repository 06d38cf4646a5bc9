//! Per-operator and per-category slices of an answer log.
//!
//! Arithmetic records are grouped by the operator found in their prompt, so
//! a log can be analysed without the problems themselves. Only records from
//! the arithmetic category are scanned; other prompts contain letters such
//! as `x` that would otherwise read as a multiplication.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::player_stats::AnswerRecord;
use crate::problems::{Category, Operator};

/// Counts over a slice of the answer log.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Tally {
    pub total: u32,
    /// Correct and not timed out.
    pub correct: u32,
    /// Wrong answers, timeouts excluded.
    pub errors: u32,
    pub timeouts: u32,
    /// Mean reaction over every record in the slice.
    pub average_reaction: f64,
    /// Fastest correct answer; 0 when there is none.
    pub fastest: u32,
    /// Slowest correct answer; 0 when there is none.
    pub slowest: u32,
}

impl Tally {
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a AnswerRecord>) -> Self {
        let mut tally = Tally::default();
        let mut reaction_sum: u64 = 0;
        let mut fastest: Option<u32> = None;
        let mut slowest: Option<u32> = None;

        for record in records {
            tally.total += 1;
            reaction_sum += u64::from(record.reaction_secs);
            if record.timed_out {
                tally.timeouts += 1;
            } else if record.correct {
                tally.correct += 1;
                fastest = Some(fastest.map_or(record.reaction_secs, |f| f.min(record.reaction_secs)));
                slowest = Some(slowest.map_or(record.reaction_secs, |s| s.max(record.reaction_secs)));
            } else {
                tally.errors += 1;
            }
        }

        if tally.total > 0 {
            tally.average_reaction = reaction_sum as f64 / f64::from(tally.total);
        }
        tally.fastest = fastest.unwrap_or(0);
        tally.slowest = slowest.unwrap_or(0);
        tally
    }

    /// Share of correct answers, `0.0..=1.0`.
    #[must_use]
    pub fn accuracy(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            f64::from(self.correct) / f64::from(self.total)
        }
    }
}

/// Arithmetic records grouped by operator.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OperatorBreakdown {
    pub addition: Tally,
    pub subtraction: Tally,
    pub multiplication: Tally,
    /// Operand most often involved in a wrong sum (1..=20).
    pub most_missed_addend: Option<i64>,
    /// Operand most often involved in a wrong difference (1..=20).
    pub most_missed_subtrahend: Option<i64>,
    /// Multiplication table most often missed (2..=10).
    pub most_missed_table: Option<i64>,
}

impl OperatorBreakdown {
    #[must_use]
    pub fn from_log<'a>(log: impl IntoIterator<Item = &'a AnswerRecord>) -> Self {
        let arithmetic: Vec<&AnswerRecord> = log
            .into_iter()
            .filter(|r| r.category == Category::Arithmetic)
            .collect();
        let with_op = |op: Operator| {
            arithmetic
                .iter()
                .copied()
                .filter(move |r| Operator::from_prompt(&r.prompt) == Some(op))
        };

        Self {
            addition: Tally::from_records(with_op(Operator::Add)),
            subtraction: Tally::from_records(with_op(Operator::Subtract)),
            multiplication: Tally::from_records(with_op(Operator::Multiply)),
            most_missed_addend: most_missed(with_op(Operator::Add), Operator::Add, 1..=20),
            most_missed_subtrahend: most_missed(
                with_op(Operator::Subtract),
                Operator::Subtract,
                1..=20,
            ),
            most_missed_table: most_missed(
                with_op(Operator::Multiply),
                Operator::Multiply,
                2..=10,
            ),
        }
    }

    #[must_use]
    pub fn get(&self, op: Operator) -> &Tally {
        match op {
            Operator::Add => &self.addition,
            Operator::Subtract => &self.subtraction,
            Operator::Multiply => &self.multiplication,
        }
    }

    /// Most-missed operand or table for `op`.
    #[must_use]
    pub fn most_missed(&self, op: Operator) -> Option<i64> {
        match op {
            Operator::Add => self.most_missed_addend,
            Operator::Subtract => self.most_missed_subtrahend,
            Operator::Multiply => self.most_missed_table,
        }
    }
}

/// Operand within `range` that appears most often in wrong, non-timeout
/// answers. Ties go to the smallest value.
fn most_missed<'a>(
    records: impl Iterator<Item = &'a AnswerRecord>,
    op: Operator,
    range: std::ops::RangeInclusive<i64>,
) -> Option<i64> {
    let mut misses: FxHashMap<i64, u32> = FxHashMap::default();
    for record in records.filter(|r| !r.correct && !r.timed_out) {
        if let Some((a, b)) = op.operands(&record.prompt) {
            *misses.entry(a).or_insert(0) += 1;
            *misses.entry(b).or_insert(0) += 1;
        }
    }

    let mut best: Option<(i64, u32)> = None;
    for n in range {
        let count = misses.get(&n).copied().unwrap_or(0);
        if count > best.map_or(0, |(_, c)| c) {
            best = Some((n, count));
        }
    }
    best.map(|(n, _)| n)
}

/// Tallies for every non-arithmetic category present in the log.
#[must_use]
pub fn category_tallies<'a>(
    log: impl IntoIterator<Item = &'a AnswerRecord> + Clone,
) -> Vec<(Category, Tally)> {
    Category::ALL
        .into_iter()
        .filter(|c| *c != Category::Arithmetic)
        .filter_map(|category| {
            let tally =
                Tally::from_records(log.clone().into_iter().filter(|r| r.category == category));
            (tally.total > 0).then_some((category, tally))
        })
        .collect()
}
