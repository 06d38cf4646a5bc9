//! Number patterns: find the missing term or the one that comes next.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::generator::{parse_whole, ProblemGenerator};
use super::problem::{Answer, Category, InputPolicy, Problem, ProblemDetail};
use crate::core::RandomSource;

/// Terms shown to the player.
pub const TERMS: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SequenceRule {
    Arithmetic { step: i64 },
    Geometric { factor: i64 },
    Even,
    Odd,
    /// Each term is the sum of the two before it.
    Fibonacci,
}

impl SequenceRule {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            SequenceRule::Arithmetic { .. } => "Arithmetic sequence",
            SequenceRule::Geometric { .. } => "Geometric sequence",
            SequenceRule::Even => "Even numbers",
            SequenceRule::Odd => "Odd numbers",
            SequenceRule::Fibonacci => "Fibonacci sequence",
        }
    }

    /// The term that follows `terms`.
    #[must_use]
    pub fn next_after(self, terms: &[i64]) -> i64 {
        let last = terms.last().copied().unwrap_or(0);
        match self {
            SequenceRule::Arithmetic { step } => last + step,
            SequenceRule::Geometric { factor } => last * factor,
            SequenceRule::Even | SequenceRule::Odd => last + 2,
            SequenceRule::Fibonacci => {
                let before = terms.len().checked_sub(2).map_or(0, |i| terms[i]);
                before + last
            }
        }
    }

    fn describe(self) -> String {
        match self {
            SequenceRule::Arithmetic { step } => {
                format!("Each number is the previous one plus {}.", step)
            }
            SequenceRule::Geometric { factor } => {
                format!("Each number is the previous one times {}.", factor)
            }
            SequenceRule::Even | SequenceRule::Odd => {
                "Each number is the previous one plus 2.".to_string()
            }
            SequenceRule::Fibonacci => "Each number is the sum of the two before it.".to_string(),
        }
    }

    fn how_next(self, terms: &[i64], next: i64) -> String {
        let last = terms[terms.len() - 1];
        match self {
            SequenceRule::Arithmetic { step } => format!("{} + {} = {}", last, step, next),
            SequenceRule::Geometric { factor } => format!("{} × {} = {}", last, factor, next),
            SequenceRule::Even | SequenceRule::Odd => format!("{} + 2 = {}", last, next),
            SequenceRule::Fibonacci => {
                format!("{} + {} = {}", terms[terms.len() - 2], last, next)
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SequenceAsk {
    /// Zero-based index of the hidden term.
    Missing(usize),
    Next,
}

fn ordinal(n: usize) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{}{}", n, suffix)
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SequenceGenerator;

impl SequenceGenerator {
    fn draw_terms(rng: &mut dyn RandomSource) -> (SequenceRule, Vec<i64>) {
        match rng.int_in(0, 4) {
            0 => {
                let start = rng.int_in(1, 20);
                let step = rng.int_in(2, 6);
                let terms = (0..TERMS as i64).map(|i| start + i * step).collect();
                (SequenceRule::Arithmetic { step }, terms)
            }
            1 => {
                let start = rng.int_in(1, 5);
                let factor = rng.int_in(2, 4);
                let terms = (0..TERMS as u32).map(|i| start * factor.pow(i)).collect();
                (SequenceRule::Geometric { factor }, terms)
            }
            2 => {
                let start = 2 * rng.int_in(2, 10);
                let terms = (0..TERMS as i64).map(|i| start + 2 * i).collect();
                (SequenceRule::Even, terms)
            }
            3 => {
                let start = 2 * rng.int_in(1, 10) - 1;
                let terms = (0..TERMS as i64).map(|i| start + 2 * i).collect();
                (SequenceRule::Odd, terms)
            }
            _ => {
                let mut terms = vec![rng.int_in(1, 5), rng.int_in(1, 5)];
                while terms.len() < TERMS {
                    let next = SequenceRule::Fibonacci.next_after(&terms);
                    terms.push(next);
                }
                (SequenceRule::Fibonacci, terms)
            }
        }
    }
}

impl ProblemGenerator for SequenceGenerator {
    fn category(&self) -> Category {
        Category::Sequence
    }

    fn generate(&self, rng: &mut dyn RandomSource) -> Problem {
        let missing = rng.coin();
        let (rule, terms) = Self::draw_terms(rng);

        let (ask, expected, shown, question, how) = if missing {
            let index = match rule {
                SequenceRule::Fibonacci => rng.int_in(2, 4),
                _ => rng.int_in(1, 3),
            } as usize;
            let shown: Vec<String> = terms
                .iter()
                .enumerate()
                .map(|(i, t)| if i == index { "?".to_string() } else { t.to_string() })
                .collect();
            (
                SequenceAsk::Missing(index),
                terms[index],
                shown,
                "Which number is missing?",
                format!("The missing number is the {} term.", ordinal(index + 1)),
            )
        } else {
            let next = rule.next_after(&terms);
            let shown: Vec<String> = terms.iter().map(i64::to_string).collect();
            (
                SequenceAsk::Next,
                next,
                shown,
                "Which number comes next?",
                format!("The next number is {}.", rule.how_next(&terms, next)),
            )
        };

        Problem {
            category: Category::Sequence,
            prompt: format!("Sequence: {}. {}", shown.join(", "), question),
            expected: Answer::Number(expected),
            explanation: format!("{} {}", rule.describe(), how),
            options: SmallVec::new(),
            input: InputPolicy::Digits { max_len: 4 },
            detail: ProblemDetail::Sequence { rule, terms, ask },
        }
    }

    fn validate(&self, input: &str, problem: &Problem) -> bool {
        match problem.expected {
            Answer::Number(n) => parse_whole(input) == Some(n),
            _ => false,
        }
    }
}
