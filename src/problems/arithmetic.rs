//! Sums, differences and products.
//!
//! Operand ranges:
//! - addition: 1..=20 each
//! - subtraction: minuend 1..=20, subtrahend 1..=minuend (never negative)
//! - multiplication: 1..=10 each

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::generator::{parse_whole, ProblemGenerator};
use super::problem::{Answer, Category, InputPolicy, Problem, ProblemDetail};
use crate::core::{DuelError, DuelResult, RandomSource};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
}

impl Operator {
    pub const ALL: [Operator; 3] = [Operator::Add, Operator::Subtract, Operator::Multiply];

    /// Symbol used in prompts.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '×',
        }
    }

    #[must_use]
    pub const fn apply(self, a: i64, b: i64) -> i64 {
        match self {
            Operator::Add => a + b,
            Operator::Subtract => a - b,
            Operator::Multiply => a * b,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Operator::Add => "addition",
            Operator::Subtract => "subtraction",
            Operator::Multiply => "multiplication",
        }
    }

    /// Recover the operator from a prompt by its symbol.
    ///
    /// Accepts `x` and `*` as multiplication too.
    #[must_use]
    pub fn from_prompt(text: &str) -> Option<Operator> {
        if text.contains('+') {
            Some(Operator::Add)
        } else if text.contains('-') {
            Some(Operator::Subtract)
        } else if text.contains(&['×', 'x', '*'][..]) {
            Some(Operator::Multiply)
        } else {
            None
        }
    }

    /// Split an `"a op b"` prompt into its operands.
    #[must_use]
    pub fn operands(self, text: &str) -> Option<(i64, i64)> {
        let separators: &[char] = match self {
            Operator::Add => &['+'],
            Operator::Subtract => &['-'],
            Operator::Multiply => &['×', 'x', '*'],
        };
        let (a, b) = text.split_once(separators)?;
        Some((a.trim().parse().ok()?, b.trim().parse().ok()?))
    }
}

/// Which operators a match draws from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatorSet {
    pub add: bool,
    pub subtract: bool,
    pub multiply: bool,
}

impl Default for OperatorSet {
    /// Addition only, the starting level.
    fn default() -> Self {
        Self {
            add: true,
            subtract: false,
            multiply: false,
        }
    }
}

impl OperatorSet {
    #[must_use]
    pub const fn all() -> Self {
        Self {
            add: true,
            subtract: true,
            multiply: true,
        }
    }

    #[must_use]
    pub const fn only(op: Operator) -> Self {
        Self {
            add: matches!(op, Operator::Add),
            subtract: matches!(op, Operator::Subtract),
            multiply: matches!(op, Operator::Multiply),
        }
    }

    /// Enabled operators, in `Operator::ALL` order.
    #[must_use]
    pub fn enabled(&self) -> SmallVec<[Operator; 3]> {
        Operator::ALL
            .into_iter()
            .filter(|op| match op {
                Operator::Add => self.add,
                Operator::Subtract => self.subtract,
                Operator::Multiply => self.multiply,
            })
            .collect()
    }
}

#[derive(Clone, Debug)]
pub struct ArithmeticGenerator {
    operators: SmallVec<[Operator; 3]>,
}

impl ArithmeticGenerator {
    /// Build a generator. Fails if no operator is enabled.
    pub fn new(set: OperatorSet) -> DuelResult<Self> {
        let operators = set.enabled();
        if operators.is_empty() {
            return Err(DuelError::NoOperators);
        }
        Ok(Self { operators })
    }

    /// Build from a set known to be non-empty; falls back to addition.
    #[must_use]
    pub fn with_operators(set: OperatorSet) -> Self {
        Self::new(set).unwrap_or_else(|_| Self {
            operators: SmallVec::from_slice(&[Operator::Add]),
        })
    }

    #[must_use]
    pub fn operators(&self) -> &[Operator] {
        &self.operators
    }
}

impl Default for ArithmeticGenerator {
    fn default() -> Self {
        Self::with_operators(OperatorSet::default())
    }
}

impl ProblemGenerator for ArithmeticGenerator {
    fn category(&self) -> Category {
        Category::Arithmetic
    }

    fn generate(&self, rng: &mut dyn RandomSource) -> Problem {
        let operator = self.operators[rng.pick_index(self.operators.len())];
        let (a, b) = match operator {
            Operator::Add => (rng.int_in(1, 20), rng.int_in(1, 20)),
            Operator::Subtract => {
                let a = rng.int_in(1, 20);
                (a, rng.int_in(1, a.min(20)))
            }
            Operator::Multiply => (rng.int_in(1, 10), rng.int_in(1, 10)),
        };
        let result = operator.apply(a, b);
        let prompt = format!("{} {} {}", a, operator.symbol(), b);

        Problem {
            category: Category::Arithmetic,
            explanation: format!("{} = {}.", prompt, result),
            prompt,
            expected: Answer::Number(result),
            options: SmallVec::new(),
            input: InputPolicy::Digits { max_len: 3 },
            detail: ProblemDetail::Arithmetic { operator, a, b },
        }
    }

    fn validate(&self, input: &str, problem: &Problem) -> bool {
        match (&problem.expected, parse_whole(input)) {
            (Answer::Number(expected), Some(given)) => *expected == given,
            _ => false,
        }
    }
}
