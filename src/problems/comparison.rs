//! Number comparison.
//!
//! Two numbers in 1..=100. If the draw is a tie the second number is nudged
//! up by 1..=5, so the pair is never equal; `=` and the equality statement
//! stay in the answer set as plausible wrong choices.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::generator::ProblemGenerator;
use super::problem::{Answer, Category, InputPolicy, Problem, ProblemDetail};
use crate::core::RandomSource;

/// Answer for a true statement.
pub const TRUE_MARK: &str = "T";
/// Answer for a false statement.
pub const FALSE_MARK: &str = "F";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Relation {
    Greater,
    Less,
    Equal,
}

impl Relation {
    pub const ALL: [Relation; 3] = [Relation::Greater, Relation::Less, Relation::Equal];

    /// Symbol choices as offered to the player, smallest first.
    pub const SYMBOL_ORDER: [Relation; 3] = [Relation::Less, Relation::Equal, Relation::Greater];

    /// The relation that holds between `a` and `b`.
    #[must_use]
    pub fn between(a: i64, b: i64) -> Self {
        match a.cmp(&b) {
            std::cmp::Ordering::Greater => Relation::Greater,
            std::cmp::Ordering::Less => Relation::Less,
            std::cmp::Ordering::Equal => Relation::Equal,
        }
    }

    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Relation::Greater => ">",
            Relation::Less => "<",
            Relation::Equal => "=",
        }
    }

    #[must_use]
    pub const fn phrase(self) -> &'static str {
        match self {
            Relation::Greater => "greater than",
            Relation::Less => "less than",
            Relation::Equal => "equal to",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComparisonQuestion {
    /// Fill in `<`, `=` or `>`.
    Symbol,
    /// Say whether "a <relation> b" is true.
    Statement(Relation),
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ComparisonGenerator;

impl ProblemGenerator for ComparisonGenerator {
    fn category(&self) -> Category {
        Category::Comparison
    }

    fn generate(&self, rng: &mut dyn RandomSource) -> Problem {
        let symbol_form = rng.coin();
        let a = rng.int_in(1, 100);
        let mut b = rng.int_in(1, 100);
        if a == b {
            b = a + rng.int_in(1, 5);
        }
        let actual = Relation::between(a, b);

        if symbol_form {
            let explanation = match actual {
                Relation::Equal => "Both numbers are equal.".to_string(),
                other => format!("{} is {} {}.", a, other.phrase(), b),
            };
            Problem {
                category: Category::Comparison,
                prompt: format!("{} ___ {}", a, b),
                expected: Answer::Text(actual.symbol().to_string()),
                explanation,
                options: Relation::SYMBOL_ORDER
                    .iter()
                    .map(|r| r.symbol().to_string())
                    .collect(),
                input: InputPolicy::Choice,
                detail: ProblemDetail::Comparison {
                    a,
                    b,
                    question: ComparisonQuestion::Symbol,
                },
            }
        } else {
            let claimed = Relation::ALL[rng.pick_index(Relation::ALL.len())];
            let holds = claimed == actual;
            let explanation = match (claimed, holds) {
                (Relation::Equal, true) => "Yes, both numbers are equal.".to_string(),
                (Relation::Equal, false) => "No, the numbers are different.".to_string(),
                (r, true) => format!("Yes, {} is {} {}.", a, r.phrase(), b),
                (r, false) => format!("No, {} is not {} {}.", a, r.phrase(), b),
            };
            Problem {
                category: Category::Comparison,
                prompt: format!("Is it true that {} is {} {}?", a, claimed.phrase(), b),
                expected: Answer::Text(if holds { TRUE_MARK } else { FALSE_MARK }.to_string()),
                explanation,
                options: SmallVec::from_iter([TRUE_MARK.to_string(), FALSE_MARK.to_string()]),
                input: InputPolicy::Choice,
                detail: ProblemDetail::Comparison {
                    a,
                    b,
                    question: ComparisonQuestion::Statement(claimed),
                },
            }
        }
    }

    fn validate(&self, input: &str, problem: &Problem) -> bool {
        match &problem.expected {
            Answer::Text(expected) => input.trim() == expected,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameRng, ScriptedRng};

    #[test]
    fn test_symbol_question() {
        // coin -> symbol, a = 40, b = 17
        let mut rng = ScriptedRng::new(vec![1, 40, 17]);
        let problem = ComparisonGenerator.generate(&mut rng);

        assert_eq!(problem.prompt, "40 ___ 17");
        assert_eq!(problem.expected, Answer::Text(">".into()));
        assert_eq!(
            problem.options.as_slice(),
            &["<".to_string(), "=".to_string(), ">".to_string()]
        );
        assert!(ComparisonGenerator.validate(">", &problem));
        assert!(!ComparisonGenerator.validate("<", &problem));
    }

    #[test]
    fn test_symbol_options_ordered_for_any_relation() {
        let expected = ["<".to_string(), "=".to_string(), ">".to_string()];
        // a > b, a < b, and a tie nudged to a < b
        for draws in [vec![1, 90, 3], vec![1, 3, 90], vec![1, 7, 7, 1]] {
            let problem = ComparisonGenerator.generate(&mut ScriptedRng::new(draws));
            assert_eq!(problem.options.as_slice(), &expected);
            assert_eq!(problem.input, InputPolicy::Choice);
        }
    }

    #[test]
    fn test_tie_is_perturbed() {
        // coin -> symbol, a = 50, b = 50, nudge = 3
        let mut rng = ScriptedRng::new(vec![1, 50, 50, 3]);
        let problem = ComparisonGenerator.generate(&mut rng);

        assert_eq!(
            problem.detail,
            ProblemDetail::Comparison {
                a: 50,
                b: 53,
                question: ComparisonQuestion::Symbol
            }
        );
        assert_eq!(problem.expected, Answer::Text("<".into()));
    }

    #[test]
    fn test_statement_question() {
        // coin -> statement, a = 10, b = 20, relation = Greater
        let mut rng = ScriptedRng::new(vec![0, 10, 20, 0]);
        let problem = ComparisonGenerator.generate(&mut rng);

        assert_eq!(problem.prompt, "Is it true that 10 is greater than 20?");
        assert_eq!(problem.expected, Answer::Text(FALSE_MARK.into()));
        assert_eq!(problem.explanation, "No, 10 is not greater than 20.");
        assert!(ComparisonGenerator.validate("F", &problem));
    }

    #[test]
    fn test_never_equal_pair() {
        let mut rng = GameRng::new(99);
        for _ in 0..1000 {
            let problem = ComparisonGenerator.generate(&mut rng);
            let ProblemDetail::Comparison { a, b, .. } = problem.detail else {
                panic!("unexpected detail");
            };
            assert_ne!(a, b);
            assert!((1..=100).contains(&a));
            assert!((1..=105).contains(&b));
        }
    }
}
