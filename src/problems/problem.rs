//! The `Problem` value handed from a generator to the match.
//!
//! A problem is immutable once generated. It carries the prompt, the
//! expected answer, an explanation shown after the turn, the options for
//! multiple-choice categories, the input policy for free-text categories and
//! a typed `detail` payload the presentation layer can draw from.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;

use super::arithmetic::Operator;
use super::comparison::ComparisonQuestion;
use super::fraction::FractionMode;
use super::geometry::GeometryQuestion;
use super::roman::RomanDirection;
use super::sequence::{SequenceAsk, SequenceRule};
use crate::core::DuelError;

/// Question category. One per game board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Arithmetic,
    Comparison,
    Fraction,
    Geometry,
    Roman,
    Sequence,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 6] = [
        Category::Arithmetic,
        Category::Comparison,
        Category::Fraction,
        Category::Geometry,
        Category::Roman,
        Category::Sequence,
    ];

    /// Human-readable name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Category::Arithmetic => "operations",
            Category::Comparison => "comparisons",
            Category::Fraction => "fractions",
            Category::Geometry => "geometry",
            Category::Roman => "Roman numerals",
            Category::Sequence => "sequences",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = DuelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "arithmetic" | "operations" => Ok(Category::Arithmetic),
            "comparison" | "compare" => Ok(Category::Comparison),
            "fraction" | "fractions" => Ok(Category::Fraction),
            "geometry" | "geometric" => Ok(Category::Geometry),
            "roman" | "romans" => Ok(Category::Roman),
            "sequence" | "sequences" => Ok(Category::Sequence),
            _ => Err(DuelError::UnknownCategory(s.to_string())),
        }
    }
}

/// Expected answer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Answer {
    Number(i64),
    Text(String),
    Fraction { numerator: i64, denominator: i64 },
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Number(n) => write!(f, "{}", n),
            Answer::Text(s) => f.write_str(s),
            Answer::Fraction {
                numerator,
                denominator,
            } => write!(f, "{}/{}", numerator, denominator),
        }
    }
}

/// What the player may type while a problem is open.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputPolicy {
    /// Decimal digits only.
    Digits { max_len: usize },
    /// Digits and a single kind of separator, `/`.
    Fraction { max_len: usize },
    /// Roman numeral letters, folded to upper case.
    RomanNumeral { max_len: usize },
    /// Pick one of `Problem::options`; free typing is disabled.
    Choice,
}

impl InputPolicy {
    /// Normalize a typed character, or `None` if the policy rejects it.
    #[must_use]
    pub fn accept(self, ch: char) -> Option<char> {
        match self {
            InputPolicy::Digits { .. } => ch.is_ascii_digit().then_some(ch),
            InputPolicy::Fraction { .. } => (ch.is_ascii_digit() || ch == '/').then_some(ch),
            InputPolicy::RomanNumeral { .. } => {
                let upper = ch.to_ascii_uppercase();
                "IVXLCDM".contains(upper).then_some(upper)
            }
            InputPolicy::Choice => None,
        }
    }

    /// Longest input the policy allows. `None` for choice input.
    #[must_use]
    pub fn max_len(self) -> Option<usize> {
        match self {
            InputPolicy::Digits { max_len }
            | InputPolicy::Fraction { max_len }
            | InputPolicy::RomanNumeral { max_len } => Some(max_len),
            InputPolicy::Choice => None,
        }
    }
}

/// Category-specific data behind a problem.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProblemDetail {
    Arithmetic {
        operator: Operator,
        a: i64,
        b: i64,
    },
    Comparison {
        a: i64,
        b: i64,
        question: ComparisonQuestion,
    },
    Fraction {
        numerator: i64,
        denominator: i64,
        mode: FractionMode,
    },
    Geometry {
        question: GeometryQuestion,
        /// Figures to draw, by name.
        figures: Vec<String>,
    },
    Roman {
        number: u32,
        numeral: String,
        direction: RomanDirection,
    },
    Sequence {
        rule: SequenceRule,
        terms: Vec<i64>,
        ask: SequenceAsk,
    },
}

/// A generated question.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    pub category: Category,
    pub prompt: String,
    pub expected: Answer,
    pub explanation: String,
    /// Multiple-choice options. Empty for free input.
    pub options: SmallVec<[String; 3]>,
    pub input: InputPolicy,
    pub detail: ProblemDetail,
}

impl Problem {
    /// Whether the player picks from `options` instead of typing.
    #[must_use]
    pub fn is_choice(&self) -> bool {
        self.input == InputPolicy::Choice
    }

    /// Canonical expected answer as text.
    #[must_use]
    pub fn expected_text(&self) -> String {
        self.expected.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse() {
        assert_eq!("operations".parse::<Category>().unwrap(), Category::Arithmetic);
        assert_eq!(" Romans ".parse::<Category>().unwrap(), Category::Roman);
        assert_eq!("fractions".parse::<Category>().unwrap(), Category::Fraction);
        assert_eq!(
            "howmany".parse::<Category>(),
            Err(DuelError::UnknownCategory("howmany".into()))
        );
    }

    #[test]
    fn test_answer_display() {
        assert_eq!(Answer::Number(42).to_string(), "42");
        assert_eq!(Answer::Text("XLII".into()).to_string(), "XLII");
        assert_eq!(
            Answer::Fraction {
                numerator: 3,
                denominator: 4
            }
            .to_string(),
            "3/4"
        );
    }

    #[test]
    fn test_input_policy_accept() {
        let digits = InputPolicy::Digits { max_len: 3 };
        assert_eq!(digits.accept('7'), Some('7'));
        assert_eq!(digits.accept('/'), None);

        let fraction = InputPolicy::Fraction { max_len: 5 };
        assert_eq!(fraction.accept('/'), Some('/'));
        assert_eq!(fraction.accept('a'), None);

        let roman = InputPolicy::RomanNumeral { max_len: 8 };
        assert_eq!(roman.accept('x'), Some('X'));
        assert_eq!(roman.accept('Z'), None);

        assert_eq!(InputPolicy::Choice.accept('1'), None);
        assert_eq!(InputPolicy::Choice.max_len(), None);
        assert_eq!(roman.max_len(), Some(8));
    }
}
