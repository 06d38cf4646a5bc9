//! Roman numerals in both directions, 1 through 100.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::generator::{parse_whole, ProblemGenerator};
use super::problem::{Answer, Category, InputPolicy, Problem, ProblemDetail};
use crate::core::RandomSource;

const NUMERALS: [(u32, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

const ROMAN_LETTERS: &str = "IVXLCDM";

/// Canonical numeral for `n`. Zero yields an empty string.
#[must_use]
pub fn to_roman(mut n: u32) -> String {
    let mut out = String::new();
    for (value, numeral) in NUMERALS {
        while n >= value {
            out.push_str(numeral);
            n -= value;
        }
    }
    out
}

fn letter_value(ch: char) -> Option<u32> {
    Some(match ch {
        'I' => 1,
        'V' => 5,
        'X' => 10,
        'L' => 50,
        'C' => 100,
        'D' => 500,
        'M' => 1000,
        _ => return None,
    })
}

/// Parse a canonical numeral. Non-canonical spellings such as `IIII` or
/// `VX` are rejected.
#[must_use]
pub fn from_roman(text: &str) -> Option<u32> {
    let text = text.trim().to_uppercase();
    if text.is_empty() {
        return None;
    }

    let values: SmallVec<[u32; 16]> = text.chars().map(letter_value).collect::<Option<_>>()?;
    let total = subtractive_sum(&values)?;
    (to_roman(total) == text).then_some(total)
}

fn subtractive_sum(values: &[u32]) -> Option<u32> {
    let mut total: i64 = 0;
    for (i, &v) in values.iter().enumerate() {
        let v = i64::from(v);
        match values.get(i + 1) {
            Some(&next) if i64::from(next) > v => total -= v,
            _ => total += v,
        }
    }
    u32::try_from(total).ok()
}

/// Uppercase and keep only Roman letters.
fn clean_roman(input: &str) -> String {
    input
        .chars()
        .map(|c| c.to_ascii_uppercase())
        .filter(|c| ROMAN_LETTERS.contains(*c))
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RomanDirection {
    /// Number shown, numeral expected.
    ToRoman,
    /// Numeral shown, number expected.
    FromRoman,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct RomanGenerator;

impl ProblemGenerator for RomanGenerator {
    fn category(&self) -> Category {
        Category::Roman
    }

    fn generate(&self, rng: &mut dyn RandomSource) -> Problem {
        let direction = if rng.coin() {
            RomanDirection::ToRoman
        } else {
            RomanDirection::FromRoman
        };
        let number = rng.int_in(1, 100) as u32;
        let numeral = to_roman(number);

        let (prompt, expected, input) = match direction {
            RomanDirection::ToRoman => (
                format!("Write {} in Roman numerals.", number),
                Answer::Text(numeral.clone()),
                InputPolicy::RomanNumeral { max_len: 8 },
            ),
            RomanDirection::FromRoman => (
                format!("What number is {}?", numeral),
                Answer::Number(i64::from(number)),
                InputPolicy::Digits { max_len: 3 },
            ),
        };

        Problem {
            category: Category::Roman,
            prompt,
            expected,
            explanation: format!("{} = {}.", numeral, number),
            options: SmallVec::new(),
            input,
            detail: ProblemDetail::Roman {
                number,
                numeral,
                direction,
            },
        }
    }

    fn validate(&self, input: &str, problem: &Problem) -> bool {
        match &problem.expected {
            Answer::Text(numeral) => {
                let cleaned = clean_roman(input);
                !cleaned.is_empty() && cleaned == *numeral
            }
            Answer::Number(n) => parse_whole(input) == Some(*n),
            Answer::Fraction { .. } => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameRng, ScriptedRng};

    #[test]
    fn test_to_roman() {
        assert_eq!(to_roman(1), "I");
        assert_eq!(to_roman(4), "IV");
        assert_eq!(to_roman(9), "IX");
        assert_eq!(to_roman(14), "XIV");
        assert_eq!(to_roman(40), "XL");
        assert_eq!(to_roman(49), "XLIX");
        assert_eq!(to_roman(88), "LXXXVIII");
        assert_eq!(to_roman(90), "XC");
        assert_eq!(to_roman(100), "C");
        assert_eq!(to_roman(0), "");
    }

    #[test]
    fn test_from_roman() {
        assert_eq!(from_roman("XIV"), Some(14));
        assert_eq!(from_roman(" xc "), Some(90));
        assert_eq!(from_roman("LXXXVIII"), Some(88));
        assert_eq!(from_roman("IIII"), None);
        assert_eq!(from_roman("VX"), None);
        assert_eq!(from_roman("IC"), None);
        assert_eq!(from_roman("ABC"), None);
        assert_eq!(from_roman(""), None);
    }

    #[test]
    fn test_round_trip_range() {
        for n in 1..=100 {
            assert_eq!(from_roman(&to_roman(n)), Some(n));
        }
    }

    #[test]
    fn test_clean_roman() {
        assert_eq!(clean_roman(" x-iv "), "XIV");
        assert_eq!(clean_roman("42"), "");
    }

    #[test]
    fn test_to_roman_problem() {
        let mut rng = ScriptedRng::new(vec![1, 14]);
        let problem = RomanGenerator.generate(&mut rng);

        assert_eq!(problem.prompt, "Write 14 in Roman numerals.");
        assert_eq!(problem.expected, Answer::Text("XIV".into()));
        assert_eq!(problem.explanation, "XIV = 14.");
        assert!(RomanGenerator.validate("xiv", &problem));
        assert!(RomanGenerator.validate(" X I V ", &problem));
        assert!(!RomanGenerator.validate("XVI", &problem));
        assert!(!RomanGenerator.validate("", &problem));
    }

    #[test]
    fn test_from_roman_problem() {
        let mut rng = ScriptedRng::new(vec![0, 49]);
        let problem = RomanGenerator.generate(&mut rng);

        assert_eq!(problem.prompt, "What number is XLIX?");
        assert_eq!(problem.expected, Answer::Number(49));
        assert_eq!(problem.input, InputPolicy::Digits { max_len: 3 });
        assert!(RomanGenerator.validate("49", &problem));
        assert!(!RomanGenerator.validate("51", &problem));
        assert!(!RomanGenerator.validate("", &problem));
    }

    #[test]
    fn test_numbers_in_range() {
        let mut rng = GameRng::new(11);
        for _ in 0..500 {
            let problem = RomanGenerator.generate(&mut rng);
            let ProblemDetail::Roman { number, .. } = problem.detail else {
                panic!("expected a roman detail");
            };
            assert!((1..=100).contains(&number));
            assert!(problem.options.is_empty());
        }
    }
}
