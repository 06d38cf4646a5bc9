//! Proper fractions with denominators 2..=8.
//!
//! Equivalence reduces both sides by their GCD and compares the pairs, with
//! the sign carried on the numerator. That makes it the same as comparing
//! cross products.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::generator::ProblemGenerator;
use super::problem::{Answer, Category, InputPolicy, Problem, ProblemDetail};
use crate::core::{shuffle, RandomSource};

/// Draw attempts before distractors are filled by a deterministic scan.
const MAX_DRAWS: usize = 64;

/// Greatest common divisor of the absolute values.
#[must_use]
pub fn gcd(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a.abs(), b.abs());
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Lowest terms with a positive denominator. `d` must be non-zero.
#[must_use]
pub fn reduce(n: i64, d: i64) -> (i64, i64) {
    let g = gcd(n, d).max(1);
    let sign = if d < 0 { -1 } else { 1 };
    (sign * n / g, sign * d / g)
}

/// Parse `"n/d"`. Rejects anything else, including a zero denominator.
#[must_use]
pub fn parse_fraction(text: &str) -> Option<(i64, i64)> {
    let (n, d) = text.split_once('/')?;
    let n: i64 = n.trim().parse().ok()?;
    let d: i64 = d.trim().parse().ok()?;
    (d != 0).then_some((n, d))
}

/// Whether two fraction strings name the same value.
///
/// ```
/// use math_duel::problems::are_equivalent;
///
/// assert!(are_equivalent("2/4", "1/2"));
/// assert!(!are_equivalent("2/3", "1/2"));
/// assert!(!are_equivalent("1/0", "1/0"));
/// ```
#[must_use]
pub fn are_equivalent(a: &str, b: &str) -> bool {
    match (parse_fraction(a), parse_fraction(b)) {
        (Some(fa), Some(fb)) => equivalent_pairs(fa, fb),
        _ => false,
    }
}

fn equivalent_pairs(a: (i64, i64), b: (i64, i64)) -> bool {
    reduce(a.0, a.1) == reduce(b.0, b.1)
}

/// Strip whitespace and leading zeros from typed fraction input.
fn clean_fraction(input: &str) -> String {
    let compact: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    compact.trim_start_matches('0').to_string()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FractionMode {
    /// Type the fraction shown in a picture.
    Write,
    /// Pick the picture that shows a given fraction.
    Select,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct FractionGenerator;

impl FractionGenerator {
    fn draw_proper(rng: &mut dyn RandomSource) -> (i64, i64) {
        let d = rng.int_in(2, 8);
        let n = rng.int_in(1, d - 1);
        (n, d)
    }

    fn acceptable(candidate: (i64, i64), chosen: &[(i64, i64)]) -> bool {
        !chosen
            .iter()
            .any(|&o| o == candidate || equivalent_pairs(o, candidate))
    }

    fn distractors(correct: (i64, i64), rng: &mut dyn RandomSource) -> SmallVec<[(i64, i64); 3]> {
        let mut chosen: SmallVec<[(i64, i64); 3]> = SmallVec::from_slice(&[correct]);

        for _ in 0..MAX_DRAWS {
            if chosen.len() == 3 {
                return chosen;
            }
            let candidate = Self::draw_proper(rng);
            if Self::acceptable(candidate, &chosen) {
                chosen.push(candidate);
            }
        }

        for d in 2..=8 {
            for n in 1..d {
                if chosen.len() == 3 {
                    return chosen;
                }
                if Self::acceptable((n, d), &chosen) {
                    chosen.push((n, d));
                }
            }
        }
        chosen
    }
}

impl ProblemGenerator for FractionGenerator {
    fn category(&self) -> Category {
        Category::Fraction
    }

    fn generate(&self, rng: &mut dyn RandomSource) -> Problem {
        let write = rng.coin();
        let (numerator, denominator) = Self::draw_proper(rng);
        let expected = Answer::Fraction {
            numerator,
            denominator,
        };

        if write {
            return Problem {
                category: Category::Fraction,
                prompt: "Which fraction is shaded?".to_string(),
                explanation: format!("The shaded fraction is {}.", expected),
                expected,
                options: SmallVec::new(),
                input: InputPolicy::Fraction { max_len: 5 },
                detail: ProblemDetail::Fraction {
                    numerator,
                    denominator,
                    mode: FractionMode::Write,
                },
            };
        }

        let mut pairs = Self::distractors((numerator, denominator), rng);
        shuffle(rng, &mut pairs);

        Problem {
            category: Category::Fraction,
            prompt: format!("Which picture shows the fraction {}?", expected),
            explanation: format!("{} is the right fraction.", expected),
            expected,
            options: pairs.iter().map(|(n, d)| format!("{}/{}", n, d)).collect(),
            input: InputPolicy::Choice,
            detail: ProblemDetail::Fraction {
                numerator,
                denominator,
                mode: FractionMode::Select,
            },
        }
    }

    fn validate(&self, input: &str, problem: &Problem) -> bool {
        let ProblemDetail::Fraction { mode, .. } = problem.detail else {
            return false;
        };
        let expected = problem.expected_text();
        match mode {
            FractionMode::Write => are_equivalent(&clean_fraction(input), &expected),
            FractionMode::Select => are_equivalent(input.trim(), &expected),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameRng, ScriptedRng};

    #[test]
    fn test_gcd_and_reduce() {
        assert_eq!(gcd(12, 18), 6);
        assert_eq!(gcd(-4, 6), 2);
        assert_eq!(gcd(0, 5), 5);
        assert_eq!(reduce(4, 8), (1, 2));
        assert_eq!(reduce(1, -2), (-1, 2));
        assert_eq!(reduce(0, 7), (0, 1));
    }

    #[test]
    fn test_parse_fraction() {
        assert_eq!(parse_fraction("3/4"), Some((3, 4)));
        assert_eq!(parse_fraction(" 3 / 4 "), Some((3, 4)));
        assert_eq!(parse_fraction("3/0"), None);
        assert_eq!(parse_fraction("3"), None);
        assert_eq!(parse_fraction("1/2/3"), None);
        assert_eq!(parse_fraction("a/b"), None);
    }

    #[test]
    fn test_write_mode_accepts_equivalents() {
        // coin -> write, d = 4, n = 2
        let mut rng = ScriptedRng::new(vec![1, 4, 2]);
        let problem = FractionGenerator.generate(&mut rng);

        assert_eq!(problem.expected_text(), "2/4");
        assert!(FractionGenerator.validate("2/4", &problem));
        assert!(FractionGenerator.validate("1/2", &problem));
        assert!(FractionGenerator.validate(" 02 / 4", &problem));
        assert!(!FractionGenerator.validate("3/4", &problem));
        assert!(!FractionGenerator.validate("", &problem));
        assert!(!FractionGenerator.validate("2/0", &problem));
    }

    #[test]
    fn test_select_mode_falls_back_to_scan() {
        // Every draw is 1/2, so distractors come from the scan.
        let mut rng = ScriptedRng::new(vec![0, 2, 1]);
        let problem = FractionGenerator.generate(&mut rng);

        assert!(problem.is_choice());
        assert_eq!(problem.options.len(), 3);
        assert!(problem.options.contains(&"1/2".to_string()));
        assert!(FractionGenerator.validate("1/2", &problem));
    }

    #[test]
    fn test_select_options_are_distinct_values() {
        let mut rng = GameRng::new(8);
        for _ in 0..300 {
            let problem = FractionGenerator.generate(&mut rng);
            if !problem.is_choice() {
                continue;
            }
            assert_eq!(problem.options.len(), 3);
            for (i, a) in problem.options.iter().enumerate() {
                for b in problem.options.iter().skip(i + 1) {
                    assert!(!are_equivalent(a, b), "{} ~ {}", a, b);
                }
            }
            let expected = problem.expected_text();
            assert_eq!(problem.options.iter().filter(|o| **o == expected).count(), 1);
        }
    }
}
