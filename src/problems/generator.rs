//! Problem generator trait.
//!
//! A generator is the only thing that differs between game boards: the
//! match state machine drives turns, damage and stats the same way for every
//! category and calls into the generator for questions and answer checks.

use super::arithmetic::{ArithmeticGenerator, OperatorSet};
use super::comparison::ComparisonGenerator;
use super::fraction::FractionGenerator;
use super::geometry::GeometryGenerator;
use super::problem::{Category, Problem};
use super::roman::RomanGenerator;
use super::sequence::SequenceGenerator;
use crate::core::RandomSource;

/// Generator + validator pair for one question category.
///
/// ## Implementation Notes
///
/// - `generate`: must not keep state between calls; all randomness comes
///   from `rng`
/// - `validate`: malformed input is a wrong answer, never an error
pub trait ProblemGenerator {
    /// Category this generator produces.
    fn category(&self) -> Category;

    /// Draw a new problem.
    fn generate(&self, rng: &mut dyn RandomSource) -> Problem;

    /// Check a raw input against a problem produced by this generator.
    fn validate(&self, input: &str, problem: &Problem) -> bool;
}

impl<G: ProblemGenerator + ?Sized> ProblemGenerator for Box<G> {
    fn category(&self) -> Category {
        (**self).category()
    }

    fn generate(&self, rng: &mut dyn RandomSource) -> Problem {
        (**self).generate(rng)
    }

    fn validate(&self, input: &str, problem: &Problem) -> bool {
        (**self).validate(input, problem)
    }
}

/// Default generator for a category. Arithmetic gets every operator.
#[must_use]
pub fn generator_for(category: Category) -> Box<dyn ProblemGenerator + Send + Sync> {
    match category {
        Category::Arithmetic => Box::new(ArithmeticGenerator::with_operators(OperatorSet::all())),
        Category::Comparison => Box::new(ComparisonGenerator),
        Category::Fraction => Box::new(FractionGenerator),
        Category::Geometry => Box::new(GeometryGenerator),
        Category::Roman => Box::new(RomanGenerator),
        Category::Sequence => Box::new(SequenceGenerator),
    }
}

/// Parse a whole-number answer. Empty or non-numeric input yields `None`.
pub(crate) fn parse_whole(input: &str) -> Option<i64> {
    input.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameRng;

    #[test]
    fn test_generator_for_every_category() {
        let mut rng = GameRng::new(3);

        for category in Category::ALL {
            let generator = generator_for(category);
            assert_eq!(generator.category(), category);

            let problem = generator.generate(&mut rng);
            assert_eq!(problem.category, category);

            let expected = problem.expected_text();
            assert!(
                generator.validate(&expected, &problem),
                "{:?} rejected its own answer {:?}",
                category,
                expected
            );
        }
    }

    #[test]
    fn test_parse_whole() {
        assert_eq!(parse_whole(" 42 "), Some(42));
        assert_eq!(parse_whole(""), None);
        assert_eq!(parse_whole("4a"), None);
    }
}
