//! Question generation and answer checking.
//!
//! Every category implements `ProblemGenerator`: draw a fresh `Problem` from
//! a `RandomSource`, and decide whether a raw input string answers it.
//! Generators are stateless between calls.
//!
//! - `arithmetic`: sums, differences, products
//! - `comparison`: greater / less / equal, symbol or true/false
//! - `fraction`: write or pick a proper fraction
//! - `geometry`: facts from a static figure table
//! - `roman`: to and from Roman numerals
//! - `sequence`: missing or next term of a numeric pattern

pub mod problem;
pub mod generator;
pub mod arithmetic;
pub mod comparison;
pub mod fraction;
pub mod geometry;
pub mod roman;
pub mod sequence;

pub use problem::{Answer, Category, InputPolicy, Problem, ProblemDetail};
pub use generator::{generator_for, ProblemGenerator};
pub use arithmetic::{ArithmeticGenerator, Operator, OperatorSet};
pub use comparison::{ComparisonGenerator, ComparisonQuestion, Relation};
pub use fraction::{are_equivalent, gcd, parse_fraction, reduce, FractionGenerator, FractionMode};
pub use geometry::{Figure, GeometryGenerator, GeometryQuestion, FIGURES};
pub use roman::{from_roman, to_roman, RomanDirection, RomanGenerator};
pub use sequence::{SequenceAsk, SequenceGenerator, SequenceRule};
