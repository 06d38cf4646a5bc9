//! Shape facts from a static figure table.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::generator::ProblemGenerator;
use super::problem::{Answer, Category, InputPolicy, Problem, ProblemDetail};
use crate::core::{shuffle, RandomSource};

/// Draw attempts before a deterministic fallback kicks in.
const MAX_DRAWS: usize = 64;

/// Highest side count offered as a distractor.
const MAX_COUNT: i64 = 12;

/// Option meaning "both figures have the same number of sides".
pub const SAME: &str = "Same";
pub const YES: &str = "Yes";
pub const NO: &str = "No";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Figure {
    pub name: &'static str,
    pub sides: u32,
    pub vertices: u32,
    pub regular: bool,
}

const fn figure(name: &'static str, sides: u32, regular: bool) -> Figure {
    Figure {
        name,
        sides,
        vertices: sides,
        regular,
    }
}

pub static FIGURES: [Figure; 17] = [
    figure("Circle", 0, true),
    figure("Triangle", 3, true),
    figure("Square", 4, true),
    figure("Rectangle", 4, false),
    figure("Trapezoid", 4, false),
    figure("Rhomboid", 4, false),
    figure("Parallelogram", 4, false),
    figure("Kite", 4, false),
    figure("Arrow", 7, false),
    figure("Pentagon", 5, true),
    figure("Hexagon", 6, true),
    figure("Heptagon", 7, true),
    figure("Octagon", 8, true),
    figure("Nonagon", 9, true),
    figure("Decagon", 10, true),
    figure("Hendecagon", 11, true),
    figure("Dodecagon", 12, true),
];

impl Figure {
    /// Look a figure up by name.
    #[must_use]
    pub fn named(name: &str) -> Option<&'static Figure> {
        FIGURES.iter().find(|f| f.name == name)
    }

    fn lower(&self) -> String {
        self.name.to_lowercase()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GeometryQuestion {
    Identify,
    Sides,
    CompareSides,
    Vertices,
    IsRegular,
    WhichRegular,
    WhichIrregular,
    WhichEqualSides,
    WhichUnequalSides,
}

impl GeometryQuestion {
    pub const ALL: [GeometryQuestion; 9] = [
        GeometryQuestion::Identify,
        GeometryQuestion::Sides,
        GeometryQuestion::CompareSides,
        GeometryQuestion::Vertices,
        GeometryQuestion::IsRegular,
        GeometryQuestion::WhichRegular,
        GeometryQuestion::WhichIrregular,
        GeometryQuestion::WhichEqualSides,
        GeometryQuestion::WhichUnequalSides,
    ];
}

#[derive(Clone, Copy, Debug, Default)]
pub struct GeometryGenerator;

fn pick_figure(rng: &mut dyn RandomSource) -> &'static Figure {
    &FIGURES[rng.pick_index(FIGURES.len())]
}

fn plural(count: u32, word: &str) -> String {
    if count == 1 {
        format!("{} {}", count, word)
    } else {
        format!("{} {}s", count, word)
    }
}

/// Two distinct wrong counts near `correct`, within 0..=12.
fn count_options(correct: u32, rng: &mut dyn RandomSource) -> SmallVec<[String; 3]> {
    let correct = i64::from(correct);
    let lo = (correct - 3).max(0);
    let hi = correct + 3;
    let mut used: SmallVec<[i64; 3]> = SmallVec::from_slice(&[correct]);

    for _ in 0..MAX_DRAWS {
        if used.len() == 3 {
            break;
        }
        let w = rng.int_in(lo, hi);
        if w <= MAX_COUNT && !used.contains(&w) {
            used.push(w);
        }
    }
    for w in lo..=hi.min(MAX_COUNT) {
        if used.len() == 3 {
            break;
        }
        if !used.contains(&w) {
            used.push(w);
        }
    }

    let mut options: SmallVec<[String; 3]> = used.iter().map(i64::to_string).collect();
    shuffle(rng, &mut options);
    options
}

/// `correct` plus two figures from `pool`, shuffled.
fn figure_options(
    correct: &Figure,
    pool: &[&'static Figure],
    rng: &mut dyn RandomSource,
) -> SmallVec<[String; 3]> {
    let mut pool: Vec<&Figure> = pool.iter().copied().filter(|f| f.name != correct.name).collect();
    shuffle(rng, &mut pool);

    let mut options: SmallVec<[String; 3]> = SmallVec::new();
    options.push(correct.name.to_string());
    options.extend(pool.iter().take(2).map(|f| f.name.to_string()));
    shuffle(rng, &mut options);
    options
}

fn choice(
    question: GeometryQuestion,
    prompt: String,
    expected: String,
    explanation: String,
    options: SmallVec<[String; 3]>,
    figures: Vec<String>,
) -> Problem {
    Problem {
        category: Category::Geometry,
        prompt,
        expected: Answer::Text(expected),
        explanation,
        options,
        input: InputPolicy::Choice,
        detail: ProblemDetail::Geometry { question, figures },
    }
}

/// Whether `fig` is a correct answer to a "which figure" question.
fn answers(question: GeometryQuestion, fig: &Figure) -> bool {
    match question {
        GeometryQuestion::WhichRegular => fig.regular,
        GeometryQuestion::WhichIrregular => !fig.regular,
        GeometryQuestion::WhichEqualSides => fig.regular && fig.sides > 0,
        _ => !fig.regular && fig.sides > 0,
    }
}

impl GeometryGenerator {
    fn count_question(question: GeometryQuestion, rng: &mut dyn RandomSource) -> Problem {
        let fig = pick_figure(rng);
        let (count, noun, nouns) = match question {
            GeometryQuestion::Vertices => (fig.vertices, "vertex", "vertices"),
            _ => (fig.sides, "side", "sides"),
        };
        let counted = format!("{} {}", count, if count == 1 { noun } else { nouns });
        choice(
            question,
            format!("How many {} does a {} have?", nouns, fig.lower()),
            count.to_string(),
            format!("A {} has {}.", fig.lower(), counted),
            count_options(count, rng),
            vec![fig.name.to_string()],
        )
    }

    fn which_question(question: GeometryQuestion, rng: &mut dyn RandomSource) -> Problem {
        let (prompt, reason) = match question {
            GeometryQuestion::WhichRegular => (
                "Which of these figures is regular?",
                "is regular because all its sides and angles are equal",
            ),
            GeometryQuestion::WhichIrregular => (
                "Which of these figures is irregular?",
                "is irregular because not all its sides and angles are equal",
            ),
            GeometryQuestion::WhichEqualSides => (
                "Which of these figures has all sides equal?",
                "has all its sides equal",
            ),
            _ => (
                "Which of these figures has unequal sides?",
                "has unequal sides",
            ),
        };
        // Side questions never offer the circle.
        let needs_sides = matches!(
            question,
            GeometryQuestion::WhichEqualSides | GeometryQuestion::WhichUnequalSides
        );

        let matching: Vec<&'static Figure> =
            FIGURES.iter().filter(|f| answers(question, f)).collect();
        let others: Vec<&'static Figure> = FIGURES
            .iter()
            .filter(|f| !answers(question, f) && (!needs_sides || f.sides > 0))
            .collect();

        let correct = matching[rng.pick_index(matching.len())];
        let options = figure_options(correct, &others, rng);
        let figures = options.to_vec();
        choice(
            question,
            prompt.to_string(),
            correct.name.to_string(),
            format!("{} {}.", correct.name, reason),
            options,
            figures,
        )
    }
}

impl ProblemGenerator for GeometryGenerator {
    fn category(&self) -> Category {
        Category::Geometry
    }

    fn generate(&self, rng: &mut dyn RandomSource) -> Problem {
        let question = GeometryQuestion::ALL[rng.pick_index(GeometryQuestion::ALL.len())];

        match question {
            GeometryQuestion::Identify => {
                let fig = pick_figure(rng);
                let pool: Vec<&'static Figure> = FIGURES.iter().collect();
                choice(
                    question,
                    "Which figure is this?".to_string(),
                    fig.name.to_string(),
                    format!("The figure shown is a {}.", fig.lower()),
                    figure_options(fig, &pool, rng),
                    vec![fig.name.to_string()],
                )
            }
            GeometryQuestion::Sides | GeometryQuestion::Vertices => {
                Self::count_question(question, rng)
            }
            GeometryQuestion::CompareSides => {
                let first = rng.pick_index(FIGURES.len());
                let mut second = rng.pick_index(FIGURES.len());
                let mut draws = 0;
                while second == first && draws < MAX_DRAWS {
                    second = rng.pick_index(FIGURES.len());
                    draws += 1;
                }
                if second == first {
                    second = (first + 1) % FIGURES.len();
                }
                let (f1, f2) = (&FIGURES[first], &FIGURES[second]);

                let (expected, explanation) = match f1.sides.cmp(&f2.sides) {
                    std::cmp::Ordering::Greater => {
                        (f1.name.to_string(), format!("{} has more sides.", f1.name))
                    }
                    std::cmp::Ordering::Less => {
                        (f2.name.to_string(), format!("{} has more sides.", f2.name))
                    }
                    std::cmp::Ordering::Equal => (
                        SAME.to_string(),
                        format!("Both figures have {}.", plural(f1.sides, "side")),
                    ),
                };
                let mut options: SmallVec<[String; 3]> =
                    [f1.name.to_string(), f2.name.to_string(), SAME.to_string()]
                        .into_iter()
                        .collect();
                shuffle(rng, &mut options);
                choice(
                    question,
                    "Which figure has more sides?".to_string(),
                    expected,
                    explanation,
                    options,
                    vec![f1.name.to_string(), f2.name.to_string()],
                )
            }
            GeometryQuestion::IsRegular => {
                let fig = pick_figure(rng);
                let (expected, explanation) = if fig.regular {
                    (
                        YES,
                        format!(
                            "Yes, the {} is regular because all its sides and angles are equal.",
                            fig.lower()
                        ),
                    )
                } else {
                    (
                        NO,
                        format!(
                            "No, the {} is not regular because not all its sides and angles are equal.",
                            fig.lower()
                        ),
                    )
                };
                choice(
                    question,
                    format!("Is the {} a regular polygon?", fig.lower()),
                    expected.to_string(),
                    explanation,
                    [YES.to_string(), NO.to_string()].into_iter().collect(),
                    vec![fig.name.to_string()],
                )
            }
            _ => Self::which_question(question, rng),
        }
    }

    fn validate(&self, input: &str, problem: &Problem) -> bool {
        match &problem.expected {
            Answer::Text(expected) => input.trim() == expected,
            _ => false,
        }
    }
}
