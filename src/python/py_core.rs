//! Value type bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{DuelError, PlayerId};
use crate::game::TurnOutcome;
use crate::problems::Problem;
use crate::rules::MatchResult;
use crate::stats::{Medal, MedalTone, StatsSummary};

impl From<DuelError> for PyErr {
    fn from(err: DuelError) -> Self {
        PyErr::new::<PyValueError, _>(err.to_string())
    }
}

/// Python wrapper for PlayerId.
#[pyclass(name = "PlayerId")]
#[derive(Clone, Debug)]
pub struct PyPlayerId(pub PlayerId);

#[pymethods]
impl PyPlayerId {
    #[new]
    fn new(id: u8) -> PyResult<Self> {
        Ok(Self(PlayerId::try_from(id)?))
    }

    /// Get the player index (0-based).
    fn index(&self) -> usize {
        self.0.index()
    }

    /// The other seat.
    fn opponent(&self) -> Self {
        Self(self.0.opponent())
    }

    #[getter]
    fn id(&self) -> u8 {
        self.0.get()
    }

    fn __repr__(&self) -> String {
        format!("PlayerId({})", self.0.get())
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        self.0.get() as u64
    }
}

/// A generated question, flattened for display.
#[pyclass(name = "Problem", get_all)]
#[derive(Clone, Debug)]
pub struct PyProblem {
    pub category: String,
    pub prompt: String,
    pub expected: String,
    pub explanation: String,
    pub options: Vec<String>,
    /// Longest allowed input; `None` for multiple choice.
    pub max_len: Option<usize>,
}

impl From<&Problem> for PyProblem {
    fn from(problem: &Problem) -> Self {
        Self {
            category: problem.category.to_string(),
            prompt: problem.prompt.clone(),
            expected: problem.expected_text(),
            explanation: problem.explanation.clone(),
            options: problem.options.to_vec(),
            max_len: problem.input.max_len(),
        }
    }
}

#[pymethods]
impl PyProblem {
    fn is_choice(&self) -> bool {
        self.max_len.is_none()
    }

    fn __repr__(&self) -> String {
        format!("Problem({:?})", self.prompt)
    }
}

/// What happened when a turn settled.
#[pyclass(name = "TurnOutcome", get_all)]
#[derive(Clone, Debug)]
pub struct PyTurnOutcome {
    pub player: u8,
    pub correct: bool,
    pub timed_out: bool,
    pub target: u8,
    pub life_delta: u32,
    pub stat_damage_taken: u32,
    pub reaction_secs: u32,
    pub match_over: bool,
    /// Winning seat when the match ended with a winner.
    pub winner: Option<u8>,
}

impl From<TurnOutcome> for PyTurnOutcome {
    fn from(outcome: TurnOutcome) -> Self {
        Self {
            player: outcome.player.get(),
            correct: outcome.result.is_correct(),
            timed_out: outcome.timed_out,
            target: outcome.target.get(),
            life_delta: outcome.life_delta,
            stat_damage_taken: outcome.stat_damage_taken,
            reaction_secs: outcome.reaction_secs,
            match_over: outcome.match_over.is_some(),
            winner: outcome.match_over.and_then(|r| r.winner()).map(PlayerId::get),
        }
    }
}

#[pymethods]
impl PyTurnOutcome {
    fn __repr__(&self) -> String {
        format!(
            "TurnOutcome(player={}, correct={}, life_delta={})",
            self.player, self.correct, self.life_delta
        )
    }
}

#[pyclass(name = "Medal", get_all)]
#[derive(Clone, Debug)]
pub struct PyMedal {
    pub good: bool,
    pub badge: String,
    pub label: String,
    pub text: String,
}

impl From<Medal> for PyMedal {
    fn from(medal: Medal) -> Self {
        Self {
            good: medal.tone == MedalTone::Good,
            badge: format!("{:?}", medal.badge),
            label: medal.label,
            text: medal.text,
        }
    }
}

#[pymethods]
impl PyMedal {
    fn __repr__(&self) -> String {
        format!("Medal({:?})", self.label)
    }
}

#[pyclass(name = "StatsSummary", get_all)]
#[derive(Clone, Debug)]
pub struct PyStatsSummary {
    pub total: u32,
    pub correct: u32,
    pub errors: u32,
    pub timeouts: u32,
    pub percent: u32,
    pub average_reaction: f64,
    pub fastest: u32,
    pub slowest: u32,
    pub max_streak: u32,
    pub max_error_streak: u32,
    pub damage_done: u32,
    pub damage_taken: u32,
}

impl From<StatsSummary> for PyStatsSummary {
    fn from(s: StatsSummary) -> Self {
        Self {
            total: s.total,
            correct: s.correct,
            errors: s.errors,
            timeouts: s.timeouts,
            percent: s.percent,
            average_reaction: s.average_reaction,
            fastest: s.fastest,
            slowest: s.slowest,
            max_streak: s.max_streak,
            max_error_streak: s.max_error_streak,
            damage_done: s.damage_done,
            damage_taken: s.damage_taken,
        }
    }
}

/// `"draw"`, `"player 1"` or `"player 2"`.
pub(crate) fn result_label(result: MatchResult) -> String {
    match result {
        MatchResult::Draw => "draw".to_string(),
        MatchResult::Winner(p) => format!("player {}", p.index() + 1),
    }
}
