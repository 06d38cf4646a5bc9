//! Match bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{GameRng, MatchConfig, PlayerId};
use crate::game::{Match, Phase, Urgency};
use crate::problems::{
    generator_for, ArithmeticGenerator, Category, Operator, OperatorSet, ProblemGenerator,
};
use crate::stats::StatsSummary;

use super::py_core::{result_label, PyMedal, PyPlayerId, PyProblem, PyStatsSummary, PyTurnOutcome};

type DynGenerator = Box<dyn ProblemGenerator + Send + Sync>;

fn operator_set(symbols: &str) -> PyResult<OperatorSet> {
    let mut set = OperatorSet {
        add: false,
        subtract: false,
        multiply: false,
    };
    for ch in symbols.chars().filter(|c| !c.is_whitespace()) {
        match Operator::from_prompt(&ch.to_string()) {
            Some(Operator::Add) => set.add = true,
            Some(Operator::Subtract) => set.subtract = true,
            Some(Operator::Multiply) => set.multiply = true,
            None => {
                return Err(PyErr::new::<PyValueError, _>(format!(
                    "unknown operator {:?}",
                    ch
                )))
            }
        }
    }
    Ok(set)
}

/// Python wrapper for a duel.
///
/// The caller drives the clock: call `tick()` once per second.
#[pyclass(name = "Match")]
pub struct PyMatch {
    inner: Match<DynGenerator>,
}

#[pymethods]
impl PyMatch {
    /// Create a new match.
    ///
    /// # Arguments
    /// - category: question category ("operations", "fractions", "roman", ...)
    /// - seed: RNG seed; random when omitted
    /// - max_life: starting life for both players
    /// - turn_secs: seconds per turn
    /// - operators: arithmetic operators to draw from, e.g. "+-x"
    /// - names: display names for both players
    #[new]
    #[pyo3(signature = (
        category = "operations",
        seed = None,
        max_life = 300,
        turn_secs = 30,
        operators = None,
        names = None
    ))]
    fn new(
        category: &str,
        seed: Option<u64>,
        max_life: u32,
        turn_secs: u32,
        operators: Option<&str>,
        names: Option<(String, String)>,
    ) -> PyResult<Self> {
        let category: Category = category.parse()?;
        let generator: DynGenerator = match (category, operators) {
            (Category::Arithmetic, Some(symbols)) => {
                Box::new(ArithmeticGenerator::new(operator_set(symbols)?)?)
            }
            _ => generator_for(category),
        };

        let mut config = MatchConfig::new()
            .with_max_life(max_life)
            .with_turn_secs(turn_secs);
        if let Some((first, second)) = names {
            config = config
                .with_player_name(PlayerId::new(0), first)
                .with_player_name(PlayerId::new(1), second);
        }

        let rng = seed.map_or_else(GameRng::from_entropy, GameRng::new);
        Ok(Self {
            inner: Match::with_rng(generator, config, rng)?,
        })
    }

    /// Judge an answer given with `time_remaining` seconds left.
    fn submit_answer(&mut self, raw: &str, time_remaining: u32) -> Option<PyTurnOutcome> {
        self.inner.submit_answer(raw, time_remaining).map(Into::into)
    }

    /// Submit the buffered input.
    fn submit(&mut self) -> Option<PyTurnOutcome> {
        self.inner.submit().map(Into::into)
    }

    fn time_out(&mut self) -> Option<PyTurnOutcome> {
        self.inner.time_out().map(Into::into)
    }

    /// Advance the countdown one second.
    fn tick(&mut self) -> Option<PyTurnOutcome> {
        self.inner.tick().map(Into::into)
    }

    fn advance_turn(&mut self) -> bool {
        self.inner.advance_turn()
    }

    fn restart(&mut self) {
        self.inner.restart();
    }

    fn set_input(&mut self, text: &str) -> bool {
        self.inner.set_input(text)
    }

    fn push_input(&mut self, ch: char) -> bool {
        self.inner.push_input(ch)
    }

    fn backspace(&mut self) -> bool {
        self.inner.backspace()
    }

    fn clear_input(&mut self) -> bool {
        self.inner.clear_input()
    }

    fn select_option(&mut self, index: usize) -> bool {
        self.inner.select_option(index)
    }

    #[getter]
    fn active_player(&self) -> PyPlayerId {
        PyPlayerId(self.inner.active_player())
    }

    #[getter]
    fn problem(&self) -> PyProblem {
        self.inner.problem().into()
    }

    #[getter]
    fn input(&self) -> String {
        self.inner.input().to_string()
    }

    /// "awaiting", "correct", "incorrect" or "over".
    #[getter]
    fn phase(&self) -> &'static str {
        match self.inner.phase() {
            Phase::AwaitingInput => "awaiting",
            Phase::Settled(result) if result.is_correct() => "correct",
            Phase::Settled(_) => "incorrect",
            Phase::MatchOver(_) => "over",
        }
    }

    #[getter]
    fn turn_number(&self) -> u32 {
        self.inner.turn_number()
    }

    #[getter]
    fn time_remaining(&self) -> u32 {
        self.inner.timer().remaining()
    }

    /// "calm", "warning" or "critical".
    #[getter]
    fn urgency(&self) -> &'static str {
        match self.inner.timer().urgency() {
            Urgency::Calm => "calm",
            Urgency::Warning => "warning",
            Urgency::Critical => "critical",
        }
    }

    fn life(&self, player: &PyPlayerId) -> u32 {
        self.inner.player(player.0).life
    }

    fn name(&self, player: &PyPlayerId) -> String {
        self.inner.player(player.0).name.clone()
    }

    /// "draw", "player 1", "player 2", or None while running.
    #[getter]
    fn result(&self) -> Option<String> {
        self.inner.result().map(result_label)
    }

    fn stats(&self, player: &PyPlayerId) -> PyStatsSummary {
        StatsSummary::from_stats(self.inner.stats(player.0)).into()
    }

    fn medals(&self, player: &PyPlayerId) -> Vec<PyMedal> {
        self.inner
            .medals(player.0)
            .into_iter()
            .map(Into::into)
            .collect()
    }

    fn __repr__(&self) -> String {
        format!(
            "Match(turn={}, lives=({}, {}))",
            self.inner.turn_number(),
            self.inner.player(PlayerId::new(0)).life,
            self.inner.player(PlayerId::new(1)).life
        )
    }
}
