//! Per-turn state and the record of a settled turn.

use serde::{Deserialize, Serialize};

use super::input::InputBuffer;
use super::timer::TurnTimer;
use crate::core::PlayerId;
use crate::problems::Problem;
use crate::rules::MatchResult;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnswerResult {
    Correct,
    Incorrect,
}

impl AnswerResult {
    #[must_use]
    pub fn is_correct(self) -> bool {
        self == AnswerResult::Correct
    }
}

/// Everything that is reset when the turn passes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnState {
    pub active: PlayerId,
    pub problem: Problem,
    pub input: InputBuffer,
    /// `None` until the turn settles.
    pub result: Option<AnswerResult>,
    pub timer: TurnTimer,
}

impl TurnState {
    /// A fresh turn with a running timer.
    pub fn new(active: PlayerId, problem: Problem, turn_secs: u32) -> Self {
        let mut timer = TurnTimer::new(turn_secs);
        timer.start();
        Self {
            active,
            problem,
            input: InputBuffer::new(),
            result: None,
            timer,
        }
    }
}

/// What happened when a turn settled.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnOutcome {
    /// Who answered.
    pub player: PlayerId,
    pub result: AnswerResult,
    pub timed_out: bool,
    /// Whose life changed: the opponent on a correct answer, otherwise the
    /// answering player.
    pub target: PlayerId,
    /// Life actually removed from `target`.
    pub life_delta: u32,
    /// Amount added to `target`'s damage-taken stat.
    pub stat_damage_taken: u32,
    pub reaction_secs: u32,
    /// Set when this turn ended the match.
    pub match_over: Option<MatchResult>,
}
