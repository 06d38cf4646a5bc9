//! # math-duel
//!
//! A two-player quiz duel engine for practising arithmetic, comparisons,
//! fractions, geometry, Roman numerals and number sequences.
//!
//! Players take turns answering a generated problem against a countdown. A
//! correct answer damages the opponent, more so the faster it comes. A wrong
//! answer or a timeout costs the answering player a fixed penalty. The first
//! player to run out of life loses, and both get medals summarising how they
//! played.
//!
//! ## Design Principles
//!
//! 1. **Headless**: no rendering, audio or clock. The presentation layer
//!    forwards input and one `tick` per second, and reads state back.
//!
//! 2. **Deterministic**: all randomness flows through `RandomSource`, so a
//!    seed reproduces a whole match and tests can script exact problems.
//!
//! 3. **Never fails mid-match**: construction validates configuration;
//!    after that, out-of-phase commands are ignored and malformed input is
//!    simply a wrong answer.
//!
//! ## Modules
//!
//! - `core`: players, seats, RNG, configuration, errors
//! - `problems`: the six question generators and their answer checks
//! - `rules`: damage formula and match result
//! - `game`: input buffer, turn timer and the `Match` state machine
//! - `stats`: answer log, summaries, medals and the end-of-match report

pub mod core;
pub mod problems;
pub mod rules;
pub mod game;
pub mod stats;

#[cfg(feature = "python")]
mod python;

// Re-export commonly used types
pub use crate::core::{
    DuelError, DuelResult,
    GameRng, GameRngState, RandomSource, ScriptedRng,
    MatchConfig, Player, PlayerId, PlayerMap,
};

pub use crate::problems::{
    generator_for, Answer, Category, Problem, ProblemDetail, ProblemGenerator,
};

pub use crate::rules::{DamageRules, MatchResult};

pub use crate::game::{AnswerResult, Match, Phase, TurnOutcome, TurnTimer};

pub use crate::stats::{
    Medal, MedalEvaluator, MedalThresholds, MatchReport, PlayerStats, StatsSummary,
};
