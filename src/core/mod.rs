//! Core types: players, RNG, configuration and errors.
//!
//! Everything here is independent of the question categories. The match
//! state machine and the generators build on these pieces.

pub mod player;
pub mod rng;
pub mod config;
pub mod error;

pub use player::{Player, PlayerId, PlayerMap, PLAYER_COUNT};
pub use rng::{shuffle, GameRng, GameRngState, RandomSource, ScriptedRng};
pub use config::{MatchConfig, DEFAULT_MAX_LIFE, DEFAULT_TURN_SECS};
pub use error::{DuelError, DuelResult};
