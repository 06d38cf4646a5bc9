//! Construction-time errors.
//!
//! Turn commands never fail: an invalid transition is ignored and malformed
//! input is simply a wrong answer. Only building a match or a generator from
//! bad settings produces an error.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DuelError {
    #[error("Invalid match configuration: {0}")]
    InvalidConfig(String),

    #[error("Arithmetic generator needs at least one operator")]
    NoOperators,

    #[error("Unknown problem category: {0}")]
    UnknownCategory(String),

    #[error("No seat {0}: a duel has two players")]
    UnknownSeat(u8),
}

/// Result alias for fallible construction.
pub type DuelResult<T> = Result<T, DuelError>;
