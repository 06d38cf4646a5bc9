//! Scoring rules shared by every question category.
//!
//! - `DamageRules`: how an answer's correctness and speed become life loss
//! - `MatchResult`: how a finished match is decided

pub mod damage;
pub mod result;

pub use damage::{DamageRules, Hit};
pub use result::MatchResult;
