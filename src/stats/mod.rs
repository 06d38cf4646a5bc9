//! Answer statistics and post-match feedback.
//!
//! - `player_stats`: counters and the append-only answer log
//! - `summary`: headline numbers (percent, average reaction, ...)
//! - `breakdown`: per-operator and per-category tallies
//! - `medals`: threshold rules that turn stats into badges
//! - `report`: everything the game-over screen shows

pub mod player_stats;
pub mod summary;
pub mod breakdown;
pub mod medals;
pub mod report;

pub use player_stats::{AnswerRecord, PlayerStats};
pub use summary::StatsSummary;
pub use breakdown::{category_tallies, OperatorBreakdown, Tally};
pub use medals::{Badge, Medal, MedalEvaluator, MedalThresholds, MedalTone};
pub use report::{MatchReport, PlayerReport};
