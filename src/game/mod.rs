//! Turn-based duel: input, countdown and the match state machine.
//!
//! The presentation layer owns the clock and the screen. It forwards key
//! presses, option picks and one `tick` per second to a `Match`, and reads
//! back lives, the current problem and settled-turn outcomes.

pub mod input;
pub mod timer;
pub mod turn;
pub mod duel;

pub use input::InputBuffer;
pub use timer::{TimerEvent, TurnTimer, Urgency};
pub use turn::{AnswerResult, TurnOutcome, TurnState};
pub use duel::{Match, Phase};
