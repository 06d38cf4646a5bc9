//! Python bindings for the math duel.
//!
//! # Quick Start
//!
//! ```python
//! import math_duel as md
//!
//! duel = md.Match(category="operations", seed=42, operators="+-")
//! print(duel.problem.prompt)
//!
//! duel.set_input(duel.problem.expected)
//! outcome = duel.submit()
//! duel.advance_turn()
//!
//! for medal in duel.medals(md.PlayerId(0)):
//!     print(medal.label)
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_match;

pub use py_core::*;
pub use py_match::*;

/// math_duel: a two-player arithmetic quiz duel.
#[pymodule]
fn math_duel(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyPlayerId>()?;
    m.add_class::<PyProblem>()?;
    m.add_class::<PyTurnOutcome>()?;
    m.add_class::<PyMedal>()?;
    m.add_class::<PyStatsSummary>()?;
    m.add_class::<PyMatch>()?;
    Ok(())
}
