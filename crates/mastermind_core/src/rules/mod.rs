//! Game rules for Mastermind.
//!
//! Pure functions scoring a guess and judging the result. They hold no
//! state so the engine and tests can call them directly.

pub mod evaluate;
pub mod judge;

pub use evaluate::evaluate;
pub use judge::{is_solved, judge};
