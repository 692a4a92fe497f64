//! Game rules: die evaluation, turn order and the round driver.
//!
//! - `evaluator`: what a rolled face does (score, pass or keep)
//! - `turn_order`: who receives a passed die
//! - `engine`: runs rounds until at most one player holds dice

pub mod engine;
pub mod evaluator;
pub mod turn_order;

pub use engine::{Game, GameSummary, RoundPhase, RoundReport, TurnReport};
pub use evaluator::{evaluate, DieOutcome};
pub use turn_order::next_active;
