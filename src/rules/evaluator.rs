//! Die evaluation: what a rolled face means for its holder.

use serde::{Deserialize, Serialize};

use crate::core::Die;

/// What happens to a die after it is rolled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DieOutcome {
    /// A 6: the holder scores a point and the die leaves play.
    Score,
    /// A 1: the die leaves the holder and a fresh die goes to the next
    /// active player once the round's evaluation is over.
    Pass,
    /// 2 through 5: the die stays in the hand.
    Keep,
}

/// Classify a rolled die.
#[must_use]
pub const fn evaluate(die: Die) -> DieOutcome {
    match die.value() {
        6 => DieOutcome::Score,
        1 => DieOutcome::Pass,
        2..=5 => DieOutcome::Keep,
        // `Die` only holds 1..=6.
        _ => unreachable!(),
    }
}
