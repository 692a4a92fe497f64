//! Turn order: who receives a passed die.

use tracing::warn;

use crate::core::PlayerId;

/// The player after `player` in `active_order`, wrapping from last to first.
///
/// `active_order` is the round's frozen list of active players. A player
/// missing from it gets itself back; the round driver never asks about a
/// player outside the list, so that branch is logged as a broken invariant.
///
/// ```
/// use dice_pass::core::PlayerId;
/// use dice_pass::rules::next_active;
///
/// let ids = |v: &[u32]| v.iter().map(|&i| PlayerId::new(i).unwrap()).collect::<Vec<_>>();
/// let order = ids(&[2, 4, 7]);
///
/// assert_eq!(next_active(order[2], &order), order[0]);
/// ```
#[must_use]
pub fn next_active(player: PlayerId, active_order: &[PlayerId]) -> PlayerId {
    match active_order.iter().position(|&p| p == player) {
        Some(i) => active_order[(i + 1) % active_order.len()],
        None => {
            warn!(%player, ?active_order, "player not in active order; keeping die in place");
            player
        }
    }
}
