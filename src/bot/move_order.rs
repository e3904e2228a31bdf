//! Move ordering for the alpha-beta search.
//!
//! Captures go first, most valuable victim first. Quiet moves get a small
//! random priority so that equal-looking lines are explored in varying order.

use rand::Rng;

use crate::board::{MoveList, ScoredMoveList};

use super::eval::piece_value;

/// Order `moves` by descending priority.
///
/// A capture's priority is the material value of the captured piece. A quiet
/// move draws a priority uniformly from `0..quiet_jitter`; with a jitter of
/// zero or less every quiet move scores 0 and keeps its generation order.
pub fn order_moves<R: Rng + ?Sized>(
    moves: &MoveList,
    rng: &mut R,
    quiet_jitter: i32,
) -> ScoredMoveList {
    let mut scored = ScoredMoveList::new();
    for &mv in moves.iter() {
        let priority = match mv.captured() {
            Some(victim) => piece_value(victim),
            None if quiet_jitter > 0 => rng.gen_range(0..quiet_jitter),
            None => 0,
        };
        scored.push(mv, priority);
    }
    scored.sort_by_score_desc();
    scored
}
