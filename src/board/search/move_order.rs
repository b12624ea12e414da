//! MVV-LVA move ordering.

use std::cmp::Reverse;

use super::constants::{PROMOTION_BONUS, VICTIM_WEIGHT};
use crate::board::{Move, MoveList};

/// Ordering key: most valuable victim first, least valuable attacker as
/// tie-break, plus a flat bonus for promotions. Quiet moves score 0.
#[must_use]
pub fn priority(mv: &Move) -> i32 {
    let mut score = 0;
    if let Some(victim) = mv.captured() {
        score += VICTIM_WEIGHT * victim.value() - mv.piece().value();
    }
    if mv.is_promotion() {
        score += PROMOTION_BONUS;
    }
    score
}

/// Sort by descending priority. The sort is stable, so equal keys keep
/// generation order.
pub fn order_moves(moves: &mut MoveList) {
    moves.as_mut_slice().sort_by_key(|mv| Reverse(priority(mv)));
}
