//! Search constants.

/// Score of a checkmate, from White's point of view when positive.
pub const MATE_SCORE: i32 = 100_000;

/// Bound of the root search window; larger than any reachable score.
pub const INFINITY: i32 = 1_000_000;

/// Multiplier on the victim's value in MVV-LVA so that the victim always
/// dominates the attacker.
pub(crate) const VICTIM_WEIGHT: i32 = 10;

/// Ordering bonus for a promotion, about one queen.
pub(crate) const PROMOTION_BONUS: i32 = 900;
