use super::move_order::order_moves;
use super::SearchContext;
use crate::board::{evaluate, Board};

impl SearchContext<'_> {
    /// Capture-only search below the horizon.
    ///
    /// Fail-hard: a result at or beyond a bound is reported as that bound.
    pub(crate) fn quiesce(&mut self, mut alpha: i32, mut beta: i32, maximizing: bool) -> i32 {
        self.stats.qnodes += 1;
        let stand_pat = evaluate(self.board);

        if maximizing {
            if stand_pat >= beta {
                self.stats.cutoffs += 1;
                return beta;
            }
            alpha = alpha.max(stand_pat);
        } else {
            if stand_pat <= alpha {
                self.stats.cutoffs += 1;
                return alpha;
            }
            beta = beta.min(stand_pat);
        }

        let mut captures = self.board.generate_captures();
        order_moves(&mut captures);

        for mv in &captures {
            let info = self.board.make_move(*mv);
            let score = self.quiesce(alpha, beta, !maximizing);
            self.board.unmake_move(*mv, info);

            if maximizing {
                if score >= beta {
                    self.stats.cutoffs += 1;
                    return beta;
                }
                alpha = alpha.max(score);
            } else {
                if score <= alpha {
                    self.stats.cutoffs += 1;
                    return alpha;
                }
                beta = beta.min(score);
            }
        }

        if maximizing {
            alpha
        } else {
            beta
        }
    }
}

/// Quiescence search of `board` inside the window `(alpha, beta)`.
///
/// `maximizing` is true when the side to move is the one trying to raise
/// the (White-positive) score. Terminates because every expanded move
/// removes a piece; the board is restored before returning.
pub fn quiesce(board: &mut Board, alpha: i32, beta: i32, maximizing: bool) -> i32 {
    SearchContext::new(board).quiesce(alpha, beta, maximizing)
}
