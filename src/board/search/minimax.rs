use super::constants::{INFINITY, MATE_SCORE};
use super::move_order::order_moves;
use super::SearchContext;
use crate::board::Board;

impl SearchContext<'_> {
    pub(crate) fn minimax(
        &mut self,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> i32 {
        self.stats.nodes += 1;

        let mut moves = self.board.generate_moves();
        if moves.is_empty() {
            if !self.board.in_check() {
                return 0;
            }
            return if maximizing { -MATE_SCORE } else { MATE_SCORE };
        }
        if self.board.is_rule_draw() {
            return 0;
        }
        if depth == 0 {
            return self.quiesce(alpha, beta, maximizing);
        }

        order_moves(&mut moves);

        let mut best = if maximizing { -INFINITY } else { INFINITY };
        for mv in &moves {
            let info = self.board.make_move(*mv);
            let score = self.minimax(depth - 1, alpha, beta, !maximizing);
            self.board.unmake_move(*mv, info);

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                best = best.min(score);
                beta = beta.min(score);
            }
            if beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }
        best
    }
}

/// Minimax value of `board` searched `depth` plies deep, then through
/// quiescence.
///
/// Checkmate scores `-MATE_SCORE` when the maximizing side is the one
/// mated and `MATE_SCORE` otherwise; any draw scores 0. Mate scores are
/// not adjusted for distance, so a mate found deeper is worth the same as
/// an immediate one.
pub fn minimax(board: &mut Board, depth: u32, alpha: i32, beta: i32, maximizing: bool) -> i32 {
    SearchContext::new(board).minimax(depth, alpha, beta, maximizing)
}
