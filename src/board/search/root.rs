use log::{debug, trace};

use super::constants::INFINITY;
use super::move_order::order_moves;
use super::{SearchContext, SearchStats};
use crate::board::{Board, Move};

/// The move chosen at the root and what the search thought of it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Recommendation {
    pub best_move: Move,
    /// Root score, positive when White is better
    pub score: i32,
    pub stats: SearchStats,
}

/// Best move for the side to move, searched `depth` plies deep (at least 1).
///
/// Returns `None` when the game is over. On equal scores the move ordered
/// first wins. The board is restored before returning.
pub fn recommend(board: &mut Board, depth: u32) -> Option<Move> {
    recommend_scored(board, depth).map(|rec| rec.best_move)
}

/// [`recommend`] with the root score and node counts.
pub fn recommend_scored(board: &mut Board, depth: u32) -> Option<Recommendation> {
    let depth = depth.max(1);
    let mut moves = board.generate_moves();
    if moves.is_empty() || board.is_rule_draw() {
        debug!("no recommendation: game over ({})", board.to_fen());
        return None;
    }
    order_moves(&mut moves);

    let maximizing = board.side_to_move().is_maximizing();
    let mut ctx = SearchContext::new(board);
    let mut alpha = -INFINITY;
    let mut beta = INFINITY;
    let mut best_score = if maximizing { -INFINITY } else { INFINITY };
    let mut best_move = None;

    for mv in &moves {
        let info = ctx.board.make_move(*mv);
        let score = ctx.minimax(depth - 1, alpha, beta, !maximizing);
        ctx.board.unmake_move(*mv, info);
        trace!("root {mv} scored {score}");

        if maximizing {
            if score > best_score {
                best_score = score;
                best_move = Some(*mv);
            }
            alpha = alpha.max(score);
        } else {
            if score < best_score {
                best_score = score;
                best_move = Some(*mv);
            }
            beta = beta.min(score);
        }
        if beta <= alpha {
            ctx.stats.cutoffs += 1;
            break;
        }
    }

    // Every root move scored exactly at the sentinel; take the first one.
    let best_move = best_move.or_else(|| moves.first())?;
    let stats = ctx.stats;
    debug!(
        "depth {depth}: best {best_move} score {best_score} ({} nodes, {} qnodes, {} cutoffs)",
        stats.nodes, stats.qnodes, stats.cutoffs
    );
    Some(Recommendation {
        best_move,
        score: best_score,
        stats,
    })
}
