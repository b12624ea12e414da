//! Fixed-depth minimax search with alpha-beta pruning.
//!
//! - Principal search to a fixed depth, White maximizing
//! - Quiescence search over captures at the horizon, with stand-pat
//! - MVV-LVA move ordering
//!
//! The search works on one caller-owned [`Board`], making and unmaking
//! moves in place; every entry point leaves the board as it found it.

mod constants;
mod minimax;
mod move_order;
mod quiescence;
mod root;

use super::Board;

pub use constants::{INFINITY, MATE_SCORE};
pub use minimax::minimax;
pub use move_order::{order_moves, priority};
pub use quiescence::quiesce;
pub use root::{recommend, recommend_scored, Recommendation};

/// Node counters for one search call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Principal-search nodes, terminal ones included
    pub nodes: u64,
    /// Quiescence nodes
    pub qnodes: u64,
    /// Beta cutoffs in either search
    pub cutoffs: u64,
}

pub(crate) struct SearchContext<'a> {
    pub(crate) board: &'a mut Board,
    pub(crate) stats: SearchStats,
}

impl<'a> SearchContext<'a> {
    pub(crate) fn new(board: &'a mut Board) -> Self {
        SearchContext {
            board,
            stats: SearchStats::default(),
        }
    }
}
