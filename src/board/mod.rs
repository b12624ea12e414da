//! Chess rules, evaluation and search.
//!
//! Uses bitboards for move generation and keeps a history of played moves
//! so positions can be rewound. Supports the full rules including
//! castling, en passant, promotion and the standard draw conditions.
//!
//! # Example
//! ```
//! use chess_coach::board::{recommend, Board};
//!
//! let mut board = Board::new();
//! assert_eq!(board.generate_moves().len(), 20);
//! let mv = recommend(&mut board, 2).unwrap();
//! println!("engine suggests {}", board.move_to_san(&mv));
//! ```

mod attack_tables;
mod error;
mod eval;
mod fen;
mod history;
mod make_unmake;
mod movegen;
mod pst;
mod san;
mod search;
mod state;
mod status;
mod types;

#[cfg(test)]
mod tests;

pub use error::{FenError, MoveParseError, SanError, SquareError};
pub use eval::evaluate;
pub use fen::STARTING_FEN;
pub use history::MoveRecord;
pub use search::{
    minimax, order_moves, priority, quiesce, recommend, recommend_scored, Recommendation,
    SearchStats, INFINITY, MATE_SCORE,
};
pub use state::Board;
pub use status::GameStatus;
pub use types::{
    Bitboard, BitboardIter, CastlingRights, Color, Move, MoveList, MoveListIntoIter, Piece, Square,
};

pub(crate) use state::UnmakeInfo;
pub(crate) use types::{MoveKind, PROMOTION_PIECES};
