//! Core chess types: pieces, colors, squares, bitboards, castling rights
//! and moves.

mod bitboard;
mod castling;
mod moves;
mod piece;
mod square;

pub use bitboard::{Bitboard, BitboardIter};
pub use castling::CastlingRights;
pub use moves::{Move, MoveList, MoveListIntoIter};
pub use piece::{Color, Piece};
pub use square::Square;

pub(crate) use moves::MoveKind;
pub(crate) use piece::PROMOTION_PIECES;
