//! Static evaluation: material plus piece-square bonuses.

use super::{pst, Board, Color, Piece, Square};

/// Table index of `sq` for a White piece (a8 = 0, h1 = 63).
#[inline]
fn white_table_index(sq: Square) -> usize {
    (7 - sq.rank()) * 8 + sq.file()
}

/// Value of one piece standing on `sq`, always from its owner's side.
#[inline]
pub(crate) fn piece_square_value(color: Color, piece: Piece, sq: Square) -> i32 {
    let idx = match color {
        Color::White => white_table_index(sq),
        Color::Black => white_table_index(sq) ^ 56,
    };
    piece.value() + pst::table(piece)[idx]
}

/// Score of the position in centipawns, positive when White is better.
///
/// Only placement counts: side to move, castling rights and the move
/// clocks do not affect the result.
#[must_use]
pub fn evaluate(board: &Board) -> i32 {
    let mut score = 0;
    for piece in Piece::ALL {
        for sq in board.pieces(Color::White, piece).iter() {
            score += piece_square_value(Color::White, piece, sq);
        }
        for sq in board.pieces(Color::Black, piece).iter() {
            score -= piece_square_value(Color::Black, piece, sq);
        }
    }
    score
}
