use super::super::attack_tables::{bishop_attacks, rook_attacks};
use super::super::{Bitboard, Board, MoveKind, MoveList, Piece, Square};

impl Board {
    pub(crate) fn generate_slider_moves(&self, from: Square, piece: Piece, out: &mut MoveList) {
        let occupied = self.all_occupied;
        let reach = match piece {
            Piece::Bishop => bishop_attacks(from, occupied),
            Piece::Rook => rook_attacks(from, occupied),
            Piece::Queen => bishop_attacks(from, occupied) | rook_attacks(from, occupied),
            _ => Bitboard::EMPTY,
        };
        let own = self.occupied[self.side_to_move.index()];
        for to in (reach & !own).iter() {
            self.push_move(out, from, to, MoveKind::Normal, None);
        }
    }
}
