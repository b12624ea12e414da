use super::super::attack_tables::KNIGHT_ATTACKS;
use super::super::{Board, MoveKind, MoveList, Square};

impl Board {
    pub(crate) fn generate_knight_moves(&self, from: Square, out: &mut MoveList) {
        let own = self.occupied[self.side_to_move.index()];
        for to in (KNIGHT_ATTACKS[from.as_index()] & !own).iter() {
            self.push_move(out, from, to, MoveKind::Normal, None);
        }
    }
}
