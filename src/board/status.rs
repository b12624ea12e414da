//! Game-end detection and the one-line status summary.

use std::fmt;

use super::{Bitboard, Board, Color, Piece};

/// Where the game stands from the side to move's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Checkmate { winner: Color },
    Draw,
    Ongoing { to_move: Color, in_check: bool },
}

impl GameStatus {
    #[must_use]
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::Ongoing { .. })
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Checkmate { winner } => {
                write!(f, "Game over, {winner} wins by checkmate!")
            }
            GameStatus::Draw => write!(f, "Game over, drawn position"),
            GameStatus::Ongoing { to_move, in_check } => {
                write!(f, "{to_move} to move")?;
                if *in_check {
                    write!(f, ", {to_move} is in check")?;
                }
                Ok(())
            }
        }
    }
}

impl Board {
    pub fn is_checkmate(&mut self) -> bool {
        self.in_check() && self.generate_moves().is_empty()
    }

    pub fn is_stalemate(&mut self) -> bool {
        !self.in_check() && self.generate_moves().is_empty()
    }

    #[must_use]
    pub fn is_fifty_move_draw(&self) -> bool {
        self.halfmove_clock >= 100
    }

    /// The current position has occurred at least three times.
    #[must_use]
    pub fn is_threefold_repetition(&self) -> bool {
        self.repetition_counts.get(self.hash) >= 3
    }

    /// Neither side can possibly mate: bare kings, a single minor piece,
    /// or only bishops that all stand on one square colour.
    #[must_use]
    pub fn is_insufficient_material(&self) -> bool {
        let both = |piece| self.pieces(Color::White, piece) | self.pieces(Color::Black, piece);
        if !(both(Piece::Pawn) | both(Piece::Rook) | both(Piece::Queen)).is_empty() {
            return false;
        }
        let knights = both(Piece::Knight);
        let bishops = both(Piece::Bishop);
        if knights.popcount() + bishops.popcount() <= 1 {
            return true;
        }
        knights.is_empty()
            && ((bishops & Bitboard::LIGHT_SQUARES).is_empty()
                || (bishops & Bitboard::DARK_SQUARES).is_empty())
    }

    /// Draws that do not depend on the legal move list.
    pub(crate) fn is_rule_draw(&self) -> bool {
        self.is_fifty_move_draw() || self.is_insufficient_material() || self.is_threefold_repetition()
    }

    /// Stalemate, the fifty-move rule, insufficient material or threefold
    /// repetition.
    pub fn is_draw(&mut self) -> bool {
        self.is_rule_draw() || self.is_stalemate()
    }

    pub fn is_game_over(&mut self) -> bool {
        self.status().is_over()
    }

    pub fn status(&mut self) -> GameStatus {
        let to_move = self.side_to_move;
        let in_check = self.in_check();
        let no_moves = self.generate_moves().is_empty();
        if no_moves && in_check {
            GameStatus::Checkmate {
                winner: to_move.opponent(),
            }
        } else if no_moves || self.is_rule_draw() {
            GameStatus::Draw
        } else {
            GameStatus::Ongoing { to_move, in_check }
        }
    }
}
