//! Standard Algebraic Notation (SAN).
//!
//! Examples: "e4", "Nf3", "Bxc6+", "O-O", "e8=Q#".
//!
//! ```
//! use chess_coach::board::Board;
//!
//! let mut board = Board::new();
//! let mv = board.parse_san("e4").unwrap();
//! assert_eq!(board.move_to_san(&mv), "e4");
//! ```

use super::error::SanError;
use super::{Board, Move, Piece, Square};

/// The pieces of a non-castling SAN string.
struct SanParts {
    piece: Piece,
    from_file: Option<usize>,
    from_rank: Option<usize>,
    to: Square,
    promotion: Option<Piece>,
}

fn parse_parts(san: &str) -> Result<SanParts, SanError> {
    let invalid = || SanError::InvalidSquare {
        notation: san.to_string(),
    };
    let mut chars: Vec<char> = san.chars().filter(|c| *c != 'x').collect();

    let piece = match chars.first() {
        Some(c) if c.is_ascii_uppercase() => {
            let piece = Piece::from_char(*c).ok_or_else(invalid)?;
            chars.remove(0);
            piece
        }
        _ => Piece::Pawn,
    };

    let mut promotion = None;
    if let Some(&last) = chars.last() {
        if last.is_ascii_uppercase() {
            promotion = match Piece::from_char(last) {
                Some(p @ (Piece::Knight | Piece::Bishop | Piece::Rook | Piece::Queen)) => Some(p),
                _ => return Err(SanError::InvalidPromotion { char: last }),
            };
            chars.pop();
            if chars.last() == Some(&'=') {
                chars.pop();
            }
        }
    }

    if chars.len() < 2 {
        return Err(invalid());
    }
    let dest: String = chars[chars.len() - 2..].iter().collect();
    let to: Square = dest.parse().map_err(|_| invalid())?;

    let mut from_file = None;
    let mut from_rank = None;
    for c in &chars[..chars.len() - 2] {
        match c {
            'a'..='h' => from_file = Some(*c as usize - 'a' as usize),
            '1'..='8' => from_rank = Some(*c as usize - '1' as usize),
            _ => return Err(invalid()),
        }
    }

    Ok(SanParts {
        piece,
        from_file,
        from_rank,
        to,
        promotion,
    })
}

impl Board {
    /// Format a move played from the current position in SAN.
    #[must_use]
    pub fn move_to_san(&self, mv: &Move) -> String {
        let mut san = String::new();

        if mv.is_castle_kingside() {
            san.push_str("O-O");
        } else if mv.is_castle_queenside() {
            san.push_str("O-O-O");
        } else {
            match mv.piece().san_letter() {
                Some(letter) => {
                    san.push(letter);
                    let (needs_file, needs_rank) = self.needs_disambiguation(mv);
                    if needs_file {
                        san.push(mv.from().file_char());
                    }
                    if needs_rank {
                        san.push(mv.from().rank_char());
                    }
                }
                None if mv.is_capture() => san.push(mv.from().file_char()),
                None => {}
            }
            if mv.is_capture() {
                san.push('x');
            }
            san.push_str(&mv.to().to_string());
            if let Some(promo) = mv.promotion().and_then(Piece::san_letter) {
                san.push('=');
                san.push(promo);
            }
        }

        let mut after = self.clone();
        after.make_move(*mv);
        if after.in_check() {
            san.push(if after.generate_moves().is_empty() {
                '#'
            } else {
                '+'
            });
        }
        san
    }

    /// Whether the origin file and/or rank must be spelled out because
    /// another piece of the same kind can reach the same square.
    fn needs_disambiguation(&self, mv: &Move) -> (bool, bool) {
        let mut scratch = self.clone();
        let rivals: Vec<Square> = scratch
            .generate_moves()
            .iter()
            .filter(|m| m.to() == mv.to() && m.piece() == mv.piece() && m.from() != mv.from())
            .map(|m| m.from())
            .collect();

        if rivals.is_empty() {
            return (false, false);
        }
        let same_file = rivals.iter().any(|sq| sq.file() == mv.from().file());
        let same_rank = rivals.iter().any(|sq| sq.rank() == mv.from().rank());
        match (same_file, same_rank) {
            (false, _) => (true, false),
            (true, false) => (false, true),
            (true, true) => (true, true),
        }
    }

    /// Parse a SAN move for the side to move.
    ///
    /// Check marks and annotation glyphs are ignored, `0-0` is accepted for
    /// `O-O`, the `=` before a promotion piece is optional and redundant
    /// disambiguation is tolerated.
    pub fn parse_san(&mut self, san: &str) -> Result<Move, SanError> {
        let trimmed = san.trim().trim_end_matches(['+', '#', '!', '?']);
        if trimmed.is_empty() {
            return Err(SanError::Empty);
        }
        let no_match = || SanError::NoMatchingMove {
            san: san.trim().to_string(),
        };
        let moves = self.generate_moves();

        match trimmed {
            "O-O" | "0-0" => {
                return moves
                    .into_iter()
                    .find(|m| m.is_castle_kingside())
                    .ok_or_else(no_match)
            }
            "O-O-O" | "0-0-0" => {
                return moves
                    .into_iter()
                    .find(|m| m.is_castle_queenside())
                    .ok_or_else(no_match)
            }
            _ => {}
        }

        let parts = parse_parts(trimmed)?;
        let mut matching = moves.iter().filter(|m| {
            m.piece() == parts.piece
                && m.to() == parts.to
                && !m.is_castling()
                && m.promotion() == parts.promotion
                && parts.from_file.map_or(true, |f| m.from().file() == f)
                && parts.from_rank.map_or(true, |r| m.from().rank() == r)
        });

        match (matching.next(), matching.next()) {
            (Some(mv), None) => Ok(*mv),
            (None, _) => Err(no_match()),
            (Some(_), Some(_)) => Err(SanError::AmbiguousMove {
                san: san.trim().to_string(),
            }),
        }
    }
}
