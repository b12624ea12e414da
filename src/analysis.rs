//! Grading a played move against the engine's own choice.
//!
//! The grader rewinds the game to the position the move was played from,
//! asks the search what it would have played there and compares notations.
//! Rewound moves are always replayed, including on an early return or a
//! panic, so callers get their board back exactly as they passed it in.

use std::fmt;

use log::{info, warn};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{recommend, Board, Move, MoveRecord};

/// How many plies the grader will look back for the played move.
pub const MAX_REWIND: usize = 5;

/// Suggestion text when the played move cannot be located.
pub const NOT_FOUND: &str = "Move not found in history";

/// Suggestion text when the located position has no legal move.
pub const NO_SUGGESTION: &str = "None";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Grade {
    /// The played move is the one the engine would have chosen
    BestMove,
    /// A different move was played
    Alternative,
    /// The played move was not found among the recent plies
    Error,
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Grade::BestMove => write!(f, "Best Move"),
            Grade::Alternative => write!(f, "Alternative"),
            Grade::Error => write!(f, "Error"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GradeReport {
    pub grade: Grade,
    /// SAN of the engine's move, or an explanatory message
    pub suggestion: String,
}

impl fmt::Display for GradeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (engine: {})", self.grade, self.suggestion)
    }
}

/// Undoes moves on a board and replays them when dropped.
struct Rewind<'a> {
    board: &'a mut Board,
    /// Most recently undone last
    undone: Vec<Move>,
}

impl<'a> Rewind<'a> {
    fn new(board: &'a mut Board) -> Self {
        Rewind {
            board,
            undone: Vec::with_capacity(MAX_REWIND),
        }
    }

    fn step_back(&mut self) -> Option<Move> {
        let mv = self.board.undo()?;
        self.undone.push(mv);
        Some(mv)
    }

    fn board(&mut self) -> &mut Board {
        &mut *self.board
    }
}

impl Drop for Rewind<'_> {
    fn drop(&mut self) {
        while let Some(mv) = self.undone.pop() {
            self.board.apply(mv);
        }
    }
}

fn same_move(board: &Board, mv: Move, played: &MoveRecord) -> bool {
    mv.color() == played.color
        && mv.from() == played.mv.from()
        && mv.to() == played.mv.to()
        && board.move_to_san(&mv) == played.san
}

/// Grade `played` by searching the position it was played from at `depth`.
///
/// `played` must be one of the last [`MAX_REWIND`] moves on `board`;
/// otherwise the report is [`Grade::Error`]. The board is left exactly as
/// it was passed in.
pub fn grade(board: &mut Board, played: &MoveRecord, depth: u32) -> GradeReport {
    let mut rewind = Rewind::new(board);

    let mut found = false;
    for _ in 0..MAX_REWIND {
        let Some(mv) = rewind.step_back() else {
            break;
        };
        if same_move(rewind.board(), mv, played) {
            found = true;
            break;
        }
    }
    if !found {
        warn!(
            "cannot grade {} ({}): not among the last {MAX_REWIND} plies",
            played.san, played.color
        );
        return GradeReport {
            grade: Grade::Error,
            suggestion: NOT_FOUND.to_string(),
        };
    }

    let board = rewind.board();
    let report = match recommend(board, depth) {
        Some(best) => {
            let suggestion = board.move_to_san(&best);
            let grade = if suggestion == played.san {
                Grade::BestMove
            } else {
                Grade::Alternative
            };
            GradeReport { grade, suggestion }
        }
        None => GradeReport {
            grade: Grade::Alternative,
            suggestion: NO_SUGGESTION.to_string(),
        },
    };
    info!("graded {} at depth {depth}: {report}", played.san);
    report
}

#[cfg(test)]
mod tests {
    use std::panic::{catch_unwind, AssertUnwindSafe};

    use super::*;

    fn play_san(board: &mut Board, moves: &[&str]) -> Vec<MoveRecord> {
        moves
            .iter()
            .map(|san| {
                let mv = board.parse_san(san).unwrap();
                board.play(mv)
            })
            .collect()
    }

    #[test]
    fn grade_labels() {
        assert_eq!(Grade::BestMove.to_string(), "Best Move");
        assert_eq!(Grade::Alternative.to_string(), "Alternative");
        assert_eq!(Grade::Error.to_string(), "Error");
    }

    #[test]
    fn rewind_replays_in_original_order() {
        let mut board = Board::new();
        play_san(&mut board, &["e4", "e5", "Nf3"]);
        let before = board.clone();
        {
            let mut rewind = Rewind::new(&mut board);
            assert!(rewind.step_back().is_some());
            assert!(rewind.step_back().is_some());
            assert_eq!(rewind.board().ply_count(), 1);
        }
        assert_eq!(board, before);
    }

    #[test]
    fn rewind_restores_on_panic() {
        let mut board = Board::new();
        play_san(&mut board, &["d4", "d5", "c4"]);
        let before = board.clone();
        let result = catch_unwind(AssertUnwindSafe(|| {
            let mut rewind = Rewind::new(&mut board);
            rewind.step_back();
            rewind.step_back();
            panic!("interrupted mid-rewind");
        }));
        assert!(result.is_err());
        assert_eq!(board, before);
    }

    #[test]
    fn rewind_stops_at_game_start() {
        let mut board = Board::new();
        let records = play_san(&mut board, &["e4"]);
        let stranger = MoveRecord {
            san: "Nf3".to_string(),
            ..records[0].clone()
        };
        let before = board.clone();
        let report = grade(&mut board, &stranger, 1);
        assert_eq!(report.grade, Grade::Error);
        assert_eq!(report.suggestion, NOT_FOUND);
        assert_eq!(board, before);
    }
}
