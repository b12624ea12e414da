//! Played-move history and the apply/undo interface built on it.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Board, Color, Move, UnmakeInfo};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct HistoryEntry {
    pub(crate) mv: Move,
    pub(crate) info: UnmakeInfo,
}

/// A move as the player saw it: the move, who played it and its SAN in
/// the position it was played from.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveRecord {
    pub mv: Move,
    pub color: Color,
    pub san: String,
}

impl Board {
    /// Play a legal move and push it on the history stack.
    pub fn apply(&mut self, mv: Move) {
        let info = self.make_move(mv);
        self.history.push(HistoryEntry { mv, info });
    }

    /// Take back the most recent move; `None` when nothing has been played.
    pub fn undo(&mut self) -> Option<Move> {
        let HistoryEntry { mv, info } = self.history.pop()?;
        self.unmake_move(mv, info);
        Some(mv)
    }

    /// Describe `mv` as played from the current position.
    #[must_use]
    pub fn record(&self, mv: Move) -> MoveRecord {
        MoveRecord {
            mv,
            color: mv.color(),
            san: self.move_to_san(&mv),
        }
    }

    /// [`Board::record`] then [`Board::apply`].
    pub fn play(&mut self, mv: Move) -> MoveRecord {
        let record = self.record(mv);
        self.apply(mv);
        record
    }

    /// Moves played since the position was set up, oldest first.
    pub fn history(&self) -> impl Iterator<Item = Move> + '_ {
        self.history.iter().map(|entry| entry.mv)
    }

    #[must_use]
    pub fn last_move(&self) -> Option<Move> {
        self.history.last().map(|entry| entry.mv)
    }

    #[must_use]
    pub fn ply_count(&self) -> usize {
        self.history.len()
    }

    /// SAN of every played move, oldest first.
    #[must_use]
    pub fn san_history(&self) -> Vec<String> {
        let mut replay = self.clone();
        let mut moves = Vec::with_capacity(replay.history.len());
        while let Some(mv) = replay.undo() {
            moves.push(mv);
        }
        moves
            .into_iter()
            .rev()
            .map(|mv| replay.play(mv).san)
            .collect()
    }
}
