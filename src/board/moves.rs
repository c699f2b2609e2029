//! Jump moves: legality rules, application, and enumeration.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::geometry::{Position, BOARD_CELLS};
use super::state::{Board, Cell};
use crate::error::{Error, Result};

/// Candidate jump displacements from an origin, in the fixed enumeration
/// order right, left, up, down. The order is load-bearing for reproducible
/// search traces.
const JUMP_OFFSETS: [(isize, isize); 4] = [(0, 2), (0, -2), (-2, 0), (2, 0)];

/// A jump move: a peg at `from` leaps over the cell between `from` and `to`,
/// landing on `to` and removing the jumped peg.
///
/// The pair is geometrically well formed only when the two positions share a
/// row or column at distance exactly 2, which determines the jumped middle
/// cell uniquely (see [`Move::jumped`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Position,
    pub to: Position,
}

impl Move {
    pub fn new(from: Position, to: Position) -> Self {
        Move { from, to }
    }

    /// The position jumped over, or `None` when the endpoints do not form a
    /// straight two-cell line.
    pub fn jumped(&self) -> Option<Position> {
        let (from_row, from_col) = (self.from.row(), self.from.col());
        let (to_row, to_col) = (self.to.row(), self.to.col());

        if from_row == to_row && from_col.abs_diff(to_col) == 2 {
            Some(Position::from_row_col(from_row, (from_col + to_col) / 2))
        } else if from_col == to_col && from_row.abs_diff(to_row) == 2 {
            Some(Position::from_row_col((from_row + to_row) / 2, from_col))
        } else {
            None
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.from, self.to)
    }
}

impl Board {
    /// Check whether a move is legal against this board.
    ///
    /// Legal means: the endpoints form a straight two-cell line (checked
    /// before occupancy is consulted), the origin and jumped cells hold pegs,
    /// and the destination is empty. An `Invalid` cell can satisfy none of
    /// those occupancy requirements, so a move path touching the blocked
    /// corner region is always rejected.
    pub fn is_valid(&self, mv: &Move) -> bool {
        let Some(jumped) = mv.jumped() else {
            return false;
        };
        self.get(mv.from) == Cell::Peg
            && self.get(jumped) == Cell::Peg
            && self.get(mv.to) == Cell::Empty
    }

    /// Apply a move, returning the resulting board.
    ///
    /// The origin and jumped cells become empty and the destination gains a
    /// peg. The input board is unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IllegalMove`] when the move fails [`Board::is_valid`].
    #[must_use = "apply_move returns a new board; the original is unchanged"]
    pub fn apply_move(&self, mv: &Move) -> Result<Board> {
        if !self.is_valid(mv) {
            return Err(Error::IllegalMove {
                from: mv.from,
                to: mv.to,
            });
        }
        let jumped = mv
            .jumped()
            .expect("validated moves have a jumped position");

        let mut next = *self;
        next.cells[mv.from.index()] = Cell::Empty;
        next.cells[jumped.index()] = Cell::Empty;
        next.cells[mv.to.index()] = Cell::Peg;
        Ok(next)
    }

    /// Enumerate every legal move from this board.
    ///
    /// Origins are visited in row-major order and each origin tries its
    /// right, left, up, down jumps in that order.
    pub fn legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::new();
        for index in 0..BOARD_CELLS {
            let from = Position::from_index(index);
            for (dr, dc) in JUMP_OFFSETS {
                if let Some(to) = from.offset(dr, dc) {
                    let mv = Move::new(from, to);
                    if self.is_valid(&mv) {
                        moves.push(mv);
                    }
                }
            }
        }
        moves
    }
}
