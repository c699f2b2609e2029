//! Reverse-jump instance generation.
//!
//! Walking backward from a goal board produces start boards that are
//! guaranteed solvable within a known move budget; useful for fixtures and
//! for exercising the engines on instances of controlled difficulty.

use rand::prelude::IndexedRandom;
use rand::Rng;

use super::geometry::{Position, BOARD_CELLS};
use super::moves::Move;
use super::state::{Board, Cell};

/// Displacements mirroring the forward enumeration order.
const JUMP_OFFSETS: [(isize, isize); 4] = [(0, 2), (0, -2), (-2, 0), (2, 0)];

/// Enumerate the forward moves whose UNDO applies to this board: every
/// `from -> to` line where `to` holds a peg and both `from` and the jumped
/// cell are empty. Undoing such a move jumps the `to` peg backward,
/// repopulating `from` and the middle cell.
pub fn reverse_moves(board: &Board) -> Vec<Move> {
    let mut moves = Vec::new();
    for index in 0..BOARD_CELLS {
        let from = Position::from_index(index);
        if board.get(from) != Cell::Empty {
            continue;
        }
        for (dr, dc) in JUMP_OFFSETS {
            let Some(to) = from.offset(dr, dc) else {
                continue;
            };
            let mv = Move::new(from, to);
            let jumped = mv.jumped().expect("offset pairs form two-cell lines");
            if board.get(to) == Cell::Peg && board.get(jumped) == Cell::Empty {
                moves.push(mv);
            }
        }
    }
    moves
}

/// Undo a forward move: `to` loses its peg, `from` and the jumped cell gain
/// one. Inverse of [`Board::apply_move`].
fn undo(board: &Board, mv: &Move) -> Board {
    let jumped = mv.jumped().expect("reverse candidates form two-cell lines");
    let mut previous = *board;
    previous.cells[mv.to.index()] = Cell::Empty;
    previous.cells[jumped.index()] = Cell::Peg;
    previous.cells[mv.from.index()] = Cell::Peg;
    previous
}

/// Walk up to `jumps` random reverse jumps from `goal`, returning a board
/// solvable back to `goal` in at most `jumps` moves. Stops early when no
/// reverse jump exists; a seeded [`rand::rngs::StdRng`] makes the result
/// reproducible.
pub fn scramble<R: Rng + ?Sized>(goal: &Board, jumps: usize, rng: &mut R) -> Board {
    let mut board = *goal;
    for _ in 0..jumps {
        let candidates = reverse_moves(&board);
        let Some(mv) = candidates.choose(rng) else {
            break;
        };
        board = undo(&board, mv);
    }
    board
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::board::presets::Preset;

    #[test]
    fn test_reverse_moves_invert_forward_moves() {
        let goal = Preset::SolvedCenter.board();
        for mv in reverse_moves(&goal) {
            let previous = undo(&goal, &mv);
            // Undo added one peg...
            assert_eq!(previous.stats().pegs, goal.stats().pegs + 1);
            // ...and the forward move replays back to the goal.
            assert_eq!(previous.apply_move(&mv).unwrap(), goal);
        }
    }

    #[test]
    fn test_scramble_is_reproducible() {
        let goal = Preset::SolvedCenter.board();
        let a = scramble(&goal, 6, &mut StdRng::seed_from_u64(7));
        let b = scramble(&goal, 6, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn test_scramble_adds_one_peg_per_jump() {
        let goal = Preset::SolvedCenter.board();
        let mut rng = StdRng::seed_from_u64(11);
        let board = scramble(&goal, 4, &mut rng);
        // Each applied reverse jump removes one peg and adds two.
        let added = board.stats().pegs - goal.stats().pegs;
        assert!(added >= 1 && added <= 4, "added {added} pegs");
        assert_eq!(board.stats().invalid, goal.stats().invalid);
    }

    #[test]
    fn test_scramble_stops_when_stuck() {
        // A board with no peg at all has no reverse jump.
        let empty = Board::from_rows(&[
            "--000--", "--000--", "0000000", "0000000", "0000000", "--000--", "--000--",
        ])
        .unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(scramble(&empty, 10, &mut rng), empty);
    }
}
