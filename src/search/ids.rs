//! Iterative-deepening search, plain and symmetry-pruned.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::board::{Board, Move};
use crate::identifiers::StateId;

/// Largest depth bound the deepening loop will try. Searches that exhaust it
/// report the negative result rather than running unbounded; recursion depth
/// is capped by this ceiling plus per-node branching.
pub const DEPTH_CEILING: usize = 30;

/// A found move chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    /// Number of moves; the depth bound at which the goal was found.
    pub depth: usize,
    /// Moves in start-to-goal order.
    pub moves: Vec<Move>,
}

/// Outcome of one iterative-deepening invocation: the cumulative expansion
/// count across all depth iterations, and the solution when one was found
/// within the ceiling. `solution: None` is the expected negative result for
/// instances out of budget, not a fault.
#[derive(Debug, Clone)]
pub struct IdsRun {
    pub expanded: usize,
    pub solution: Option<Solution>,
}

/// Plain iterative deepening: depth-limited DFS restarted with the bound
/// rising from 0 to [`DEPTH_CEILING`].
///
/// Children are generated in [`Board::legal_moves`] enumeration order and
/// every generated child counts one expansion. Because bounds rise one at a
/// time, the first solution found has minimal depth. The successful path's
/// moves accumulate in the return value during stack unwinding (goal end
/// first) and are reversed before being handed back.
pub fn iterative_deepening_search(start: &Board, goal: &Board) -> IdsRun {
    let mut expanded = 0usize;
    for bound in 0..=DEPTH_CEILING {
        if let Some(mut moves) = depth_limited(start, goal, bound, &mut expanded) {
            moves.reverse();
            return IdsRun {
                expanded,
                solution: Some(Solution {
                    depth: moves.len(),
                    moves,
                }),
            };
        }
    }
    IdsRun {
        expanded,
        solution: None,
    }
}

fn depth_limited(
    node: &Board,
    goal: &Board,
    budget: usize,
    expanded: &mut usize,
) -> Option<Vec<Move>> {
    if node == goal {
        return Some(Vec::new());
    }
    if budget == 0 {
        return None;
    }
    for mv in node.legal_moves() {
        *expanded += 1;
        let child = node
            .apply_move(&mv)
            .expect("legal_moves yields applicable moves");
        if let Some(mut path) = depth_limited(&child, goal, budget - 1, expanded) {
            path.push(mv);
            return Some(path);
        }
    }
    None
}

/// Symmetry-pruned iterative deepening.
///
/// Identical to [`iterative_deepening_search`] except that each depth
/// iteration keeps a table of symmetry classes already explored (see
/// [`Board::symmetry_class_id`]): a child whose class was already visited in
/// the same iteration with at least as much remaining budget is skipped.
/// Peg-solitaire boards have 8-fold geometric symmetry, so this removes a
/// large constant factor of redundant work.
///
/// The table is scoped to one depth iteration and records the best remaining
/// budget per class, so a state first reached shallow never blocks a later
/// visit with more budget; the first solution found is still of minimal
/// depth. The expansion count still includes generated-then-pruned children.
pub fn pruned_iterative_deepening_search(start: &Board, goal: &Board) -> IdsRun {
    let mut expanded = 0usize;
    for bound in 0..=DEPTH_CEILING {
        let mut explored: HashMap<StateId, usize> = HashMap::new();
        if let Some(mut moves) =
            pruned_depth_limited(start, goal, bound, &mut explored, &mut expanded)
        {
            moves.reverse();
            return IdsRun {
                expanded,
                solution: Some(Solution {
                    depth: moves.len(),
                    moves,
                }),
            };
        }
    }
    IdsRun {
        expanded,
        solution: None,
    }
}

fn pruned_depth_limited(
    node: &Board,
    goal: &Board,
    budget: usize,
    explored: &mut HashMap<StateId, usize>,
    expanded: &mut usize,
) -> Option<Vec<Move>> {
    if node == goal {
        return Some(Vec::new());
    }
    if budget == 0 {
        return None;
    }
    for mv in node.legal_moves() {
        *expanded += 1;
        let child = node
            .apply_move(&mv)
            .expect("legal_moves yields applicable moves");
        let remaining = budget - 1;

        let class = child.symmetry_class_id();
        if explored.get(&class).is_some_and(|&seen| seen >= remaining) {
            continue;
        }
        explored.insert(class, remaining);

        if let Some(mut path) = pruned_depth_limited(&child, goal, remaining, explored, expanded) {
            path.push(mv);
            return Some(path);
        }
    }
    None
}
