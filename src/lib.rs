//! Peg-solitaire reachability solver
//!
//! This crate provides:
//! - A 7x7 cross-board model with validated jump moves and canonical text
//!   encodings
//! - A lazily-materialized, hash-addressed state graph with memoized
//!   deduplication
//! - A* search with two selectable heuristics and parent-pointer
//!   backtracking
//! - Plain and symmetry-pruned iterative-deepening search
//! - Named classic layouts and a reverse-jump instance generator
//!
//! # Examples
//!
//! ```
//! use pegsol::{a_star_search, backtrack, Heuristic, Preset};
//!
//! let start = Preset::Cross.board();
//! let goal = Preset::SolvedCenter.board();
//!
//! let run = a_star_search(&start, &goal, Heuristic::ManhattanToCenter)?;
//! let steps = backtrack(&run, &start, &goal)?;
//! assert_eq!(steps.len(), 5);
//! # Ok::<(), pegsol::Error>(())
//! ```

pub mod board;
pub mod cli;
pub mod error;
pub mod identifiers;
pub mod search;

pub use board::{Board, BoardStats, Cell, Move, Position, Preset};
pub use error::{Error, Result};
pub use identifiers::StateId;
pub use search::{
    a_star_search, backtrack, iterative_deepening_search, pruned_iterative_deepening_search,
    AStarRun, Engine, Heuristic, IdsRun, Solution, StateGraph, DEPTH_CEILING,
};
