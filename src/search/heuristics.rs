//! Distance-to-goal estimators for best-first search.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::error::Error;

/// Selector for the A* heuristic.
///
/// Neither estimator is admissible: a single jump removes a peg and moves
/// another two cells, so both can shrink by more than one unit of edge cost
/// per move. A* therefore carries no optimality guarantee with either;
/// callers that need the guarantee can check [`Heuristic::admissible`]
/// before relying on it.
///
/// # Examples
///
/// ```
/// use pegsol::search::Heuristic;
///
/// let h: Heuristic = "manhattan".parse()?;
/// assert_eq!(h, Heuristic::ManhattanToCenter);
/// assert!(!h.admissible());
/// # Ok::<(), pegsol::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Heuristic {
    /// The "simple" heuristic: surplus pegs relative to the goal.
    PegCountDifference,
    /// The default heuristic: total grid distance of the pegs to the center.
    ManhattanToCenter,
}

impl Heuristic {
    /// Estimate the remaining distance from `board` to `goal`.
    ///
    /// A pure function of board content; search history plays no part.
    pub fn estimate(self, board: &Board, goal: &Board) -> i64 {
        match self {
            Heuristic::PegCountDifference => peg_count_difference(board, goal),
            Heuristic::ManhattanToCenter => manhattan_to_center(board),
        }
    }

    /// Whether the estimator never overestimates the true remaining cost.
    pub fn admissible(self) -> bool {
        match self {
            // Can exceed the remaining move count whenever the goal keeps
            // pegs the state has already lost elsewhere.
            Heuristic::PegCountDifference => false,
            // Two pegs adjacent to the center already sum to 2 with one
            // move remaining.
            Heuristic::ManhattanToCenter => false,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Heuristic::PegCountDifference => "simple",
            Heuristic::ManhattanToCenter => "manhattan",
        }
    }
}

/// Surplus pegs: `pegs(board) - pegs(goal)`. Exact when every jump removes
/// one goal-surplus peg, an over- or under-estimate otherwise.
pub fn peg_count_difference(board: &Board, goal: &Board) -> i64 {
    board.stats().pegs as i64 - goal.stats().pegs as i64
}

/// Sum over every occupied cell of its grid distance (row delta plus column
/// delta) to the center. Solved boards concentrate their remaining pegs near
/// the center, so smaller is closer.
pub fn manhattan_to_center(board: &Board) -> i64 {
    board
        .peg_positions()
        .map(|pos| pos.center_distance() as i64)
        .sum()
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Heuristic {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "manhattan" => Ok(Heuristic::ManhattanToCenter),
            "simple" => Ok(Heuristic::PegCountDifference),
            _ => Err(Error::ParseHeuristic {
                input: s.to_string(),
                expected: "manhattan, simple".to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Preset;

    #[test]
    fn test_peg_count_difference() {
        let start = Preset::Cross.board();
        let goal = Preset::SolvedCenter.board();
        assert_eq!(peg_count_difference(&start, &goal), 5);
        assert_eq!(peg_count_difference(&goal, &goal), 0);
        // Negative when the goal holds more pegs; the estimator is signed.
        assert_eq!(peg_count_difference(&goal, &start), -5);
    }

    #[test]
    fn test_manhattan_to_center() {
        let goal = Preset::SolvedCenter.board();
        assert_eq!(manhattan_to_center(&goal), 0);

        // Cross pegs sit at distances 2,2,1,2,0,1 from the center.
        let cross = Preset::Cross.board();
        assert_eq!(manhattan_to_center(&cross), 8);
    }

    #[test]
    fn test_estimators_are_pure() {
        let cross = Preset::Cross.board();
        let goal = Preset::SolvedCenter.board();
        for h in [Heuristic::PegCountDifference, Heuristic::ManhattanToCenter] {
            assert_eq!(h.estimate(&cross, &goal), h.estimate(&cross, &goal));
        }
    }

    #[test]
    fn test_neither_heuristic_claims_admissibility() {
        assert!(!Heuristic::PegCountDifference.admissible());
        assert!(!Heuristic::ManhattanToCenter.admissible());
    }

    #[test]
    fn test_parse() {
        assert_eq!(
            "simple".parse::<Heuristic>().unwrap(),
            Heuristic::PegCountDifference
        );
        assert!("euclidean".parse::<Heuristic>().is_err());
    }
}
