//! Search engines over the implicit board-state graph.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::Error;

pub mod astar;
pub mod graph;
pub mod heuristics;
pub mod ids;

pub use astar::{a_star_search, backtrack, AStarRun};
pub use graph::StateGraph;
pub use heuristics::{manhattan_to_center, peg_count_difference, Heuristic};
pub use ids::{
    iterative_deepening_search, pruned_iterative_deepening_search, IdsRun, Solution, DEPTH_CEILING,
};

/// Selector for a search engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Engine {
    AStar,
    IterativeDeepening,
    PrunedIterativeDeepening,
}

impl Engine {
    pub const ALL: [Engine; 3] = [
        Engine::AStar,
        Engine::IterativeDeepening,
        Engine::PrunedIterativeDeepening,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Engine::AStar => "astar",
            Engine::IterativeDeepening => "ids",
            Engine::PrunedIterativeDeepening => "pruned-ids",
        }
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Engine {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|e| e.name() == s)
            .ok_or_else(|| Error::ParseEngine {
                input: s.to_string(),
                expected: "astar, ids, pruned-ids".to_string(),
            })
    }
}
