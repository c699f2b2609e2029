//! Lazily-materialized state graph over the board model.
//!
//! The full game graph is exponentially large, so it is never built up
//! front: the graph memoizes every board it has produced, keyed by canonical
//! id, and discovers edges on demand. The memo table lives for one search
//! invocation and never shrinks while it does.

use std::collections::HashMap;

use crate::board::{Board, Move};
use crate::error::{Error, Result};
use crate::identifiers::StateId;

/// Hash-addressed view of the implicit move graph.
#[derive(Debug)]
pub struct StateGraph {
    table: HashMap<StateId, Board>,
}

impl StateGraph {
    /// Create a graph seeded with a root board.
    pub fn new(root: &Board) -> Self {
        let mut table = HashMap::new();
        table.insert(root.id(), *root);
        StateGraph { table }
    }

    /// Cost of traversing any edge; every jump is equally hard.
    pub const fn edge_cost() -> u32 {
        1
    }

    /// Look up the board memoized under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownState`] when the graph never produced `id`.
    /// That is an internal consistency fault on the caller's side, never an
    /// expected outcome.
    pub fn state_for(&self, id: &StateId) -> Result<&Board> {
        self.table
            .get(id)
            .ok_or_else(|| Error::UnknownState { id: id.clone() })
    }

    /// Edges out of the state `id`: one `(move, neighbor id)` pair per legal
    /// move, with every newly-discovered neighbor memoized.
    ///
    /// Idempotent: repeated calls for the same id return the same pairs in
    /// the same order and leave the memo table's size unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownState`] when `id` was never produced by this
    /// graph.
    pub fn neighbors(&mut self, id: &StateId) -> Result<Vec<(Move, StateId)>> {
        let board = *self.state_for(id)?;
        let mut edges = Vec::new();
        for mv in board.legal_moves() {
            let neighbor = board
                .apply_move(&mv)
                .expect("legal_moves yields applicable moves");
            let neighbor_id = neighbor.id();
            self.table.entry(neighbor_id.clone()).or_insert(neighbor);
            edges.push((mv, neighbor_id));
        }
        Ok(edges)
    }

    /// Number of distinct states discovered so far.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Preset;

    #[test]
    fn test_neighbors_discover_and_memoize() {
        let root = Preset::Cross.board();
        let mut graph = StateGraph::new(&root);
        assert_eq!(graph.len(), 1);

        let edges = graph.neighbors(&root.id()).unwrap();
        assert_eq!(edges.len(), root.legal_moves().len());
        // Root plus one entry per distinct neighbor.
        assert_eq!(graph.len(), 1 + edges.len());

        for (mv, id) in &edges {
            let neighbor = graph.state_for(id).unwrap();
            assert_eq!(&root.apply_move(mv).unwrap(), neighbor);
        }
    }

    #[test]
    fn test_neighbors_idempotent() {
        let root = Preset::Cross.board();
        let mut graph = StateGraph::new(&root);

        let first = graph.neighbors(&root.id()).unwrap();
        let size = graph.len();
        let second = graph.neighbors(&root.id()).unwrap();

        assert_eq!(first, second);
        assert_eq!(graph.len(), size);
    }

    #[test]
    fn test_unknown_state_is_an_error() {
        let root = Preset::Cross.board();
        let mut graph = StateGraph::new(&root);

        let foreign = Preset::Plus.board().id();
        assert!(matches!(
            graph.state_for(&foreign),
            Err(Error::UnknownState { .. })
        ));
        assert!(matches!(
            graph.neighbors(&foreign),
            Err(Error::UnknownState { .. })
        ));
    }

    #[test]
    fn test_edge_cost_is_uniform() {
        assert_eq!(StateGraph::edge_cost(), 1);
    }
}
