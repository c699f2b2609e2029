//! D4 symmetry group operations for symmetry-aware search pruning

use serde::{Deserialize, Serialize};

use super::geometry::{BOARD_CELLS, BOARD_SIZE};
use super::state::{Board, Cell};
use crate::identifiers::StateId;

/// D4 symmetry transformation (dihedral group of the square)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct D4Transform {
    /// Rotation in degrees (0, 90, 180, 270)
    pub rotation: u16,
    /// Whether to apply a left-right reflection before rotating
    pub reflection: bool,
}

impl D4Transform {
    /// Create identity transform
    pub fn identity() -> Self {
        D4Transform {
            rotation: 0,
            reflection: false,
        }
    }

    /// Get all 8 D4 transforms
    pub fn all() -> Vec<D4Transform> {
        let mut transforms = Vec::with_capacity(8);
        for rotation in [0, 90, 180, 270] {
            transforms.push(D4Transform {
                rotation,
                reflection: false,
            });
            transforms.push(D4Transform {
                rotation,
                reflection: true,
            });
        }
        transforms
    }

    /// Apply the transform to a 0-based cell index.
    ///
    /// The reflection (mirror across the vertical axis) is applied first,
    /// then the clockwise rotation.
    pub fn transform_index(&self, index: usize) -> usize {
        let (mut row, mut col) = (index / BOARD_SIZE, index % BOARD_SIZE);

        if self.reflection {
            col = BOARD_SIZE - 1 - col;
        }

        for _ in 0..(self.rotation / 90) {
            let new_row = col;
            let new_col = BOARD_SIZE - 1 - row;
            row = new_row;
            col = new_col;
        }

        row * BOARD_SIZE + col
    }
}

impl Board {
    /// Apply a D4 transform to the board
    pub fn transform(&self, t: &D4Transform) -> Self {
        let mut cells = [Cell::Empty; BOARD_CELLS];
        for index in 0..BOARD_CELLS {
            cells[t.transform_index(index)] = self.cells[index];
        }
        Board { cells }
    }

    /// The 8 images of this board under the grid's symmetry group: the four
    /// rotations and the four reflected rotations. Images coincide when the
    /// board is itself symmetric.
    pub fn symmetries(&self) -> Vec<Board> {
        D4Transform::all()
            .iter()
            .map(|t| self.transform(t))
            .collect()
    }

    /// Identifier of this board's symmetry class: the lexicographically
    /// minimal canonical encoding over the 8 images. Symmetry-equivalent
    /// boards share a class id; the pruned search keys its explored table
    /// on it.
    pub fn symmetry_class_id(&self) -> StateId {
        let mut best = self.encode();
        for transform in D4Transform::all() {
            let encoding = self.transform(&transform).encode();
            if encoding < best {
                best = encoding;
            }
        }
        StateId::new(best)
    }
}
