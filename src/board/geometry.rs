//! Grid geometry: the 7x7 numbering scheme and validated positions.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Side length of the square grid.
pub const BOARD_SIZE: usize = 7;

/// Total number of cells on the grid.
pub const BOARD_CELLS: usize = BOARD_SIZE * BOARD_SIZE;

/// A cell position on the board, numbered 1-49 row-major from the top-left.
///
/// The 1-based numbering is the external convention (move lists are reported
/// in it); indexing into cell storage goes through [`Position::index`].
///
/// # Examples
///
/// ```
/// use pegsol::board::geometry::Position;
///
/// let pos = Position::new(25)?;
/// assert_eq!(pos, Position::CENTER);
/// assert_eq!((pos.row(), pos.col()), (3, 3));
/// assert!(Position::new(50).is_err());
/// # Ok::<(), pegsol::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position(u8);

impl Position {
    /// The center of the grid, position 25 (row 3, column 3).
    pub const CENTER: Position = Position(25);

    /// Create a position, validating it lies on the grid.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPosition`] if `value` is outside 1-49.
    pub fn new(value: usize) -> Result<Self> {
        if (1..=BOARD_CELLS).contains(&value) {
            Ok(Position(value as u8))
        } else {
            Err(Error::InvalidPosition { position: value })
        }
    }

    /// Position for a 0-based cell index.
    pub(crate) fn from_index(index: usize) -> Self {
        debug_assert!(index < BOARD_CELLS);
        Position(index as u8 + 1)
    }

    /// Position for 0-based row/column coordinates.
    pub(crate) fn from_row_col(row: usize, col: usize) -> Self {
        debug_assert!(row < BOARD_SIZE && col < BOARD_SIZE);
        Self::from_index(row * BOARD_SIZE + col)
    }

    /// The 1-based position number.
    pub fn value(self) -> usize {
        self.0 as usize
    }

    /// The 0-based cell index.
    pub fn index(self) -> usize {
        self.0 as usize - 1
    }

    /// The 0-based row.
    pub fn row(self) -> usize {
        self.index() / BOARD_SIZE
    }

    /// The 0-based column.
    pub fn col(self) -> usize {
        self.index() % BOARD_SIZE
    }

    /// The position displaced by `(dr, dc)`, or `None` if it leaves the grid.
    pub fn offset(self, dr: isize, dc: isize) -> Option<Position> {
        let row = self.row() as isize + dr;
        let col = self.col() as isize + dc;
        let bound = BOARD_SIZE as isize;
        if (0..bound).contains(&row) && (0..bound).contains(&col) {
            Some(Self::from_row_col(row as usize, col as usize))
        } else {
            None
        }
    }

    /// Grid distance (row delta + column delta) to the center cell.
    pub fn center_distance(self) -> usize {
        self.row().abs_diff(Self::CENTER.row()) + self.col().abs_diff(Self::CENTER.col())
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_validation() {
        assert!(Position::new(1).is_ok());
        assert!(Position::new(49).is_ok());
        assert!(Position::new(0).is_err());
        assert!(Position::new(50).is_err());
    }

    #[test]
    fn test_row_col_roundtrip() {
        for index in 0..BOARD_CELLS {
            let pos = Position::from_index(index);
            assert_eq!(pos.index(), index);
            assert_eq!(Position::from_row_col(pos.row(), pos.col()), pos);
        }
    }

    #[test]
    fn test_center() {
        assert_eq!(Position::CENTER.value(), 25);
        assert_eq!(Position::CENTER.center_distance(), 0);
        // Corners of the grid are 6 steps from center.
        assert_eq!(Position::new(1).unwrap().center_distance(), 6);
        assert_eq!(Position::new(49).unwrap().center_distance(), 6);
    }

    #[test]
    fn test_offset_stays_on_grid() {
        let top_left = Position::new(1).unwrap();
        assert_eq!(top_left.offset(0, 2), Some(Position::new(3).unwrap()));
        assert_eq!(top_left.offset(0, -2), None);
        assert_eq!(top_left.offset(-2, 0), None);
        assert_eq!(top_left.offset(2, 0), Some(Position::new(15).unwrap()));
    }
}
