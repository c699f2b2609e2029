//! Board state representation, text encoding, and basic queries.

use std::fmt;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use super::geometry::{Position, BOARD_CELLS, BOARD_SIZE};
use crate::error::{Error, Result};
use crate::identifiers::StateId;

/// A cell on the peg-solitaire board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Not part of the playable region (the blocked corner squares).
    Invalid,
    /// Playable and vacant.
    Empty,
    /// Playable and occupied by a peg.
    Peg,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Invalid => '-',
            Cell::Empty => '0',
            Cell::Peg => 'X',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '-' => Some(Cell::Invalid),
            '0' => Some(Cell::Empty),
            'X' => Some(Cell::Peg),
            _ => None,
        }
    }
}

/// Count of cells in each of the three states
///
/// The peg count feeds the simple search heuristic; the invalid count is a
/// layout invariant (moves never change it).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BoardStats {
    pub pegs: usize,
    pub empties: usize,
    pub invalid: usize,
}

/// Complete board state: 49 cells over the 7x7 grid.
///
/// Boards are plain values: applying a move yields a new board and never
/// mutates the original, so ancestors referenced by search records stay
/// intact. Two boards are equal iff their cell sequences are equal, and a
/// board's identity throughout the search layer is its canonical text
/// encoding (see [`Board::encode`]).
///
/// # Examples
///
/// ```
/// use pegsol::board::Board;
///
/// let board = Board::from_rows(&[
///     "--000--",
///     "--0X0--",
///     "00XXX00",
///     "000X000",
///     "000X000",
///     "--000--",
///     "--000--",
/// ])?;
/// assert_eq!(board.stats().pegs, 6);
/// assert_eq!(board.encode().len(), 49);
/// # Ok::<(), pegsol::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    pub(crate) cells: [Cell; BOARD_CELLS],
}

impl Board {
    /// Parse a board from 7 rows of 7 characters over the `-0X` alphabet
    /// (`-` invalid region, `0` empty, `X` peg), top row first.
    ///
    /// # Errors
    ///
    /// Returns an error if the row count is not 7, any row is not 7
    /// characters, or any character is outside the alphabet.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
        if rows.len() != BOARD_SIZE {
            return Err(Error::InvalidRowCount {
                expected: BOARD_SIZE,
                got: rows.len(),
            });
        }

        let mut cells = [Cell::Empty; BOARD_CELLS];
        for (row, line) in rows.iter().enumerate() {
            let line = line.as_ref();
            let width = line.chars().count();
            if width != BOARD_SIZE {
                return Err(Error::InvalidRowLength {
                    row,
                    expected: BOARD_SIZE,
                    got: width,
                });
            }
            for (column, character) in line.chars().enumerate() {
                cells[row * BOARD_SIZE + column] =
                    Cell::from_char(character).ok_or(Error::InvalidCellCharacter {
                        character,
                        row,
                        column,
                    })?;
            }
        }

        Ok(Board { cells })
    }

    /// Parse a board from a multi-line string; blank lines and surrounding
    /// whitespace are ignored.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Board::from_rows`].
    pub fn from_string(s: &str) -> Result<Self> {
        let rows: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        Self::from_rows(&rows)
    }

    /// Parse a board from its flat 49-character canonical encoding.
    ///
    /// This is the inverse of [`Board::encode`].
    ///
    /// # Errors
    ///
    /// Returns an error on wrong length or characters outside `-0X`.
    pub fn from_encoding(s: &str) -> Result<Self> {
        let width = s.chars().count();
        if width != BOARD_CELLS {
            return Err(Error::InvalidEncodingLength {
                expected: BOARD_CELLS,
                got: width,
            });
        }
        let mut cells = [Cell::Empty; BOARD_CELLS];
        for (index, character) in s.chars().enumerate() {
            cells[index] = Cell::from_char(character).ok_or(Error::InvalidCellCharacter {
                character,
                row: index / BOARD_SIZE,
                column: index % BOARD_SIZE,
            })?;
        }
        Ok(Board { cells })
    }

    /// Canonical encoding: the 49 cell characters in row-major order.
    ///
    /// A pure function of cell content; identical boards always produce
    /// identical encodings and boards differing in any cell differ in the
    /// corresponding character, so encodings are collision-free.
    pub fn encode(&self) -> String {
        self.cells.iter().map(|&c| c.to_char()).collect()
    }

    /// The board's identity in the search layer.
    pub fn id(&self) -> StateId {
        StateId::new(self.encode())
    }

    /// Get the cell at a position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.index()]
    }

    /// Count cells in each state.
    pub fn stats(&self) -> BoardStats {
        let mut stats = BoardStats {
            pegs: 0,
            empties: 0,
            invalid: 0,
        };
        for cell in &self.cells {
            match cell {
                Cell::Peg => stats.pegs += 1,
                Cell::Empty => stats.empties += 1,
                Cell::Invalid => stats.invalid += 1,
            }
        }
        stats
    }

    /// Iterate over the positions currently holding a peg, in row-major order.
    pub fn peg_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Peg)
            .map(|(index, _)| Position::from_index(index))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                write!(f, "{}", self.cells[row * BOARD_SIZE + col].to_char())?;
            }
            if row < BOARD_SIZE - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

// serde's derived array support stops at 32 elements, and the canonical
// encoding is the board's identity anyway, so a board serializes as that
// string.
impl Serialize for Board {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.encode())
    }
}

impl<'de> Deserialize<'de> for Board {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let encoding = String::deserialize(deserializer)?;
        Board::from_encoding(&encoding).map_err(de::Error::custom)
    }
}
