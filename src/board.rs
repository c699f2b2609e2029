//! Peg-solitaire board model: grid geometry, cell state, jump moves,
//! symmetry transforms, named layouts, and instance generation.

pub mod geometry;
pub mod moves;
pub mod presets;
pub mod scramble;
pub mod state;
pub mod symmetry;

pub use geometry::{Position, BOARD_CELLS, BOARD_SIZE};
pub use moves::Move;
pub use presets::Preset;
pub use scramble::{reverse_moves, scramble};
pub use state::{Board, BoardStats, Cell};
pub use symmetry::D4Transform;
