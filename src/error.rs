//! Error types for the pegsol crate

use thiserror::Error;

use crate::board::geometry::Position;
use crate::identifiers::StateId;

/// Main error type for the pegsol crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("illegal move {from}->{to}: not a two-cell jump over an occupied neighbor onto an empty cell")]
    IllegalMove { from: Position, to: Position },

    #[error("state graph has no entry for '{id}' (graph queried for a state it never produced)")]
    UnknownState { id: StateId },

    #[error("no solution within budget: {detail}")]
    UnsolvableWithinBudget { detail: String },

    #[error("invalid board encoding: expected {expected} rows, got {got}")]
    InvalidRowCount { expected: usize, got: usize },

    #[error("invalid board encoding: row {row} has {got} cells, expected {expected}")]
    InvalidRowLength {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("invalid character '{character}' at row {row}, column {column} (expected '-', '0' or 'X')")]
    InvalidCellCharacter {
        character: char,
        row: usize,
        column: usize,
    },

    #[error("invalid flat board encoding: expected {expected} characters, got {got}")]
    InvalidEncodingLength { expected: usize, got: usize },

    #[error("position {position} is out of bounds (must be 1-49)")]
    InvalidPosition { position: usize },

    #[error("invalid heuristic '{input}'. Expected one of: {expected}")]
    ParseHeuristic { input: String, expected: String },

    #[error("invalid engine '{input}'. Expected one of: {expected}")]
    ParseEngine { input: String, expected: String },

    #[error("invalid preset '{input}'. Expected one of: {expected}")]
    ParsePreset { input: String, expected: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
