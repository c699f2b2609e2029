//! CLI infrastructure for the pegsol solver
//!
//! This module provides the command-line interface for solving instances,
//! comparing the search engines side-by-side, and generating scrambled
//! instances.

pub mod commands;
pub mod output;
