//! pegsol CLI - peg-solitaire search toolkit
//!
//! This CLI provides a unified interface for:
//! - Solving an instance with a chosen engine and heuristic
//! - Comparing all engines side-by-side on one instance
//! - Generating scrambled instances of known difficulty

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "pegsol")]
#[command(version, about = "Peg-solitaire search toolkit", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve an instance with one engine
    Solve(pegsol::cli::commands::solve::SolveArgs),

    /// Run every engine on the same instance and compare
    Compare(pegsol::cli::commands::compare::CompareArgs),

    /// Generate a solvable instance by reverse jumps
    Scramble(pegsol::cli::commands::scramble::ScrambleArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Solve(args) => pegsol::cli::commands::solve::execute(args),
        Commands::Compare(args) => pegsol::cli::commands::compare::execute(args),
        Commands::Scramble(args) => pegsol::cli::commands::scramble::execute(args),
    }
}
