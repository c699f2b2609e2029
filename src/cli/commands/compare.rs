//! Run every engine on the same instance and report side-by-side.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use clap::Args;

use crate::board::{Board, Preset};
use crate::cli::commands::solve::render_moves;
use crate::cli::output;
use crate::error::Error;
use crate::search::{
    a_star_search, backtrack, iterative_deepening_search, pruned_iterative_deepening_search,
    Heuristic,
};

#[derive(Args, Debug)]
pub struct CompareArgs {
    /// Starting layout preset (cross, plus, fireplace, up, pyramid, diamond, english)
    #[arg(long, default_value = "cross")]
    pub preset: String,

    /// Read the starting layout from a file instead (7 rows over '-0X')
    #[arg(long, conflicts_with = "preset")]
    pub board: Option<PathBuf>,

    /// Goal layout preset
    #[arg(long, default_value = "solved-center")]
    pub goal: String,
}

pub fn execute(args: CompareArgs) -> Result<()> {
    let start = load_start(&args)?;
    let goal = args.goal.parse::<Preset>()?.board();

    run_astar(&start, &goal, Heuristic::ManhattanToCenter)?;
    run_astar(&start, &goal, Heuristic::PegCountDifference)?;

    let started = Instant::now();
    let pruned = pruned_iterative_deepening_search(&start, &goal);
    report_ids(
        "Pruned Iterative Deepening Search",
        pruned.expanded,
        started.elapsed().as_secs_f64(),
        pruned.solution.as_ref(),
    );

    let started = Instant::now();
    let plain = iterative_deepening_search(&start, &goal);
    report_ids(
        "Iterative Deepening Search",
        plain.expanded,
        started.elapsed().as_secs_f64(),
        plain.solution.as_ref(),
    );

    Ok(())
}

fn run_astar(start: &Board, goal: &Board, heuristic: Heuristic) -> Result<()> {
    let title = match heuristic {
        Heuristic::ManhattanToCenter => "A* Search: total Manhattan distance heuristic",
        Heuristic::PegCountDifference => "A* Search: number of pegs heuristic",
    };

    let started = Instant::now();
    let run = a_star_search(start, goal, heuristic)?;
    let elapsed = started.elapsed().as_secs_f64();

    output::print_section(title);
    output::print_kv("nodes expanded", &output::format_number(run.expanded));
    output::print_kv("time", &format!("{elapsed:.3}s"));
    match backtrack(&run, start, goal) {
        Ok(steps) => {
            output::print_kv("depth", &steps.len().to_string());
            let moves: Vec<_> = steps.into_iter().map(|(mv, _)| mv).collect();
            output::print_kv("moves", &render_moves(&moves));
        }
        Err(Error::UnsolvableWithinBudget { detail }) => {
            output::print_kv("result", &format!("no solution ({detail})"));
        }
        Err(other) => return Err(other.into()),
    }
    Ok(())
}

fn report_ids(
    title: &str,
    expanded: usize,
    elapsed: f64,
    solution: Option<&crate::search::Solution>,
) {
    output::print_section(title);
    output::print_kv("nodes expanded", &output::format_number(expanded));
    output::print_kv("time", &format!("{elapsed:.3}s"));
    match solution {
        Some(solution) => {
            output::print_kv("depth", &solution.depth.to_string());
            output::print_kv("moves", &render_moves(&solution.moves));
        }
        None => output::print_kv("result", "no solution within the depth ceiling"),
    }
}

fn load_start(args: &CompareArgs) -> Result<Board, Error> {
    match &args.board {
        Some(path) => {
            let text = fs::read_to_string(path).map_err(|source| Error::Io {
                operation: format!("read board from {}", path.display()),
                source,
            })?;
            Board::from_string(&text)
        }
        None => Ok(args.preset.parse::<Preset>()?.board()),
    }
}
