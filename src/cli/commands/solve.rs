//! Solve one instance with a chosen engine.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::board::{Board, Move, Preset};
use crate::cli::output;
use crate::error::Error;
use crate::search::{
    a_star_search, backtrack, iterative_deepening_search, pruned_iterative_deepening_search,
    Engine, Heuristic, IdsRun, DEPTH_CEILING,
};

#[derive(Args, Debug)]
pub struct SolveArgs {
    /// Starting layout preset (cross, plus, fireplace, up, pyramid, diamond, english)
    #[arg(long, default_value = "cross")]
    pub preset: String,

    /// Read the starting layout from a file instead (7 rows over '-0X')
    #[arg(long, conflicts_with = "preset")]
    pub board: Option<PathBuf>,

    /// Goal layout preset
    #[arg(long, default_value = "solved-center")]
    pub goal: String,

    /// Search engine: astar, ids, pruned-ids
    #[arg(long, default_value = "astar")]
    pub engine: String,

    /// A* heuristic: manhattan, simple
    #[arg(long, default_value = "manhattan")]
    pub heuristic: String,

    /// Write a JSON report to this path
    #[arg(long)]
    pub output: Option<PathBuf>,
}

/// Machine-readable record of one solve run.
#[derive(Serialize)]
struct SolveReport {
    engine: Engine,
    #[serde(skip_serializing_if = "Option::is_none")]
    heuristic: Option<Heuristic>,
    depth: usize,
    expanded: usize,
    elapsed_ms: u128,
    moves: Vec<Move>,
    start: Board,
    goal: Board,
}

pub fn execute(args: SolveArgs) -> Result<()> {
    let start = load_start(&args)?;
    let goal = args.goal.parse::<Preset>()?.board();
    let engine: Engine = args.engine.parse()?;
    let heuristic: Heuristic = args.heuristic.parse()?;

    let spinner = output::create_spinner(&format!("searching with {engine}"));
    let started = Instant::now();
    let (depth, expanded, moves) = run_engine(engine, heuristic, &start, &goal)?;
    let elapsed = started.elapsed();
    spinner.finish_and_clear();

    output::print_section(&format!("Solution ({engine})"));
    if engine == Engine::AStar {
        output::print_kv("heuristic", heuristic.name());
    }
    output::print_kv("depth", &depth.to_string());
    output::print_kv("nodes expanded", &output::format_number(expanded));
    output::print_kv("time", &format!("{:.3}s", elapsed.as_secs_f64()));
    output::print_kv("moves", &render_moves(&moves));

    if let Some(path) = &args.output {
        let report = SolveReport {
            engine,
            heuristic: (engine == Engine::AStar).then_some(heuristic),
            depth,
            expanded,
            elapsed_ms: elapsed.as_millis(),
            moves,
            start,
            goal,
        };
        let json = serde_json::to_string_pretty(&report).map_err(Error::Serialization)?;
        fs::write(path, json).map_err(|source| Error::Io {
            operation: format!("write report to {}", path.display()),
            source,
        })?;
        println!("\nReport written to {}", path.display());
    }

    Ok(())
}

pub(crate) fn load_start(args: &SolveArgs) -> Result<Board, Error> {
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

pub(crate) fn render_moves(moves: &[Move]) -> String {
    moves
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn run_engine(
    engine: Engine,
    heuristic: Heuristic,
    start: &Board,
    goal: &Board,
) -> Result<(usize, usize, Vec<Move>), Error> {
    match engine {
        Engine::AStar => {
            let run = a_star_search(start, goal, heuristic)?;
            let steps = backtrack(&run, start, goal)?;
            let moves = steps.into_iter().map(|(mv, _)| mv).collect::<Vec<_>>();
            Ok((moves.len(), run.expanded, moves))
        }
        Engine::IterativeDeepening => finish_ids(iterative_deepening_search(start, goal)),
        Engine::PrunedIterativeDeepening => {
            finish_ids(pruned_iterative_deepening_search(start, goal))
        }
    }
}

fn finish_ids(run: IdsRun) -> Result<(usize, usize, Vec<Move>), Error> {
    match run.solution {
        Some(solution) => Ok((solution.depth, run.expanded, solution.moves)),
        None => Err(Error::UnsolvableWithinBudget {
            detail: format!(
                "depth ceiling {DEPTH_CEILING} exhausted after {} expansions",
                run.expanded
            ),
        }),
    }
}
