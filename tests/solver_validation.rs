//! End-to-end validation of the search engines on the classic layouts.

mod common;

use common::{bfs_pops, replay};
use pegsol::{
    a_star_search, backtrack, iterative_deepening_search, pruned_iterative_deepening_search,
    Heuristic, Move, Preset,
};
use rand::{rngs::StdRng, SeedableRng};

fn astar_moves(start: &pegsol::Board, goal: &pegsol::Board, heuristic: Heuristic) -> Vec<Move> {
    let run = a_star_search(start, goal, heuristic).expect("search must not fault");
    backtrack(&run, start, goal)
        .expect("instance is solvable")
        .into_iter()
        .map(|(mv, _)| mv)
        .collect()
}

#[test]
fn every_engine_solves_cross_at_depth_five() {
    let start = Preset::Cross.board();
    let goal = Preset::SolvedCenter.board();

    for heuristic in [Heuristic::ManhattanToCenter, Heuristic::PegCountDifference] {
        let moves = astar_moves(&start, &goal, heuristic);
        assert_eq!(moves.len(), 5, "A* with {heuristic}");
        assert_eq!(replay(&start, &moves), goal);
    }

    let plain = iterative_deepening_search(&start, &goal)
        .solution
        .expect("cross is solvable");
    assert_eq!(plain.depth, 5);
    assert_eq!(replay(&start, &plain.moves), goal);

    let pruned = pruned_iterative_deepening_search(&start, &goal)
        .solution
        .expect("cross is solvable");
    assert_eq!(pruned.depth, 5);
    assert_eq!(replay(&start, &pruned.moves), goal);
}

#[test]
fn every_engine_solves_plus_at_depth_eight() {
    let start = Preset::Plus.board();
    let goal = Preset::SolvedCenter.board();

    let moves = astar_moves(&start, &goal, Heuristic::ManhattanToCenter);
    assert_eq!(moves.len(), 8);
    assert_eq!(replay(&start, &moves), goal);

    let plain = iterative_deepening_search(&start, &goal)
        .solution
        .expect("plus is solvable");
    let pruned = pruned_iterative_deepening_search(&start, &goal)
        .solution
        .expect("plus is solvable");
    assert_eq!(plain.depth, 8);
    assert!(pruned.depth <= plain.depth);
    assert_eq!(replay(&start, &pruned.moves), goal);
}

#[test]
fn solution_depth_always_equals_the_peg_surplus() {
    // Every jump removes exactly one peg, so any path from start to goal has
    // exactly pegs(start) - pegs(goal) moves; engines may differ in work but
    // never in depth.
    let goal = Preset::SolvedCenter.board();
    for preset in [Preset::Cross, Preset::Plus] {
        let start = preset.board();
        let surplus = start.stats().pegs - goal.stats().pegs;
        let moves = astar_moves(&start, &goal, Heuristic::ManhattanToCenter);
        assert_eq!(moves.len(), surplus, "{preset}");
    }
}

#[test]
fn manhattan_astar_expands_no_more_nodes_than_bfs() {
    let goal = Preset::SolvedCenter.board();
    for preset in [Preset::Cross, Preset::Plus] {
        let start = preset.board();
        let baseline = bfs_pops(&start, &goal);
        let informed = a_star_search(&start, &goal, Heuristic::ManhattanToCenter)
            .expect("search must not fault");
        assert!(
            informed.expanded <= baseline,
            "{preset}: {} > {}",
            informed.expanded,
            baseline
        );
    }
}

#[test]
fn pruned_ids_matches_plain_depth_on_fireplace_with_less_work() {
    let start = Preset::Fireplace.board();
    let goal = Preset::SolvedCenter.board();

    let plain = iterative_deepening_search(&start, &goal);
    let pruned = pruned_iterative_deepening_search(&start, &goal);

    let plain_solution = plain.solution.expect("fireplace is solvable");
    let pruned_solution = pruned.solution.expect("fireplace is solvable");

    assert_eq!(plain_solution.depth, 10);
    assert!(pruned_solution.depth <= plain_solution.depth);
    assert!(pruned.expanded < plain.expanded);
    assert_eq!(replay(&start, &pruned_solution.moves), goal);
}

#[test]
fn scrambled_instances_solve_within_their_budget() {
    let goal = Preset::SolvedCenter.board();
    for seed in [1, 2, 3] {
        let mut rng = StdRng::seed_from_u64(seed);
        let start = pegsol::board::scramble(&goal, 6, &mut rng);
        let surplus = start.stats().pegs - goal.stats().pegs;
        assert!(surplus <= 6);

        let moves = astar_moves(&start, &goal, Heuristic::ManhattanToCenter);
        assert_eq!(moves.len(), surplus);
        assert_eq!(replay(&start, &moves), goal);

        let run = iterative_deepening_search(&start, &goal);
        let solution = run.solution.expect("scrambles stay solvable");
        assert_eq!(solution.depth, surplus);
    }
}

/// The classic English opening: 32 pegs around a vacant center, solvable
/// down to a single center peg in exactly 31 jumps. A full-board search runs
/// far beyond unit-test budgets, so this stays opt-in.
#[test]
#[ignore = "exhaustive full-board search; takes hours"]
fn english_board_solves_to_a_single_center_peg() {
    let start = Preset::English.board();
    let goal = Preset::SolvedCenter.board();

    let moves = astar_moves(&start, &goal, Heuristic::ManhattanToCenter);
    assert_eq!(moves.len(), 31);
    assert_eq!(replay(&start, &moves), goal);
}
