//! Generate a solvable instance by walking reverse jumps from a goal.

use anyhow::Result;
use clap::Args;
use rand::{rngs::StdRng, SeedableRng};

use crate::board::{scramble, Preset};
use crate::cli::output;

#[derive(Args, Debug)]
pub struct ScrambleArgs {
    /// Number of reverse jumps to apply
    #[arg(long, default_value_t = 8)]
    pub jumps: usize,

    /// Goal layout preset to scramble from
    #[arg(long, default_value = "solved-center")]
    pub goal: String,

    /// RNG seed for a reproducible instance
    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn execute(args: ScrambleArgs) -> Result<()> {
    let goal = args.goal.parse::<Preset>()?.board();
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let board = scramble(&goal, args.jumps, &mut rng);
    let stats = board.stats();

    println!("{board}");
    output::print_kv("pegs", &stats.pegs.to_string());
    output::print_kv(
        "solvable within",
        &format!("{} moves (to '{}')", args.jumps, args.goal),
    );
    Ok(())
}
