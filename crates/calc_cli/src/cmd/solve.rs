use anyhow::{Context, Result};
use calc_engine::solver::{MaxBulk, MaxOffense, MinInvestment, TieBreak};
use calc_engine::{project, Generation, SolverContext, SpreadTracker};
use clap::{Args, ValueEnum};
use std::path::PathBuf;

use crate::models::{Estimate, SolveInput, SolveOutput};
use crate::utils::{print_json, read_json};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Strategy {
    /// Invest in Atk, SpA and Spe
    Offense,
    /// Invest in HP, Def and SpD
    Bulk,
    /// Spend as little effort as possible
    Minimal,
}

impl Strategy {
    fn tie_break(self) -> &'static dyn TieBreak {
        match self {
            Strategy::Offense => &MaxOffense,
            Strategy::Bulk => &MaxBulk,
            Strategy::Minimal => &MinInvestment,
        }
    }
}

#[derive(Args, Debug)]
pub struct SolveArgs {
    /// JSON file with base_stats, level and observations (`-` for stdin)
    pub input: PathBuf,

    /// Reduce the surviving hypotheses to one spread
    #[arg(short, long, value_enum)]
    pub estimate: Option<Strategy>,

    /// Include the full hypothesis sets in the output
    #[arg(long)]
    pub hypotheses: bool,
}

pub fn execute(args: SolveArgs, gen: Generation, pretty: bool) -> Result<()> {
    let input: SolveInput = read_json(&args.input)?;
    let ctx = SolverContext::new(input.base_stats, input.level, gen.constants()).context("Invalid solver input")?;

    let mut tracker = SpreadTracker::new(&input.creature_id, ctx);
    for (i, observation) in input.observations.iter().enumerate() {
        tracker
            .observe(*observation)
            .with_context(|| format!("Observation #{} ({:?} = {})", i + 1, observation.stat, observation.value))?;
    }

    let mut natures: Vec<_> = tracker.hypotheses().iter().filter_map(|h| h.nature()).collect();
    natures.dedup();

    let estimate = args.estimate.and_then(|strategy| {
        let tie_break = strategy.tie_break();
        tracker.estimate(tie_break).map(|genetics| Estimate {
            strategy: tie_break.name(),
            stats: project(&ctx.base_stats, ctx.level, &genetics, ctx.constants.legacy),
            genetics,
        })
    });

    let output = SolveOutput {
        creature_id: input.creature_id.clone(),
        observations: tracker.evidence().len(),
        natures,
        unique: tracker.unique(),
        estimate,
        hypotheses: if args.hypotheses { tracker.hypotheses().to_vec() } else { Vec::new() },
    };
    print_json(&output, pretty)
}
