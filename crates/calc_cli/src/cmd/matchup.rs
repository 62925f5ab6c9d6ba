use anyhow::{Context, Result};
use calc_engine::{compute, Generation};
use clap::Args;
use std::path::PathBuf;

use crate::models::MatchupInput;
use crate::utils::{print_json, read_json};

#[derive(Args, Debug)]
pub struct MatchupArgs {
    /// JSON file with attacker, defender, move and field (`-` for stdin)
    pub input: PathBuf,

    /// Print only the damage range and KO chance
    #[arg(short, long)]
    pub brief: bool,
}

pub fn execute(args: MatchupArgs, gen: Generation, pretty: bool) -> Result<()> {
    let input: MatchupInput = read_json(&args.input)?;
    let result = compute(&input.attacker, &input.defender, &input.move_data, &input.field, &gen)
        .with_context(|| format!("{} vs {}", input.attacker.species, input.defender.species))?;

    for warning in &result.warnings {
        log::warn!("{warning}");
    }

    if args.brief {
        let (lo, hi) = result.percent_range;
        println!(
            "{} vs {}: {}-{} ({:.1}% - {:.1}%), {:.1}% to KO",
            input.move_data.id,
            input.defender.species,
            result.min_damage(),
            result.max_damage(),
            lo,
            hi,
            result.ko_chance * 100.0
        );
        return Ok(());
    }
    print_json(&result, pretty)
}
