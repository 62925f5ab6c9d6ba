use anyhow::{Context, Result};
use calc_engine::hidden_power::hidden_power;
use calc_engine::stats::project_checked;
use calc_engine::Generation;
use clap::Args;
use std::path::PathBuf;

use crate::models::{ProjectInput, ProjectOutput};
use crate::utils::{print_json, read_json};

#[derive(Args, Debug)]
pub struct ProjectArgs {
    /// JSON file with base_stats, level and genetics (`-` for stdin)
    pub input: PathBuf,
}

pub fn execute(args: ProjectArgs, gen: Generation, pretty: bool) -> Result<()> {
    let input: ProjectInput = read_json(&args.input)?;
    let stats = project_checked(&input.base_stats, input.level, &input.genetics, &gen.constants())
        .context("Invalid projection input")?;
    log::debug!("projected {:?} at level {}", stats, input.level);

    let output = ProjectOutput {
        stats,
        hidden_power: hidden_power(&input.genetics, &gen),
    };
    print_json(&output, pretty)
}
