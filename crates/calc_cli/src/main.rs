//! Command-line front end for calc_engine.
//!
//! Reads JSON inputs and prints JSON results.
//!
//! Usage:
//!   cargo run -p calc_cli -- project garchomp.json
//!   cargo run -p calc_cli -- --gen 4 solve observed.json --estimate offense
//!   cargo run -p calc_cli -- matchup eq_vs_heatran.json --brief
//!
//! `RUST_LOG=debug` shows narrowing and modifier details.

mod cmd;
mod models;
mod utils;

use anyhow::Result;
use clap::{Parser, Subcommand};
use cmd::{matchup, project, solve};

#[derive(Parser)]
#[command(name = "calc_cli", version, about)]
struct Cli {
    /// Generation whose rules apply (1-9)
    #[arg(short, long, global = true, default_value_t = 9)]
    gen: u8,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Project stats from base stats, level and genetics
    Project(project::ProjectArgs),

    /// Narrow possible spreads from observed stats
    Solve(solve::SolveArgs),

    /// Compute damage rolls and KO chances for one move
    Matchup(matchup::MatchupArgs),
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let gen = utils::generation(cli.gen)?;

    match cli.command {
        Some(Commands::Project(args)) => project::execute(args, gen, cli.pretty),
        Some(Commands::Solve(args)) => solve::execute(args, gen, cli.pretty),
        Some(Commands::Matchup(args)) => matchup::execute(args, gen, cli.pretty),
        None => {
            // Require explicit subcommand to avoid flag ambiguity at the root.
            use clap::CommandFactory;
            Cli::command().print_help()?;
            Ok(())
        }
    }
}
