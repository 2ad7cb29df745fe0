use std::{fs, path::PathBuf};

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use kitesat::{Result as SolverResult, Solver};

/// CDCL SAT solver for DIMACS CNF input.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Path to a DIMACS CNF file.
    input: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let input = fs::read_to_string(&args.input)
        .with_context(|| format!("cannot read '{}'", args.input.display()))?;
    let mut solver = Solver::from_dimacs(&input).context("malformed DIMACS input")?;

    match solver.solve() {
        SolverResult::Sat(model) => {
            println!("Formula is SAT with assignments:");
            for (var, value) in model.assignments() {
                println!("{var} = {value}");
            }
        }
        SolverResult::Unsat(_) => println!("Formula is UNSAT."),
    }

    let stats = solver.stats();
    info!(
        decisions = stats.decisions,
        conflicts = stats.conflicts,
        propagations = stats.propagations,
        "search finished"
    );

    Ok(())
}
