//! sim-runner: headless run of the reference economy.
//!
//! Runs one 50-turn simulation with a fresh seed and prints the
//! final-turn summary. The seed is logged at info level so a run can
//! be replayed exactly with `dsge_core::run_seeded`.
//!
//! Usage:
//!   RUST_LOG=info sim-runner

use anyhow::Result;
use dsge_core::{run_seeded, ModelParams, RunSummary};

fn main() -> Result<()> {
    env_logger::init();

    let params = ModelParams::reference();
    let seed: u64 = rand::random();
    log::info!("seed={seed} turns={}", params.turns);

    let outcome = run_seeded(params, seed)?;
    println!("{}", RunSummary::from(&outcome));

    Ok(())
}
