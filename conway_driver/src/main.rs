// main.rs - Runs a Game of Life grid on a timer until a limit, a cycle, or Ctrl-C

use std::fmt::Display;

use anyhow::Context;
use clap::Parser;
use conway::{DenseGrid, Grid, SparseGrid};
use conway_driver::runner::{report, shutdown_signal};
use conway_driver::{Args, Config, Driver, Simulation, Strategy};
use log::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_args(Args::parse()).context("invalid configuration")?;
    info!(
        "{:?} grid {}, {} seed cells at {}",
        config.strategy,
        config.dims,
        config.pattern.len(),
        config.origin
    );

    match config.strategy {
        Strategy::Dense => drive(DenseGrid::new(config.dims), &config).await,
        Strategy::Sparse => drive(SparseGrid::bounded(config.dims), &config).await,
        Strategy::Unbounded => drive(SparseGrid::unbounded(), &config).await,
    }
}

async fn drive<G: Grid + Display>(grid: G, config: &Config) -> anyhow::Result<()> {
    let mut sim = Simulation::new(grid);
    sim.seed(&config.pattern, config.origin);

    let (driver, rx) = Driver::new(sim, config.run);
    let reporter = tokio::spawn(report(rx));
    let (sim, reason) = driver.run(shutdown_signal()).await;
    let last = reporter.await.context("snapshot reporter panicked")?;

    info!(
        "{reason:?}: generation {}, population {}",
        last.generation, last.population
    );
    if config.print {
        println!("{}", sim.grid());
    }
    Ok(())
}
