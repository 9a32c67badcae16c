//! Simulation driver for the `conway` engine.
//!
//! The engine never schedules itself. This crate owns the cadence: a single
//! task steps the grid on a timer and publishes whole [`Snapshot`]s, so readers
//! in other tasks never observe a half-stepped grid.

pub mod config;
pub mod runner;
pub mod simulation;

pub use config::{Args, Config, RunOptions, Strategy};
pub use runner::{Driver, StopReason};
pub use simulation::{Simulation, Snapshot, Step};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Engine(#[from] conway::Error),

    #[error("tick interval must be at least 1ms")]
    ZeroInterval,
}

pub type Result<T> = std::result::Result<T, Error>;
