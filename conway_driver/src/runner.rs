// runner.rs - Tick loop that steps a simulation on a fixed cadence

use std::future::Future;
use std::time::Duration;

use conway::Grid;
use log::{debug, info, warn};
use tokio::sync::watch;
use tokio::time::{self, MissedTickBehavior};

use crate::config::RunOptions;
use crate::simulation::{Simulation, Snapshot};

/// Why [`Driver::run`] returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// Reached the configured generation limit
    Limit,
    /// The grid repeated a recent state and `stop_on_cycle` was set
    Cycle,
    /// The shutdown future resolved
    Shutdown,
}

/// Owns a simulation and the only write access to it.
///
/// After every generation the driver publishes a [`Snapshot`] on a watch
/// channel. Readers get whole snapshots and never touch the grid directly.
pub struct Driver<G> {
    sim: Simulation<G>,
    options: RunOptions,
    tx: watch::Sender<Snapshot>,
}

impl<G: Grid> Driver<G> {
    pub fn new(sim: Simulation<G>, options: RunOptions) -> (Self, watch::Receiver<Snapshot>) {
        let (tx, rx) = watch::channel(sim.snapshot());
        (Self { sim, options, tx }, rx)
    }

    /// Steps the simulation once per tick until the limit, a cycle, or `shutdown`.
    ///
    /// The first tick fires immediately. Returns the simulation so the caller
    /// can inspect the final grid.
    pub async fn run<F>(self, shutdown: F) -> (Simulation<G>, StopReason)
    where
        F: Future<Output = ()>,
    {
        let Self { mut sim, options, tx } = self;
        let mut ticker = time::interval(options.interval.max(Duration::from_millis(1)));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        tokio::pin!(shutdown);

        info!(
            "running every {:?}, limit {:?}, population {}",
            options.interval,
            options.limit,
            sim.grid().population()
        );

        let reason = loop {
            if options.limit.is_some_and(|limit| sim.generation() >= limit) {
                break StopReason::Limit;
            }

            tokio::select! {
                _ = &mut shutdown => break StopReason::Shutdown,
                _ = ticker.tick() => {}
            }

            let step = sim.step();
            tx.send_replace(sim.snapshot());
            debug!("generation {} population {}", step.generation, step.population);

            if step.cycle && options.stop_on_cycle {
                break StopReason::Cycle;
            }
        };

        info!("stopped at generation {} ({reason:?})", sim.generation());
        (sim, reason)
    }
}

/// Follows published snapshots until the driver goes away, returning the last one.
pub async fn report(mut rx: watch::Receiver<Snapshot>) -> Snapshot {
    while rx.changed().await.is_ok() {
        let snapshot = rx.borrow_and_update();
        debug!("observed generation {} population {}", snapshot.generation, snapshot.population);
    }
    rx.borrow().clone()
}

/// Resolves on Ctrl-C. If the signal handler can't be installed, never resolves.
pub async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!("cannot listen for Ctrl-C: {err}");
        std::future::pending::<()>().await;
    }
}
