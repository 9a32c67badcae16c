// simulation.rs - A grid plus its generation counter and cycle history

use std::collections::VecDeque;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use conway::{Cell, Grid, Pattern};
use log::debug;

/// How many recent grid fingerprints are kept for cycle detection.
pub const HISTORY_LEN: usize = 10;

/// Outcome of a single [`Simulation::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub generation: u64,
    pub population: usize,
    /// The new state matches one of the last [`HISTORY_LEN`] states.
    pub cycle: bool,
}

/// Owned copy of the grid state, safe to hand to another task.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub generation: u64,
    pub population: usize,
    pub live_cells: Vec<Cell>,
}

/// Wraps a grid with the bookkeeping a driver needs.
pub struct Simulation<G> {
    grid: G,
    generation: u64,
    history: VecDeque<u64>,
}

impl<G: Grid> Simulation<G> {
    pub fn new(grid: G) -> Self {
        let mut sim = Self {
            grid,
            generation: 0,
            history: VecDeque::with_capacity(HISTORY_LEN),
        };
        sim.reset_history();
        sim
    }

    /// Replaces the grid contents with `pattern` at `at` and restarts counting
    /// from generation 0.
    pub fn seed(&mut self, pattern: &Pattern, at: Cell) {
        self.grid.clear();
        self.grid.insert_cells(pattern, at);
        self.generation = 0;
        self.reset_history();
        debug!("seeded {} cells at {at}, population {}", pattern.len(), self.grid.population());
    }

    /// Advances one generation and checks the result against recent history.
    pub fn step(&mut self) -> Step {
        self.grid.generation();
        self.generation += 1;

        let hash = self.hash_grid();
        let cycle = self.history.contains(&hash);
        if !cycle {
            if self.history.len() == HISTORY_LEN {
                self.history.pop_front();
            }
            self.history.push_back(hash);
        }

        Step {
            generation: self.generation,
            population: self.grid.population(),
            cycle,
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        let live_cells = self.grid.live_cells();
        Snapshot {
            generation: self.generation,
            population: live_cells.len(),
            live_cells,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn grid(&self) -> &G {
        &self.grid
    }

    fn reset_history(&mut self) {
        self.history.clear();
        let hash = self.hash_grid();
        self.history.push_back(hash);
    }

    fn hash_grid(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.grid.live_cells().hash(&mut hasher);
        hasher.finish()
    }
}
