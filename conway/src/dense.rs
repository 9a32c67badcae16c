// dense.rs - Fixed-size grid backed by a flat buffer of cell states

use std::fmt;

use log::{debug, trace};

use crate::grid::{Cell, Dimensions, Grid};
use crate::patterns::Pattern;
use crate::rule;

/// Dense grid: every cell in `[0, width) x [0, height)` has an explicit state.
///
/// Cells live in one buffer indexed `y * width + x`. Each generation is written
/// into a second buffer of the same size which is then swapped in, so the
/// previous generation is never read half-updated. Neighbors outside the grid
/// count as dead; there is no wrap-around.
#[derive(Debug, Clone)]
pub struct DenseGrid {
    dims: Dimensions,
    cells: Vec<bool>,
    next: Vec<bool>,
}

impl DenseGrid {
    pub fn new(dims: Dimensions) -> Self {
        debug!("dense grid {dims}");
        Self {
            dims,
            cells: vec![false; dims.area()],
            next: vec![false; dims.area()],
        }
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    /// State at `(x, y)`, `None` when out of bounds.
    pub fn get(&self, x: usize, y: usize) -> Option<bool> {
        (x < self.dims.width() && y < self.dims.height())
            .then(|| self.cells[y * self.dims.width() + x])
    }

    fn count_neighbors(&self, cell: Cell) -> u8 {
        rule::neighbors(cell, Some(self.dims))
            .filter(|&n| self.is_alive(n))
            .count() as u8
    }
}

impl Grid for DenseGrid {
    fn insert_cells(&mut self, pattern: &Pattern, at: Cell) {
        let mut clipped = 0usize;
        for cell in pattern.cells() {
            let target = cell.checked_offset(at.x, at.y);
            match target.and_then(|c| self.dims.index_of(c)) {
                Some(index) => self.cells[index] = true,
                None => clipped += 1,
            }
        }
        if clipped > 0 {
            trace!("dropped {clipped} cells outside {} at {at}", self.dims);
        }
    }

    fn generation(&mut self) {
        let width = self.dims.width();
        for y in 0..self.dims.height() {
            for x in 0..width {
                let cell = Cell::new(x as i64, y as i64);
                let index = y * width + x;
                self.next[index] = rule::next_state(self.cells[index], self.count_neighbors(cell));
            }
        }
        std::mem::swap(&mut self.cells, &mut self.next);
    }

    fn is_alive(&self, cell: Cell) -> bool {
        self.dims.index_of(cell).is_some_and(|index| self.cells[index])
    }

    fn live_cells(&self) -> Vec<Cell> {
        let width = self.dims.width();
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &alive)| alive)
            .map(|(index, _)| Cell::new((index % width) as i64, (index / width) as i64))
            .collect()
    }

    fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    fn clear(&mut self) {
        self.cells.fill(false);
    }
}

impl fmt::Display for DenseGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.cells.chunks(self.dims.width()).enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for &alive in row {
                write!(f, "{}", if alive { '█' } else { '·' })?;
            }
        }
        Ok(())
    }
}
