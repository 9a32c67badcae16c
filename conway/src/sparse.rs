// sparse.rs - Grid that stores only its live cells

use std::collections::{HashMap, HashSet};
use std::fmt;

use log::{debug, trace};

use crate::grid::{Cell, Dimensions, Grid};
use crate::patterns::Pattern;
use crate::rule;

/// Sparse grid: a set of live cells, optionally confined to a bound.
///
/// Stepping only visits the neighborhoods of live cells, so the cost follows the
/// population rather than the area. Without a bound the grid is the infinite
/// plane and coordinates may be negative.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SparseGrid {
    cells: HashSet<Cell>,
    bounds: Option<Dimensions>,
}

impl SparseGrid {
    /// A grid on the infinite plane.
    pub fn unbounded() -> Self {
        debug!("sparse grid, unbounded");
        Self::default()
    }

    /// A grid confined to `[0, width) x [0, height)`, clipping like [`crate::DenseGrid`].
    pub fn bounded(dims: Dimensions) -> Self {
        debug!("sparse grid {dims}");
        Self { cells: HashSet::new(), bounds: Some(dims) }
    }

    pub fn bounds(&self) -> Option<Dimensions> {
        self.bounds
    }

    fn in_bounds(&self, cell: Cell) -> bool {
        self.bounds.is_none_or(|dims| dims.contains(cell))
    }
}

impl Grid for SparseGrid {
    fn insert_cells(&mut self, pattern: &Pattern, at: Cell) {
        let before = self.cells.len();
        let mut clipped = 0usize;
        for cell in pattern.cells() {
            match cell.checked_offset(at.x, at.y) {
                Some(cell) if self.in_bounds(cell) => {
                    self.cells.insert(cell);
                }
                _ => clipped += 1,
            }
        }
        trace!(
            "inserted {} cells at {at}, dropped {clipped}",
            self.cells.len() - before
        );
    }

    fn generation(&mut self) {
        // Every cell with a live neighbor is a candidate, mapped to its count.
        // Anything else is dead with no neighbors and stays dead.
        let mut counts: HashMap<Cell, u8> = HashMap::with_capacity(self.cells.len() * 8);
        for &cell in &self.cells {
            for neighbor in rule::neighbors(cell, self.bounds) {
                *counts.entry(neighbor).or_insert(0) += 1;
            }
        }

        self.cells = counts
            .into_iter()
            .filter(|&(cell, count)| rule::next_state(self.cells.contains(&cell), count))
            .map(|(cell, _)| cell)
            .collect();
    }

    fn is_alive(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    fn live_cells(&self) -> Vec<Cell> {
        let mut cells: Vec<_> = self.cells.iter().copied().collect();
        cells.sort_unstable();
        cells
    }

    fn population(&self) -> usize {
        self.cells.len()
    }

    fn clear(&mut self) {
        self.cells.clear();
    }
}

impl fmt::Display for SparseGrid {
    /// Draws the bounded area, or the bounding box of live cells when unbounded.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (lo, hi) = match self.bounds {
            Some(dims) => (
                Cell::new(0, 0),
                Cell::new(dims.width() as i64 - 1, dims.height() as i64 - 1),
            ),
            None => match Pattern::from_cells(self.cells.iter().copied()).bounding_box() {
                Some(corners) => corners,
                None => return write!(f, "(empty)"),
            },
        };
        for y in lo.y..=hi.y {
            if y > lo.y {
                writeln!(f)?;
            }
            for x in lo.x..=hi.x {
                let alive = self.cells.contains(&Cell::new(x, y));
                write!(f, "{}", if alive { '█' } else { '·' })?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns;

    fn shape(grid: &SparseGrid) -> Vec<(i64, i64)> {
        grid.live_cells().into_iter().map(|c| (c.x, c.y)).collect()
    }

    #[test]
    fn unbounded_accepts_negative_cells() {
        let mut g = SparseGrid::unbounded();
        g.insert_cells(&patterns::blinker(), Cell::new(-10, -10));
        assert_eq!(shape(&g), vec![(-9, -10), (-9, -9), (-9, -8)]);
    }

    #[test]
    fn blinker_oscillates_at_i64_edge() {
        let mut g = SparseGrid::unbounded();
        let edge = i64::MAX - 2;
        g.insert_cells(&Pattern::from_plaintext("OOO"), Cell::new(edge, 0));
        let horizontal = g.live_cells();
        g.generation();
        assert_eq!(shape(&g), vec![(edge + 1, -1), (edge + 1, 0), (edge + 1, 1)]);
        g.generation();
        assert_eq!(g.live_cells(), horizontal);
    }

    #[test]
    fn insert_past_i64_edge_is_dropped() {
        let mut g = SparseGrid::unbounded();
        g.insert_cells(&patterns::block(), Cell::new(i64::MAX, i64::MIN));
        assert_eq!(shape(&g), vec![(i64::MAX, i64::MIN), (i64::MAX, i64::MIN + 1)]);
    }

    #[test]
    fn bounded_insert_clips() {
        let mut g = SparseGrid::bounded(Dimensions::new(5, 5).unwrap());
        g.insert_cells(&patterns::block(), Cell::new(4, 4));
        assert_eq!(shape(&g), vec![(4, 4)]);
    }

    #[test]
    fn duplicate_insert_is_stored_once() {
        let mut g = SparseGrid::unbounded();
        g.insert_cells(&patterns::block(), Cell::new(0, 0));
        g.insert_cells(&patterns::block(), Cell::new(1, 1));
        assert_eq!(g.population(), 7);
    }

    #[test]
    fn lone_cell_dies() {
        let mut g = SparseGrid::unbounded();
        g.insert_cells(&Pattern::from_cells([Cell::new(0, 0)]), Cell::new(3, 3));
        g.generation();
        assert_eq!(g.population(), 0);
    }

    #[test]
    fn overcrowded_center_dies() {
        let mut g = SparseGrid::unbounded();
        g.insert_cells(&Pattern::from_plaintext(".O.\nOOO\n.O."), Cell::new(0, 0));
        g.generation();
        assert!(!g.is_alive(Cell::new(1, 1)));
    }

    #[test]
    fn block_is_still_life() {
        let mut g = SparseGrid::unbounded();
        g.insert_cells(&patterns::block(), Cell::new(0, 0));
        let before = g.live_cells();
        for _ in 0..10 {
            g.generation();
            assert_eq!(g.live_cells(), before);
        }
    }

    #[test]
    fn blinker_oscillates() {
        let mut g = SparseGrid::unbounded();
        g.insert_cells(&patterns::blinker(), Cell::new(0, 0));
        let vertical = g.live_cells();
        g.generation();
        assert_eq!(shape(&g), vec![(0, 1), (1, 1), (2, 1)]);
        g.generation();
        assert_eq!(g.live_cells(), vertical);
    }

    #[test]
    fn glider_moves_diagonally() {
        let mut g = SparseGrid::unbounded();
        g.insert_cells(&patterns::glider(), Cell::new(0, 0));
        for step in 1..=5 {
            g.generations(4);
            let expected = patterns::glider().translate(step, step);
            assert_eq!(g.live_cells(), expected.cells().collect::<Vec<_>>());
        }
    }

    #[test]
    fn glider_dies_against_bound() {
        let mut g = SparseGrid::bounded(Dimensions::new(6, 6).unwrap());
        g.insert_cells(&patterns::glider(), Cell::new(0, 0));
        g.generations(40);
        // Ends as a block stuck in the corner
        assert_eq!(shape(&g), vec![(4, 4), (5, 4), (4, 5), (5, 5)]);
    }

    #[test]
    fn gun_emits_a_glider_every_30_generations() {
        let mut g = SparseGrid::unbounded();
        g.insert_cells(&patterns::gun(), Cell::new(0, 0));
        g.generations(60);
        let mut previous = g.population();
        for _ in 0..3 {
            g.generations(30);
            assert_eq!(g.population(), previous + 5);
            previous = g.population();
        }
    }

    #[test]
    fn lwss_keeps_shape() {
        let mut g = SparseGrid::unbounded();
        g.insert_cells(&patterns::lwss(), Cell::new(0, 0));
        g.generations(4);
        let moved = Pattern::from_cells(g.live_cells());
        let (lo, _) = moved.bounding_box().unwrap();
        assert_eq!(moved.translate(-lo.x, -lo.y), patterns::lwss());
        assert_eq!(lo.y, 0);
        assert_eq!(lo.x.abs(), 2);
    }

    #[test]
    fn live_cells_is_idempotent() {
        let mut g = SparseGrid::unbounded();
        g.insert_cells(&patterns::r_pentomino(), Cell::new(0, 0));
        g.generations(3);
        assert_eq!(g.live_cells(), g.live_cells());
    }

    #[test]
    fn display_unbounded_uses_bounding_box() {
        let mut g = SparseGrid::unbounded();
        assert_eq!(g.to_string(), "(empty)");
        g.insert_cells(&patterns::glider(), Cell::new(-5, 7));
        assert_eq!(g.to_string(), "·█·\n··█\n███");
    }
}
