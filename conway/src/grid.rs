// grid.rs - Grid types for Conway's Game of Life

use std::cmp::Ordering;
use std::fmt;

use crate::error::{Error, Result};
use crate::patterns::Pattern;

/// A cell coordinate. `x` is the column, `y` is the row.
///
/// Coordinates span the full `i64` range. Cells that would fall outside it are
/// never produced: insertion drops them and the plane simply ends there.
///
/// Cells order row-major (by `y`, then `x`), which is the order
/// [`Grid::live_cells`] reports them in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cell {
    pub x: i64,
    pub y: i64,
}

impl Cell {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// The cell shifted by `(dx, dy)`, or `None` if it leaves the `i64` range.
    pub const fn checked_offset(self, dx: i64, dy: i64) -> Option<Self> {
        match (self.x.checked_add(dx), self.y.checked_add(dy)) {
            (Some(x), Some(y)) => Some(Self { x, y }),
            _ => None,
        }
    }
}

impl Ord for Cell {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

impl PartialOrd for Cell {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<(i64, i64)> for Cell {
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Fixed grid size. Both sides are always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    width: usize,
    height: usize,
}

impl Dimensions {
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        // Coordinates are i64 and the dense buffer holds width * height cells
        let max = i64::MAX as usize;
        if width > max || height > max || width.checked_mul(height).is_none() {
            return Err(Error::DimensionsTooLarge { width, height });
        }
        Ok(Self { width, height })
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    /// Number of cells covered, `width * height`.
    pub const fn area(&self) -> usize {
        self.width * self.height
    }

    /// Whether `cell` lies in `[0, width) x [0, height)`.
    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= 0
            && cell.y >= 0
            && (cell.x as u64) < self.width as u64
            && (cell.y as u64) < self.height as u64
    }

    /// Flat buffer index of `cell`, or `None` when it is out of bounds.
    pub fn index_of(&self, cell: Cell) -> Option<usize> {
        self.contains(cell)
            .then(|| cell.y as usize * self.width + cell.x as usize)
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// The contract shared by every grid strategy.
///
/// Implementations must agree cell for cell: given the same live cells inside
/// the same region, [`Grid::generation`] produces the same next generation
/// whichever representation holds them.
pub trait Grid {
    /// Sets every live cell of `pattern`, shifted by `at`, alive.
    ///
    /// Cells that land outside a bounded grid are dropped silently.
    fn insert_cells(&mut self, pattern: &Pattern, at: Cell);

    /// Advances the grid by exactly one generation.
    fn generation(&mut self);

    /// Whether `cell` is alive. Out-of-range cells are dead.
    fn is_alive(&self, cell: Cell) -> bool;

    /// Snapshot of the live cells in row-major order.
    fn live_cells(&self) -> Vec<Cell>;

    /// Number of live cells.
    fn population(&self) -> usize {
        self.live_cells().len()
    }

    /// Kills every cell.
    fn clear(&mut self);

    /// Advances by `n` generations.
    fn generations(&mut self, n: usize) {
        for _ in 0..n {
            self.generation();
        }
    }
}

impl<G: Grid + ?Sized> Grid for Box<G> {
    fn insert_cells(&mut self, pattern: &Pattern, at: Cell) {
        (**self).insert_cells(pattern, at)
    }

    fn generation(&mut self) {
        (**self).generation()
    }

    fn is_alive(&self, cell: Cell) -> bool {
        (**self).is_alive(cell)
    }

    fn live_cells(&self) -> Vec<Cell> {
        (**self).live_cells()
    }

    fn population(&self) -> usize {
        (**self).population()
    }

    fn clear(&mut self) {
        (**self).clear()
    }
}
