//! Conway's Game of Life engine.
//!
//! Two grid strategies share one contract, [`Grid`]:
//!
//! - [`DenseGrid`] keeps a state for every cell of a fixed rectangle and scans
//!   all of it each generation.
//! - [`SparseGrid`] keeps only live cells, bounded or on the infinite plane, and
//!   visits only their neighborhoods.
//!
//! Seeds come from [`patterns`] as plain [`Pattern`] values.
//!
//! ```
//! use conway::{patterns, Cell, DenseGrid, Dimensions, Grid};
//!
//! let mut grid = DenseGrid::new(Dimensions::new(50, 50)?);
//! grid.insert_cells(&patterns::glider(), Cell::new(2, 2));
//! grid.generations(4);
//! assert!(grid.is_alive(Cell::new(5, 5)));
//! # Ok::<(), conway::Error>(())
//! ```
//!
//! Grids do no locking. Whoever drives them must serialize stepping against reads.

pub mod dense;
pub mod error;
pub mod grid;
pub mod patterns;
pub mod rule;
pub mod sparse;

pub use dense::DenseGrid;
pub use error::{Error, Result};
pub use grid::{Cell, Dimensions, Grid};
pub use patterns::Pattern;
pub use sparse::SparseGrid;
