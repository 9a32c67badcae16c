// patterns.rs - Seed patterns, independent of any grid

use std::collections::BTreeSet;

use log::warn;
use rand::rngs::{OsRng, StdRng};
use rand::{Rng, SeedableRng};

use crate::error::{Error, Result};
use crate::grid::Cell;

/// Chance of a cell being alive in a random field when none is given.
pub const DEFAULT_DENSITY: f64 = 0.2;

/// Seed used when the OS entropy source cannot be read.
pub const FALLBACK_SEED: u64 = 0x5eed_11fe;

/// An immutable set of live cells relative to the pattern's own origin.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Pattern {
    cells: BTreeSet<Cell>,
}

impl Pattern {
    pub fn from_cells(cells: impl IntoIterator<Item = Cell>) -> Self {
        Self { cells: cells.into_iter().collect() }
    }

    /// Builds a pattern from a binary matrix, one slice per row.
    /// Any non-zero entry is alive.
    pub fn from_matrix(rows: &[&[u8]]) -> Self {
        let cells = rows.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .filter(|&(_, &value)| value != 0)
                .map(move |(x, _)| Cell::new(x as i64, y as i64))
        });
        Self::from_cells(cells)
    }

    /// Parses plaintext where `O`, `#` or `*` is alive and anything else is dead.
    pub fn from_plaintext(text: &str) -> Self {
        let cells = text.lines().enumerate().flat_map(|(y, line)| {
            line.chars()
                .enumerate()
                .filter(|&(_, ch)| matches!(ch, 'O' | '#' | '*'))
                .map(move |(x, _)| Cell::new(x as i64, y as i64))
        });
        Self::from_cells(cells)
    }

    /// Copy of this pattern with `(dx, dy)` added to every cell.
    /// Cells pushed outside the `i64` range are dropped.
    pub fn translate(&self, dx: i64, dy: i64) -> Self {
        Self::from_cells(self.cells.iter().filter_map(|c| c.checked_offset(dx, dy)))
    }

    /// Live cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Inclusive `(min, max)` corners of the live cells, `None` when empty.
    pub fn bounding_box(&self) -> Option<(Cell, Cell)> {
        let mut iter = self.cells.iter();
        let &first = iter.next()?;
        Some(iter.fold((first, first), |(lo, hi), c| {
            (
                Cell::new(lo.x.min(c.x), lo.y.min(c.y)),
                Cell::new(hi.x.max(c.x), hi.y.max(c.y)),
            )
        }))
    }
}

impl FromIterator<Cell> for Pattern {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        Self::from_cells(iter)
    }
}

/// Glider: a 5-cell spaceship moving one cell towards (+1, +1) every 4 generations.
pub fn glider() -> Pattern {
    Pattern::from_matrix(&[
        &[0, 1, 0],
        &[0, 0, 1],
        &[1, 1, 1],
    ])
}

/// Blinker: a vertical 3-cell line with period 2.
pub fn blinker() -> Pattern {
    Pattern::from_matrix(&[
        &[0, 1, 0],
        &[0, 1, 0],
        &[0, 1, 0],
    ])
}

/// Gosper's glider gun: emits a new glider every 30 generations.
pub fn gun() -> Pattern {
    Pattern::from_plaintext(GOSPER_GUN)
}

const GOSPER_GUN: &str = "\
........................O...........
......................O.O...........
............OO......OO............OO
...........O...O....OO............OO
OO........O.....O...OO..............
OO........O...O.OO....O.O...........
..........O.....O.......O...........
...........O...O....................
............OO......................";

pub fn block() -> Pattern {
    Pattern::from_plaintext("OO\nOO")
}

pub fn toad() -> Pattern {
    Pattern::from_plaintext(".OOO\nOOO.")
}

pub fn beacon() -> Pattern {
    Pattern::from_plaintext("OO..\nOO..\n..OO\n..OO")
}

/// Pulsar: a period-3 oscillator.
pub fn pulsar() -> Pattern {
    Pattern::from_plaintext(
        "\
..OOO...OOO..
.............
O....O.O....O
O....O.O....O
O....O.O....O
..OOO...OOO..
.............
..OOO...OOO..
O....O.O....O
O....O.O....O
O....O.O....O
.............
..OOO...OOO..",
    )
}

/// Lightweight spaceship, travels along x with period 4.
pub fn lwss() -> Pattern {
    Pattern::from_plaintext(".O..O\nO....\nO...O\nOOOO.")
}

/// R-pentomino: tiny seed with a long chaotic evolution.
pub fn r_pentomino() -> Pattern {
    Pattern::from_plaintext(".OO\nOO.\n.O.")
}

/// A `size x size` field where each cell is alive with probability `density`.
pub fn random<R: Rng + ?Sized>(size: usize, density: f64, rng: &mut R) -> Result<Pattern> {
    if !(0.0..=1.0).contains(&density) {
        return Err(Error::InvalidDensity(density));
    }

    let mut cells = BTreeSet::new();
    for y in 0..size {
        for x in 0..size {
            if rng.gen_bool(density) {
                cells.insert(Cell::new(x as i64, y as i64));
            }
        }
    }
    Ok(Pattern { cells })
}

/// Random source for [`random`]: seeded when `seed` is given, otherwise from OS entropy.
///
/// If the OS source is unavailable the generator falls back to [`FALLBACK_SEED`],
/// so the result stays reproducible instead of degenerate.
pub fn default_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => rng_or_fallback(StdRng::from_rng(OsRng)),
    }
}

fn rng_or_fallback(source: std::result::Result<StdRng, rand::Error>) -> StdRng {
    source.unwrap_or_else(|err| {
        warn!("OS entropy unavailable ({err}), using fallback seed {FALLBACK_SEED:#x}");
        StdRng::seed_from_u64(FALLBACK_SEED)
    })
}

/// A catalog entry, looked up by name when a pattern is chosen at startup.
pub struct NamedPattern {
    pub name: &'static str,
    pub build: fn() -> Pattern,
}

pub const PATTERNS: &[NamedPattern] = &[
    NamedPattern { name: "glider", build: glider },
    NamedPattern { name: "blinker", build: blinker },
    NamedPattern { name: "gun", build: gun },
    NamedPattern { name: "block", build: block },
    NamedPattern { name: "toad", build: toad },
    NamedPattern { name: "beacon", build: beacon },
    NamedPattern { name: "pulsar", build: pulsar },
    NamedPattern { name: "lwss", build: lwss },
    NamedPattern { name: "r-pentomino", build: r_pentomino },
];

/// Builds the catalog pattern called `name` (case-insensitive).
pub fn by_name(name: &str) -> Result<Pattern> {
    PATTERNS
        .iter()
        .find(|p| p.name.eq_ignore_ascii_case(name))
        .map(|p| (p.build)())
        .ok_or_else(|| Error::UnknownPattern(name.to_string()))
}
