// config.rs - Command line surface and the validated run configuration

use std::time::Duration;

use clap::{Parser, ValueEnum};
use conway::patterns::{self, DEFAULT_DENSITY};
use conway::{Cell, Dimensions, Pattern};

use crate::{Error, Result};

/// Which grid representation to drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Strategy {
    /// Flat buffer covering the whole grid
    Dense,
    /// Live-cell set clipped to the grid
    Sparse,
    /// Live-cell set on the infinite plane (width/height ignored)
    Unbounded,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "conway", version, about = "Run Conway's Game of Life on a timer")]
pub struct Args {
    /// Grid width in cells
    #[arg(long, default_value_t = 50)]
    pub width: usize,

    /// Grid height in cells
    #[arg(long, default_value_t = 50)]
    pub height: usize,

    #[arg(long, value_enum, default_value_t = Strategy::Dense)]
    pub strategy: Strategy,

    /// Catalog pattern name, or `random`
    #[arg(long, default_value = "gun")]
    pub pattern: String,

    /// Column where the pattern's origin is placed
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    pub x: i64,

    /// Row where the pattern's origin is placed
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    pub y: i64,

    /// Side of the square filled by `--pattern random`
    #[arg(long, default_value_t = 20)]
    pub random_size: usize,

    /// Chance of each cell being alive for `--pattern random`
    #[arg(long, default_value_t = DEFAULT_DENSITY)]
    pub density: f64,

    /// Seed for `--pattern random`; OS entropy when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Milliseconds between generations
    #[arg(long, default_value_t = 200)]
    pub interval_ms: u64,

    /// Stop after this many generations
    #[arg(long)]
    pub generations: Option<u64>,

    /// Stop once the grid repeats a recent state
    #[arg(long)]
    pub stop_on_cycle: bool,

    /// Print the final grid to stdout
    #[arg(long)]
    pub print: bool,
}

/// Settings for the tick loop itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOptions {
    pub interval: Duration,
    pub limit: Option<u64>,
    pub stop_on_cycle: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(200),
            limit: None,
            stop_on_cycle: false,
        }
    }
}

/// Everything needed to start a run, checked up front.
#[derive(Debug, Clone)]
pub struct Config {
    pub dims: Dimensions,
    pub strategy: Strategy,
    pub pattern: Pattern,
    pub origin: Cell,
    pub run: RunOptions,
    pub print: bool,
}

impl Config {
    pub fn from_args(args: Args) -> Result<Self> {
        let dims = Dimensions::new(args.width, args.height)?;

        if args.interval_ms == 0 {
            return Err(Error::ZeroInterval);
        }

        let pattern = if args.pattern.eq_ignore_ascii_case("random") {
            let mut rng = patterns::default_rng(args.seed);
            patterns::random(args.random_size, args.density, &mut rng)?
        } else {
            patterns::by_name(&args.pattern)?
        };

        Ok(Self {
            dims,
            strategy: args.strategy,
            pattern,
            origin: Cell::new(args.x, args.y),
            run: RunOptions {
                interval: Duration::from_millis(args.interval_ms),
                limit: args.generations,
                stop_on_cycle: args.stop_on_cycle,
            },
            print: args.print,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("conway").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn defaults() {
        let config = Config::from_args(parse(&[])).unwrap();
        assert_eq!(config.dims, Dimensions::new(50, 50).unwrap());
        assert_eq!(config.strategy, Strategy::Dense);
        assert_eq!(config.pattern, patterns::gun());
        assert_eq!(config.origin, Cell::new(1, 1));
        assert_eq!(config.run, RunOptions::default());
        assert!(!config.print);
    }

    #[test]
    fn full_command_line() {
        let config = Config::from_args(parse(&[
            "--width", "80", "--height", "40", "--strategy", "unbounded",
            "--pattern", "glider", "--x", "-3", "--y", "7",
            "--interval-ms", "500", "--generations", "12", "--stop-on-cycle",
        ]))
        .unwrap();
        assert_eq!(config.strategy, Strategy::Unbounded);
        assert_eq!(config.pattern, patterns::glider());
        assert_eq!(config.origin, Cell::new(-3, 7));
        assert_eq!(
            config.run,
            RunOptions {
                interval: Duration::from_millis(500),
                limit: Some(12),
                stop_on_cycle: true,
            }
        );
    }

    #[test]
    fn seeded_random_pattern() {
        let argv = ["--pattern", "random", "--random-size", "10", "--density", "0.5", "--seed", "3"];
        let a = Config::from_args(parse(&argv)).unwrap();
        let b = Config::from_args(parse(&argv)).unwrap();
        assert_eq!(a.pattern, b.pattern);
        assert!(!a.pattern.is_empty());
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            Config::from_args(parse(&["--width", "0"])),
            Err(Error::Engine(conway::Error::InvalidDimensions { .. }))
        ));
        assert!(matches!(
            Config::from_args(parse(&["--interval-ms", "0"])),
            Err(Error::ZeroInterval)
        ));
        assert!(matches!(
            Config::from_args(parse(&["--pattern", "spaceship"])),
            Err(Error::Engine(conway::Error::UnknownPattern(_)))
        ));
        assert!(matches!(
            Config::from_args(parse(&["--pattern", "random", "--density", "2"])),
            Err(Error::Engine(conway::Error::InvalidDensity(_)))
        ));
    }

    #[test]
    fn unknown_strategy_is_a_parse_error() {
        assert!(Args::try_parse_from(["conway", "--strategy", "hex"]).is_err());
    }
}
