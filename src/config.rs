//! Command line configuration.

use std::path::PathBuf;

use clap::Parser;
use rand::{rngs::StdRng, SeedableRng as _};
use tracing::info;

use crate::{board::Board, error::PuzzleError};

/// Command line arguments of the game.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(version, about)]
pub struct Config {
    /// Seed for the shuffle, for reproducible games.
    #[arg(long)]
    pub seed: Option<u64>,
    /// Start from a fixed arrangement: 16 comma-separated values, row-major, 0 for the blank.
    #[arg(long, value_delimiter = ',', conflicts_with_all = ["seed", "solvable_only"])]
    pub tiles: Option<Vec<u8>>,
    /// Redraw the shuffle until the puzzle can actually be solved.
    #[arg(long)]
    pub solvable_only: bool,
    /// Write logs to this file. Nothing is logged without it.
    #[arg(long)]
    pub log_file: Option<PathBuf>,
    /// Tracing filter, e.g. "info", "debug".
    #[arg(long, default_value = "info")]
    pub log: String,
}

impl Config {
    /// Builds the starting board described by the arguments.
    ///
    /// A fixed arrangement wins over shuffling. Without a seed the shuffle draws from system
    /// entropy.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::InvalidArrangement`] if `--tiles` is not a permutation of `0..=15`.
    pub fn build_board(&self) -> Result<Board, PuzzleError> {
        let board = if let Some(tiles) = &self.tiles {
            info!("starting from a fixed arrangement");
            Board::from_values(tiles)?
        } else {
            self.shuffle()
        };

        if !board.is_solvable() {
            info!("starting board cannot be solved");
        }

        Ok(board)
    }

    /// Draws the starting board from the seeded or entropy-backed random source.
    fn shuffle(&self) -> Board {
        let mut rng = self
            .seed
            .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);

        if self.solvable_only {
            Board::shuffled_solvable(&mut rng)
        } else {
            Board::shuffled_new(&mut rng)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Parses a command line made of the program name followed by `args`.
    fn parse(args: &[&str]) -> Result<Config, clap::Error> {
        Config::try_parse_from(std::iter::once("fifteen").chain(args.iter().copied()))
    }

    #[test]
    fn test_defaults() {
        let config = parse(&[]).expect("empty command line should parse");

        assert_eq!(config.seed, None);
        assert_eq!(config.tiles, None);
        assert!(!config.solvable_only);
        assert_eq!(config.log_file, None);
        assert_eq!(config.log, "info");
    }

    #[test]
    fn test_seeded_boards_are_reproducible() {
        let config = parse(&["--seed", "20"]).expect("seed should parse");

        let first = config.build_board().expect("shuffle should succeed");
        let second = config.build_board().expect("shuffle should succeed");

        assert_eq!(first, second);
    }

    #[test]
    fn test_solvable_only() {
        for seed in ["1", "2", "3", "4"] {
            let config =
                parse(&["--seed", seed, "--solvable-only"]).expect("arguments should parse");

            assert!(config
                .build_board()
                .expect("shuffle should succeed")
                .is_solvable());
        }
    }

    #[test]
    fn test_fixed_tiles() {
        let config = parse(&["--tiles", "1,2,3,4,5,6,7,8,9,10,11,12,13,14,15,0"])
            .expect("tiles should parse");

        assert_eq!(
            config.build_board().expect("arrangement should be valid"),
            Board::solved()
        );
    }

    #[test]
    fn test_fixed_tiles_invalid_arrangement() {
        let config = parse(&["--tiles", "1,1,2"]).expect("tiles should parse");

        assert!(matches!(
            config.build_board(),
            Err(PuzzleError::InvalidArrangement(_))
        ));
    }

    #[test]
    fn test_tiles_conflict_with_seed() {
        assert!(parse(&["--seed", "1", "--tiles", "0,1"]).is_err());
    }

    #[test]
    fn test_tiles_conflict_with_solvable_only() {
        let result = parse(&[
            "--solvable-only",
            "--tiles",
            "2,1,3,4,5,6,7,8,9,10,11,12,13,14,15,0",
        ]);

        assert!(result.is_err());
    }

    #[test]
    fn test_unsolvable_fixed_tiles_still_load() {
        let config = parse(&["--tiles", "2,1,3,4,5,6,7,8,9,10,11,12,13,14,15,0"])
            .expect("tiles should parse");
        let board = config.build_board().expect("arrangement should be valid");

        assert!(!board.is_solvable());
        assert!(!board.is_solved());
    }

    #[test]
    fn test_log_arguments() {
        let config = parse(&["--log-file", "fifteen.log", "--log", "debug"])
            .expect("log arguments should parse");

        assert_eq!(config.log_file, Some(PathBuf::from("fifteen.log")));
        assert_eq!(config.log, "debug");
    }
}
