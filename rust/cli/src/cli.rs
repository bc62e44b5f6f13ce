//! Command-line definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use euchre_engine::pack::ShuffleMode;

/// How `play` orders the pack before each hand.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ShuffleArg {
    /// Deterministic riffle.
    Shuffle,
    /// Deal in file order every hand.
    Noshuffle,
    /// Seeded uniform shuffle.
    Random,
}

impl ShuffleArg {
    pub fn to_mode(self, seed: u64) -> ShuffleMode {
        match self {
            ShuffleArg::Shuffle => ShuffleMode::Riffle,
            ShuffleArg::Noshuffle => ShuffleMode::NoShuffle,
            ShuffleArg::Random => ShuffleMode::Random(seed),
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "euchre", about = "Four-handed Euchre simulator")]
pub struct EuchreCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play one game and print its transcript
    Play {
        /// Pack file with 24 cards in deal order
        pack: PathBuf,
        #[arg(value_enum)]
        shuffle: ShuffleArg,
        #[arg(value_parser = clap::value_parser!(u32).range(1..=100))]
        points_to_win: u32,
        /// NAME TYPE for each seat, TYPE is Simple or Human
        #[arg(num_args = 8, value_name = "NAME TYPE", required = true)]
        players: Vec<String>,
        #[arg(long)]
        seed: Option<u64>,
        /// Write one JSON line per hand to this file
        #[arg(long)]
        hand_log: Option<PathBuf>,
    },
    /// Play many games between automated players and count wins
    Sim {
        #[arg(long)]
        games: u64,
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=100))]
        points: Option<u32>,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        hand_log: Option<PathBuf>,
    },
    /// Show the resolved configuration
    Cfg,
}
