//! CLI argument parsing using clap

use clap::Parser;
use std::path::PathBuf;

/// Fetch your personalized Advent of Code puzzle input
#[derive(Parser, Debug)]
#[command(name = "aoc-input", about = "Fetch Advent of Code puzzle inputs", version)]
pub struct Args {
    /// Puzzle year
    #[arg(short, long, value_parser = clap::value_parser!(u16).range(1..))]
    pub year: u16,

    /// Puzzle day
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=25))]
    pub day: u8,

    /// Cache directory for puzzle inputs
    #[arg(long, default_value = "~/.cache/aoc_inputs")]
    pub cache_dir: PathBuf,

    /// Always fetch from the network and never write the cache
    #[arg(long)]
    pub no_cache: bool,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 20, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: u64,

    /// Log cache and network activity to stderr
    #[arg(short, long)]
    pub verbose: bool,
}
