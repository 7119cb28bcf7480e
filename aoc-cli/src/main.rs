//! AOC CLI - Command-line interface for fetching Advent of Code puzzle inputs

mod cli;
mod config;
mod error;

use aoc_input::{AocClient, InputCache, InputFetcher, LocalFileCache, NoCache};
use clap::Parser;
use cli::Args;
use config::Config;
use env_logger::Env;
use log::info;
use std::io::{BufWriter, Write};

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// `RUST_LOG` wins; otherwise warnings only, or debug with `--verbose`
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::init_from_env(Env::default().default_filter_or(level));
}

fn run(args: Args) -> Result<(), error::CliError> {
    let config = Config::from_args(args)?;

    let client = AocClient::builder().timeout(config.timeout).build()?;
    let cache: Box<dyn InputCache> = match &config.cache_dir {
        Some(dir) => {
            info!("Using input cache at {}", dir.display());
            Box::new(LocalFileCache::new(dir))
        }
        None => Box::new(NoCache),
    };

    let fetcher = InputFetcher::with_transport(cache, client);
    let lines = fetcher.read_input_blocking(config.year, config.day, &config.session)?;
    info!(
        "Fetched {} lines for {}/day{:02}",
        lines.len(),
        config.year,
        config.day
    );

    let mut out = BufWriter::new(std::io::stdout().lock());
    for line in &lines {
        writeln!(out, "{}", line)?;
    }
    out.flush()?;

    Ok(())
}
