//! AOC Input Library
//!
//! Fetches a user's personalized Advent of Code puzzle input and optionally
//! keeps it in a cache, so repeated requests for the same day never touch the
//! network again.
//!
//! # Features
//!
//! - Pluggable caching strategies: [`NoCache`], [`LocalFileCache`] and
//!   [`CustomCache`] for caller-supplied functions
//! - Cache entries are write-once: a hit is served without asking the network
//! - Exactly one request per cache miss, no retries
//! - Async entry point plus a blocking wrapper for non-async callers
//! - Failures returned as [`FetchError`], transport errors kept unchanged
//!
//! # Example
//!
//! ```no_run
//! use aoc_input::{InputFetcher, LocalFileCache, NoCache};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let session = "your_session_cookie_here";
//!
//! // Cached under ./inputs/2024/Day01.txt after the first call
//! let fetcher = InputFetcher::new(LocalFileCache::new("inputs"))?;
//! let lines = fetcher.read_input(2024, 1, session).await?;
//!
//! // Always from the network
//! let uncached = InputFetcher::new(NoCache)?;
//! let lines = uncached.read_input(2024, 1, session).await?;
//! # Ok(())
//! # }
//! ```

mod cache;
mod error;
mod fetcher;
mod key;
mod parse;
mod transport;

pub use aoc_http_client::{AocClient, AocClientBuilder, AocError, InputResponse};
pub use cache::{CustomCache, InputCache, LocalFileCache, NoCache};
pub use error::{BoxError, CacheError, FetchError, KeyError};
pub use fetcher::InputFetcher;
pub use key::{DAYS, PuzzleKey};
pub use transport::Transport;
