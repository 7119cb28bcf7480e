//! Fetch-or-cache orchestration

use crate::cache::InputCache;
use crate::error::FetchError;
use crate::key::PuzzleKey;
use crate::parse;
use crate::transport::Transport;
use aoc_http_client::{AocClient, AocError};
use log::debug;

/// Serves puzzle inputs from a cache, falling back to one network request
///
/// A cache hit is returned as-is and never refreshed. On a miss the transport
/// is asked exactly once; a 2xx body is split into lines, written to the cache
/// and returned. The first failure at any step ends the fetch.
///
/// # Example
///
/// ```no_run
/// use aoc_input::{InputFetcher, LocalFileCache};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let fetcher = InputFetcher::new(LocalFileCache::new("inputs"))?;
/// let lines = fetcher.read_input_blocking(2024, 1, "your_session_cookie")?;
/// println!("{} lines", lines.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct InputFetcher<C, T = AocClient> {
    cache: C,
    transport: T,
}

impl<C: InputCache> InputFetcher<C, AocClient> {
    /// Create a fetcher talking to adventofcode.com with default settings
    pub fn new(cache: C) -> Result<Self, AocError> {
        Ok(Self::with_transport(cache, AocClient::new()?))
    }
}

impl<C: InputCache, T: Transport> InputFetcher<C, T> {
    pub fn with_transport(cache: C, transport: T) -> Self {
        Self { cache, transport }
    }

    pub fn cache(&self) -> &C {
        &self.cache
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetch the input lines for `year`/`day`
    ///
    /// Suspends only while the network request is in flight. Dropping the
    /// future cancels that request.
    ///
    /// # Errors
    ///
    /// * `FetchError::InvalidKey` - year 0 or day outside 1..=25
    /// * `FetchError::Cache` - the cache failed to read or write
    /// * `FetchError::Transport` - the request itself failed
    /// * `FetchError::UnexpectedStatus` - the server answered outside 2xx
    pub async fn read_input(
        &self,
        year: u16,
        day: u8,
        session: &str,
    ) -> Result<Vec<String>, FetchError> {
        let key = PuzzleKey::new(year, day)?;
        self.read_puzzle_input(key, session).await
    }

    /// Same as [`read_input`](Self::read_input) for an already validated key
    pub async fn read_puzzle_input(
        &self,
        key: PuzzleKey,
        session: &str,
    ) -> Result<Vec<String>, FetchError> {
        if let Some(lines) = self.cache.try_read(key)? {
            debug!("Cache hit for {}", key);
            return Ok(lines);
        }

        debug!("Cache miss for {}, fetching from network", key);
        let response = self
            .transport
            .request_input(key, session)
            .await
            .map_err(|e| FetchError::Transport(e.into()))?;

        let lines = parse::response_lines(response)?;
        self.cache.write(key, &lines)?;
        debug!("Cached {} lines for {}", lines.len(), key);

        Ok(lines)
    }

    /// Blocking variant of [`read_input`](Self::read_input)
    ///
    /// Runs the same steps to completion on a dedicated single-threaded
    /// runtime. Called from a thread that already drives an async runtime it
    /// returns `FetchError::BlockingInAsync`; use `read_input` there.
    pub fn read_input_blocking(
        &self,
        year: u16,
        day: u8,
        session: &str,
    ) -> Result<Vec<String>, FetchError> {
        if tokio::runtime::Handle::try_current().is_ok() {
            return Err(FetchError::BlockingInAsync);
        }

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(FetchError::Runtime)?;
        runtime.block_on(self.read_input(year, day, session))
    }
}
