//! Error types for input fetching

use std::path::PathBuf;
use thiserror::Error;

/// Type-erased error used where the concrete cause is supplied by the caller
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors returned by [`InputFetcher`](crate::InputFetcher)
#[derive(Error, Debug)]
pub enum FetchError {
    /// Year or day outside the accepted range
    #[error("Invalid puzzle key: {0}")]
    InvalidKey(#[from] KeyError),

    /// Transport failed before producing a response
    ///
    /// The original error is kept as-is and can be recovered with
    /// `downcast_ref`.
    #[error(transparent)]
    Transport(BoxError),

    /// The server answered outside `200..=299`
    #[error("Unexpected response code {0}")]
    UnexpectedStatus(u16),

    /// Reading from or writing to the cache failed
    #[error("Cache error: {0}")]
    Cache(#[from] CacheError),

    /// The blocking wrapper could not start its runtime
    #[error("Failed to start runtime: {0}")]
    Runtime(#[source] std::io::Error),

    /// The blocking wrapper was called on a thread already driving an async runtime
    #[error("Blocking fetch called from within an async runtime; use read_input instead")]
    BlockingInAsync,
}

/// Cache-specific errors
#[derive(Error, Debug)]
pub enum CacheError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Cache directory creation failed
    #[error("Failed to create cache directory {}: {source}", .path.display())]
    DirCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failure reported by a caller-supplied cache
    #[error(transparent)]
    Custom(BoxError),
}

/// Rejected puzzle key components
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyError {
    /// Year must be positive
    #[error("year must be positive, got {0}")]
    InvalidYear(u16),

    /// Day must be within 1..=25
    #[error("day must be between 1 and 25, got {0}")]
    InvalidDay(u8),
}
