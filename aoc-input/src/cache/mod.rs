//! Caching strategies consulted before and after a network fetch
//!
//! A strategy answers two questions: is there already content for a key, and
//! where does freshly fetched content go. Entries are never invalidated; once
//! written, an entry is what every later read for that key returns.

mod custom;
mod local_file;
mod none;

pub use custom::CustomCache;
pub use local_file::LocalFileCache;
pub use none::NoCache;

use crate::error::CacheError;
use crate::key::PuzzleKey;
use std::sync::Arc;

/// Read/write policy for puzzle inputs
pub trait InputCache {
    /// Return the cached lines for `key`, or `None` on a miss
    ///
    /// A miss is not an error. Errors are reserved for failures while reading
    /// an entry that is present.
    fn try_read(&self, key: PuzzleKey) -> Result<Option<Vec<String>>, CacheError>;

    /// Store `lines` for `key`, replacing anything already there
    fn write(&self, key: PuzzleKey, lines: &[String]) -> Result<(), CacheError>;
}

impl<C: InputCache + ?Sized> InputCache for &C {
    fn try_read(&self, key: PuzzleKey) -> Result<Option<Vec<String>>, CacheError> {
        (**self).try_read(key)
    }

    fn write(&self, key: PuzzleKey, lines: &[String]) -> Result<(), CacheError> {
        (**self).write(key, lines)
    }
}

impl<C: InputCache + ?Sized> InputCache for Box<C> {
    fn try_read(&self, key: PuzzleKey) -> Result<Option<Vec<String>>, CacheError> {
        (**self).try_read(key)
    }

    fn write(&self, key: PuzzleKey, lines: &[String]) -> Result<(), CacheError> {
        (**self).write(key, lines)
    }
}

impl<C: InputCache + ?Sized> InputCache for Arc<C> {
    fn try_read(&self, key: PuzzleKey) -> Result<Option<Vec<String>>, CacheError> {
        (**self).try_read(key)
    }

    fn write(&self, key: PuzzleKey, lines: &[String]) -> Result<(), CacheError> {
        (**self).write(key, lines)
    }
}
