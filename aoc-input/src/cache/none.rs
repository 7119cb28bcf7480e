use crate::cache::InputCache;
use crate::error::CacheError;
use crate::key::PuzzleKey;

/// Always misses and discards writes, so every fetch goes to the network
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoCache;

impl InputCache for NoCache {
    fn try_read(&self, _key: PuzzleKey) -> Result<Option<Vec<String>>, CacheError> {
        Ok(None)
    }

    fn write(&self, _key: PuzzleKey, _lines: &[String]) -> Result<(), CacheError> {
        Ok(())
    }
}
