use crate::cache::InputCache;
use crate::error::{BoxError, CacheError};
use crate::key::PuzzleKey;
use std::fmt;

/// Cache backed by a caller-supplied pair of functions
///
/// Any state the functions touch belongs to the caller. Errors they return
/// are reported as [`CacheError::Custom`].
///
/// # Example
///
/// ```
/// use aoc_input::{CustomCache, InputCache, PuzzleKey};
/// use std::collections::HashMap;
/// use std::sync::Mutex;
///
/// let store: Mutex<HashMap<PuzzleKey, Vec<String>>> = Mutex::new(HashMap::new());
/// let cache = CustomCache::new(
///     |key| Ok(store.lock().unwrap().get(&key).cloned()),
///     |key, lines: &[String]| {
///         store.lock().unwrap().insert(key, lines.to_vec());
///         Ok(())
///     },
/// );
///
/// let key = PuzzleKey::new(2024, 1).unwrap();
/// cache.write(key, &["1".to_string()]).unwrap();
/// assert_eq!(cache.try_read(key).unwrap(), Some(vec!["1".to_string()]));
/// ```
pub struct CustomCache<R, W> {
    try_read_fn: R,
    write_fn: W,
}

impl<R, W> CustomCache<R, W>
where
    R: Fn(PuzzleKey) -> Result<Option<Vec<String>>, BoxError>,
    W: Fn(PuzzleKey, &[String]) -> Result<(), BoxError>,
{
    pub fn new(try_read_fn: R, write_fn: W) -> Self {
        Self {
            try_read_fn,
            write_fn,
        }
    }
}

impl<R, W> InputCache for CustomCache<R, W>
where
    R: Fn(PuzzleKey) -> Result<Option<Vec<String>>, BoxError>,
    W: Fn(PuzzleKey, &[String]) -> Result<(), BoxError>,
{
    fn try_read(&self, key: PuzzleKey) -> Result<Option<Vec<String>>, CacheError> {
        (self.try_read_fn)(key).map_err(CacheError::Custom)
    }

    fn write(&self, key: PuzzleKey, lines: &[String]) -> Result<(), CacheError> {
        (self.write_fn)(key, lines).map_err(CacheError::Custom)
    }
}

impl<R, W> fmt::Debug for CustomCache<R, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomCache").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_errors_are_wrapped() {
        let cache = CustomCache::new(
            |_| Err("read boom".into()),
            |_, _: &[String]| Err("write boom".into()),
        );
        let key = PuzzleKey::new(2024, 3).unwrap();

        let err = cache.try_read(key).unwrap_err();
        assert!(matches!(err, CacheError::Custom(_)));
        assert_eq!(err.to_string(), "read boom");
        assert!(std::error::Error::source(&err).is_none());

        let err = cache.write(key, &[]).unwrap_err();
        assert_eq!(err.to_string(), "write boom");
    }

    #[test]
    fn test_functions_receive_key_and_lines() {
        let seen = Cell::new(None);
        let written = Cell::new(0);
        let cache = CustomCache::new(
            |key| {
                seen.set(Some(key));
                Ok(None)
            },
            |_, lines: &[String]| {
                written.set(lines.len());
                Ok(())
            },
        );
        let key = PuzzleKey::new(2022, 9).unwrap();

        assert!(cache.try_read(key).unwrap().is_none());
        assert_eq!(seen.get(), Some(key));

        cache
            .write(key, &["x".to_string(), "y".to_string()])
            .unwrap();
        assert_eq!(written.get(), 2);
    }
}
