use crate::cache::InputCache;
use crate::error::CacheError;
use crate::key::PuzzleKey;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

#[cfg(windows)]
const LINE_SEPARATOR: &str = "\r\n";
#[cfg(not(windows))]
const LINE_SEPARATOR: &str = "\n";

/// File-based cache for puzzle inputs
///
/// Directory structure: `{root}/{year}/Day{day:02}.txt`, one input line per
/// file line. The filesystem is the only state; concurrent writers to the
/// same entry race and the last one wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalFileCache {
    root: PathBuf,
}

impl LocalFileCache {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the cache path for a specific key
    pub fn entry_path(&self, key: PuzzleKey) -> PathBuf {
        self.root
            .join(key.year().to_string())
            .join(key.file_name())
    }
}

impl InputCache for LocalFileCache {
    fn try_read(&self, key: PuzzleKey) -> Result<Option<Vec<String>>, CacheError> {
        let path = self.entry_path(key);
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path)?;
        debug!("Read {} from {}", key, path.display());
        Ok(Some(content.lines().map(str::to_string).collect()))
    }

    fn write(&self, key: PuzzleKey, lines: &[String]) -> Result<(), CacheError> {
        let path = self.entry_path(key);

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(|source| CacheError::DirCreation {
                path: dir.to_path_buf(),
                source,
            })?;
        }

        let mut content = String::with_capacity(lines.iter().map(|l| l.len() + 2).sum());
        for line in lines {
            content.push_str(line);
            content.push_str(LINE_SEPARATOR);
        }

        fs::write(&path, content)?;
        debug!("Wrote {} lines for {} to {}", lines.len(), key, path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_entry_path_format() {
        let cache = LocalFileCache::new("/cache");

        let path = cache.entry_path(PuzzleKey::new(2024, 2).unwrap());
        assert_eq!(path, Path::new("/cache").join("2024").join("Day02.txt"));

        let path = cache.entry_path(PuzzleKey::new(2023, 25).unwrap());
        assert_eq!(path, Path::new("/cache").join("2023").join("Day25.txt"));
    }

    #[test]
    fn test_missing_entry_is_a_miss() {
        let temp = TempDir::new().unwrap();
        let cache = LocalFileCache::new(temp.path());

        assert!(cache.try_read(PuzzleKey::new(2024, 1).unwrap()).unwrap().is_none());
    }

    #[test]
    fn test_write_creates_directories_and_reads_back() {
        let temp = TempDir::new().unwrap();
        let cache = LocalFileCache::new(temp.path().join("nested").join("root"));
        let key = PuzzleKey::new(2024, 7).unwrap();
        let input = lines(&["1", "", "3 and me"]);

        cache.write(key, &input).unwrap();

        let path = cache.entry_path(key);
        assert!(path.exists());
        let raw = fs::read_to_string(&path).unwrap();
        assert_eq!(raw, format!("1{0}{0}3 and me{0}", LINE_SEPARATOR));
        assert_eq!(cache.try_read(key).unwrap(), Some(input));
    }

    #[test]
    fn test_write_overwrites_existing_entry() {
        let temp = TempDir::new().unwrap();
        let cache = LocalFileCache::new(temp.path());
        let key = PuzzleKey::new(2024, 1).unwrap();

        cache.write(key, &lines(&["old", "longer old line"])).unwrap();
        cache.write(key, &lines(&["new"])).unwrap();

        assert_eq!(cache.try_read(key).unwrap(), Some(lines(&["new"])));
    }

    #[test]
    fn test_empty_entry_is_a_hit() {
        let temp = TempDir::new().unwrap();
        let cache = LocalFileCache::new(temp.path());
        let key = PuzzleKey::new(2024, 1).unwrap();

        cache.write(key, &[]).unwrap();

        assert_eq!(cache.try_read(key).unwrap(), Some(Vec::new()));
    }

    #[test]
    fn test_unreadable_entry_is_an_error() {
        let temp = TempDir::new().unwrap();
        let cache = LocalFileCache::new(temp.path());
        let key = PuzzleKey::new(2024, 1).unwrap();

        // A directory where the file should be exists but cannot be read as text
        fs::create_dir_all(cache.entry_path(key)).unwrap();

        let result = cache.try_read(key);
        assert!(matches!(result, Err(CacheError::Io(_))));
    }

    #[test]
    fn test_blocked_parent_is_dir_creation_error() {
        let temp = TempDir::new().unwrap();
        let cache = LocalFileCache::new(temp.path());
        let key = PuzzleKey::new(2024, 1).unwrap();

        // A plain file occupies the year directory's path
        fs::write(temp.path().join("2024"), "not a dir").unwrap();

        let result = cache.write(key, &lines(&["a"]));
        match result {
            Err(CacheError::DirCreation { path, source }) => {
                assert_eq!(path, temp.path().join("2024"));
                assert_ne!(source.kind(), std::io::ErrorKind::NotFound);
                let err = CacheError::DirCreation { path, source };
                let chained = std::error::Error::source(&err).unwrap();
                assert!(chained.downcast_ref::<std::io::Error>().is_some());
            }
            other => panic!("Expected DirCreation error, got {:?}", other),
        }
    }
}
