use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::debug;

use super::loader::{load_file, LoadError};
use super::model::ListeningDataset;

// ---------------------------------------------------------------------------
// DatasetCache – one parsed dataset per path
// ---------------------------------------------------------------------------

/// Memoises loaded datasets so UI re-renders never re-read the file.
///
/// Holds at most one entry per distinct path. Entries live until
/// [`DatasetCache::invalidate`] is called or the cache is dropped; failed
/// loads are not remembered.
#[derive(Debug, Default)]
pub struct DatasetCache {
    entries: HashMap<PathBuf, Arc<ListeningDataset>>,
}

impl DatasetCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached dataset for `path`, loading it on first use.
    pub fn get_or_load(&mut self, path: &Path) -> Result<Arc<ListeningDataset>, LoadError> {
        let key = cache_key(path);
        if let Some(dataset) = self.entries.get(&key) {
            debug!("Dataset cache hit for {}", key.display());
            return Ok(Arc::clone(dataset));
        }

        let dataset = Arc::new(load_file(path)?);
        self.entries.insert(key, Arc::clone(&dataset));
        Ok(dataset)
    }

    /// Drop the entry for `path`. Returns whether one was present.
    pub fn invalidate(&mut self, path: &Path) -> bool {
        self.entries.remove(&cache_key(path)).is_some()
    }
}

/// `./a.csv` and `a.csv` share an entry when the file exists.
fn cache_key(path: &Path) -> PathBuf {
    std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_load_is_served_from_cache() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plays.csv");
        std::fs::write(&path, "artist_name\nA\n").unwrap();

        let mut cache = DatasetCache::new();
        let first = cache.get_or_load(&path).unwrap();

        // The file changing on disk does not affect the memoised copy.
        std::fs::write(&path, "artist_name\nA\nB\n").unwrap();
        let second = cache.get_or_load(&path).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(second.len(), 1);
        assert_eq!(cache.entries.len(), 1);
    }

    #[test]
    fn invalidate_forces_a_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plays.csv");
        std::fs::write(&path, "artist_name\nA\n").unwrap();

        let mut cache = DatasetCache::new();
        cache.get_or_load(&path).unwrap();
        std::fs::write(&path, "artist_name\nA\nB\n").unwrap();

        assert!(cache.invalidate(&path));
        assert_eq!(cache.get_or_load(&path).unwrap().len(), 2);
    }

    #[test]
    fn failed_loads_are_not_cached() {
        let dir = tempfile::tempdir().unwrap();
        let mut cache = DatasetCache::new();
        assert!(cache.get_or_load(&dir.path().join("absent.csv")).is_err());
        assert!(cache.entries.is_empty());
    }
}
