// Cache store for reading and writing cached data.
// Handles JSON serialization, TTL checking, eviction and atomic writes.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use tracing::{debug, warn};

use crate::error::Result;
use crate::github::RawRepository;

/// Default TTL for the repository listing: 10 minutes.
pub const DEFAULT_TTL: Duration = Duration::from_secs(10 * 60);

/// Wrapper for cached data with the time it was stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheEntry<T> {
    /// The cached data.
    pub data: T,
    /// When the data was cached, stored as epoch milliseconds.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
}

impl<T> CacheEntry<T> {
    pub fn new(data: T, timestamp: DateTime<Utc>) -> Self {
        Self { data, timestamp }
    }

    /// Check if this entry is older than `ttl` at `now`.
    /// Entries stamped in the future are treated as expired.
    pub fn is_expired_at(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        let elapsed = now
            .signed_duration_since(self.timestamp)
            .to_std()
            .unwrap_or(Duration::MAX);

        elapsed > ttl
    }
}

/// Read a cache entry from a file.
pub fn read_entry<T: DeserializeOwned>(path: &Path) -> Result<Option<CacheEntry<T>>> {
    if !path.exists() {
        return Ok(None);
    }

    let contents = fs::read_to_string(path)?;
    let entry: CacheEntry<T> = serde_json::from_str(&contents)?;
    Ok(Some(entry))
}

/// Write a cache entry as JSON, replacing any previous one.
pub fn write_entry<T: Serialize>(path: &Path, entry: &CacheEntry<T>) -> Result<()> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string(entry)?;

    // Write atomically via temp file
    let temp_path = path.with_extension("tmp");
    let mut file = fs::File::create(&temp_path)?;
    file.write_all(json.as_bytes())?;
    file.sync_all()?;
    fs::rename(&temp_path, path)?;

    Ok(())
}

/// Delete a cached file.
pub fn delete(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path)?;
    }
    Ok(())
}

/// Single-slot cache for the repository listing.
///
/// Every failure is logged and reported as a miss; callers never see cache
/// errors. A cache without a path (no home directory) always misses.
#[derive(Debug, Clone)]
pub struct RepoCache {
    path: Option<PathBuf>,
    ttl: Duration,
}

impl RepoCache {
    pub fn new(path: Option<PathBuf>, ttl: Duration) -> Self {
        Self { path, ttl }
    }

    /// A cache that never stores anything.
    pub fn disabled() -> Self {
        Self::new(None, DEFAULT_TTL)
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Return the cached listing if it is still fresh at `now`.
    /// A stale entry is evicted.
    pub fn load(&self, now: DateTime<Utc>) -> Option<Vec<RawRepository>> {
        let path = self.path.as_deref()?;

        match read_entry::<Vec<RawRepository>>(path) {
            Ok(Some(entry)) if !entry.is_expired_at(now, self.ttl) => {
                debug!(count = entry.data.len(), "Repository cache hit");
                Some(entry.data)
            }
            Ok(Some(entry)) => {
                debug!(cached_at = %entry.timestamp, "Repository cache expired");
                self.evict(path);
                None
            }
            Ok(None) => None,
            Err(e) => {
                warn!(error = %e, path = %path.display(), "Failed to read cache");
                None
            }
        }
    }

    /// Store a freshly fetched listing stamped with `now`.
    pub fn store(&self, data: &[RawRepository], now: DateTime<Utc>) {
        let Some(path) = self.path.as_deref() else {
            return;
        };

        if let Err(e) = write_entry(path, &CacheEntry::new(data, now)) {
            warn!(error = %e, path = %path.display(), "Failed to cache data");
        }
    }

    /// Drop the cached listing, if any.
    pub fn invalidate(&self) {
        if let Some(path) = self.path.as_deref() {
            self.evict(path);
        }
    }

    fn evict(&self, path: &Path) {
        if let Err(e) = delete(path) {
            warn!(error = %e, path = %path.display(), "Failed to evict cache entry");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::Owner;
    use tempfile::TempDir;

    fn repo(name: &str) -> RawRepository {
        RawRepository {
            name: name.to_string(),
            owner: Owner {
                login: "assapir".to_string(),
            },
            description: Some("test".to_string()),
            topics: vec!["rust".to_string()],
            language: Some("Rust".to_string()),
            stargazers_count: 3,
            forks_count: 1,
            archived: false,
            fork: false,
            updated_at: Utc::now(),
            created_at: Utc::now(),
            homepage: None,
            html_url: format!("https://github.com/assapir/{}", name),
        }
    }

    fn cache_in(dir: &TempDir) -> RepoCache {
        RepoCache::new(Some(dir.path().join("repos.json")), DEFAULT_TTL)
    }

    #[test]
    fn test_store_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let cache = cache_in(&temp_dir);
        let now = Utc::now();

        cache.store(&[repo("a"), repo("b")], now);

        let loaded = cache.load(now).unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].name, "a");
    }

    #[test]
    fn test_entry_format() {
        let temp_dir = TempDir::new().unwrap();
        let cache = cache_in(&temp_dir);
        let now = DateTime::from_timestamp_millis(1_700_000_000_123).unwrap();

        cache.store(&[repo("a")], now);

        let raw = fs::read_to_string(cache.path().unwrap()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["timestamp"], 1_700_000_000_123i64);
        assert_eq!(value["data"][0]["name"], "a");
    }

    #[test]
    fn test_fresh_at_exact_ttl() {
        let entry = CacheEntry::new((), Utc::now());
        let now = entry.timestamp + chrono::Duration::milliseconds(600_000);
        assert!(!entry.is_expired_at(now, DEFAULT_TTL));
    }

    #[test]
    fn test_expired_one_ms_past_ttl_is_evicted() {
        let temp_dir = TempDir::new().unwrap();
        let cache = cache_in(&temp_dir);
        let now = Utc::now();

        cache.store(
            &[repo("old")],
            now - chrono::Duration::milliseconds(600_000 + 1),
        );

        assert!(cache.load(now).is_none());
        assert!(!cache.path().unwrap().exists());
    }

    #[test]
    fn test_future_timestamp_is_expired() {
        let entry = CacheEntry::new((), Utc::now() + chrono::Duration::seconds(60));
        assert!(entry.is_expired_at(Utc::now(), DEFAULT_TTL));
    }

    #[test]
    fn test_malformed_entry_is_miss() {
        let temp_dir = TempDir::new().unwrap();
        let cache = cache_in(&temp_dir);
        fs::write(cache.path().unwrap(), "{not json").unwrap();

        assert!(cache.load(Utc::now()).is_none());
    }

    #[test]
    fn test_missing_and_disabled() {
        let temp_dir = TempDir::new().unwrap();
        assert!(cache_in(&temp_dir).load(Utc::now()).is_none());

        let disabled = RepoCache::disabled();
        disabled.store(&[repo("a")], Utc::now());
        assert!(disabled.load(Utc::now()).is_none());
    }

    #[test]
    fn test_store_overwrites_and_invalidate() {
        let temp_dir = TempDir::new().unwrap();
        let cache = cache_in(&temp_dir);
        let now = Utc::now();

        cache.store(&[repo("a")], now);
        cache.store(&[repo("b"), repo("c")], now);
        let loaded = cache.load(now).unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].name, "b");

        cache.invalidate();
        assert!(cache.load(now).is_none());
    }
}
