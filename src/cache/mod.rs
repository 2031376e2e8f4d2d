// Cache module for local filesystem caching.
// Keeps the last repository listing on disk for a bounded time.

pub mod paths;
pub mod store;

pub use paths::{REPOS_CACHE_KEY, cache_dir, entry_path, log_path};
pub use store::{CacheEntry, DEFAULT_TTL, RepoCache};
