// Command line and environment configuration.
// Every flag falls back to an environment variable, then to a default.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tracing::{info, warn};

use crate::cache::{self, REPOS_CACHE_KEY};
use crate::github::GITHUB_API_BASE;

/// Featured GitHub projects in the terminal.
#[derive(Debug, Clone, Parser)]
#[command(name = "folio", version, about)]
pub struct Cli {
    /// GitHub user whose repositories are featured.
    #[arg(long, env = "FOLIO_OWNER", default_value = "assapir")]
    pub owner: String,

    /// Maximum number of project cards.
    #[arg(long, env = "FOLIO_LIMIT", default_value_t = 6)]
    pub limit: usize,

    /// Page size requested from the listing endpoint (at least 50).
    #[arg(long, env = "FOLIO_PER_PAGE", default_value_t = 50)]
    pub per_page: u32,

    /// GitHub API base URL.
    #[arg(long, env = "FOLIO_API_BASE", default_value = GITHUB_API_BASE)]
    pub api_base: String,

    /// Deadline for the listing request, in seconds.
    #[arg(long, env = "FOLIO_TIMEOUT_SECS", default_value_t = 10)]
    pub timeout_secs: u64,

    /// How long a cached listing stays fresh, in seconds.
    #[arg(long, env = "FOLIO_CACHE_TTL_SECS", default_value_t = 600)]
    pub cache_ttl_secs: u64,

    /// Directory for the listing cache and log file.
    #[arg(long, env = "FOLIO_CACHE_DIR")]
    pub cache_dir: Option<PathBuf>,

    /// Discard the cached listing before loading.
    #[arg(long)]
    pub refresh: bool,

    /// Print the featured projects as JSON instead of starting the TUI.
    #[arg(long)]
    pub json: bool,
}

/// Resolved runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub owner: String,
    pub limit: usize,
    pub per_page: u32,
    pub api_base: String,
    pub token: Option<String>,
    pub request_timeout: Duration,
    pub cache_ttl: Duration,
    pub cache_path: Option<PathBuf>,
    pub refresh: bool,
    pub json: bool,
}

impl Config {
    pub fn from_cli(cli: Cli) -> Self {
        let cache_dir = cli.cache_dir.or_else(cache::cache_dir);
        if cache_dir.is_none() {
            warn!("No cache directory available, repository cache disabled");
        }
        let cache_path = cache_dir
            .as_deref()
            .map(|dir| cache::entry_path(dir, REPOS_CACHE_KEY));

        let token = std::env::var("GITHUB_TOKEN")
            .ok()
            .filter(|t| !t.trim().is_empty());
        if token.is_some() {
            info!("Using GITHUB_TOKEN for GitHub requests");
        }

        Self {
            owner: cli.owner,
            limit: cli.limit,
            per_page: cli.per_page,
            api_base: cli.api_base,
            token,
            request_timeout: Duration::from_secs(cli.timeout_secs),
            cache_ttl: Duration::from_secs(cli.cache_ttl_secs),
            cache_path,
            refresh: cli.refresh,
            json: cli.json,
        }
    }

    /// Link to the owner's profile, shown below the cards.
    pub fn profile_url(&self) -> String {
        format!("https://github.com/{}", self.owner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_flags_override_defaults() {
        let cli = Cli::parse_from([
            "folio",
            "--owner",
            "octocat",
            "--limit",
            "3",
            "--cache-dir",
            "/tmp/folio-test",
            "--json",
        ]);
        let config = Config::from_cli(cli);

        assert_eq!(config.owner, "octocat");
        assert_eq!(config.limit, 3);
        assert!(config.json);
        assert!(!config.refresh);
        assert_eq!(
            config.cache_path.as_deref(),
            Some(Path::new("/tmp/folio-test/github-repos-cache.json"))
        );
        assert_eq!(config.profile_url(), "https://github.com/octocat");
    }

    #[test]
    fn test_durations() {
        let cli = Cli::parse_from(["folio", "--timeout-secs", "3", "--cache-ttl-secs", "60"]);
        let config = Config::from_cli(cli);
        assert_eq!(config.request_timeout, Duration::from_secs(3));
        assert_eq!(config.cache_ttl, Duration::from_secs(60));
    }
}
