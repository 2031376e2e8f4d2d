// Featured project provider.
// Combines the listing cache, the GitHub fetch and the fallback list.

use async_trait::async_trait;
use chrono::Utc;
use tracing::{error, info, warn};

use crate::cache::RepoCache;
use crate::config::Config;
use crate::error::Result;
use crate::github::{GitHubClient, RawRepository};

use super::fallback::fallback_projects;
use super::model::DisplayProject;
use super::technology::TechnologyLabels;
use super::transform::select_featured;

/// Anything that can supply featured projects to the presenter.
#[async_trait]
pub trait ProjectSource: Send + Sync {
    /// At most `limit` projects. Errors are reserved for unexpected data.
    async fn featured_projects(&self, limit: usize) -> Result<Vec<DisplayProject>>;
}

/// Provider backed by the GitHub repository listing.
pub struct MetadataProvider {
    client: GitHubClient,
    cache: RepoCache,
    owner: String,
    per_page: u32,
    labels: TechnologyLabels,
}

impl MetadataProvider {
    pub fn new(client: GitHubClient, cache: RepoCache, owner: impl Into<String>) -> Self {
        Self {
            client,
            cache,
            owner: owner.into(),
            per_page: crate::github::MIN_PAGE_SIZE,
            labels: TechnologyLabels::default(),
        }
    }

    /// Build the provider from resolved configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = GitHubClient::new(
            &config.api_base,
            config.token.as_deref(),
            config.request_timeout,
        )?;
        let cache = RepoCache::new(config.cache_path.clone(), config.cache_ttl);

        Ok(Self::new(client, cache, config.owner.clone()).with_per_page(config.per_page))
    }

    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page;
        self
    }

    pub fn with_labels(mut self, labels: TechnologyLabels) -> Self {
        self.labels = labels;
        self
    }

    /// Drop the cached listing so the next request goes to the network.
    pub fn invalidate_cache(&self) {
        self.cache.invalidate();
    }

    /// Featured projects for the owner, at most `limit` of them.
    ///
    /// Network failures of any kind resolve to the fallback list. Only
    /// repository records that do not match the expected schema are errors.
    pub async fn get_featured_repositories(&self, limit: usize) -> Result<Vec<DisplayProject>> {
        let now = Utc::now();

        let repos = match self.cache.load(now) {
            Some(repos) => repos,
            None => match self.fetch().await {
                Ok(repos) => {
                    self.cache.store(&repos, Utc::now());
                    repos
                }
                Err(e) if e.is_recoverable() => {
                    warn!(error = %e, owner = %self.owner, "Serving fallback projects");
                    return Ok(fallback_projects().into_iter().take(limit).collect());
                }
                Err(e) => {
                    error!(error = %e, owner = %self.owner, "Repository listing rejected");
                    return Err(e);
                }
            },
        };

        Ok(select_featured(&repos, limit, now, &self.labels))
    }

    async fn fetch(&self) -> Result<Vec<RawRepository>> {
        let repos = self
            .client
            .list_owner_repos(&self.owner, self.per_page)
            .await?;
        info!(owner = %self.owner, count = repos.len(), "Fetched repository listing");
        Ok(repos)
    }
}

#[async_trait]
impl ProjectSource for MetadataProvider {
    async fn featured_projects(&self, limit: usize) -> Result<Vec<DisplayProject>> {
        self.get_featured_repositories(limit).await
    }
}
