// GitHub API endpoint functions.
// Fetches and validates the repository listing for a single owner.

use tracing::debug;

use crate::error::{FolioError, Result};

use super::client::{GitHubClient, map_transport_error};
use super::types::RawRepository;

/// Smallest page requested; filtering discards candidates, so ask for headroom.
pub const MIN_PAGE_SIZE: u32 = 50;

impl GitHubClient {
    /// List repositories owned by `owner`, most recently updated first.
    ///
    /// A body that is not a JSON array is a recoverable `Json` error. An array
    /// whose elements do not match the repository schema is `Unexpected`.
    pub async fn list_owner_repos(
        &self,
        owner: &str,
        per_page: u32,
    ) -> Result<Vec<RawRepository>> {
        let per_page = per_page.max(MIN_PAGE_SIZE).to_string();
        let params = [
            ("sort", "updated"),
            ("direction", "desc"),
            ("per_page", per_page.as_str()),
            ("type", "owner"),
        ];
        let response = self
            .get_with_params(&format!("/users/{}/repos", owner), &params)
            .await?;
        let body = response.text().await.map_err(map_transport_error)?;

        let items: Vec<serde_json::Value> = serde_json::from_str(&body)?;
        let repos = parse_repositories(items)?;
        debug!(owner, count = repos.len(), "Fetched repositories");
        Ok(repos)
    }
}

/// Validate each listing element against the repository schema.
pub fn parse_repositories(items: Vec<serde_json::Value>) -> Result<Vec<RawRepository>> {
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            let repo: RawRepository = serde_json::from_value(item)
                .map_err(|e| FolioError::Unexpected(format!("repository #{}: {}", index, e)))?;
            repo.validate()?;
            Ok(repo)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_repositories_reports_index() {
        let items = vec![
            serde_json::json!({
                "name": "ok",
                "owner": { "login": "me" },
                "description": null,
                "language": null,
                "updated_at": "2026-01-01T00:00:00Z",
                "created_at": "2025-01-01T00:00:00Z",
                "homepage": null,
                "html_url": "https://github.com/me/ok"
            }),
            serde_json::json!({ "name": 42 }),
        ];

        let err = parse_repositories(items).unwrap_err();
        match err {
            FolioError::Unexpected(msg) => assert!(msg.starts_with("repository #1")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_empty_listing() {
        assert!(parse_repositories(Vec::new()).unwrap().is_empty());
    }
}
