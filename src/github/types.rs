// GitHub API response types.
// Defines the repository listing shape and its validation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{FolioError, Result};

/// Repository owner, reduced to what the listing needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    pub login: String,
}

/// Repository record as returned by `GET /users/{owner}/repos`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRepository {
    pub name: String,
    pub owner: Owner,
    pub description: Option<String>,
    #[serde(default)]
    pub topics: Vec<String>,
    pub language: Option<String>,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub forks_count: u64,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub fork: bool,
    pub updated_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub homepage: Option<String>,
    pub html_url: String,
}

impl RawRepository {
    /// Reject records that deserialize but cannot be turned into a card.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(FolioError::Unexpected(
                "repository with an empty name".to_string(),
            ));
        }
        if self.html_url.trim().is_empty() {
            return Err(FolioError::Unexpected(format!(
                "repository {} has no html_url",
                self.name
            )));
        }
        Ok(())
    }

    /// Description with surrounding whitespace removed, if any remains.
    pub fn description_text(&self) -> Option<&str> {
        self.description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
    }

    /// Ranking score used to order candidates: stars weigh double.
    pub fn score(&self) -> u64 {
        self.stargazers_count
            .saturating_mul(2)
            .saturating_add(self.forks_count)
    }
}

/// Rate limit information from response headers.
#[derive(Debug, Clone, Default)]
pub struct RateLimit {
    pub limit: u64,
    pub remaining: u64,
    pub reset: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> serde_json::Value {
        serde_json::json!({
            "name": "yahf",
            "owner": { "login": "assapir", "id": 1 },
            "description": "Yet Another HTTP Framework",
            "language": "JavaScript",
            "stargazers_count": 2,
            "forks_count": 1,
            "archived": false,
            "fork": false,
            "updated_at": "2026-09-01T12:00:00Z",
            "created_at": "2020-01-01T00:00:00Z",
            "homepage": null,
            "html_url": "https://github.com/assapir/yahf",
            "watchers": 2
        })
    }

    #[test]
    fn test_deserialize_ignores_unknown_fields() {
        let repo: RawRepository = serde_json::from_value(sample_json()).unwrap();
        assert_eq!(repo.name, "yahf");
        assert_eq!(repo.owner.login, "assapir");
        assert!(repo.topics.is_empty());
        assert_eq!(repo.score(), 5);
        assert!(repo.validate().is_ok());
    }

    #[test]
    fn test_missing_required_field_fails() {
        let mut value = sample_json();
        value.as_object_mut().unwrap().remove("html_url");
        assert!(serde_json::from_value::<RawRepository>(value).is_err());
    }

    #[test]
    fn test_validate_rejects_empty_name() {
        let mut repo: RawRepository = serde_json::from_value(sample_json()).unwrap();
        repo.name = "  ".to_string();
        assert!(matches!(repo.validate(), Err(FolioError::Unexpected(_))));
    }

    #[test]
    fn test_description_text() {
        let mut repo: RawRepository = serde_json::from_value(sample_json()).unwrap();
        repo.description = Some("   ".to_string());
        assert_eq!(repo.description_text(), None);
        repo.description = None;
        assert_eq!(repo.description_text(), None);
        repo.description = Some(" A thing ".to_string());
        assert_eq!(repo.description_text(), Some("A thing"));
    }
}
