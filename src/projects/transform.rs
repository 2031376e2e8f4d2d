// Filtering, ranking and conversion of raw repositories into cards.

use chrono::{DateTime, Months, Utc};

use crate::github::RawRepository;

use super::model::{DisplayProject, NO_DESCRIPTION, ProjectStatus, UNKNOWN_LANGUAGE};
use super::technology::TechnologyLabels;

/// Repositories updated within this many months count as active.
pub const ACTIVE_WINDOW_MONTHS: u32 = 6;

/// Derive a stable identifier from a repository name.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut in_separator = false;

    for c in name.to_lowercase().chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            slug.push(c);
            in_separator = false;
        } else if !in_separator {
            slug.push('-');
            in_separator = true;
        }
    }
    slug
}

pub fn project_status(repo: &RawRepository, now: DateTime<Utc>) -> ProjectStatus {
    if repo.archived {
        return ProjectStatus::Archived;
    }

    let cutoff = now
        .checked_sub_months(Months::new(ACTIVE_WINDOW_MONTHS))
        .unwrap_or(DateTime::<Utc>::MIN_UTC);
    if repo.updated_at >= cutoff {
        ProjectStatus::Active
    } else {
        ProjectStatus::Maintained
    }
}

pub fn to_display(
    repo: &RawRepository,
    now: DateTime<Utc>,
    labels: &TechnologyLabels,
) -> DisplayProject {
    let technologies = if repo.topics.is_empty() {
        repo.language.iter().cloned().collect()
    } else {
        repo.topics.iter().map(|topic| labels.format(topic)).collect()
    };

    DisplayProject {
        id: slugify(&repo.name),
        name: repo.name.clone(),
        description: repo
            .description_text()
            .unwrap_or(NO_DESCRIPTION)
            .to_string(),
        technologies,
        language: repo
            .language
            .clone()
            .unwrap_or_else(|| UNKNOWN_LANGUAGE.to_string()),
        stars: repo.stargazers_count,
        forks: repo.forks_count,
        status: project_status(repo, now),
        github: Some(repo.html_url.clone()),
        demo: repo
            .homepage
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(str::to_string),
        updated: Some(repo.updated_at),
        created: Some(repo.created_at),
    }
}

/// Whether a repository may be featured at all.
pub fn is_candidate(repo: &RawRepository) -> bool {
    !repo.fork && !repo.archived && repo.description_text().is_some()
}

/// Filter, rank by score, truncate to `limit` and convert.
///
/// Ranking uses a stable sort so equal scores keep their listing order.
pub fn select_featured(
    repos: &[RawRepository],
    limit: usize,
    now: DateTime<Utc>,
    labels: &TechnologyLabels,
) -> Vec<DisplayProject> {
    let mut candidates: Vec<&RawRepository> = repos.iter().filter(|r| is_candidate(r)).collect();
    candidates.sort_by(|a, b| b.score().cmp(&a.score()));

    candidates
        .into_iter()
        .take(limit)
        .map(|repo| to_display(repo, now, labels))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::Owner;

    fn now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2026-10-18T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    fn repo(name: &str, stars: u64, forks: u64) -> RawRepository {
        RawRepository {
            name: name.to_string(),
            owner: Owner {
                login: "assapir".to_string(),
            },
            description: Some(format!("{} description", name)),
            topics: Vec::new(),
            language: Some("TypeScript".to_string()),
            stargazers_count: stars,
            forks_count: forks,
            archived: false,
            fork: false,
            updated_at: now(),
            created_at: now(),
            homepage: None,
            html_url: format!("https://github.com/assapir/{}", name),
        }
    }

    fn names(projects: &[DisplayProject]) -> Vec<&str> {
        projects.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("GPSD-TS"), "gpsd-ts");
        assert_eq!(slugify("My  Cool__Repo"), "my-cool-repo");
        assert_eq!(slugify("web.components.v2"), "web-components-v2");
        assert_eq!(slugify("plain"), "plain");
    }

    #[test]
    fn test_status_derivation() {
        let mut r = repo("a", 0, 0);

        r.updated_at = now().checked_sub_months(Months::new(5)).unwrap();
        assert_eq!(project_status(&r, now()), ProjectStatus::Active);

        r.updated_at = now().checked_sub_months(Months::new(6)).unwrap();
        assert_eq!(project_status(&r, now()), ProjectStatus::Active);

        r.updated_at = now().checked_sub_months(Months::new(7)).unwrap();
        assert_eq!(project_status(&r, now()), ProjectStatus::Maintained);

        r.archived = true;
        r.updated_at = now();
        assert_eq!(project_status(&r, now()), ProjectStatus::Archived);
    }

    #[test]
    fn test_ranking_is_stable() {
        let repos = vec![repo("A", 10, 0), repo("B", 3, 5), repo("C", 3, 5)];
        let featured = select_featured(&repos, 10, now(), &TechnologyLabels::default());
        assert_eq!(names(&featured), ["A", "B", "C"]);

        let repos = vec![repo("C", 3, 5), repo("B", 3, 5), repo("A", 10, 0)];
        let featured = select_featured(&repos, 10, now(), &TechnologyLabels::default());
        assert_eq!(names(&featured), ["A", "C", "B"]);
    }

    #[test]
    fn test_filtering() {
        let mut forked = repo("forked", 100, 0);
        forked.fork = true;
        let mut archived = repo("archived", 100, 0);
        archived.archived = true;
        let mut archived_blank = repo("archived-blank", 100, 0);
        archived_blank.archived = true;
        archived_blank.description = None;
        let mut blank = repo("blank", 100, 0);
        blank.description = Some("   ".to_string());
        let mut missing = repo("missing", 100, 0);
        missing.description = None;

        let repos = vec![
            forked,
            archived,
            archived_blank,
            blank,
            missing,
            repo("kept", 0, 0),
        ];
        let featured = select_featured(&repos, 10, now(), &TechnologyLabels::default());
        assert_eq!(names(&featured), ["kept"]);
    }

    #[test]
    fn test_archived_with_description_is_dropped() {
        let mut archived = repo("archived", 100, 0);
        archived.archived = true;
        archived.description = Some("has text".to_string());

        assert!(!is_candidate(&archived));
        let featured = select_featured(&[archived], 10, now(), &TechnologyLabels::default());
        assert!(featured.is_empty());
    }

    #[test]
    fn test_truncates_to_limit() {
        let repos: Vec<_> = (0..8).map(|i| repo(&format!("r{}", i), i, 0)).collect();
        let labels = TechnologyLabels::default();

        assert_eq!(select_featured(&repos, 3, now(), &labels).len(), 3);
        assert!(select_featured(&repos, 0, now(), &labels).is_empty());
        assert_eq!(select_featured(&repos, 50, now(), &labels).len(), 8);
    }

    #[test]
    fn test_to_display_fields() {
        let mut r = repo("Rest Thing", 4, 2);
        r.topics = vec!["nodejs".to_string(), "rest-api".to_string(), "web-push".to_string()];
        r.homepage = Some("https://example.com".to_string());

        let p = to_display(&r, now(), &TechnologyLabels::default());
        assert_eq!(p.id, "rest-thing");
        assert_eq!(p.technologies, ["Node.js", "REST API", "Web Push"]);
        assert_eq!(p.language, "TypeScript");
        assert_eq!((p.stars, p.forks), (4, 2));
        assert_eq!(p.github.as_deref(), Some("https://github.com/assapir/Rest Thing"));
        assert_eq!(p.demo.as_deref(), Some("https://example.com"));
        assert_eq!(p.status, ProjectStatus::Active);
    }

    #[test]
    fn test_to_display_defaults() {
        let mut r = repo("bare", 0, 0);
        r.description = None;
        r.language = None;
        r.homepage = Some(String::new());

        let p = to_display(&r, now(), &TechnologyLabels::default());
        assert_eq!(p.description, NO_DESCRIPTION);
        assert_eq!(p.language, UNKNOWN_LANGUAGE);
        assert!(p.technologies.is_empty());
        assert!(p.demo.is_none());

        r.language = Some("Rust".to_string());
        let p = to_display(&r, now(), &TechnologyLabels::default());
        assert_eq!(p.technologies, ["Rust"]);
    }
}
