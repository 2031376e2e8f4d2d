// Fixed project list served when the live listing is unavailable.

use super::model::{DisplayProject, ProjectStatus};

#[allow(clippy::too_many_arguments)]
fn project(
    id: &str,
    name: &str,
    description: &str,
    technologies: &[&str],
    language: &str,
    (stars, forks): (u64, u64),
    status: ProjectStatus,
    github: Option<&str>,
) -> DisplayProject {
    DisplayProject {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        technologies: technologies.iter().map(|t| t.to_string()).collect(),
        language: language.to_string(),
        stars,
        forks,
        status,
        github: github.map(str::to_string),
        demo: None,
        updated: None,
        created: None,
    }
}

/// The fallback sequence. Never empty.
pub fn fallback_projects() -> Vec<DisplayProject> {
    vec![
        project(
            "yahf",
            "YAHF",
            "Yet Another HTTP Framework - A lightweight, modern HTTP framework that you don't \
             really need, but might want anyway. Built with simplicity and performance in mind.",
            &["JavaScript", "Node.js", "HTTP", "Express"],
            "JavaScript",
            (2, 0),
            ProjectStatus::Active,
            Some("https://github.com/assapir/yahf"),
        ),
        project(
            "gpsd-ts",
            "GPSD-TS",
            "TypeScript client library for communicating with GPSD (GPS Daemon). Provides \
             type-safe GPS data access with modern async/await patterns.",
            &["TypeScript", "GPS", "Node.js", "Networking"],
            "TypeScript",
            (5, 1),
            ProjectStatus::Maintained,
            Some("https://github.com/assapir/gpsd-ts"),
        ),
        project(
            "web-components-portfolio",
            "Modern Web Portfolio",
            "This very website! Built with vanilla JavaScript, modern CSS Grid, and Web \
             Components. Showcases responsive design and progressive enhancement.",
            &["HTML5", "CSS Grid", "Web Components", "Vanilla JS"],
            "JavaScript",
            (0, 0),
            ProjectStatus::Active,
            None,
        ),
    ]
}
