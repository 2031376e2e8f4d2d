// Display-ready project records consumed by the presenter.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const NO_DESCRIPTION: &str = "No description available";
pub const UNKNOWN_LANGUAGE: &str = "Unknown";

/// Activity status shown as a badge on each card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Active,
    Maintained,
    Archived,
}

impl ProjectStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Active => "active",
            ProjectStatus::Maintained => "maintained",
            ProjectStatus::Archived => "archived",
        }
    }
}

/// A project card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayProject {
    pub id: String,
    pub name: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub language: String,
    pub stars: u64,
    pub forks: u64,
    pub status: ProjectStatus,
    pub github: Option<String>,
    pub demo: Option<String>,
    pub updated: Option<DateTime<Utc>>,
    pub created: Option<DateTime<Utc>>,
}
