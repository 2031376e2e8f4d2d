// Topic tag to display label formatting.

use std::collections::HashMap;

/// Known topic tags and their display labels.
pub const DEFAULT_LABELS: &[(&str, &str)] = &[
    ("javascript", "JavaScript"),
    ("typescript", "TypeScript"),
    ("nodejs", "Node.js"),
    ("reactjs", "React"),
    ("vuejs", "Vue.js"),
    ("css3", "CSS3"),
    ("html5", "HTML5"),
    ("python", "Python"),
    ("rust", "Rust"),
    ("docker", "Docker"),
    ("postgresql", "PostgreSQL"),
    ("mongodb", "MongoDB"),
    ("express", "Express.js"),
    ("api", "API"),
    ("rest-api", "REST API"),
    ("graphql", "GraphQL"),
    ("websockets", "WebSockets"),
    ("gps", "GPS"),
    ("gnss", "GNSS"),
];

/// Lookup table from lowercase topic tags to labels.
#[derive(Debug, Clone)]
pub struct TechnologyLabels {
    labels: HashMap<String, String>,
}

impl Default for TechnologyLabels {
    fn default() -> Self {
        Self::from_pairs(DEFAULT_LABELS.iter().copied())
    }
}

impl TechnologyLabels {
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let labels = pairs
            .into_iter()
            .map(|(tag, label)| (tag.to_lowercase(), label.to_string()))
            .collect();
        Self { labels }
    }

    /// Add or replace the label for a tag.
    pub fn with_label(mut self, tag: &str, label: &str) -> Self {
        self.labels.insert(tag.to_lowercase(), label.to_string());
        self
    }

    /// Format a topic tag for display.
    /// Unknown tags are title-cased with `-` and `_` turned into spaces.
    pub fn format(&self, topic: &str) -> String {
        match self.labels.get(&topic.to_lowercase()) {
            Some(label) => label.clone(),
            None => title_case(topic),
        }
    }
}

fn title_case(topic: &str) -> String {
    topic
        .split(['-', '_'])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
