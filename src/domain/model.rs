use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Topic label that promotes a repository in the ranking.
pub const FEATURED_TOPIC: &str = "featured";

/// One entry of the repository listing as the API returns it. Fields the
/// portfolio does not use are ignored on deserialisation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepositoryRecord {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub has_pages: bool,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub topics: Option<Vec<String>>,
}

impl RepositoryRecord {
    pub fn is_featured(&self) -> bool {
        self.topics
            .as_ref()
            .is_some_and(|topics| topics.iter().any(|t| t == FEATURED_TOPIC))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LanguageBadge {
    pub name: String,
    pub color: String,
}

/// Everything a card shows, derived from one [`RepositoryRecord`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayCard {
    pub title: String,
    pub url: String,
    pub description: Option<String>,
    pub language: Option<LanguageBadge>,
    pub updated: String,
    pub brand_color: Option<String>,
}
