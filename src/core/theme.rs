use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const DEFAULT_LANGUAGE_COLOR: &str = "#d4a5a5";

/// Border colour applied to cards that carry a brand background.
pub const BRAND_BORDER_COLOR: &str = "rgba(255, 255, 255, 0.1)";

/// Language name to badge colour. Lookups are exact; anything missing gets
/// the default entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageColorTable {
    #[serde(default = "default_language_color")]
    pub default: String,
    #[serde(default = "default_language_colors")]
    pub colors: HashMap<String, String>,
}

fn default_language_color() -> String {
    DEFAULT_LANGUAGE_COLOR.to_string()
}

fn default_language_colors() -> HashMap<String, String> {
    [
        ("JavaScript", "#f0db4f"),
        ("TypeScript", "#3178c6"),
        ("HTML", "#e34c26"),
        ("CSS", "#563d7c"),
        ("Python", "#3572A5"),
        ("PowerShell", "#012456"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

impl LanguageColorTable {
    pub fn color_for(&self, language: Option<&str>) -> &str {
        language
            .and_then(|name| self.colors.get(name))
            .map(String::as_str)
            .unwrap_or(&self.default)
    }
}

impl Default for LanguageColorTable {
    fn default() -> Self {
        Self {
            default: default_language_color(),
            colors: default_language_colors(),
        }
    }
}

/// Repository name to card background override.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BrandColorTable(pub HashMap<String, String>);

impl BrandColorTable {
    pub fn color_for(&self, repository: &str) -> Option<&str> {
        self.0.get(repository).map(String::as_str)
    }
}

impl Default for BrandColorTable {
    fn default() -> Self {
        Self(
            [
                ("mysite", "#2e1065"),
                ("fetchquesttracker", "#0c0e0d"),
                ("swedishprivacyaudit", "#1a1410"),
            ]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    #[serde(default)]
    pub languages: LanguageColorTable,
    #[serde(default)]
    pub brands: BrandColorTable,
}
