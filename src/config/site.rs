use crate::core::ranking::PriorityList;
use crate::core::theme::Theme;
use crate::utils::error::{PortfolioError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

pub const DEFAULT_OWNER: &str = "LumiKitten";
pub const DEFAULT_SELF_REPOSITORY: &str = "gitpagehub";
pub const DEFAULT_TITLE: &str = "Projects";
pub const DEFAULT_FAVICON: &str = "favicon.png";

static ENV_VAR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").unwrap());

/// Tunables of the generated page. Every field has a built-in default, so a
/// config file only lists what it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub owner: String,
    /// The portfolio's own hosting repository, never shown as a card.
    pub self_repository: String,
    pub title: String,
    pub favicon: String,
    pub priority: PriorityList,
    pub theme: Theme,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            owner: DEFAULT_OWNER.to_string(),
            self_repository: DEFAULT_SELF_REPOSITORY.to_string(),
            title: DEFAULT_TITLE.to_string(),
            favicon: DEFAULT_FAVICON.to_string(),
            priority: PriorityList::default(),
            theme: Theme::default(),
        }
    }
}

impl SiteConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// Parses TOML after substituting `${VAR}` references from the
    /// environment. Unset variables are left as written.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = ENV_VAR.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        toml::from_str(&processed).map_err(|e| PortfolioError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }
}

impl Validate for SiteConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_owner("owner", &self.owner)?;
        validation::validate_non_empty_string("self_repository", &self.self_repository)?;
        validation::validate_non_empty_string("title", &self.title)?;

        validation::validate_color("theme.languages.default", &self.theme.languages.default)?;
        for (language, color) in &self.theme.languages.colors {
            validation::validate_color(&format!("theme.languages.colors.{}", language), color)?;
        }
        for (repository, color) in &self.theme.brands.0 {
            validation::validate_color(&format!("theme.brands.{}", repository), color)?;
        }
        Ok(())
    }
}
