#[cfg(feature = "cli")]
pub mod cli;
pub mod site;

use crate::adapters::github::DEFAULT_API_BASE;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use site::SiteConfig;

pub const DEFAULT_OUTPUT_PATH: &str = "./dist";

/// Everything one build needs, after file and command-line overrides.
#[derive(Debug, Clone, PartialEq)]
pub struct PortfolioSettings {
    pub api_base: String,
    pub output_path: String,
    pub site: SiteConfig,
}

impl Default for PortfolioSettings {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            output_path: DEFAULT_OUTPUT_PATH.to_string(),
            site: SiteConfig::default(),
        }
    }
}

impl ConfigProvider for PortfolioSettings {
    fn api_base(&self) -> &str {
        &self.api_base
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn site(&self) -> &SiteConfig {
        &self.site
    }
}

impl Validate for PortfolioSettings {
    fn validate(&self) -> Result<()> {
        validation::validate_url("api_base", &self.api_base)?;
        validation::validate_path("output_path", &self.output_path)?;
        self.site.validate()
    }
}
