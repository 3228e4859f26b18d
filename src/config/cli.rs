use crate::adapters::github::DEFAULT_API_BASE;
use crate::config::site::SiteConfig;
use crate::config::{PortfolioSettings, DEFAULT_OUTPUT_PATH};
use crate::utils::error::Result;
use crate::utils::logger::LogFormat;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "pages-portfolio")]
#[command(about = "Builds a portfolio page from an account's published GitHub Pages sites")]
pub struct CliConfig {
    #[arg(long, help = "TOML file overriding the built-in site tables")]
    pub config: Option<String>,

    #[arg(long, help = "GitHub account whose repositories are listed")]
    pub owner: Option<String>,

    #[arg(long, default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    #[arg(long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output_path: String,

    #[arg(long, help = "Icon reference declared by the page")]
    pub favicon: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,
}

impl CliConfig {
    pub fn log_format(&self) -> LogFormat {
        if self.log_json {
            LogFormat::Json
        } else {
            LogFormat::Compact
        }
    }

    /// Loads the config file, if any, and applies command-line overrides.
    pub fn into_settings(self) -> Result<PortfolioSettings> {
        let mut site = match &self.config {
            Some(path) => {
                tracing::debug!("Loading site config from {}", path);
                SiteConfig::from_file(path)?
            }
            None => SiteConfig::default(),
        };

        if let Some(owner) = self.owner {
            site.owner = owner;
        }
        if let Some(favicon) = self.favicon {
            site.favicon = favicon;
        }

        Ok(PortfolioSettings {
            api_base: self.api_base,
            output_path: self.output_path,
            site,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let cli = CliConfig::parse_from(["pages-portfolio"]);
        assert_eq!(cli.log_format(), LogFormat::Compact);

        let settings = cli.into_settings().unwrap();
        assert_eq!(settings, PortfolioSettings::default());
    }

    #[test]
    fn test_flags_override_config_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"owner = \"file-owner\"\ntitle = \"From File\"\n")
            .unwrap();
        let path = temp_file.path().to_str().unwrap().to_string();

        let cli = CliConfig::parse_from([
            "pages-portfolio",
            "--config",
            path.as_str(),
            "--owner",
            "flag-owner",
            "--favicon",
            "icons/me.png",
            "--log-json",
        ]);
        assert_eq!(cli.log_format(), LogFormat::Json);

        let settings = cli.into_settings().unwrap();
        assert_eq!(settings.site.owner, "flag-owner");
        assert_eq!(settings.site.title, "From File");
        assert_eq!(settings.site.favicon, "icons/me.png");
    }
}
