pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::{github::GithubSource, storage::LocalStorage};
pub use config::{site::SiteConfig, PortfolioSettings};
pub use core::{loader::ProjectLoader, site::SiteEngine};
pub use utils::error::{PortfolioError, Result};
