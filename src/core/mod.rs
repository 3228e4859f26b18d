pub mod card;
pub mod favicon;
pub mod format;
pub mod loader;
pub mod page;
pub mod ranking;
pub mod site;
pub mod templates;
pub mod theme;

pub use crate::domain::model::{DisplayCard, LanguageBadge, RepositoryRecord};
pub use crate::domain::ports::{ConfigProvider, RepositorySource, Storage};
pub use crate::utils::error::Result;
