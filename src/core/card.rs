use crate::core::format::{humanize_repo_name, time_ago};
use crate::core::templates::{self, CARD_TEMPLATE};
use crate::core::theme::{Theme, BRAND_BORDER_COLOR};
use crate::domain::model::{DisplayCard, LanguageBadge, RepositoryRecord};
use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use tera::{Context, Tera};

/// Published-site address of `repository`. The `<owner>.github.io`
/// repository is served from the site root.
pub fn pages_url(owner: &str, repository: &str) -> String {
    let host = format!("{}.github.io", owner.to_lowercase());
    if repository == host {
        format!("https://{}/", host)
    } else {
        format!("https://{}/{}/", host, repository)
    }
}

pub struct CardRenderer {
    tera: Tera,
    owner: String,
    theme: Theme,
}

impl CardRenderer {
    pub fn new(owner: impl Into<String>, theme: Theme) -> Result<Self> {
        Ok(Self {
            tera: templates::load()?,
            owner: owner.into(),
            theme,
        })
    }

    /// Derives the card contents; ages are measured against `now`.
    pub fn build_card(&self, record: &RepositoryRecord, now: DateTime<Utc>) -> DisplayCard {
        let language = record.language.as_ref().map(|name| LanguageBadge {
            name: name.clone(),
            color: self
                .theme
                .languages
                .color_for(Some(name.as_str()))
                .to_string(),
        });

        DisplayCard {
            title: humanize_repo_name(&record.name),
            url: pages_url(&self.owner, &record.name),
            description: record.description.clone(),
            language,
            updated: time_ago(record.updated_at, now),
            brand_color: self.theme.brands.color_for(&record.name).map(str::to_string),
        }
    }

    /// Markup of one detached card element.
    pub fn render(&self, card: &DisplayCard) -> Result<String> {
        let mut context = Context::new();
        context.insert("card", card);
        context.insert("brand_border", BRAND_BORDER_COLOR);
        Ok(self.tera.render(CARD_TEMPLATE, &context)?)
    }

    pub fn render_record(&self, record: &RepositoryRecord, now: DateTime<Utc>) -> Result<String> {
        self.render(&self.build_card(record, now))
    }
}
